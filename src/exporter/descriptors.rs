//! Static metric descriptor tables
//!
//! The exporter reads a fixed, closed set of beans; it is deliberately
//! not a generic JMX bean exporter. Each selector maps to an ordered
//! field table, and the collection cycle walks these tables instead of
//! hand-written per-field lookups. Stat names and help texts are part
//! of the dashboard contract and must not be renamed.

/// Default metric namespace; exported names are `<namespace>_<stat>`
pub const DEFAULT_NAMESPACE: &str = "namenode";

/// Label carrying the cluster identifier on every sample
pub const CLUSTER_LABEL: &str = "cluster";

/// Label carrying the NameNode host name on every sample
pub const HOST_LABEL: &str = "host";

/// Selector of the filesystem/capacity/datanode-health bean
pub const FS_SELECTOR: &str = "Hadoop:service=NameNode,name=FSNamesystemState";

/// Selector of the NameNode JVM bean
pub const JVM_SELECTOR: &str = "Hadoop:service=NameNode,name=JvmMetrics";

/// How a field's raw value becomes a sample value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON number, emitted verbatim as a gauge
    Gauge,
    /// Textual HA state, encoded to its numeric code
    HaState,
}

/// One entry of a selector's field table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name on the JMX bean
    pub field: &'static str,
    /// Exported stat name, appended to the namespace
    pub stat: &'static str,
    /// Prometheus HELP text
    pub help: &'static str,
    /// Extraction/encoding semantics
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn gauge(field: &'static str, help: &'static str) -> Self {
        Self {
            field,
            stat: field,
            help,
            kind: FieldKind::Gauge,
        }
    }
}

/// A selector together with its ordered field table
#[derive(Debug, Clone, Copy)]
pub struct BeanSpec {
    /// Bean `name` value this table applies to
    pub selector: &'static str,
    /// Fields extracted from a matching bean, in emission order
    pub fields: &'static [FieldSpec],
}

/// Filesystem bean: 16 numeric stats plus the HA state enum
pub const FS_FIELDS: &[FieldSpec] = &[
    FieldSpec::gauge("TotalLoad", "Current number of connections"),
    FieldSpec::gauge("MissingBlocks", "Current number of missing blocks"),
    FieldSpec::gauge(
        "CorruptBlocks",
        "Current number of blocks with corrupt replicas",
    ),
    FieldSpec::gauge("ExcessBlocks", "Current number of excess blocks"),
    FieldSpec::gauge(
        "BlocksTotal",
        "Current number of allocated blocks in the system",
    ),
    FieldSpec::gauge("FilesTotal", "Current number of files and directories"),
    FieldSpec::gauge(
        "LastCheckpointTime",
        "Time in milliseconds since epoch of last checkpoint",
    ),
    FieldSpec::gauge(
        "CapacityTotal",
        "Current raw capacity of DataNodes in bytes",
    ),
    FieldSpec::gauge(
        "CapacityUsed",
        "Current used capacity across all DataNodes in bytes",
    ),
    FieldSpec::gauge("CapacityRemaining", "Current remaining capacity in bytes"),
    FieldSpec::gauge(
        "CapacityUsedNonDFS",
        "Current space used by DataNodes for non DFS purposes in bytes",
    ),
    FieldSpec::gauge(
        "StaleDataNodes",
        "Current number of DataNodes marked stale due to delayed heartbeat",
    ),
    FieldSpec::gauge(
        "NumLiveDataNodes",
        "Number of datanodes which are currently live",
    ),
    FieldSpec::gauge(
        "NumDeadDataNodes",
        "Number of datanodes which are currently dead",
    ),
    FieldSpec::gauge(
        "VolumeFailuresTotal",
        "Total number of volume failures across all DataNodes",
    ),
    FieldSpec::gauge(
        "EstimatedCapacityLostTotal",
        "An estimate of the total capacity lost due to volume failures",
    ),
    FieldSpec {
        field: "tag.HAState",
        stat: "HAState",
        help: "(HA-only) Current state of the NameNode: \
               initializing or active or standby or stopping state",
        kind: FieldKind::HaState,
    },
];

/// JVM bean: GC counters and memory gauges
pub const JVM_FIELDS: &[FieldSpec] = &[
    FieldSpec::gauge("GcCount", "Total GC count"),
    FieldSpec::gauge("GcTimeMillis", "Total GC time in msec"),
    FieldSpec::gauge("MemMaxM", "Max memory size in MB"),
    FieldSpec::gauge("MemHeapUsedM", "Current heap memory used in MB"),
    FieldSpec::gauge("MemHeapMaxM", "Max heap memory size in MB"),
    FieldSpec::gauge("MemNonHeapUsedM", "Current non-heap memory used in MB"),
    FieldSpec::gauge("MemNonHeapMaxM", "Max non-heap memory size in MB"),
];

/// The closed set of recognized beans, in emission order
pub const BEAN_SPECS: &[BeanSpec] = &[
    BeanSpec {
        selector: FS_SELECTOR,
        fields: FS_FIELDS,
    },
    BeanSpec {
        selector: JVM_SELECTOR,
        fields: JVM_FIELDS,
    },
];

/// Look up the field table for a bean selector, if it is recognized
pub fn spec_for_selector(selector: &str) -> Option<&'static BeanSpec> {
    BEAN_SPECS.iter().find(|spec| spec.selector == selector)
}
