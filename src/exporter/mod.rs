//! Metric descriptor tables and exposition output
//!
//! This module owns the contract between extracted bean fields and the
//! emitted time series: the static descriptor tables, the HA state
//! encoding, and the Prometheus text formatter.

pub mod descriptors;
pub mod formatter;
pub mod ha_state;

pub use descriptors::{
    spec_for_selector, BeanSpec, FieldKind, FieldSpec, BEAN_SPECS, CLUSTER_LABEL,
    DEFAULT_NAMESPACE, FS_FIELDS, FS_SELECTOR, HOST_LABEL, JVM_FIELDS, JVM_SELECTOR,
};
pub use formatter::{ExpositionFormatter, Sample};
pub use ha_state::HaState;
