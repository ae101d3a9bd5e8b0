//! NameNode metric collection
//!
//! One collection cycle is: fetch the JMX document, parse it into a
//! [`BeanDocument`], scan every bean, and emit one gauge sample per
//! descriptor-table entry that extracts cleanly. Fetch and parse
//! failures abort the cycle with zero samples; a bad individual field
//! only skips its own sample.
//!
//! # Example
//!
//! ```ignore
//! use namenode_exporter::collector::{InstanceLabels, JmxClient, NameNodeCollector};
//!
//! let client = JmxClient::new("http://nn1:50070/jmx", 5000)?;
//! let labels = InstanceLabels::new("prod", "nn1");
//! let collector = NameNodeCollector::new(client, labels, "namenode");
//! let samples = collector.collect().await?;
//! ```

pub mod client;
pub mod document;

pub use client::JmxClient;
pub use document::{Bean, BeanDocument, FieldValue};

use tracing::{debug, warn};

use crate::error::CollectResult;
use crate::exporter::{
    spec_for_selector, FieldKind, FieldSpec, HaState, Sample, CLUSTER_LABEL, HOST_LABEL,
};

/// Static labels attached to every emitted sample.
///
/// Fixed at startup; identical on every sample of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLabels {
    /// Cluster identifier
    pub cluster: String,
    /// NameNode host name
    pub host: String,
}

impl InstanceLabels {
    /// Create a label set
    pub fn new(cluster: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            host: host.into(),
        }
    }
}

/// Collection cycle orchestrator.
///
/// Holds only read-only state (client, labels, namespace), so a single
/// instance can serve concurrent scrapes; each `collect()` call is an
/// independent fetch-parse-extract cycle with nothing cached between
/// cycles. Overlapping scrapes cause overlapping upstream fetches.
#[derive(Debug, Clone)]
pub struct NameNodeCollector {
    client: JmxClient,
    labels: InstanceLabels,
    namespace: String,
}

impl NameNodeCollector {
    /// Create a collector
    pub fn new(client: JmxClient, labels: InstanceLabels, namespace: impl Into<String>) -> Self {
        Self {
            client,
            labels,
            namespace: namespace.into(),
        }
    }

    /// The JMX URL this collector scrapes
    pub fn target(&self) -> &str {
        self.client.url()
    }

    /// Run one collection cycle.
    ///
    /// # Errors
    /// Returns a cycle-level error (and zero samples) when the fetch
    /// fails, the endpoint answers non-2xx, or the payload is not a
    /// bean document.
    pub async fn collect(&self) -> CollectResult<Vec<Sample>> {
        let body = self.client.fetch().await?;
        let document = BeanDocument::parse(&body)?;
        Ok(self.collect_document(&document))
    }

    /// Emit samples for an already parsed document.
    ///
    /// Pure function of the document: the same input always yields the
    /// same sample sequence. Beans matching no selector are ignored; an
    /// absent selector simply emits nothing for its table (sparse
    /// collection, consumers must tolerate missing series).
    pub fn collect_document(&self, document: &BeanDocument) -> Vec<Sample> {
        let mut samples = Vec::new();

        for bean in document.beans() {
            let Some(selector) = bean.name() else {
                continue;
            };
            let Some(spec) = spec_for_selector(selector) else {
                continue;
            };

            debug!(selector = %selector, "Collecting bean");
            for field in spec.fields {
                match self.extract_sample(bean, field) {
                    Ok(sample) => samples.push(sample),
                    // One bad field must not take down the rest of the
                    // cycle; skip its sample and keep going.
                    Err(e) => warn!(error = %e, "Skipping sample"),
                }
            }
        }

        samples
    }

    /// Extract one descriptor-table entry from a matched bean
    fn extract_sample(
        &self,
        bean: &Bean,
        field: &FieldSpec,
    ) -> Result<Sample, crate::error::ExtractError> {
        let value = match field.kind {
            FieldKind::Gauge => bean.number(field.field)?,
            FieldKind::HaState => HaState::encode(bean.string(field.field)?).code(),
        };

        Ok(
            Sample::new(format!("{}_{}", self.namespace, field.stat), value)
                .with_help(field.help)
                .with_label(CLUSTER_LABEL, self.labels.cluster.clone())
                .with_label(HOST_LABEL, self.labels.host.clone()),
        )
    }
}
