//! Prometheus text exposition output
//!
//! Formats collected samples into the text exposition format
//! (version 0.0.4). Every metric this exporter produces is a gauge, so
//! the formatter is specialized accordingly:
//!
//! ```text
//! # HELP <metric_name> <help_text>
//! # TYPE <metric_name> gauge
//! <metric_name>{cluster="...",host="..."} <value>
//! ```

use std::collections::HashSet;

/// A single point-in-time sample ready for output
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Fully qualified metric name (namespace already applied)
    pub name: String,
    /// HELP text, emitted once per metric name
    pub help: Option<String>,
    /// Label pairs in insertion order
    pub labels: Vec<(String, String)>,
    /// Gauge value
    pub value: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            help: None,
            labels: Vec::new(),
            value,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a label pair
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push((key.into(), value.into()));
        self
    }
}

/// Prometheus exposition format writer
#[derive(Debug, Clone, Default)]
pub struct ExpositionFormatter;

impl ExpositionFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }

    /// Format samples in declaration order.
    ///
    /// HELP and TYPE lines are emitted once per unique metric name, at
    /// its first occurrence; labels are sorted alphabetically so the
    /// same sample set always renders to identical bytes.
    pub fn format(&self, samples: &[Sample]) -> String {
        let mut output = String::with_capacity(samples.len() * 96);
        let mut seen: HashSet<&str> = HashSet::new();

        for sample in samples {
            if seen.insert(sample.name.as_str()) {
                if let Some(help) = &sample.help {
                    output.push_str("# HELP ");
                    output.push_str(&sample.name);
                    output.push(' ');
                    output.push_str(&Self::escape_help(help));
                    output.push('\n');
                }
                output.push_str("# TYPE ");
                output.push_str(&sample.name);
                output.push_str(" gauge\n");
            }

            output.push_str(&self.format_sample_line(sample));
            output.push('\n');
        }

        output
    }

    fn format_sample_line(&self, sample: &Sample) -> String {
        let mut line = sample.name.clone();

        if !sample.labels.is_empty() {
            let mut sorted: Vec<&(String, String)> = sample.labels.iter().collect();
            sorted.sort_by_key(|(k, _)| k);

            let pairs: Vec<String> = sorted
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, Self::escape_label_value(v)))
                .collect();

            line.push('{');
            line.push_str(&pairs.join(","));
            line.push('}');
        }

        line.push(' ');
        line.push_str(&Self::format_value(sample.value));
        line
    }

    /// Format a gauge value
    ///
    /// - NaN → "NaN", ±Inf → "+Inf"/"-Inf"
    /// - Whole numbers render without a decimal point
    /// - Very large or very small magnitudes use scientific notation
    fn format_value(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                "+Inf".to_string()
            } else {
                "-Inf".to_string()
            }
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else if value.abs() >= 1e6 || (value.abs() < 1e-3 && value != 0.0) {
            format!("{:e}", value)
        } else {
            format!("{}", value)
        }
    }

    /// Escape backslash and newline in HELP text
    fn escape_help(help: &str) -> String {
        help.replace('\\', "\\\\").replace('\n', "\\n")
    }

    /// Escape backslash, double-quote, and newline in label values
    fn escape_label_value(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                '\n' => escaped.push_str("\\n"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
