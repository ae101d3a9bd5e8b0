//! HA state encoding
//!
//! The FS bean reports the NameNode's high-availability role as a
//! string (`tag.HAState`). Dashboards and alerts consume it as a
//! numeric gauge, so the known states map to fixed codes. The codes
//! are non-contiguous and `unknown` sits outside the range; both are
//! load-bearing for existing alert rules and must not change.

/// Numeric encoding of the NameNode HA role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaState {
    /// NameNode is shutting down
    Stopping,
    /// Active NameNode serving the namespace
    Active,
    /// Still starting up
    Initializing,
    /// Hot standby
    Standby,
    /// Anything the exporter does not recognize, including empty
    Unknown,
}

impl HaState {
    /// Encode a raw state string, case-insensitively.
    ///
    /// Total over all inputs: unrecognized strings become
    /// [`HaState::Unknown`], never an error. Tokens are checked in a
    /// fixed order for auditability even though they are mutually
    /// exclusive.
    pub fn encode(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "stopping" => HaState::Stopping,
            "active" => HaState::Active,
            "initializing" => HaState::Initializing,
            "standby" => HaState::Standby,
            _ => HaState::Unknown,
        }
    }

    /// The gauge value exported for this state
    pub fn code(self) -> f64 {
        match self {
            HaState::Stopping => 0.0,
            HaState::Active => 1.0,
            HaState::Initializing => 3.0,
            HaState::Standby => 4.0,
            HaState::Unknown => -1.0,
        }
    }
}
