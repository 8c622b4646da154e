//! Resource status.
use serde::{Deserialize, Serialize};

/// Attention state of a monitored room.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Stable,

    /// Someone should check on the patient.
    Check,

    /// Needs immediate attention.
    Urgent,

    /// Staff have been alerted.
    Alerted,
}

impl ResourceStatus {
    /// All statuses, most urgent first.
    pub const BY_PRIORITY: [ResourceStatus; 4] = [
        ResourceStatus::Urgent,
        ResourceStatus::Alerted,
        ResourceStatus::Check,
        ResourceStatus::Stable,
    ];

    /// Sort rank. Lower is more urgent.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::Alerted => 1,
            Self::Check => 2,
            Self::Stable => 3,
        }
    }

    /// Legend text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Check => "Check on patient",
            Self::Urgent => "Needs immediate attention",
            Self::Alerted => "Staff alerted",
        }
    }
}

#[cfg(test)]
#[path = "./status_test.rs"]
mod status_test;
