//! Resolution status of a dependency in the report

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status category a dependency was reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    /// Already at the latest version
    Current,
    /// Declared version is newer than the latest known release
    Exceeded,
    /// A newer version is available
    Outdated,
    /// The version could not be resolved
    Unresolved,
}

impl ResolutionStatus {
    /// All statuses, in concatenation order
    pub fn all() -> &'static [ResolutionStatus] {
        &[
            ResolutionStatus::Current,
            ResolutionStatus::Exceeded,
            ResolutionStatus::Outdated,
            ResolutionStatus::Unresolved,
        ]
    }

    /// Returns the report key for this status
    pub fn key(&self) -> &'static str {
        match self {
            ResolutionStatus::Current => "current",
            ResolutionStatus::Exceeded => "exceeded",
            ResolutionStatus::Outdated => "outdated",
            ResolutionStatus::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        let keys: Vec<_> = ResolutionStatus::all().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["current", "exceeded", "outdated", "unresolved"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ResolutionStatus::Outdated), "outdated");
    }

    #[test]
    fn test_serde_status() {
        let json = serde_json::to_string(&ResolutionStatus::Unresolved).unwrap();
        assert_eq!(json, "\"unresolved\"");
        let parsed: ResolutionStatus = serde_json::from_str("\"exceeded\"").unwrap();
        assert_eq!(parsed, ResolutionStatus::Exceeded);
    }
}
