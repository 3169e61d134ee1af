use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PracticeType
// ---------------------------------------------------------------------------

/// The kind of daily practice a session asks for. Closed set: catalog
/// content never uses anything outside these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeType {
    Journal,
    Meditation,
    Reflection,
    Exercise,
}

impl PracticeType {
    pub fn all() -> &'static [PracticeType] {
        &[
            PracticeType::Journal,
            PracticeType::Meditation,
            PracticeType::Reflection,
            PracticeType::Exercise,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PracticeType::Journal => "journal",
            PracticeType::Meditation => "meditation",
            PracticeType::Reflection => "reflection",
            PracticeType::Exercise => "exercise",
        }
    }

    /// Human-facing label, as rendered on a session card.
    pub fn label(self) -> &'static str {
        match self {
            PracticeType::Journal => "Journal",
            PracticeType::Meditation => "Meditation",
            PracticeType::Reflection => "Reflection",
            PracticeType::Exercise => "Exercise",
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PracticeType {
    type Err = crate::error::VibeflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(PracticeType::Journal),
            "meditation" => Ok(PracticeType::Meditation),
            "reflection" => Ok(PracticeType::Reflection),
            "exercise" => Ok(PracticeType::Exercise),
            _ => Err(crate::error::VibeflowError::InvalidPracticeType(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// DayStatus
// ---------------------------------------------------------------------------

/// Derived per-day state. Never persisted; recomputed from the completed
/// set on every derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Locked,
    Available,
    Completed,
}

impl DayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Locked => "locked",
            DayStatus::Available => "available",
            DayStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_type_roundtrip() {
        use std::str::FromStr;
        for pt in PracticeType::all() {
            let s = pt.as_str();
            let parsed = PracticeType::from_str(s).unwrap();
            assert_eq!(*pt, parsed);
        }
    }

    #[test]
    fn practice_type_rejects_unknown() {
        use std::str::FromStr;
        assert!(PracticeType::from_str("breathing").is_err());
        assert!(PracticeType::from_str("").is_err());
    }

    #[test]
    fn practice_type_serde_snake_case() {
        let json = serde_json::to_string(&PracticeType::Meditation).unwrap();
        assert_eq!(json, "\"meditation\"");
        let parsed: PracticeType = serde_json::from_str("\"journal\"").unwrap();
        assert_eq!(parsed, PracticeType::Journal);
    }

    #[test]
    fn day_status_display() {
        assert_eq!(DayStatus::Locked.to_string(), "locked");
        assert_eq!(DayStatus::Available.to_string(), "available");
        assert_eq!(DayStatus::Completed.to_string(), "completed");
    }
}
