use crate::types::PracticeType;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailySession
// ---------------------------------------------------------------------------

/// One day's content within a path: a short lesson, a practice to carry
/// out, and a closing affirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySession {
    /// Positive, unique within its path. Catalog entries number their
    /// sessions contiguously from 1.
    pub day: u32,
    pub title: String,
    pub lesson: String,
    pub practice_type: PracticeType,
    pub practice_details: String,
    pub affirmation: String,
}

// ---------------------------------------------------------------------------
// PathDefinition
// ---------------------------------------------------------------------------

/// A named, multi-day guided self-help program. Immutable once authored;
/// the catalog owns every instance for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub duration_label: String,
    /// Ascending by `day`, covering exactly `1..=N` with no gaps.
    pub sessions: Vec<DailySession>,
}

impl PathDefinition {
    pub fn total_days(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_for_day(&self, day: u32) -> Option<&DailySession> {
        self.sessions.iter().find(|s| s.day == day)
    }

    pub fn has_day(&self, day: u32) -> bool {
        self.session_for_day(day).is_some()
    }

    pub fn last_day(&self) -> Option<u32> {
        self.sessions.last().map(|s| s.day)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
