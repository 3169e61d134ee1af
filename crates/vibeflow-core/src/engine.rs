//! Pure derivation of per-day status and overall progress for one path.
//!
//! Nothing here touches storage: `derive` maps an immutable session list
//! plus a completed-days snapshot to a [`PathProgressView`], and is the one
//! place the "first incomplete day" scan and the unlock rule live.

use crate::path::DailySession;
use crate::types::DayStatus;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// PathProgressView
// ---------------------------------------------------------------------------

/// Snapshot of a path's progress, computed from `(sessions, completed)`.
#[derive(Debug, Clone)]
pub struct PathProgressView {
    /// Completed days that actually exist in the path. Stale day numbers
    /// left behind in storage are not counted.
    pub completed_count: usize,
    pub total_count: usize,
    /// Rounded to the nearest whole percent; 0 for an empty path.
    pub percent: u8,
    /// The day the presenter should treat as current: the first incomplete
    /// day, or the last day once everything is done. `None` only for an
    /// empty session list.
    pub active_day: Option<u32>,
    pub is_path_complete: bool,
    completed: BTreeSet<u32>,
}

impl PathProgressView {
    /// Status of a single day under the sequential-unlock rule.
    ///
    /// A day is gated only by its *immediate* predecessor: day `d` is
    /// locked when `d > 1` and `d - 1` is incomplete. The rule is
    /// deliberately narrow. A set like `{3}` on a 3-day path leaves day 3
    /// completed and day 2 locked (day 1 is not yet done), while day 1
    /// stays available.
    pub fn day_status(&self, day: u32) -> DayStatus {
        if self.completed.contains(&day) {
            DayStatus::Completed
        } else if day > 1 && !self.completed.contains(&(day - 1)) {
            DayStatus::Locked
        } else {
            DayStatus::Available
        }
    }

    /// `(day, status)` for every session, in session order.
    pub fn day_statuses<'a>(
        &'a self,
        sessions: &'a [DailySession],
    ) -> impl Iterator<Item = (u32, DayStatus)> + 'a {
        sessions.iter().map(|s| (s.day, self.day_status(s.day)))
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive a [`PathProgressView`]. Total and defined for every input: an
/// empty session list yields `percent == 0` and no active day, and day
/// numbers in `completed` that no session carries are ignored in counts.
pub fn derive(sessions: &[DailySession], completed: &BTreeSet<u32>) -> PathProgressView {
    let total_count = sessions.len();
    let completed_count = sessions
        .iter()
        .filter(|s| completed.contains(&s.day))
        .count();

    let percent = if total_count == 0 {
        0
    } else {
        (100.0 * completed_count as f64 / total_count as f64).round() as u8
    };

    let active_day = sessions
        .iter()
        .find(|s| !completed.contains(&s.day))
        .map(|s| s.day)
        .or_else(|| sessions.last().map(|s| s.day));

    PathProgressView {
        completed_count,
        total_count,
        percent,
        active_day,
        is_path_complete: total_count > 0 && completed_count == total_count,
        completed: completed.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
