//! Groups every catalog path by progress for the journey dashboard.

use crate::catalog;
use crate::engine::{self, PathProgressView};
use crate::path::PathDefinition;
use crate::storage::Storage;
use crate::store::ProgressStore;

// ---------------------------------------------------------------------------
// Theme ordering
// ---------------------------------------------------------------------------

/// Editorial order for theme sections in the "explore" listing. Themes not
/// listed here sort last, in catalog order.
pub const THEME_ORDER: &[&str] = &[
    "Anxiety",
    "Emotional Regulation",
    "Self-Esteem & Identity",
    "Healing & Recovery",
    "Mental Skills & Focus",
    "Mindfulness",
    "Lifestyle & Balance",
    "Spiritual & Inner Growth",
];

fn theme_rank(theme: &str) -> usize {
    THEME_ORDER
        .iter()
        .position(|t| *t == theme)
        .unwrap_or(THEME_ORDER.len())
}

// ---------------------------------------------------------------------------
// DashboardGroups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PathEntry {
    pub path: &'static PathDefinition,
    pub view: PathProgressView,
}

/// The three dashboard buckets, each in catalog order.
#[derive(Debug, Clone, Default)]
pub struct DashboardGroups {
    pub not_started: Vec<PathEntry>,
    pub in_progress: Vec<PathEntry>,
    pub completed: Vec<PathEntry>,
}

impl DashboardGroups {
    /// Not-started paths grouped into `(theme, entries)` sections in the
    /// editorial theme order.
    pub fn not_started_by_theme(&self) -> Vec<(&str, Vec<&PathEntry>)> {
        let mut sections: Vec<(&str, Vec<&PathEntry>)> = Vec::new();
        for entry in &self.not_started {
            let theme = entry.path.theme.as_str();
            match sections.iter_mut().find(|(t, _)| *t == theme) {
                Some((_, entries)) => entries.push(entry),
                None => sections.push((theme, vec![entry])),
            }
        }
        sections.sort_by_key(|(theme, _)| theme_rank(theme));
        sections
    }
}

/// Classify every catalog path: not-started (nothing done), in-progress
/// (some but not all days), completed (every day done).
pub fn groups<S: Storage>(store: &ProgressStore<S>) -> DashboardGroups {
    let mut out = DashboardGroups::default();
    for path in catalog::paths() {
        let completed = store.load(&path.id);
        let view = engine::derive(&path.sessions, &completed);
        let entry = PathEntry { path, view };
        if entry.view.is_path_complete {
            out.completed.push(entry);
        } else if entry.view.completed_count > 0 {
            out.in_progress.push(entry);
        } else {
            out.not_started.push(entry);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
