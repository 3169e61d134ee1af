//! Storage key builder. Every key the app writes to the device-local store
//! is produced here, so read and write sites can never drift apart.

// ---------------------------------------------------------------------------
// Key constants
// ---------------------------------------------------------------------------

pub const PROGRESS_KEY_PREFIX: &str = "therapy-path-progress-";

/// Keys owned by sibling screens (favorites, journal, mood tracker, CBT
/// thought records, meditation sound favorites, anonymous chat alias).
/// The progression engine never reads or writes these, but the
/// user-confirmed "reset all data" action removes them.
pub const FAVORITES_KEY: &str = "favoriteAffirmations";
pub const JOURNAL_KEY: &str = "journalEntries";
pub const MOOD_KEY: &str = "moodEntries";
pub const THOUGHT_RECORDS_KEY: &str = "thoughtRecords";
pub const SOUND_FAVORITES_KEY: &str = "soundFavorites";
pub const ALIAS_KEY: &str = "vibeflow_user_alias";

pub const SIBLING_KEYS: &[&str] = &[
    FAVORITES_KEY,
    JOURNAL_KEY,
    MOOD_KEY,
    THOUGHT_RECORDS_KEY,
    SOUND_FAVORITES_KEY,
    ALIAS_KEY,
];

// ---------------------------------------------------------------------------
// Key helpers
// ---------------------------------------------------------------------------

/// The key holding a path's completed-days set, e.g.
/// `therapy-path-progress-anxiety-management`.
pub fn progress_key(path_id: &str) -> String {
    format!("{PROGRESS_KEY_PREFIX}{path_id}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_key_shape() {
        assert_eq!(
            progress_key("anxiety-management"),
            "therapy-path-progress-anxiety-management"
        );
    }

    #[test]
    fn sibling_keys_include_favorites_and_alias() {
        assert!(SIBLING_KEYS.contains(&FAVORITES_KEY));
        assert!(SIBLING_KEYS.contains(&ALIAS_KEY));
    }

    #[test]
    fn progress_keys_are_distinct_from_sibling_keys() {
        for key in SIBLING_KEYS {
            assert!(!key.starts_with(PROGRESS_KEY_PREFIX));
        }
    }
}
