use crate::catalog;
use crate::error::Result;
use crate::keys;
use crate::path::PathDefinition;
use crate::storage::Storage;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Decode a stored progress value: a JSON array of non-negative integers,
/// e.g. `[1,2,3]`. Anything else (bad JSON, an object, negative or
/// fractional entries) is treated as "no progress" and logged; corruption
/// never reaches the user as an error.
fn decode(path_id: &str, raw: &str) -> BTreeSet<u32> {
    match serde_json::from_str::<Vec<u32>>(raw) {
        Ok(days) => days.into_iter().collect(),
        Err(e) => {
            tracing::warn!(path_id, error = %e, "corrupt progress record; treating as empty");
            BTreeSet::new()
        }
    }
}

fn encode(days: &BTreeSet<u32>) -> Result<String> {
    let days: Vec<u32> = days.iter().copied().collect();
    Ok(serde_json::to_string(&days)?)
}

// ---------------------------------------------------------------------------
// ProgressStore
// ---------------------------------------------------------------------------

/// Owns the persisted completed-days set for every path. All reads recover
/// from missing or corrupt data; all mutations persist synchronously before
/// returning.
#[derive(Debug)]
pub struct ProgressStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// The completed-days set for `path_id`. Missing or corrupt data reads
    /// as the empty set.
    pub fn load(&self, path_id: &str) -> BTreeSet<u32> {
        match self.storage.get(&keys::progress_key(path_id)) {
            Some(raw) => decode(path_id, &raw),
            None => BTreeSet::new(),
        }
    }

    /// Toggle `day` in the path's completed set and persist the result.
    ///
    /// Two toggles of the same day cancel out. A day the path has no
    /// session for is rejected as a logged no-op so the stored set never
    /// gains orphan values. Lock state is *not* checked here: the store
    /// mirrors the presenter-gated behavior where marking a later day
    /// before an earlier one is structurally permitted.
    pub fn toggle_day(&mut self, path: &PathDefinition, day: u32) -> Result<BTreeSet<u32>> {
        let mut days = self.load(&path.id);

        if !path.has_day(day) {
            tracing::debug!(path_id = %path.id, day, "toggle for a day outside the path; ignoring");
            return Ok(days);
        }

        if !days.remove(&day) {
            days.insert(day);
        }
        self.storage
            .set(&keys::progress_key(&path.id), &encode(&days)?)?;
        Ok(days)
    }

    /// Remove all progress for one path.
    pub fn clear(&mut self, path_id: &str) -> Result<()> {
        self.storage.remove(&keys::progress_key(path_id))
    }

    /// Remove progress for every catalog path plus co-located local data
    /// (favorites, journal, mood log, thought records, sound favorites,
    /// chat alias). Irreversible; callers confirm with the user first.
    pub fn clear_all(&mut self) -> Result<()> {
        for path in catalog::paths() {
            self.clear(&path.id)?;
        }
        for key in keys::SIBLING_KEYS {
            self.storage.remove(key)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::PracticeType;
    use crate::path::DailySession;

    fn test_path(n: u32) -> PathDefinition {
        PathDefinition {
            id: "test-path".to_string(),
            title: "Test Path".to_string(),
            description: String::new(),
            theme: "Testing".to_string(),
            duration_label: format!("{n} Days"),
            sessions: (1..=n)
                .map(|day| DailySession {
                    day,
                    title: format!("Day {day}"),
                    lesson: String::new(),
                    practice_type: PracticeType::Journal,
                    practice_details: String::new(),
                    affirmation: String::new(),
                })
                .collect(),
        }
    }

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::new(MemoryStorage::new())
    }

    #[test]
    fn load_missing_is_empty() {
        assert!(store().load("test-path").is_empty());
    }

    #[test]
    fn toggle_persists_and_cancels() {
        let path = test_path(3);
        let mut store = store();

        let days = store.toggle_day(&path, 1).unwrap();
        assert!(days.contains(&1));
        assert_eq!(store.load("test-path"), days);
        assert_eq!(
            store.storage().get("therapy-path-progress-test-path").as_deref(),
            Some("[1]")
        );

        // Second toggle round-trips back to the original set.
        let days = store.toggle_day(&path, 1).unwrap();
        assert!(days.is_empty());
        assert!(store.load("test-path").is_empty());
    }

    #[test]
    fn toggle_rejects_day_outside_path() {
        let path = test_path(3);
        let mut store = store();
        store.toggle_day(&path, 1).unwrap();

        let days = store.toggle_day(&path, 7).unwrap();
        assert_eq!(days, store.load("test-path"));
        assert!(!days.contains(&7));
        // The stored value never gained the orphan day.
        assert_eq!(
            store.storage().get("therapy-path-progress-test-path").as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn toggle_day_zero_is_rejected() {
        let path = test_path(3);
        let mut store = store();
        let days = store.toggle_day(&path, 0).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn corrupt_values_read_as_empty() {
        let mut store = store();
        for raw in ["not json", "{}", "\"[1]\"", "[1, -2]", "[1.5]", "[\"a\"]"] {
            store
                .storage_mut()
                .set("therapy-path-progress-test-path", raw)
                .unwrap();
            assert!(
                store.load("test-path").is_empty(),
                "expected empty set for {raw:?}"
            );
        }
    }

    #[test]
    fn stale_days_survive_a_toggle_of_a_valid_day() {
        // A record written against an older, longer version of a path may
        // hold days the path no longer has. Reads tolerate them; toggles
        // of valid days keep them (they are only ever dropped by clear).
        let path = test_path(3);
        let mut store = store();
        store
            .storage_mut()
            .set("therapy-path-progress-test-path", "[2,9]")
            .unwrap();

        let days = store.toggle_day(&path, 1).unwrap();
        assert_eq!(days, [1, 2, 9].into_iter().collect());
    }

    #[test]
    fn clear_removes_one_path() {
        let path = test_path(2);
        let mut store = store();
        store.toggle_day(&path, 1).unwrap();
        store.clear("test-path").unwrap();
        assert!(store.load("test-path").is_empty());
        assert_eq!(store.storage().get("therapy-path-progress-test-path"), None);
    }

    #[test]
    fn clear_all_removes_progress_and_sibling_data() {
        let mut store = store();

        // Populate progress for two real catalog paths plus sibling keys.
        let a = catalog::get("anxiety-management").unwrap();
        let b = catalog::get("gratitude-pathway").unwrap();
        store.toggle_day(a, 1).unwrap();
        store.toggle_day(b, 1).unwrap();
        store
            .storage_mut()
            .set(keys::FAVORITES_KEY, "[\"aff-1\"]")
            .unwrap();
        store
            .storage_mut()
            .set(keys::ALIAS_KEY, "CalmOtter42")
            .unwrap();

        store.clear_all().unwrap();

        assert!(store.load("anxiety-management").is_empty());
        assert!(store.load("gratitude-pathway").is_empty());
        assert_eq!(store.storage().get(keys::FAVORITES_KEY), None);
        assert_eq!(store.storage().get(keys::ALIAS_KEY), None);
        assert!(store.storage().is_empty());
    }
}
