//! The outward interface presenters consume: catalog lookup + store load +
//! engine derivation composed behind two calls, so no caller ever scans for
//! the active day or re-implements the unlock rule itself.

use crate::catalog;
use crate::engine::{self, PathProgressView};
use crate::error::Result;
use crate::storage::Storage;
use crate::store::ProgressStore;

/// Current progress view for one path. Fails only when `path_id` is not in
/// the catalog, a condition that surfaces to the user rather than being
/// silently substituted.
pub fn path_progress_view<S: Storage>(
    store: &ProgressStore<S>,
    path_id: &str,
) -> Result<PathProgressView> {
    let path = catalog::get(path_id)?;
    let completed = store.load(path_id);
    Ok(engine::derive(&path.sessions, &completed))
}

/// Toggle a day's completion, persist, and return the fresh view.
///
/// A `day` with no session in the path is swallowed as a no-op: the view
/// comes back unchanged rather than corrupting the stored set with an
/// orphan value. Lock gating belongs to the presenter (the original flow
/// disables the control); the store stays permissive underneath.
pub fn toggle_day_completion<S: Storage>(
    store: &mut ProgressStore<S>,
    path_id: &str,
    day: u32,
) -> Result<PathProgressView> {
    let path = catalog::get(path_id)?;
    let completed = store.toggle_day(path, day)?;
    Ok(engine::derive(&path.sessions, &completed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
