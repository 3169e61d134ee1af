use std::path::PathBuf;
use vibeflow_core::storage::FileStorage;

/// Resolve the data directory.
///
/// Priority:
/// 1. `--data-dir` flag / `VIBEFLOW_DATA_DIR` env var (passed as `explicit`)
/// 2. `~/.vibeflow`
pub fn resolve(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p),
        None => Ok(FileStorage::default_root()?),
    }
}
