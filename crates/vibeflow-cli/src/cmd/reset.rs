use anyhow::bail;
use vibeflow_core::{catalog, storage::Storage, store::ProgressStore};

pub fn run<S: Storage>(
    store: &mut ProgressStore<S>,
    path_id: Option<&str>,
    all: bool,
    yes: bool,
) -> anyhow::Result<()> {
    match (path_id, all) {
        (Some(_), true) => bail!("pass either a path id or --all, not both"),
        (None, false) => bail!("pass a path id, or --all to erase everything"),
        (Some(id), false) => {
            let path = catalog::get(id)?;
            if !yes {
                bail!(
                    "this erases all progress for '{}' and cannot be undone; re-run with --yes",
                    path.id
                );
            }
            store.clear(&path.id)?;
            println!("Progress for '{}' erased.", path.id);
        }
        (None, true) => {
            if !yes {
                bail!(
                    "this erases progress for every path plus favorites, journal, mood log, \
                     and chat alias, and cannot be undone; re-run with --yes"
                );
            }
            store.clear_all()?;
            println!("All local data erased.");
        }
    }
    Ok(())
}
