use crate::output::print_json;
use vibeflow_core::{catalog, service, storage::Storage, store::ProgressStore};

/// The "Continue Path" action: jump straight to the current session.
pub fn run<S: Storage>(store: &ProgressStore<S>, path_id: &str, json: bool) -> anyhow::Result<()> {
    let path = catalog::get(path_id)?;
    let view = service::path_progress_view(store, path_id)?;

    let session = view.active_day.and_then(|d| path.session_for_day(d));

    if json {
        #[derive(serde::Serialize)]
        struct Output<'a> {
            id: &'a str,
            active_day: Option<u32>,
            complete: bool,
            session: Option<&'a vibeflow_core::path::DailySession>,
        }
        return print_json(&Output {
            id: &path.id,
            active_day: view.active_day,
            complete: view.is_path_complete,
            session,
        });
    }

    if view.is_path_complete {
        println!("Congratulations on completing this path!");
        println!("Explore other paths with `vibeflow list`.");
        return Ok(());
    }

    match session {
        Some(session) => {
            println!("{} — continue where you left off", path.title);
            println!();
            crate::cmd::print_session(session);
            println!();
            println!(
                "Mark it done with `vibeflow toggle {} {}`.",
                path.id, session.day
            );
        }
        None => println!("This path has no sessions yet."),
    }
    Ok(())
}
