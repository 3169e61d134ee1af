use crate::output::print_json;
use anyhow::bail;
use vibeflow_core::{
    catalog, service,
    storage::Storage,
    store::ProgressStore,
    types::DayStatus,
};

pub fn run<S: Storage>(
    store: &mut ProgressStore<S>,
    path_id: &str,
    day: u32,
    json: bool,
) -> anyhow::Result<()> {
    let path = catalog::get(path_id)?;

    if !path.has_day(day) {
        bail!(
            "path '{}' has no day {} (valid days: 1-{})",
            path.id,
            day,
            path.total_days()
        );
    }

    // Presenter-level gating, mirroring the disabled card for locked days.
    let before = service::path_progress_view(store, path_id)?;
    if before.day_status(day) == DayStatus::Locked {
        bail!(
            "day {} is locked — complete day {} first",
            day,
            day - 1
        );
    }

    let view = service::toggle_day_completion(store, path_id, day)?;
    let now_complete = view.day_status(day) == DayStatus::Completed;

    if json {
        #[derive(serde::Serialize)]
        struct Output<'a> {
            id: &'a str,
            day: u32,
            day_completed: bool,
            completed_days: usize,
            total_days: usize,
            percent: u8,
            active_day: Option<u32>,
            complete: bool,
        }
        return print_json(&Output {
            id: &path.id,
            day,
            day_completed: now_complete,
            completed_days: view.completed_count,
            total_days: view.total_count,
            percent: view.percent,
            active_day: view.active_day,
            complete: view.is_path_complete,
        });
    }

    if now_complete {
        println!("Day {day} marked complete.");
    } else {
        println!("Day {day} marked incomplete.");
    }
    println!(
        "{}: {} / {} days ({}%)",
        path.title, view.completed_count, view.total_count, view.percent
    );
    if view.is_path_complete {
        println!("Congratulations on completing this path!");
    } else if let Some(active) = view.active_day {
        println!("Next up: day {active}.");
    }
    Ok(())
}
