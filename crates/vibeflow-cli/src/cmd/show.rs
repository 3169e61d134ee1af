use crate::output::{bar, print_json};
use vibeflow_core::{
    catalog, service,
    storage::Storage,
    store::ProgressStore,
    types::DayStatus,
};

pub fn run<S: Storage>(store: &ProgressStore<S>, path_id: &str, json: bool) -> anyhow::Result<()> {
    let path = catalog::get(path_id)?;
    let view = service::path_progress_view(store, path_id)?;

    if json {
        #[derive(serde::Serialize)]
        struct Day<'a> {
            day: u32,
            title: &'a str,
            practice_type: &'a str,
            status: DayStatus,
        }

        #[derive(serde::Serialize)]
        struct Output<'a> {
            id: &'a str,
            title: &'a str,
            theme: &'a str,
            description: &'a str,
            completed_days: usize,
            total_days: usize,
            percent: u8,
            active_day: Option<u32>,
            complete: bool,
            days: Vec<Day<'a>>,
        }

        let days: Vec<Day> = path
            .sessions
            .iter()
            .map(|s| Day {
                day: s.day,
                title: &s.title,
                practice_type: s.practice_type.as_str(),
                status: view.day_status(s.day),
            })
            .collect();

        return print_json(&Output {
            id: &path.id,
            title: &path.title,
            theme: &path.theme,
            description: &path.description,
            completed_days: view.completed_count,
            total_days: view.total_count,
            percent: view.percent,
            active_day: view.active_day,
            complete: view.is_path_complete,
            days,
        });
    }

    println!("{}  ({})", path.title, path.theme);
    println!("{}", path.description);
    println!();
    println!(
        "{} {}% — {} / {} days complete",
        bar(view.percent, 20),
        view.percent,
        view.completed_count,
        view.total_count
    );
    println!();

    for session in &path.sessions {
        let marker = match view.day_status(session.day) {
            DayStatus::Completed => "[x]",
            DayStatus::Available => "[ ]",
            DayStatus::Locked => " * ",
        };
        let pointer = if view.active_day == Some(session.day) && !view.is_path_complete {
            ">"
        } else {
            " "
        };
        let note = match view.day_status(session.day) {
            DayStatus::Locked => "  (locked)",
            _ => "",
        };
        println!(
            "{pointer} {marker} Day {} — {} ({}){note}",
            session.day,
            session.title,
            session.practice_type.label()
        );
    }

    if view.is_path_complete {
        println!();
        println!("Congratulations on completing this path!");
    } else if let Some(day) = view.active_day {
        if let Some(session) = path.session_for_day(day) {
            println!();
            crate::cmd::print_session(session);
        }
    }
    Ok(())
}
