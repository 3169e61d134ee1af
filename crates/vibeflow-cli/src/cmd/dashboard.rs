use crate::output::{bar, print_json};
use vibeflow_core::{
    dashboard::{self, PathEntry},
    storage::Storage,
    store::ProgressStore,
};

pub fn run<S: Storage>(store: &ProgressStore<S>, json: bool) -> anyhow::Result<()> {
    let groups = dashboard::groups(store);

    if json {
        #[derive(serde::Serialize)]
        struct Row<'a> {
            id: &'a str,
            title: &'a str,
            theme: &'a str,
            completed_days: usize,
            total_days: usize,
            percent: u8,
        }

        fn rows(entries: &[PathEntry]) -> Vec<Row<'_>> {
            entries
                .iter()
                .map(|e| Row {
                    id: &e.path.id,
                    title: &e.path.title,
                    theme: &e.path.theme,
                    completed_days: e.view.completed_count,
                    total_days: e.view.total_count,
                    percent: e.view.percent,
                })
                .collect()
        }

        #[derive(serde::Serialize)]
        struct Output<'a> {
            in_progress: Vec<Row<'a>>,
            completed: Vec<Row<'a>>,
            not_started: Vec<Row<'a>>,
        }

        return print_json(&Output {
            in_progress: rows(&groups.in_progress),
            completed: rows(&groups.completed),
            not_started: rows(&groups.not_started),
        });
    }

    println!("In Progress");
    if groups.in_progress.is_empty() {
        println!("  (none — start a path from the explore list below)");
    }
    for entry in &groups.in_progress {
        println!(
            "  {} {:>3}%  {} ({}/{} days)",
            bar(entry.view.percent, 10),
            entry.view.percent,
            entry.path.title,
            entry.view.completed_count,
            entry.view.total_count
        );
    }

    println!();
    println!("Completed");
    if groups.completed.is_empty() {
        println!("  (none yet — keep going!)");
    }
    for entry in &groups.completed {
        println!("  [x] {} ({})", entry.path.title, entry.path.duration_label);
    }

    println!();
    println!("Explore");
    for (theme, entries) in groups.not_started_by_theme() {
        println!("  {theme}");
        for entry in entries {
            println!(
                "    {} — {} ({})",
                entry.path.id, entry.path.title, entry.path.duration_label
            );
        }
    }
    Ok(())
}
