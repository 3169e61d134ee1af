use crate::output::{print_json, print_table};
use vibeflow_core::{catalog, engine, storage::Storage, store::ProgressStore};

pub fn run<S: Storage>(store: &ProgressStore<S>, json: bool) -> anyhow::Result<()> {
    if json {
        #[derive(serde::Serialize)]
        struct Row<'a> {
            id: &'a str,
            title: &'a str,
            theme: &'a str,
            duration: &'a str,
            completed_days: usize,
            total_days: usize,
            percent: u8,
        }

        let rows: Vec<Row> = catalog::paths()
            .iter()
            .map(|path| {
                let view = engine::derive(&path.sessions, &store.load(&path.id));
                Row {
                    id: &path.id,
                    title: &path.title,
                    theme: &path.theme,
                    duration: &path.duration_label,
                    completed_days: view.completed_count,
                    total_days: view.total_count,
                    percent: view.percent,
                }
            })
            .collect();
        return print_json(&rows);
    }

    let rows: Vec<Vec<String>> = catalog::paths()
        .iter()
        .map(|path| {
            let view = engine::derive(&path.sessions, &store.load(&path.id));
            vec![
                path.id.clone(),
                path.title.clone(),
                path.theme.clone(),
                path.duration_label.clone(),
                format!("{}/{} ({}%)", view.completed_count, view.total_count, view.percent),
            ]
        })
        .collect();
    print_table(&["ID", "TITLE", "THEME", "DURATION", "PROGRESS"], &rows);
    Ok(())
}
