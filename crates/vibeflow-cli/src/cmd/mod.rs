pub mod continue_path;
pub mod dashboard;
pub mod list;
pub mod reset;
pub mod show;
pub mod toggle;

use vibeflow_core::path::DailySession;

/// Render one session's full content: lesson, practice, affirmation.
pub(crate) fn print_session(session: &DailySession) {
    println!("Day {} — {}", session.day, session.title);
    println!();
    println!("{}", session.lesson);
    println!();
    println!("Practice ({}):", session.practice_type.label());
    println!("{}", session.practice_details);
    println!();
    println!("Affirmation: \"{}\"", session.affirmation);
}
