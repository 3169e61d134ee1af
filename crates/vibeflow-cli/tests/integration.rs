use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vibeflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vibeflow").unwrap();
    cmd.current_dir(dir.path())
        .env("VIBEFLOW_DATA_DIR", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// vibeflow list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_catalog() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("anxiety-management"))
        .stdout(predicate::str::contains("Gratitude Pathway"))
        .stdout(predicate::str::contains("0/3 (0%)"));
}

#[test]
fn list_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = vibeflow(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 15);
    assert!(rows.iter().any(|r| r["id"] == "cbt-starter"));
}

// ---------------------------------------------------------------------------
// vibeflow show
// ---------------------------------------------------------------------------

#[test]
fn show_fresh_path_locks_later_days() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["show", "anxiety-management"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 / 3 days complete"))
        .stdout(predicate::str::contains(
            "Day 2 — Mindful Body Scan (Meditation)  (locked)",
        ))
        .stdout(predicate::str::contains("Understanding Your Anxiety"));
}

#[test]
fn show_unknown_path_fails() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["show", "no-such-path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn show_tolerates_corrupt_progress_record() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("therapy-path-progress-anxiety-management"),
        "not json",
    )
    .unwrap();

    vibeflow(&dir)
        .args(["show", "anxiety-management"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 / 3 days complete"));
}

// ---------------------------------------------------------------------------
// vibeflow toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_walkthrough_updates_percent_and_record() {
    let dir = TempDir::new().unwrap();

    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 marked complete."))
        .stdout(predicate::str::contains("1 / 3 days (33%)"))
        .stdout(predicate::str::contains("Next up: day 2."));

    let record = dir.path().join("therapy-path-progress-anxiety-management");
    assert_eq!(std::fs::read_to_string(&record).unwrap(), "[1]");

    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 / 3 days (67%)"));

    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 / 3 days (100%)"))
        .stdout(predicate::str::contains("Congratulations"));
}

#[test]
fn toggle_twice_round_trips() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "gratitude-pathway", "1"])
        .assert()
        .success();
    vibeflow(&dir)
        .args(["toggle", "gratitude-pathway", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 marked incomplete."))
        .stdout(predicate::str::contains("0 / 3 days (0%)"));

    let record = dir.path().join("therapy-path-progress-gratitude-pathway");
    assert_eq!(std::fs::read_to_string(&record).unwrap(), "[]");
}

#[test]
fn toggle_locked_day_is_refused() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("day 3 is locked"));

    // Nothing was written.
    assert!(!dir
        .path()
        .join("therapy-path-progress-anxiety-management")
        .exists());
}

#[test]
fn toggle_day_outside_path_is_refused() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "mindfulness-foundations", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no day 2"));
}

// ---------------------------------------------------------------------------
// vibeflow continue
// ---------------------------------------------------------------------------

#[test]
fn continue_points_at_first_incomplete_day() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success();

    vibeflow(&dir)
        .args(["continue", "anxiety-management"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2 — Mindful Body Scan"))
        .stdout(predicate::str::contains(
            "My body is my anchor to the present moment.",
        ));
}

#[test]
fn continue_on_finished_path_congratulates() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "mindfulness-foundations", "1"])
        .assert()
        .success();

    vibeflow(&dir)
        .args(["continue", "mindfulness-foundations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations"));
}

// ---------------------------------------------------------------------------
// vibeflow dashboard
// ---------------------------------------------------------------------------

#[test]
fn dashboard_groups_paths() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success();
    vibeflow(&dir)
        .args(["toggle", "mindfulness-foundations", "1"])
        .assert()
        .success();

    let output = vibeflow(&dir)
        .args(["dashboard", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(groups["in_progress"][0]["id"], "anxiety-management");
    assert_eq!(groups["in_progress"][0]["percent"], 33);
    assert_eq!(groups["completed"][0]["id"], "mindfulness-foundations");
    assert_eq!(groups["not_started"].as_array().unwrap().len(), 13);
}

#[test]
fn dashboard_renders_theme_sections() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("Explore"))
        .stdout(predicate::str::contains("Anxiety"))
        .stdout(predicate::str::contains("Spiritual & Inner Growth"));
}

// ---------------------------------------------------------------------------
// vibeflow reset
// ---------------------------------------------------------------------------

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success();

    vibeflow(&dir)
        .args(["reset", "anxiety-management"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    // Still there.
    assert!(dir
        .path()
        .join("therapy-path-progress-anxiety-management")
        .exists());
}

#[test]
fn reset_one_path() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success();

    vibeflow(&dir)
        .args(["reset", "anxiety-management", "--yes"])
        .assert()
        .success();

    vibeflow(&dir)
        .args(["show", "anxiety-management"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 / 3 days complete"));
}

#[test]
fn reset_all_removes_progress_and_sibling_data() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["toggle", "anxiety-management", "1"])
        .assert()
        .success();
    vibeflow(&dir)
        .args(["toggle", "gratitude-pathway", "1"])
        .assert()
        .success();
    std::fs::write(dir.path().join("favoriteAffirmations"), "[\"aff-1\"]").unwrap();
    std::fs::write(dir.path().join("vibeflow_user_alias"), "CalmOtter42").unwrap();

    vibeflow(&dir)
        .args(["reset", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All local data erased."));

    assert!(!dir
        .path()
        .join("therapy-path-progress-anxiety-management")
        .exists());
    assert!(!dir
        .path()
        .join("therapy-path-progress-gratitude-pathway")
        .exists());
    assert!(!dir.path().join("favoriteAffirmations").exists());
    assert!(!dir.path().join("vibeflow_user_alias").exists());
}

#[test]
fn reset_rejects_conflicting_arguments() {
    let dir = TempDir::new().unwrap();
    vibeflow(&dir)
        .args(["reset", "anxiety-management", "--all", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not both"));
}
