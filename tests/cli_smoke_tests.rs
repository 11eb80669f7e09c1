use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finsight_cli").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("FINSIGHT_CONFIG", config_dir.path().join("config.json"));
    cmd
}

#[test]
fn report_prints_dashboard_and_advice() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("₹75,000"))
        .stdout(contains("₹4,800"))
        .stdout(contains("93.6%"))
        .stdout(contains("Good Habit"))
        .stdout(contains("Great Savings Rate!"))
        .stdout(contains("Build an Emergency Fund"))
        .stdout(contains("Almost there! Stay focused."));
}

#[test]
fn report_in_telugu() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["report", "--lang", "te"])
        .assert()
        .success()
        .stdout(contains("గొప్ప పొదుపు రేటు!"))
        .stdout(contains("ఆహారం"));
}

#[test]
fn config_language_is_the_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "language": "te" }"#).unwrap();
    cli(&dir)
        .arg("lessons")
        .assert()
        .success()
        .stdout(contains("బడ్జెట్ ఎలా చేయాలి"));
}

#[test]
fn lessons_lists_catalog() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("lessons")
        .assert()
        .success()
        .stdout(contains("How to Budget"))
        .stdout(contains("How to Save Money"))
        .stdout(contains("Understanding Credit"));
}

#[test]
fn unknown_lesson_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["quiz", "42"])
        .assert()
        .failure()
        .stderr(contains("Lesson not found: 42"));
}

#[test]
fn bad_input_prints_usage_or_reason() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("dance")
        .assert()
        .failure()
        .stderr(contains("Usage"));
    cli(&dir)
        .args(["report", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(contains("unsupported language").and(contains("fr")));
}
