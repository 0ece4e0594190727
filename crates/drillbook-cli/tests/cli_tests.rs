//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn drillbook() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("drillbook").unwrap()
}

#[test]
fn help_output() {
    drillbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive terminal drills for learning Rust",
        ));
}

#[test]
fn version_output() {
    drillbook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("drillbook"));
}

#[test]
fn list_shows_builtin_lessons() {
    drillbook()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("variables"))
        .stdout(predicate::str::contains("functions"))
        .stdout(predicate::str::contains("structs"));
}

#[test]
fn validate_builtin_lessons() {
    drillbook()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("LESSON 1: Variables and Basic Types"))
        .stdout(predicate::str::contains("9 questions"))
        .stdout(predicate::str::contains("All lessons valid."));
}

#[test]
fn run_functions_lesson_with_all_correct_answers() {
    drillbook()
        .args(["run", "--lesson", "functions", "--no-pause", "--no-color"])
        .write_stdin("fn\n8\nyes\n4\nloop\n123\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 7 / 7 (100%)"))
        .stdout(predicate::str::contains("PERFECT"));
}

#[test]
fn run_scores_trimmed_case_insensitive_answers() {
    // Same lesson, answers deliberately padded and upper-cased.
    drillbook()
        .args(["run", "--lesson", "functions", "--no-pause", "--no-color"])
        .write_stdin("  FN  \n8\nYES\n4\nLoop\n123\n  yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 7 / 7 (100%)"));
}

#[test]
fn run_with_wrong_answers_shows_the_correct_ones() {
    let wrong = "x\n".repeat(9);
    drillbook()
        .args(["run", "--lesson", "variables", "--no-pause", "--no-color"])
        .write_stdin(wrong)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 9 (0%)"))
        .stdout(predicate::str::contains("The answer is: let"))
        .stdout(predicate::str::contains("Why: "));
}

#[test]
fn run_all_lessons_in_one_session() {
    let wrong = "x\n".repeat(22);
    drillbook()
        .args(["run", "--no-pause", "--no-color"])
        .write_stdin(wrong)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 22 (0%)"))
        .stderr(predicate::str::contains("Complete: 0/22 correct"));
}

#[test]
fn run_with_exhausted_stdin_is_fatal() {
    drillbook()
        .args(["run", "--lesson", "variables", "--no-pause"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input stream closed"));
}

#[test]
fn run_unknown_lesson_id() {
    drillbook()
        .args(["run", "--lesson", "quantum-chromodynamics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown lesson"))
        .stderr(predicate::str::contains("variables"));
}

#[test]
fn run_empty_lesson_filter() {
    drillbook()
        .args(["run", "--lesson", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lessons selected"));
}
