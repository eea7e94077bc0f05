//! End-to-end coverage of the CLI subcommands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STORY: &str = "\
#!STORY
# A tiny two-room adventure.
R1: The Fork
Pick a path.
;;;
: Go home -> 2

R2: Home
Safe at last.
;;;
SUCCESS
";

const WEIGHTED_STORY: &str = "\
#!STORY
R1: The Fork
The ground shifts; no time to choose.
;;;
: Run -> 2 ? 1
: Walk -> 2 ? 1

R2: Home
Safe at last.
;;;
SUCCESS
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn pw() -> Command {
    Command::cargo_bin("pw").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_story_shape() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);

    pw().arg("check")
        .arg(&story)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rooms, 2 transitions, 1 endings"))
        .stdout(predicate::str::contains("Start room: 1"));
}

#[test]
fn check_rejects_unknown_header() {
    let dir = TempDir::new().unwrap();
    let odd = write(&dir, "odd.txt", "#!NOVEL\nR1: Hall\n;;;\nSUCCESS\n");

    pw().arg("check")
        .arg(&odd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not correspond to known value"));
}

#[test]
fn check_reports_parse_position() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.story", "#!STORY\nR1: Hall\n;;;\nnot a transition\n");

    pw().arg("check")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error parsing file on line: 3: not a transition",
        ));
}

#[test]
fn check_follows_bookmarks() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);
    let bookmark = write(
        &dir,
        "progress.bm",
        &format!("#!BOOKMARK\n{}\n2\n", story.display()),
    );

    pw().arg("check")
        .arg(&bookmark)
        .assert()
        .success()
        .stdout(predicate::str::contains("Start room: 2"));
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_a_playable_story() {
    let dir = TempDir::new().unwrap();

    pw().args(["init", "maiden"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created story 'maiden.story'"));

    let story = dir.path().join("maiden.story");
    assert!(story.exists());

    pw().arg("check").arg(&story).assert().success();
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    pw().args(["init", "maiden"])
        .current_dir(dir.path())
        .assert()
        .success();
    pw().args(["init", "maiden"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_terminal_room_ends_the_run() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "end.story", "#!STORY\nR1: Home\nAlready there.\n;;;\nSUCCESS\n");

    pw().arg("play")
        .arg(&story)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to this choose your own adventure system!"))
        .stdout(predicate::str::contains(
            "Congratulations! You successfully completed the adventure!",
        ))
        .stdout(predicate::str::contains("Thank you for playing!"));
}

#[test]
fn play_follows_a_manual_choice() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);

    pw().arg("play")
        .arg(&story)
        .write_stdin("0\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0) Go home"))
        .stdout(predicate::str::contains("Safe at last."))
        .stdout(predicate::str::contains(
            "Congratulations! You successfully completed the adventure!",
        ));
}

#[test]
fn play_weighted_room_resolves_without_a_prompt() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "auto.story", WEIGHTED_STORY);

    pw().arg("play")
        .arg(&story)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safe at last."))
        .stdout(predicate::str::contains("Choose: ").not());
}

#[test]
fn play_confirmed_quit_fails_the_adventure() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);

    pw().arg("play")
        .arg(&story)
        .write_stdin("-1\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to quit the adventure?",
        ))
        .stdout(predicate::str::contains(
            "You failed to complete the adventure. Better luck next time!",
        ));
}

#[test]
fn play_saves_a_bookmark_and_continues() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);

    pw().arg("play")
        .arg(&story)
        .current_dir(dir.path())
        .write_stdin("-2\nprogress.bm\n0\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarking current location: 1."))
        .stdout(predicate::str::contains("Bookmark saved in progress.bm"));

    let saved = fs::read_to_string(dir.path().join("progress.bm")).unwrap();
    assert_eq!(saved, format!("#!BOOKMARK\n{}\n1\n", story.display()));
}

#[test]
fn play_resumes_from_a_bookmark() {
    let dir = TempDir::new().unwrap();
    let story = write(&dir, "fork.story", STORY);
    let bookmark = write(
        &dir,
        "progress.bm",
        &format!("#!BOOKMARK\n{}\n2\n", story.display()),
    );

    // Room 2 is terminal, so resuming there wins immediately.
    pw().arg("play")
        .arg(&bookmark)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safe at last."))
        .stdout(predicate::str::contains(
            "Congratulations! You successfully completed the adventure!",
        ));
}

#[test]
fn play_rejects_an_unknown_header() {
    let dir = TempDir::new().unwrap();
    let odd = write(&dir, "odd.txt", "#!NOVEL\n");

    pw().arg("play")
        .arg(&odd)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not correspond to known value"));
}
