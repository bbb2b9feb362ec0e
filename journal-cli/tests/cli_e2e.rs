#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn journal_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("journal"));
    cmd.env("JOURNAL_PATH", root.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("JOURNAL_LOG");
    cmd
}

fn json_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let p = entry.unwrap().path();
            if p.is_dir() {
                stack.push(p);
            } else if p.extension().is_some_and(|e| e == "json") {
                out.push(p);
            }
        }
    }
    out
}

#[test]
fn new_with_content_flag_writes_one_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("journal");

    journal_cmd(&root)
        .args(["new", "-c", "first entry", "-t", "work,ideas", "--tags", "late"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal entry saved to"));

    let files = json_files(&root);
    assert_eq!(files.len(), 1);

    // {root}/YYYY/MM/DD/YYYYMMDD-HHMMSS.json
    let rel = files[0].strip_prefix(&root).unwrap();
    let parts: Vec<_> = rel.iter().map(|p| p.to_string_lossy().to_string()).collect();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 2);
    assert_eq!(parts[3], format!("{}{}{}-{}", parts[0], parts[1], parts[2], &parts[3][9..]));
    assert_eq!(parts[3].len(), "YYYYMMDD-HHMMSS.json".len());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(value["content"], "first entry");
    assert_eq!(value["tags"], serde_json::json!(["work", "ideas", "late"]));
    assert!(value["publish_time"].is_string());
    assert!(value["writing_start_time"].is_string());
}

#[test]
fn new_reads_piped_stdin() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("journal");

    journal_cmd(&root)
        .args(["new"])
        .write_stdin("line one\nline two\n")
        .assert()
        .success();

    let files = json_files(&root);
    assert_eq!(files.len(), 1);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(value["content"], "line one\nline two");
    assert_eq!(value["tags"], serde_json::json!([]));
}

#[test]
fn new_interactive_reads_content_and_tags() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("journal");

    journal_cmd(&root)
        .args(["new", "-i"])
        .write_stdin("dear diary\n\n\nmood, weather\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter tags"));

    let files = json_files(&root);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(value["content"], "dear diary");
    assert_eq!(value["tags"], serde_json::json!(["mood", "weather"]));
}

#[test]
fn new_rejects_empty_content() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("journal");

    journal_cmd(&root)
        .args(["new"])
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("journal entry content cannot be empty"));

    assert!(!root.exists());
}

#[test]
fn since_reports_latest_entry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("journal");
    let day = root.join("2020").join("01").join("02");
    fs::create_dir_all(&day).unwrap();
    fs::write(
        day.join("20200102-030405.json"),
        r#"{
  "tags": [],
  "publish_time": "2020-01-02T03:04:05Z",
  "writing_start_time": "2020-01-02T03:00:00Z",
  "content": "old"
}"#,
    )
    .unwrap();
    fs::write(day.join("broken.json"), "not json").unwrap();

    journal_cmd(&root)
        .args(["since"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Last journal entry:")
                .and(predicate::str::contains("years ago")),
        );

    journal_cmd(&root)
        .args(["new", "-c", "fresh"])
        .assert()
        .success();

    journal_cmd(&root)
        .args(["since"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Last journal entry: just now")
                .or(predicate::str::contains("seconds ago")),
        );
}

#[test]
fn since_without_journal_dir_fails() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("missing");

    journal_cmd(&root)
        .args(["since"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("journal directory does not exist"));
}

#[test]
fn since_with_empty_journal_dir_fails() {
    let temp = TempDir::new().unwrap();

    journal_cmd(temp.path())
        .args(["since"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no journal entries found"));
}

#[test]
fn path_prints_configured_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("somewhere");

    journal_cmd(&root)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(root.display().to_string()));

    let flag_root = temp.path().join("flag");
    journal_cmd(&root)
        .args(["path", "--journal-path"])
        .arg(&flag_root)
        .assert()
        .success()
        .stdout(predicate::str::contains(flag_root.display().to_string()));
}
