use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Fixed commit date so log output is reproducible
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
pub const READABLE_COMMIT_DATE: &str = "Sun Jan 1 12:00:00 2023 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with one commit tracking `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_sprig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = [
        ("1.txt", "one"),
        ("a/2.txt", "two"),
        ("a/b/3.txt", "three"),
    ];
    for (path, content) in files {
        write_file(FileSpec::new(
            repository_dir.path().join(path),
            content.to_string(),
        ));
        run_sprig_command(repository_dir.path(), &["add", path])
            .assert()
            .success();
    }

    sprig_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_sprig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sprig").expect("Failed to find sprig binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn sprig_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_sprig_command(dir, &["commit", message]);
    cmd.env("SPRIG_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Write a file, stage it and commit it
pub fn commit_file(dir: &Path, path: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(path), content.to_string()));
    run_sprig_command(dir, &["add", path]).assert().success();
    sprig_commit(dir, message).assert().success();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}

/// Ids of the commits whose message is exactly `message`
pub fn find_commit_ids(dir: &Path, message: &str) -> Vec<String> {
    stdout_of(&mut run_sprig_command(dir, &["find", message]))
        .lines()
        .map(str::to_string)
        .collect()
}

/// Id of the only commit with the given message
pub fn commit_id_of(dir: &Path, message: &str) -> String {
    let ids = find_commit_ids(dir, message);
    assert_eq!(ids.len(), 1, "expected one commit named {message:?}");
    ids[0].clone()
}

/// Ids printed by `log`, most recent first
pub fn log_ids(dir: &Path) -> Vec<String> {
    stdout_of(&mut run_sprig_command(dir, &["log"]))
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

/// Lines listed under one `=== <title> ===` section of `status`
pub fn status_section(status: &str, title: &str) -> Vec<String> {
    status
        .split(&format!("=== {title} ===\n"))
        .nth(1)
        .unwrap_or_default()
        .lines()
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
