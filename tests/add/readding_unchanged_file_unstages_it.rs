use crate::common::command::{init_repository_dir, run_sprig_command, sprig_commit, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn readding_unchanged_file_unstages_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_sprig_command(dir, &["add", "1.txt"]).assert().success();
    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n1.txt\n\n"));

    // back to the committed content
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_sprig_command(dir, &["add", "1.txt"]).assert().success();
    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n\n"));

    sprig_commit(dir, "nothing changed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));

    Ok(())
}

#[rstest]
fn adding_the_same_content_twice_is_idempotent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_sprig_command(dir, &["add", "new.txt"]).assert().success();
    let first = stdout_of(&mut run_sprig_command(dir, &["status"]));

    run_sprig_command(dir, &["add", "new.txt"]).assert().success();
    let second = stdout_of(&mut run_sprig_command(dir, &["status"]));

    assert_eq!(first, second);
    assert!(second.contains("=== Staged Files ===\nnew.txt\n\n"));

    Ok(())
}
