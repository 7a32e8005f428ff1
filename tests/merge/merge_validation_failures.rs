use crate::common::command::{
    commit_file, init_repository_dir, log_ids, run_sprig_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::missing_branch("nope", "A branch with that name does not exist.")]
#[case::same_branch("main", "Cannot merge a branch with itself.")]
fn merge_with_invalid_branch_fails(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sprig_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    Ok(())
}

#[rstest]
fn merge_with_uncommitted_changes_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "staged".to_string()));
    run_sprig_command(dir, &["add", "1.txt"]).assert().success();

    run_sprig_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You have uncommitted changes."));

    Ok(())
}

#[rstest]
fn merge_with_untracked_file_in_the_way_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "main.txt", "main", "Main");
    run_sprig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "shared.txt", "theirs", "Other");
    run_sprig_command(dir, &["checkout", "main"]).assert().success();

    write_file(FileSpec::new(dir.join("shared.txt"), "mine".to_string()));
    let history = log_ids(dir);
    let status_before = stdout_of(&mut run_sprig_command(dir, &["status"]));

    run_sprig_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    assert_eq!(read_file(&dir.join("shared.txt")), "mine");
    assert_eq!(log_ids(dir), history);
    assert_eq!(
        stdout_of(&mut run_sprig_command(dir, &["status"])),
        status_before
    );

    Ok(())
}
