use crate::common::command::{init_repository_dir, run_sprig_command, sprig_commit, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_tracked_file_stages_removal(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["rm", "a/b/3.txt"])
        .assert()
        .success();

    assert!(!dir.join("a/b/3.txt").exists());
    // the emptied directory is pruned, its parent still holds a/2.txt
    assert!(!dir.join("a/b").exists());
    assert!(dir.join("a/2.txt").is_file());

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(status.contains("=== Removed Files ===\na/b/3.txt\n\n"));
    assert!(status.contains("=== Modifications Not Staged For Commit ===\n\n"));

    sprig_commit(dir, "Remove 3.txt").assert().success();

    run_sprig_command(dir, &["checkout", "--", "a/b/3.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));

    Ok(())
}
