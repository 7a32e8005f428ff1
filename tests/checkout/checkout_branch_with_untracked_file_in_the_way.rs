use crate::common::command::{commit_file, init_repository_dir, run_sprig_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_with_untracked_file_in_the_way(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", "feature"]).assert().success();
    run_sprig_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "shared.txt", "from feature", "Add shared");
    run_sprig_command(dir, &["checkout", "main"]).assert().success();

    write_file(FileSpec::new(dir.join("shared.txt"), "precious".to_string()));
    let status_before = stdout_of(&mut run_sprig_command(dir, &["status"]));

    run_sprig_command(dir, &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    // nothing changed: same branch, same files
    assert_eq!(read_file(&dir.join("shared.txt")), "precious");
    assert_eq!(
        stdout_of(&mut run_sprig_command(dir, &["status"])),
        status_before
    );

    Ok(())
}
