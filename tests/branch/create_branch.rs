use crate::common::command::{
    commit_file, commit_id_of, init_repository_dir, log_ids, run_sprig_command, status_section,
    stdout_of,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_head_without_switching(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", "feature/login"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert_eq!(
        status_section(&status, "Branches"),
        vec!["feature/login", "*main"]
    );

    // new commits advance only the current branch
    commit_file(dir, "1.txt", "main only", "Main only");
    run_sprig_command(dir, &["checkout", "feature/login"])
        .assert()
        .success();
    assert_eq!(log_ids(dir)[0], commit_id_of(dir, "Initial commit"));

    Ok(())
}

#[rstest]
fn create_duplicate_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));

    Ok(())
}

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("ends.lock")]
#[case("with space")]
#[case("glob*")]
fn create_branch_with_invalid_name_fails(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sprig_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}
