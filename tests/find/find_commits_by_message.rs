use crate::common::command::{commit_file, find_commit_ids, log_ids, repository_dir, run_sprig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn find_returns_every_commit_with_the_message(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_sprig_command(dir, &["init"]).assert().success();

    commit_file(dir, "a.txt", "1", "Tweak");
    commit_file(dir, "a.txt", "2", "Tweak");
    commit_file(dir, "a.txt", "3", "Tweak again");

    let mut expected = log_ids(dir)[1..3].to_vec();
    expected.sort();

    // ids come out in store order
    assert_eq!(find_commit_ids(dir, "Tweak"), expected);

    Ok(())
}

#[rstest]
#[case("No such message")]
#[case("Tweak ")]
#[case("tweak")]
fn find_without_exact_match_fails(
    repository_dir: TempDir,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_sprig_command(dir, &["init"]).assert().success();
    commit_file(dir, "a.txt", "1", "Tweak");

    run_sprig_command(dir, &["find", message])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found no commit with that message."));

    Ok(())
}
