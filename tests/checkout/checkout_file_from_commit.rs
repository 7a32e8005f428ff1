use crate::common::command::{
    commit_file, commit_id_of, init_repository_dir, run_sprig_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_head_discards_working_changes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a/2.txt"), "scribbles".to_string()));

    run_sprig_command(dir, &["checkout", "--", "a/2.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&dir.join("a/2.txt")), "two");

    Ok(())
}

#[rstest]
#[case::full_id(40)]
#[case::short_id(8)]
#[case::minimum_prefix(4)]
fn checkout_file_from_earlier_commit(
    init_repository_dir: TempDir,
    #[case] id_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let initial = commit_id_of(dir, "Initial commit");
    commit_file(dir, "1.txt", "uno", "Translate");

    run_sprig_command(dir, &["checkout", &initial[..id_length], "--", "1.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("1.txt")), "one");

    // the staging area is untouched, so the file now shows as modified
    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("1.txt (modified)"));

    Ok(())
}

#[rstest]
#[case::unknown_id(&["checkout", "0123456789abcdef0123456789abcdef01234567", "--", "1.txt"], "No commit with that id exists.")]
#[case::not_hex(&["checkout", "zzzzzzzz", "--", "1.txt"], "No commit with that id exists.")]
#[case::missing_file(&["checkout", "--", "nope.txt"], "File does not exist in that commit.")]
fn checkout_file_failures(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sprig_command(init_repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    Ok(())
}
