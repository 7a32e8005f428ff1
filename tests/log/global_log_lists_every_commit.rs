use crate::common::command::{
    commit_file, commit_id_of, repository_dir, run_sprig_command, stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn global_log_lists_every_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_sprig_command(dir, &["init"]).assert().success();

    commit_file(dir, "a.txt", "a", "On main");
    run_sprig_command(dir, &["branch", "other"]).assert().success();
    run_sprig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "b.txt", "b", "On other");
    // unreachable from every branch after the reset
    commit_file(dir, "c.txt", "c", "Dropped");
    let on_other = commit_id_of(dir, "On other");
    run_sprig_command(dir, &["reset", &on_other]).assert().success();

    let expected = ["initial commit", "On main", "On other", "Dropped"]
        .iter()
        .map(|message| commit_id_of(dir, message))
        .collect::<BTreeSet<_>>();

    let output = stdout_of(&mut run_sprig_command(dir, &["global-log"]));
    let actual = output
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect::<BTreeSet<_>>();

    assert_eq!(actual, expected);
    assert_eq!(output.matches("===\n").count(), 4);

    Ok(())
}
