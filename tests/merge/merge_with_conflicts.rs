use crate::common::command::{
    commit_file, commit_id_of, log_ids, repository_dir, run_sprig_command, sprig_commit,
    stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_with_conflicting_edits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_sprig_command(dir, &["init"]).assert().success();

    commit_file(dir, "f.txt", "base", "Base");
    run_sprig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "f.txt", "A", "Current edit");
    run_sprig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "f.txt", "B", "Given edit");
    run_sprig_command(dir, &["checkout", "main"]).assert().success();

    let output = stdout_of(&mut run_sprig_command(dir, &["merge", "other"]));

    assert_eq!(output, "Encountered a merge conflict.\n");
    assert_eq!(
        read_file(&dir.join("f.txt")),
        "<<<<<<< HEAD\nA\n=======\nB\n>>>>>>>\n"
    );

    // the merge commit is still created, with both heads as parents
    let merge = commit_id_of(dir, "Merged other into main.");
    let current = commit_id_of(dir, "Current edit");
    let given = commit_id_of(dir, "Given edit");
    assert_eq!(log_ids(dir)[..2], [merge, current.clone()]);
    let log = stdout_of(&mut run_sprig_command(dir, &["log"]));
    assert!(log.contains(&format!("Merge: {} {}\n", &current[..7], &given[..7])));

    Ok(())
}

#[rstest]
fn merge_with_edit_against_deletion(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_sprig_command(dir, &["init"]).assert().success();

    commit_file(dir, "f.txt", "base\n", "Base");
    run_sprig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "f.txt", "edited\n", "Current edit");
    run_sprig_command(dir, &["checkout", "other"]).assert().success();
    run_sprig_command(dir, &["rm", "f.txt"]).assert().success();
    sprig_commit(dir, "Given delete").assert().success();
    run_sprig_command(dir, &["checkout", "main"]).assert().success();

    let output = stdout_of(&mut run_sprig_command(dir, &["merge", "other"]));

    assert_eq!(output, "Encountered a merge conflict.\n");
    assert_eq!(
        read_file(&dir.join("f.txt")),
        "<<<<<<< HEAD\nedited\n=======\n>>>>>>>\n"
    );

    Ok(())
}
