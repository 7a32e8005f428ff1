use crate::common::command::{init_repository_dir, run_sprig_command, status_section, stdout_of};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn unstaged_section(status: &str) -> Vec<String> {
    status_section(status, "Modifications Not Staged For Commit")
}

#[rstest]
fn report_deleted_tracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    delete_path(&dir.join("a"));

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert_eq!(
        unstaged_section(&status),
        vec!["a/2.txt (deleted)", "a/b/3.txt (deleted)"]
    );

    Ok(())
}

#[rstest]
fn report_staged_file_changed_after_add(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("new.txt"), "first".to_string()));
    run_sprig_command(dir, &["add", "new.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("new.txt"), "second".to_string()));

    write_file(FileSpec::new(dir.join("gone.txt"), "gone".to_string()));
    run_sprig_command(dir, &["add", "gone.txt"]).assert().success();
    delete_path(&dir.join("gone.txt"));

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert_eq!(
        unstaged_section(&status),
        vec!["gone.txt (deleted)", "new.txt (modified)"]
    );

    Ok(())
}

#[rstest]
fn rewriting_same_content_is_not_a_modification(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(unstaged_section(&status).is_empty());

    Ok(())
}
