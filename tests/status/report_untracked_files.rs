use crate::common::command::{init_repository_dir, run_sprig_command, status_section, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn untracked_section(status: &str) -> Vec<String> {
    status_section(status, "Untracked Files")
}

#[rstest]
fn list_untracked_files_in_name_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    for path in ["b.txt", "a/new.txt", "c/d/e.txt"] {
        write_file(FileSpec::new(dir.join(path), path.to_string()));
    }

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert_eq!(
        untracked_section(&status),
        vec!["a/new.txt", "b.txt", "c/d/e.txt"]
    );

    Ok(())
}

#[rstest]
fn file_marked_for_removal_and_recreated_is_untracked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "back".to_string()));

    let status = stdout_of(&mut run_sprig_command(dir, &["status"]));
    assert!(status.contains("=== Removed Files ===\n1.txt\n\n"));
    assert_eq!(untracked_section(&status), vec!["1.txt"]);

    Ok(())
}
