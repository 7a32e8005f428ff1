use crate::common::command::{init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("missing.txt")]
#[case("../outside.txt")]
#[case(".sprig/index")]
fn add_missing_file_fails(
    init_repository_dir: TempDir,
    #[case] path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sprig_command(init_repository_dir.path(), &["add", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist."));

    Ok(())
}
