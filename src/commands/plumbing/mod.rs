//! Internal operations shared by porcelain commands
//!
//! - `write_commit`: turn the staging area into a new commit (commit, merge)
//! - `materialize`: replace the working directory with a commit's files
//!   (checkout of a branch, reset, fast-forward merge)

mod materialize;
mod write_commit;
