//! Merge engine
//!
//! - `split_point`: locate the best common ancestor of two commits
//! - `resolution`: classify every path by comparing split, current and given
//! - `conflict`: render the conflict file written for contested paths

pub mod conflict;
pub mod resolution;
pub mod split_point;

/// Outcome reported when the given branch is already contained in the current one
pub const ANCESTOR_MESSAGE: &str = "Given branch is an ancestor of the current branch.";

/// Outcome reported when the current branch was moved onto the given branch
pub const FAST_FORWARD_MESSAGE: &str = "Current branch fast-forwarded.";

/// Warning printed when at least one path had to be written as a conflict file
pub const CONFLICT_MESSAGE: &str = "Encountered a merge conflict.";

pub fn merge_commit_message(given: &str, current: &str) -> String {
    format!("Merged {given} into {current}.")
}
