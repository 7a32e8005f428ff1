//! User-facing error classes
//!
//! Every operation returns `anyhow::Result`; the errors a user can trigger are
//! raised as `RepositoryError` so the binary prints a precise message and
//! callers can recover the class with `anyhow::Error::downcast_ref`.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("A sprig repository already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized sprig directory.")]
    NotARepository,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("A branch with that name does not exist.")]
    NoSuchBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent,

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("short id {prefix} is ambiguous\nhint: The candidates are:{}", format_candidates(.candidates))]
    AmbiguousCommitId {
        prefix: String,
        candidates: Vec<ObjectId>,
    },

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    #[error("object {kind} {oid} not found")]
    ObjectNotFound { kind: ObjectType, oid: ObjectId },

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("File name {0:?} cannot be tracked.")]
    UnsupportedFileName(String),

    #[error("Incorrect operands.")]
    IncorrectOperands,
}

fn format_candidates(candidates: &[ObjectId]) -> String {
    candidates
        .iter()
        .map(|oid| format!("\nhint:   {} commit", oid.to_short_oid()))
        .collect()
}

/// Check whether an `anyhow` error carries the given user error
pub fn is_error(error: &anyhow::Error, expected: &RepositoryError) -> bool {
    error
        .downcast_ref::<RepositoryError>()
        .is_some_and(|actual| actual == expected)
}
