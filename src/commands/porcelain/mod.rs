//! User-facing commands
//!
//! Every command runs against the index loaded from disk, validates all of
//! its preconditions, and writes the index back once as its last action.
//!
//! ## Commands
//!
//! - `init`: create a repository with the root commit on `main`
//! - `add`, `rm`: stage a file for addition or removal
//! - `commit`: record the staging area as a new commit
//! - `log`, `global-log`, `find`: inspect history
//! - `status`: branches, staging area and working directory changes
//! - `checkout`: restore a file, or switch branches
//! - `branch`, `rm-branch`: create or delete branch pointers
//! - `reset`: move the current branch to another commit
//! - `merge`: three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
