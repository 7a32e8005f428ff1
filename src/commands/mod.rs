//! Command implementations
//!
//! - `plumbing`: internal building blocks shared by several commands
//!   (writing a commit, materializing a commit into the working directory)
//! - `porcelain`: the user-facing commands, one `impl Repository` block each
//!
//! Porcelain commands compose plumbing helpers with the areas of the
//! repository.

pub mod plumbing;
pub mod porcelain;
