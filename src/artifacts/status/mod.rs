//! Working tree status
//!
//! - `file_change`: unstaged change kinds
//! - `status_info`: the status report of a repository

pub mod file_change;
pub mod status_info;
