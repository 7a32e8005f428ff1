//! Value types and algorithms
//!
//! - `branch`: branch names, the branch table and commit id resolution
//! - `checkout`: planning the materialization of a commit
//! - `core`: shared output utilities (pager wrapper)
//! - `index`: binary layout of the index file
//! - `log`: commit history traversal
//! - `merge`: split point search, three-way resolution and conflict files
//! - `objects`: object types (blob, commit) and identifiers
//! - `status`: working tree status

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
