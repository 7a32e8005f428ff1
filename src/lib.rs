//! sprig: a local, single-user version-control engine
//!
//! The crate is split the same way the on-disk repository is:
//!
//! - `areas`: stateful components (object database, index, workspace) and the
//!   `Repository` that coordinates them
//! - `artifacts`: value types and algorithms (objects, branches, checkout
//!   planning, merge resolution, history traversal, status)
//! - `commands`: user-facing operations, each implemented on `Repository`
//! - `errors`: user-facing error classes

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the repository metadata directory inside the working directory
pub const REPOSITORY_DIR: &str = ".sprig";
