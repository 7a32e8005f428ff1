//! Core repository components
//!
//! - `database`: write-once storage for blobs and commits
//! - `index`: staging area, head pointer and branch table
//! - `repository`: high-level coordination of the other areas
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod repository;
pub mod workspace;
