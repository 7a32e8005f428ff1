//! Stored object types
//!
//! The object database holds two kinds of immutable records, each addressed by
//! an opaque 40-character identifier:
//!
//! - **Blob**: one file's content at the time it was staged
//! - **Commit**: a snapshot of the tracked file set plus message, timestamp
//!   and parent linkage
//!
//! Both serialize to the `<type> <size>\0<content>` record format.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of an object identifier in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object identifier
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
