//! Index file format
//!
//! ```text
//! Header (8 bytes):
//!   - Signature: "SPIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!
//! Body:
//!   - Head commit id (20 bytes)
//!   - Current branch name (u16 length + bytes)
//!   - Branch table: u32 count, then name + 20-byte commit id per branch
//!   - Committed mapping: u32 count, then path + 20-byte blob id per file
//!   - Staged mapping: same layout as the committed mapping
//!   - Removal set: u32 count, then one path per entry
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;
pub mod index_header;
pub mod index_record;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 8; // 4 bytes for marker, 4 for version

/// Magic signature identifying index files
pub const SIGNATURE: &str = "SPIX";

/// Index file format version
pub const VERSION: u32 = 1;
