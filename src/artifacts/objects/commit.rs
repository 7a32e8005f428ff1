//! Commit object
//!
//! Commits represent snapshots of the tracked file set at specific points in
//! time. They contain:
//! - Their own identifier
//! - A creation timestamp
//! - Parent commit ID(s): none for the root, two for merge commits
//! - A mapping from tracked path to blob ID
//! - A message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! id <commit-id>
//! timestamp <unix-seconds> <timezone>
//! parent <parent-id>
//! file <blob-id> <path>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SubsecRound, TimeZone};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Message of the root commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "SPRIG_COMMIT_DATE";

/// Mapping from tracked path to the blob holding its content
pub type FileMap = BTreeMap<PathBuf, ObjectId>;

/// Slim representation of a commit
///
/// Contains only what graph traversal needs: identity, parents and timestamp.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
    pub timestamp: DateTime<FixedOffset>,
}

impl PartialOrd for SlimCommit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlimCommit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    oid: ObjectId,
    /// Empty for the root commit, two entries for merge commits
    parents: Vec<ObjectId>,
    files: FileMap,
    timestamp: DateTime<FixedOffset>,
    message: String,
}

impl Commit {
    /// Create a new commit with a freshly generated identifier
    pub fn new(
        parents: Vec<ObjectId>,
        files: FileMap,
        message: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Commit {
            oid: ObjectId::generate(),
            parents,
            files,
            timestamp,
            message,
        }
    }

    /// The root commit: fixed id, epoch timestamp, no files
    pub fn root() -> Self {
        let epoch = FixedOffset::east_opt(0)
            .and_then(|utc| utc.timestamp_opt(0, 0).single())
            .unwrap_or_default();

        Commit {
            oid: ObjectId::root(),
            parents: Vec::new(),
            files: FileMap::new(),
            timestamp: epoch,
            message: ROOT_COMMIT_MESSAGE.to_string(),
        }
    }

    /// Timestamp for a new commit
    ///
    /// Reads `SPRIG_COMMIT_DATE` (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) and falls
    /// back to the current local time. Records keep whole seconds, so the
    /// result is truncated to match what is read back.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
            .trunc_subsecs(0)
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Format timestamp like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn slim(&self) -> SlimCommit {
        SlimCommit {
            oid: self.oid.clone(),
            parents: self.parents.clone(),
            timestamp: self.timestamp,
        }
    }

    fn body_lines(&self) -> Vec<String> {
        let mut lines = vec![];

        lines.push(format!("id {}", self.oid));
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for parent in &self.parents {
            lines.push(format!("parent {}", parent));
        }
        for (path, blob_oid) in &self.files {
            lines.push(format!("file {} {}", blob_oid, path.display()));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines
    }
}

fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, timezone) = value
        .split_once(' ')
        .context("Invalid commit object: malformed timestamp line")?;
    let seconds = seconds
        .parse::<i64>()
        .context("Invalid commit object: timestamp is not a number")?;

    if timezone.len() != 5 || !timezone[1..].chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Invalid commit object: bad timezone {timezone}");
    }
    let sign = match &timezone[..1] {
        "+" => 1,
        "-" => -1,
        _ => anyhow::bail!("Invalid commit object: bad timezone {timezone}"),
    };
    let hours = timezone[1..3].parse::<i32>()?;
    let minutes = timezone[3..5].parse::<i32>()?;

    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .context("Invalid commit object: timezone out of range")?;

    offset
        .timestamp_opt(seconds, 0)
        .single()
        .context("Invalid commit object: timestamp out of range")
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let object_content = self.body_lines().join("\n");
        self.frame(object_content.as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;
        let mut lines = header.lines();

        let oid = lines
            .next()
            .and_then(|line| line.strip_prefix("id "))
            .context("Invalid commit object: missing id line")?;
        let oid = ObjectId::try_parse(oid.to_string())?;

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = parse_timestamp(timestamp)?;

        let mut parents = Vec::new();
        let mut files = FileMap::new();
        for line in lines {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(entry) = line.strip_prefix("file ") {
                let (blob_oid, path) = entry
                    .split_once(' ')
                    .context("Invalid commit object: malformed file line")?;
                files.insert(
                    PathBuf::from(path),
                    ObjectId::try_parse(blob_oid.to_string())?,
                );
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        Ok(Commit {
            oid,
            parents,
            files,
            timestamp,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
