//! Object database
//!
//! Write-once, read-many storage for blobs and commits. Records are
//! partitioned by kind (`blobs/`, `commits/`) and addressed by their opaque
//! identifier; every record is zlib-compressed and written through a
//! temporary file that is renamed into place. Existing records are never
//! overwritten or removed.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn kind_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.dir_name())
    }

    /// Store file content under a newly generated identifier
    pub fn store_blob(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let oid = ObjectId::generate();
        self.store(&oid, blob)?;

        tracing::debug!(%oid, size = blob.content().len(), "stored blob");
        Ok(oid)
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_object_as_bytes(oid, ObjectType::Blob)?;
        Blob::deserialize(object_reader)
    }

    /// Store a commit record under its own identifier
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        self.store(commit.oid(), commit)?;

        tracing::debug!(oid = %commit.oid(), parents = commit.parents().len(), "stored commit");
        Ok(commit.oid().clone())
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as_bytes(oid, ObjectType::Commit)?;
        Commit::deserialize(object_reader)
            .with_context(|| format!("Unable to parse commit {}", oid))
    }

    pub fn has_commit(&self, oid: &ObjectId) -> bool {
        self.kind_path(ObjectType::Commit)
            .join(oid.to_path())
            .is_file()
    }

    /// Enumerate every stored commit identifier, in directory order
    pub fn list_commit_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
        let commits_path = self.kind_path(ObjectType::Commit);
        if !commits_path.exists() {
            return Ok(Vec::new());
        }

        WalkDir::new(&commits_path)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().to_string();
                let dir_name = entry
                    .path()
                    .parent()?
                    .file_name()?
                    .to_string_lossy()
                    .to_string();
                // temp files share the directory but never parse as ids
                ObjectId::try_parse(format!("{dir_name}{file_name}")).ok()
            })
            .map(Ok)
            .collect()
    }

    /// Find all commits whose id starts with the given prefix
    pub fn find_commits_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .list_commit_ids()?
            .into_iter()
            .filter(|oid| oid.starts_with(prefix))
            .collect())
    }

    fn store(&self, oid: &ObjectId, object: &impl Object) -> anyhow::Result<()> {
        let object_path = self.kind_path(object.object_type()).join(oid.to_path());

        // records are immutable: a second write under the same id is a no-op
        if object_path.exists() {
            return Ok(());
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)
    }

    fn parse_object_as_bytes(
        &self,
        oid: &ObjectId,
        expected: ObjectType,
    ) -> anyhow::Result<impl BufRead> {
        let object_path = self.kind_path(expected).join(oid.to_path());
        if !object_path.is_file() {
            return Err(RepositoryError::ObjectNotFound {
                kind: expected,
                oid: oid.clone(),
            }
            .into());
        }

        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;
        if object_type != expected {
            anyhow::bail!("object {} is a {}, not a {}", oid, object_type, expected);
        }

        Ok(object_reader)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

/// Memoizes slim commits for graph traversals that revisit the same ancestry
#[derive(Debug, Default)]
pub struct CommitCache {
    slim_commits: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load_slim_commit(
        &self,
        database: &Database,
        oid: &ObjectId,
    ) -> anyhow::Result<SlimCommit> {
        if let Some(slim_commit) = self.slim_commits.borrow().get(oid) {
            return Ok(slim_commit.clone());
        }

        let slim_commit = database.load_commit(oid)?.slim();
        self.slim_commits
            .borrow_mut()
            .insert(oid.clone(), slim_commit.clone());

        Ok(slim_commit)
    }
}
