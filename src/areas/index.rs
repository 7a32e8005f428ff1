//! Index (staging area)
//!
//! The index is the only mutable persisted record of a repository. It
//! describes what the next commit would look like:
//!
//! - `tracked`: the committed path → blob mapping as of the head commit
//! - `staged`: paths staged for addition, with the blob holding their content
//! - `removed`: paths staged for removal
//! - `head`: the current head commit
//! - `branches`/`current_branch`: the branch table and the checked-out branch
//!
//! A path is never both staged and marked for removal, and the branch table
//! always maps the current branch to `head`.
//!
//! The index is read once at the start of an operation and written back once,
//! as the last action of every mutating operation.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_table::BranchTable;
use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::index_record::{
    RecordReader, write_count, write_file_map, write_path_set, write_string,
};
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::commit::{Commit, FileMap};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use fake::rand;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.sprig/index`)
    path: Box<Path>,
    head: ObjectId,
    current_branch: BranchName,
    branches: BranchTable,
    tracked: FileMap,
    staged: FileMap,
    removed: BTreeSet<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Index of a freshly initialized repository: `main` at the given root
    pub fn new(path: Box<Path>, root: ObjectId) -> Self {
        let current_branch = BranchName::default();
        let mut branches = BranchTable::new();
        branches.set(current_branch.clone(), root.clone());

        Index {
            path,
            head: root,
            current_branch,
            branches,
            tracked: FileMap::new(),
            staged: FileMap::new(),
            removed: BTreeSet::new(),
            changed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn head(&self) -> &ObjectId {
        &self.head
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut BranchTable {
        self.changed = true;
        &mut self.branches
    }

    pub fn tracked(&self) -> &FileMap {
        &self.tracked
    }

    pub fn staged(&self) -> &FileMap {
        &self.staged
    }

    pub fn removed(&self) -> &BTreeSet<PathBuf> {
        &self.removed
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.tracked.contains_key(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.staged.contains_key(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    /// Whether anything is staged for addition or removal
    pub fn has_staged_changes(&self) -> bool {
        !self.staged.is_empty() || !self.removed.is_empty()
    }

    /// Stage a path for addition with the blob holding its content
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) {
        self.removed.remove(&path);
        self.staged.insert(path, oid);
        self.changed = true;
    }

    /// Drop a path from the staging-addition map, returning its blob if staged
    pub fn unstage(&mut self, path: &Path) -> Option<ObjectId> {
        let unstaged = self.staged.remove(path);
        self.changed |= unstaged.is_some();
        unstaged
    }

    pub fn mark_removed(&mut self, path: PathBuf) {
        self.staged.remove(&path);
        self.removed.insert(path);
        self.changed = true;
    }

    pub fn unmark_removed(&mut self, path: &Path) -> bool {
        let unmarked = self.removed.remove(path);
        self.changed |= unmarked;
        unmarked
    }

    /// File mapping of the next commit: tracked, plus staged, minus removed
    pub fn next_file_map(&self) -> FileMap {
        let mut files = self.tracked.clone();
        files.extend(
            self.staged
                .iter()
                .map(|(path, oid)| (path.clone(), oid.clone())),
        );
        files.retain(|path, _| !self.removed.contains(path));

        files
    }

    /// Make `commit` the head of the current branch and clear staging
    pub fn advance_head(&mut self, commit: &Commit) {
        self.head = commit.oid().clone();
        self.tracked = commit.files().clone();
        self.branches
            .set(self.current_branch.clone(), commit.oid().clone());
        self.clear_staging();
    }

    /// Check out another branch whose head is `commit`
    pub fn switch_branch(&mut self, branch: BranchName, commit: &Commit) {
        self.current_branch = branch;
        self.advance_head(commit);
    }

    pub fn clear_staging(&mut self) {
        self.staged.clear();
        self.removed.clear();
        self.changed = true;
    }

    /// Load the index from disk
    ///
    /// Reads the index file, parses the header and body, and verifies the
    /// checksum.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path().is_file() {
            return Err(RepositoryError::NotARepository.into());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index {}", self.path.display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut reader = Checksum::new(lock);
        let header_bytes = reader.read(HEADER_SIZE)?;
        IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?.validate()?;

        let mut record = RecordReader::new(&mut reader);
        let head = record.read_oid()?;
        let current_branch = BranchName::try_parse(record.read_string()?)?;

        let mut branches = BranchTable::new();
        for _ in 0..record.read_count()? {
            let name = BranchName::try_parse(record.read_string()?)?;
            let oid = record.read_oid()?;
            branches.set(name, oid);
        }

        let tracked = record.read_file_map()?;
        let staged = record.read_file_map()?;
        let removed = record.read_path_set()?;

        reader.verify()?;

        if branches.get(current_branch.as_ref()) != Some(&head) {
            anyhow::bail!("Corrupt index: branch {current_branch} does not point at head");
        }

        self.head = head;
        self.current_branch = current_branch;
        self.branches = branches;
        self.tracked = tracked;
        self.staged = staged;
        self.removed = removed;
        self.changed = false;

        tracing::trace!(
            head = %self.head,
            branch = %self.current_branch,
            staged = self.staged.len(),
            removed = self.removed.len(),
            "loaded index"
        );

        Ok(())
    }

    /// Persist the index, replacing the file on disk in one rename
    ///
    /// # Locking
    ///
    /// The replacement is written under an exclusive lock.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let index_dir = self
            .path
            .parent()
            .with_context(|| format!("Invalid index path {}", self.path.display()))?;
        let temp_index_path = index_dir.join(format!("index.tmp-{}", rand::random::<u32>()));

        let body = self.serialize_body()?;

        {
            let mut index_file = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&temp_index_path)
                .with_context(|| {
                    format!("Unable to create index file {}", temp_index_path.display())
                })?;
            let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

            let mut writer = Checksum::new(lock);
            writer.write(&IndexHeader::default().serialize()?)?;
            writer.write(&body)?;
            writer.write_checksum()?;
        }

        std::fs::rename(&temp_index_path, &self.path)
            .with_context(|| format!("Unable to replace index {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }

    fn serialize_body(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = Vec::new();

        self.head.write_h40_to(&mut bytes)?;
        write_string(&mut bytes, self.current_branch.as_ref())?;

        write_count(&mut bytes, self.branches.len())?;
        for (name, oid) in self.branches.iter() {
            write_string(&mut bytes, name.as_ref())?;
            oid.write_h40_to(&mut bytes)?;
        }

        write_file_map(&mut bytes, &self.tracked)?;
        write_file_map(&mut bytes, &self.staged)?;
        write_path_set(&mut bytes, &self.removed)?;

        Ok(bytes)
    }
}
