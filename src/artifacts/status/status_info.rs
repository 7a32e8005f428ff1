//! Status report
//!
//! Compares three states of every path: the head commit (tracked files), the
//! staging area and the working directory.
//!
//! - modified: tracked at head, not staged, and the working copy differs; or
//!   staged, and the working copy differs from the staged blob
//! - deleted: staged but missing; or tracked at head, not marked for removal,
//!   and missing
//! - untracked: present but neither staged nor tracked; or marked for removal
//!   and present again

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branches: Vec<BranchName>,
    pub current_branch: BranchName,
    pub staged: FileSet,
    pub removed: FileSet,
    pub workspace_changeset: ChangeSet,
    pub untracked: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let workspace_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .collect::<FileSet>();

        let mut workspace_changeset = ChangeSet::new();
        let mut untracked = FileSet::new();

        for (path, oid) in index.staged() {
            if !workspace_files.contains(path) {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if self.differs_from_blob(path, oid)? {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        for (path, oid) in index.tracked() {
            if index.is_staged(path) || index.is_removed(path) {
                continue;
            }

            if !workspace_files.contains(path) {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if self.differs_from_blob(path, oid)? {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        for path in &workspace_files {
            let unknown = !index.is_staged(path) && !index.is_tracked(path);
            if unknown || index.is_removed(path) {
                untracked.insert(path.clone());
            }
        }

        Ok(StatusInfo {
            branches: index.branches().iter().map(|(name, _)| name.clone()).collect(),
            current_branch: index.current_branch().clone(),
            staged: index.staged().keys().cloned().collect(),
            removed: index.removed().clone(),
            workspace_changeset,
            untracked,
        })
    }

    fn differs_from_blob(&self, path: &Path, oid: &ObjectId) -> anyhow::Result<bool> {
        let content = self.repository.workspace().read_file(path)?;
        let blob = self.repository.database().load_blob(oid)?;

        Ok(content != *blob.content())
    }
}
