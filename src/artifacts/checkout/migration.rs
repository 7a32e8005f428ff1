//! Materialization of a commit into the working directory
//!
//! The plan has three parts:
//!
//! 1. Untracked files in the way: files present in the working directory and
//!    not tracked by the old head that the target would overwrite, bury under
//!    a file of the same name as their directory, or need to turn into a
//!    directory
//! 2. Deletions: paths tracked by the old head but not by the target
//! 3. Writes: every path of the target commit, with its blob
//!
//! Deletions are applied before writes so a file may replace a directory of
//! the same name.

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConflictType {
    /// The target writes a file at the same path
    UntrackedOverwritten,
    /// The target writes a file where one of its parent directories is
    StaleDirectory,
    /// The target needs a directory where the file is
    UntrackedParent,
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::UntrackedOverwritten => write!(f, "would be overwritten"),
            ConflictType::StaleDirectory => write!(f, "would be lost with its directory"),
            ConflictType::UntrackedParent => write!(f, "blocks a directory"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    deletions: BTreeSet<PathBuf>,
    writes: FileMap,
    untracked_in_the_way: BTreeMap<PathBuf, ConflictType>,
}

impl Migration {
    /// Plan the switch from the files of the old head to those of the target
    pub fn plan(old: &FileMap, target: &FileMap, workspace_files: &[PathBuf]) -> Self {
        let target_dirs = target
            .keys()
            .flat_map(|path| path.ancestors().skip(1))
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .collect::<BTreeSet<_>>();

        let untracked_in_the_way = workspace_files
            .iter()
            .filter(|path| !old.contains_key(*path))
            .filter_map(|path| {
                Self::conflict_type(path, target, &target_dirs).map(|kind| (path.clone(), kind))
            })
            .collect();

        let deletions = old
            .keys()
            .filter(|path| !target.contains_key(*path))
            .cloned()
            .collect();

        Migration {
            deletions,
            writes: target.clone(),
            untracked_in_the_way,
        }
    }

    fn conflict_type(
        path: &Path,
        target: &FileMap,
        target_dirs: &BTreeSet<&Path>,
    ) -> Option<ConflictType> {
        if target.contains_key(path) {
            Some(ConflictType::UntrackedOverwritten)
        } else if target_dirs.contains(path) {
            Some(ConflictType::UntrackedParent)
        } else if path
            .ancestors()
            .skip(1)
            .any(|ancestor| target.contains_key(ancestor))
        {
            Some(ConflictType::StaleDirectory)
        } else {
            None
        }
    }

    /// Fail if any untracked file would be overwritten or removed
    pub fn check_conflicts(&self) -> anyhow::Result<()> {
        if self.untracked_in_the_way.is_empty() {
            return Ok(());
        }

        for (path, kind) in &self.untracked_in_the_way {
            tracing::warn!(path = %path.display(), %kind, "untracked file in the way");
        }

        Err(RepositoryError::UntrackedFileInTheWay.into())
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }

    pub fn writes(&self) -> impl Iterator<Item = (&Path, &ObjectId)> {
        self.writes.iter().map(|(path, oid)| (path.as_path(), oid))
    }

    pub fn untracked_in_the_way(&self) -> &BTreeMap<PathBuf, ConflictType> {
        &self.untracked_in_the_way
    }
}
