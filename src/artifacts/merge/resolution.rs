//! Three-way file reconciliation
//!
//! Every path in the split point or the given commit is classified by comparing
//! its content at the split point (`s`), the current head (`c`) and the given
//! head (`g`). Absence is a content state of its own.
//!
//! | case                          | outcome     |
//! |-------------------------------|-------------|
//! | `g == s`                      | skip        |
//! | `c == s`, `g` absent          | remove      |
//! | `c == s`, `g` present         | take given  |
//! | `g == c`                      | skip        |
//! | anything else                 | conflict    |

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeAction {
    /// Keep whatever the current head has
    Skip,
    /// Delete the path and stage its removal
    Remove,
    /// Check out the given version and stage it
    TakeGiven,
    /// Write a conflict file and stage it
    Conflict,
}

/// Classify one path from its three versions
pub fn classify<T: PartialEq>(split: Option<T>, current: Option<T>, given: Option<T>) -> MergeAction {
    if given == split {
        return MergeAction::Skip;
    }

    if current == split {
        return match given {
            Some(_) => MergeAction::TakeGiven,
            None => MergeAction::Remove,
        };
    }

    if given == current {
        MergeAction::Skip
    } else {
        MergeAction::Conflict
    }
}

/// Resolution of every path touched by a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: BTreeMap<PathBuf, MergeAction>,
}

impl MergePlan {
    /// Classify the paths of the split point and the given commit
    ///
    /// `load_blob` returns the content of a blob; each blob is loaded at most
    /// once and equal ids are taken as equal content without loading.
    pub fn build<BlobLoaderFn>(
        split: &FileMap,
        current: &FileMap,
        given: &FileMap,
        load_blob: BlobLoaderFn,
    ) -> anyhow::Result<Self>
    where
        BlobLoaderFn: Fn(&ObjectId) -> anyhow::Result<Bytes>,
    {
        let mut contents = HashMap::<ObjectId, Bytes>::new();
        let mut content_of = |oid: Option<&ObjectId>| -> anyhow::Result<Option<Bytes>> {
            let Some(oid) = oid else {
                return Ok(None);
            };
            if let Some(content) = contents.get(oid) {
                return Ok(Some(content.clone()));
            }

            let content = load_blob(oid)?;
            contents.insert(oid.clone(), content.clone());
            Ok(Some(content))
        };

        let mut actions = BTreeMap::new();
        for path in split.keys().chain(given.keys()) {
            if actions.contains_key(path) {
                continue;
            }

            let oids = [split.get(path), current.get(path), given.get(path)];
            let action = if oids[1] == oids[2] || oids[0] == oids[2] {
                // same blob id means same content
                MergeAction::Skip
            } else {
                let split_content = content_of(oids[0])?;
                let current_content = content_of(oids[1])?;
                let given_content = content_of(oids[2])?;
                classify(split_content, current_content, given_content)
            };

            tracing::trace!(path = %path.display(), ?action, "classified path");
            actions.insert(path.clone(), action);
        }

        Ok(MergePlan { actions })
    }

    pub fn action_for(&self, path: &Path) -> MergeAction {
        self.actions.get(path).copied().unwrap_or(MergeAction::Skip)
    }

    /// Paths resolved with `action`, in path order
    pub fn paths_with(&self, action: MergeAction) -> impl Iterator<Item = &PathBuf> {
        self.actions
            .iter()
            .filter(move |(_, candidate)| **candidate == action)
            .map(|(path, _)| path)
    }

    pub fn has_conflicts(&self) -> bool {
        self.paths_with(MergeAction::Conflict).next().is_some()
    }
}
