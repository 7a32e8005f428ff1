//! Commit id resolution
//!
//! Users may name a commit by its full id or by any unambiguous prefix of at
//! least four hex characters. Prefixes are expanded by scanning the commit
//! partition of the object store.

use crate::areas::database::Database;
use crate::artifacts::branch::MIN_SHORT_ID_LENGTH;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRevision(String);

impl CommitRevision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Self> {
        let revision = revision.trim();

        if revision.len() < MIN_SHORT_ID_LENGTH
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(RepositoryError::NoSuchCommit.into());
        }

        Ok(Self(revision.to_ascii_lowercase()))
    }

    pub fn resolve(&self, database: &Database) -> anyhow::Result<ObjectId> {
        if self.0.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(self.0.clone())?;
            return if database.has_commit(&oid) {
                Ok(oid)
            } else {
                Err(RepositoryError::NoSuchCommit.into())
            };
        }

        let mut matches = database.find_commits_by_prefix(&self.0)?;

        match matches.len() {
            0 => Err(RepositoryError::NoSuchCommit.into()),
            1 => Ok(matches.remove(0)),
            _ => {
                tracing::debug!(prefix = %self.0, candidates = matches.len(), "ambiguous short id");
                Err(RepositoryError::AmbiguousCommitId {
                    prefix: self.0.clone(),
                    candidates: matches,
                }
                .into())
            }
        }
    }
}

/// Resolve user input naming a commit to a stored commit id
pub fn resolve_commit_id(database: &Database, revision: &str) -> anyhow::Result<ObjectId> {
    CommitRevision::try_parse(revision)?.resolve(database)
}
