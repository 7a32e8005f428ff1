use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    /// Record the staging area as a new commit on the current branch
    ///
    /// A merge passes the given branch head as `second_parent`; a merge commit
    /// may be written with nothing staged.
    pub(crate) fn write_commit(
        &self,
        index: &mut Index,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<Commit> {
        if second_parent.is_none() && !index.has_staged_changes() {
            return Err(RepositoryError::NothingToCommit.into());
        }
        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyMessage.into());
        }

        let parents = std::iter::once(index.head().clone())
            .chain(second_parent)
            .collect::<Vec<_>>();

        let commit = Commit::new(
            parents,
            index.next_file_map(),
            message.to_string(),
            Commit::timestamp_from_env(),
        );
        self.database().store_commit(&commit)?;

        tracing::debug!(
            oid = %commit.oid(),
            branch = %index.current_branch(),
            files = commit.files().len(),
            "wrote commit"
        );
        index.advance_head(&commit);

        Ok(commit)
    }
}
