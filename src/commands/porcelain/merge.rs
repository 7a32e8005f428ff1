use crate::areas::database::CommitCache;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::merge::conflict::render_conflict;
use crate::artifacts::merge::resolution::{MergeAction, MergePlan};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::merge::{
    ANCESTOR_MESSAGE, CONFLICT_MESSAGE, FAST_FORWARD_MESSAGE, merge_commit_message,
};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Merge the head of branch `name` into the current branch
    pub async fn merge(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if index.has_staged_changes() {
            return Err(RepositoryError::UncommittedChanges.into());
        }
        let (given_branch, given_oid) = index
            .branches()
            .lookup(name)
            .map(|(branch, oid)| (branch.clone(), oid.clone()))
            .ok_or(RepositoryError::NoSuchBranch)?;
        if given_branch == *index.current_branch() {
            return Err(RepositoryError::MergeWithSelf.into());
        }

        let current = self.head_commit(&index)?;
        let given = self.database().load_commit(&given_oid)?;
        self.plan_migration(&index, &given)?.check_conflicts()?;

        let split_oid = self.find_split_point(current.oid(), given.oid())?;

        if split_oid == *given.oid() {
            writeln!(self.writer(), "{ANCESTOR_MESSAGE}")?;
            return Ok(());
        }

        if split_oid == *current.oid() {
            self.materialize(&index, &given)?;
            index.advance_head(&given);
            index.write_updates()?;

            writeln!(self.writer(), "{FAST_FORWARD_MESSAGE}")?;
            return Ok(());
        }

        let split = self.database().load_commit(&split_oid)?;
        let plan = MergePlan::build(split.files(), current.files(), given.files(), |oid| {
            self.load_content(oid)
        })?;
        self.apply_merge_plan(&mut index, &plan, &current, &given)?;

        let message = merge_commit_message(given_branch.as_ref(), index.current_branch().as_ref());
        self.write_commit(&mut index, &message, Some(given.oid().clone()))?;
        index.write_updates()?;

        if plan.has_conflicts() {
            writeln!(self.writer(), "{}", CONFLICT_MESSAGE.yellow())?;
        }

        Ok(())
    }

    fn find_split_point(&self, current: &ObjectId, given: &ObjectId) -> anyhow::Result<ObjectId> {
        let commit_cache = CommitCache::new();
        let database = self.database();

        let finder = SplitPointFinder::new(|oid: &ObjectId| {
            commit_cache.get_or_load_slim_commit(database, oid)
        });

        finder
            .find_split_point(current, given)?
            .ok_or_else(|| anyhow::anyhow!("no common ancestor between {current} and {given}"))
    }

    /// Apply removals, checkouts and conflict files to the working directory
    /// and stage each of them
    fn apply_merge_plan(
        &self,
        index: &mut Index,
        plan: &MergePlan,
        current: &Commit,
        given: &Commit,
    ) -> anyhow::Result<()> {
        for path in plan.paths_with(MergeAction::Remove) {
            self.workspace().remove_file(path)?;
            index.mark_removed(path.clone());
        }

        for path in plan.paths_with(MergeAction::TakeGiven) {
            let oid = Self::blob_in(given, path)?;
            self.workspace().write_file(path, &self.load_content(oid)?)?;
            index.stage(path.clone(), oid.clone());
        }

        for path in plan.paths_with(MergeAction::Conflict) {
            let current_content = current
                .blob_for(path)
                .map(|oid| self.load_content(oid))
                .transpose()?;
            let given_content = given
                .blob_for(path)
                .map(|oid| self.load_content(oid))
                .transpose()?;

            let content = render_conflict(current_content.as_deref(), given_content.as_deref());
            let oid = self.database().store_blob(&Blob::new(content.clone()))?;
            self.workspace().write_file(path, &content)?;

            tracing::info!(path = %path.display(), "merge conflict");
            index.stage(path.clone(), oid);
        }

        Ok(())
    }

    fn load_content(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.database().load_blob(oid)?.into_content())
    }

    fn blob_in<'c>(commit: &'c Commit, path: &Path) -> anyhow::Result<&'c ObjectId> {
        commit
            .blob_for(path)
            .ok_or_else(|| anyhow::anyhow!("{:?} missing from commit {}", path, commit.oid()))
    }
}
