use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::resolve_commit_id;

impl Repository {
    /// Move the current branch to a commit and check out its files
    pub async fn reset(&self, revision: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let oid = resolve_commit_id(self.database(), revision)?;
        let target = self.database().load_commit(&oid)?;
        self.materialize(&index, &target)?;

        index.advance_head(&target);
        index.write_updates()?;

        Ok(())
    }
}
