use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;

impl Repository {
    /// Create a branch pointing at the head commit; the current branch stays
    pub async fn branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let branch = BranchName::try_parse(name.to_string())?;
        let head = index.head().clone();
        index.branches_mut().create(branch, head)?;

        index.write_updates()?;

        Ok(())
    }

    /// Delete a branch pointer; its commits stay in the store
    pub async fn rm_branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if !index.branches().contains(name) {
            return Err(RepositoryError::NoSuchBranch.into());
        }
        if index.current_branch().as_ref() == name {
            return Err(RepositoryError::CannotRemoveCurrent.into());
        }

        let oid = index.branches_mut().remove(name)?;
        tracing::debug!(branch = name, %oid, "removed branch");

        index.write_updates()?;

        Ok(())
    }
}
