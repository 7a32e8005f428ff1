use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::resolve_commit_id;
use crate::errors::RepositoryError;

impl Repository {
    /// Overwrite one working file with its version at a commit (head by default)
    ///
    /// The staging area is left untouched.
    pub async fn checkout_file(&self, revision: Option<&str>, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let commit = match revision {
            Some(revision) => {
                let oid = resolve_commit_id(self.database(), revision)?;
                self.database().load_commit(&oid)?
            }
            None => self.head_commit(&index)?,
        };

        let path = self
            .workspace()
            .normalize(path)
            .map_err(|_| RepositoryError::FileNotInCommit)?;
        let oid = commit
            .blob_for(&path)
            .ok_or(RepositoryError::FileNotInCommit)?;

        let blob = self.database().load_blob(oid)?;
        self.workspace().write_file(&path, blob.content())?;

        Ok(())
    }

    /// Switch to another branch, replacing the working directory with its head
    pub async fn checkout_branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let (branch, target_oid) = index
            .branches()
            .lookup(name)
            .map(|(branch, oid)| (branch.clone(), oid.clone()))
            .ok_or(RepositoryError::NoSuchBranch)?;
        if branch == *index.current_branch() {
            return Err(RepositoryError::AlreadyOnBranch.into());
        }

        let target = self.database().load_commit(&target_oid)?;
        self.materialize(&index, &target)?;

        index.switch_branch(branch, &target);
        index.write_updates()?;

        Ok(())
    }
}
