use crate::areas::repository::Repository;
use crate::errors::RepositoryError;

impl Repository {
    pub async fn rm(&self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let path = self
            .workspace()
            .normalize(path)
            .map_err(|_| RepositoryError::NothingToRemove)?;

        let was_staged = index.unstage(&path).is_some();
        if index.is_tracked(&path) {
            self.workspace().remove_file(&path)?;
            index.mark_removed(path);
        } else if !was_staged {
            return Err(RepositoryError::NothingToRemove.into());
        }

        index.write_updates()?;

        Ok(())
    }
}
