use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    pub async fn add(&self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let path = self.workspace().normalize(path)?;
        if !self.workspace().contains(&path) {
            return Err(RepositoryError::FileNotFound.into());
        }

        let content = self.workspace().read_file(&path)?;
        let same_content = |oid: Option<&ObjectId>| -> anyhow::Result<bool> {
            match oid {
                Some(oid) => Ok(*self.database().load_blob(oid)?.content() == content),
                None => Ok(false),
            }
        };
        let unchanged_since_head = same_content(index.tracked().get(&path))?;
        let already_staged = same_content(index.staged().get(&path))?;

        index.unmark_removed(&path);
        if unchanged_since_head {
            index.unstage(&path);
        } else if !already_staged {
            let oid = self.database().store_blob(&Blob::new(content.clone()))?;
            tracing::debug!(path = %path.display(), %oid, "staged file");
            index.stage(path, oid);
        }

        index.write_updates()?;

        Ok(())
    }
}
