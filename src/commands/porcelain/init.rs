use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub async fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized.into());
        }

        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            let kind_path = self.database().kind_path(object_type);
            fs::create_dir_all(&kind_path)
                .with_context(|| format!("Failed to create {:?}", kind_path))?;
        }

        let root = Commit::root();
        self.database()
            .store_commit(&root)
            .context("Failed to store the initial commit")?;

        let index = self.index();
        let mut index = index.lock().await;
        index.write_updates()?;

        writeln!(
            self.writer(),
            "Initialized empty sprig repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
