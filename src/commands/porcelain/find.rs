use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Print the id of every commit whose message is exactly `message`
    pub async fn find(&self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut matches = Vec::new();
        for oid in self.database().list_commit_ids()? {
            if self.database().load_commit(&oid)?.message() == message {
                matches.push(oid);
            }
        }

        if matches.is_empty() {
            return Err(RepositoryError::NoCommitWithMessage.into());
        }

        let mut writer = self.writer();
        for oid in matches {
            writeln!(writer, "{oid}")?;
        }

        Ok(())
    }
}
