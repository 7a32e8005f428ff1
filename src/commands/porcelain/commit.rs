use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub async fn commit(&self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let commit = self.write_commit(&mut index, message, None)?;
        index.write_updates()?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            index.current_branch(),
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
