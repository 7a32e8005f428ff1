use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// First-parent history of the head, most recent first
    pub async fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        for commit in RevList::new(self.database(), index.head().clone()) {
            self.display_commit(&commit?)?;
        }

        Ok(())
    }

    /// Every commit ever made, in store order
    pub async fn global_log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        for oid in self.database().list_commit_ids()? {
            let commit = self.database().load_commit(&oid)?;
            self.display_commit(&commit)?;
        }

        Ok(())
    }

    fn display_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", commit.oid())?;
        if let (Some(first), Some(second)) = (commit.parent(), commit.second_parent()) {
            writeln!(
                writer,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
