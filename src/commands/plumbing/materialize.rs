use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;

impl Repository {
    /// Make the working directory hold exactly the files of `target`
    ///
    /// Aborts before touching anything when an untracked file would be
    /// overwritten. The index is left to the caller.
    pub(crate) fn materialize(&self, index: &Index, target: &Commit) -> anyhow::Result<()> {
        let migration = self.plan_migration(index, target)?;
        migration.check_conflicts()?;

        self.workspace().apply_migration(&migration, self.database())
    }

    pub(crate) fn plan_migration(&self, index: &Index, target: &Commit) -> anyhow::Result<Migration> {
        let workspace_files = self.workspace().list_files()?;

        Ok(Migration::plan(
            index.tracked(),
            target.files(),
            &workspace_files,
        ))
    }
}
