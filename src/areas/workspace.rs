use crate::REPOSITORY_DIR;
use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn user input into a path relative to the working directory root
    ///
    /// Accepts relative paths (with `.` components) and absolute paths inside
    /// the working directory. Anything escaping it is reported as missing.
    /// Names must be valid UTF-8 without control characters, since commit
    /// records store one path per line.
    pub fn normalize(&self, path: &str) -> anyhow::Result<PathBuf> {
        let path = Path::new(path);
        let path = if path.is_absolute() {
            path.strip_prefix(&self.path)
                .map_err(|_| RepositoryError::FileNotFound)?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let name = name
                        .to_str()
                        .filter(|name| !name.chars().any(char::is_control))
                        .ok_or_else(|| {
                            RepositoryError::UnsupportedFileName(
                                name.to_string_lossy().into_owned(),
                            )
                        })?;
                    normalized.push(name);
                }
                Component::CurDir => {}
                _ => return Err(RepositoryError::FileNotFound.into()),
            }
        }

        if normalized.as_os_str().is_empty() || Self::is_ignored(&normalized) {
            return Err(RepositoryError::FileNotFound.into());
        }

        Ok(normalized)
    }

    /// Every regular file of the working directory, relative and sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != REPOSITORY_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .map(PathBuf::from)
                    .with_context(|| format!("Path outside workspace: {:?}", entry.path()))
            })
            .collect()
    }

    fn is_ignored(path: &Path) -> bool {
        path.components()
            .next()
            .is_some_and(|component| component.as_os_str() == REPOSITORY_DIR)
    }

    pub fn contains(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Write a file, creating its parent directories
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        // only an empty directory may give way to a file
        if path.is_dir() {
            std::fs::remove_dir(&path).with_context(|| {
                format!("Failed to replace non-empty directory: {:?}", file_path)
            })?;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parent of: {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file if present and prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        for ancestor in file_path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }

            let dir_path = self.path.join(ancestor);
            let is_empty = std::fs::read_dir(&dir_path)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if !is_empty {
                break;
            }

            std::fs::remove_dir(&dir_path)
                .with_context(|| format!("Failed to remove directory: {:?}", ancestor))?;
        }

        Ok(())
    }

    // Deletions first, so a file can take the place of a pruned directory.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for path in migration.deletions() {
            self.remove_file(path)?;
        }

        for (path, oid) in migration.writes() {
            let blob = database.load_blob(oid)?;
            self.write_file(path, blob.content())?;
        }

        tracing::debug!(
            deleted = migration.deletions().len(),
            "materialized commit into workspace"
        );

        Ok(())
    }
}
