use colored::{ColoredString, Colorize};

/// Unstaged change of a path relative to what the next commit would record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::Modified => "modified",
            WorkspaceChangeType::Deleted => "deleted",
        }
    }
}

impl WorkspaceChangeType {
    pub fn label(&self) -> ColoredString {
        let label: &str = self.into();
        label.red()
    }
}
