//! Branch table
//!
//! Branches are lightweight movable pointers: a name mapped to the commit it
//! currently points at. The table is owned by the index and persisted with it.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchTable {
    branches: BTreeMap<BranchName, ObjectId>,
}

impl BranchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.branches.contains_key(name)
    }

    /// Add a new branch, refusing to overwrite an existing one
    pub fn create(&mut self, name: BranchName, oid: ObjectId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            return Err(RepositoryError::BranchExists.into());
        }

        self.branches.insert(name, oid);
        Ok(())
    }

    /// Point a branch at a commit, creating it if needed
    pub fn set(&mut self, name: BranchName, oid: ObjectId) {
        self.branches.insert(name, oid);
    }

    pub fn remove(&mut self, name: &str) -> anyhow::Result<ObjectId> {
        self.branches
            .remove(name)
            .ok_or_else(|| RepositoryError::NoSuchBranch.into())
    }

    /// Stored name and head of the branch matching user input
    pub fn lookup(&self, name: &str) -> Option<(&BranchName, &ObjectId)> {
        self.branches.get_key_value(name)
    }

    /// Branches in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
