//! Split point finder
//!
//! The split point of two commits is their best common ancestor: the baseline
//! a three-way merge compares both sides against.
//!
//! ## Algorithm
//!
//! 1. Breadth-first traversal from the current head and from the given head,
//!    over all parents, recording each commit's distance from each start.
//! 2. Commits reached from both sides are common ancestors. That set is closed
//!    under ancestry, so a common ancestor is redundant exactly when it is a
//!    parent of another common ancestor.
//! 3. Among the remaining best common ancestors, pick the one with the
//!    smallest combined distance; ties go to the latest timestamp, then to the
//!    smallest id.
//!
//! Every commit is loaded and visited at most once per side, so deeply merged
//! histories cost time linear in their size.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_GIVEN = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_CURRENT.bits() | Self::VISITED_FROM_GIVEN.bits();
        const REDUNDANT = 0b100; // a common ancestor reachable from another common ancestor
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::VISITED_FROM_GIVEN) {
            flags.push("GIVEN");
        }
        if self.contains(VisitState::REDUNDANT) {
            flags.push("REDUNDANT");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Traversal bookkeeping for one commit
#[derive(Debug, Clone)]
struct Visit {
    state: VisitState,
    from_current: usize,
    from_given: usize,
    commit: SlimCommit,
}

impl Visit {
    fn combined_distance(&self) -> usize {
        self.from_current + self.from_given
    }
}

/// Finds the split point between two commits
///
/// Generic over the commit loader so the same search runs against the object
/// store or an in-memory graph.
pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find the split point of `current` and `given`
    ///
    /// Returns `None` only when the two histories share no commit, which
    /// cannot happen inside one repository since every history starts at the
    /// root commit.
    pub fn find_split_point(
        &self,
        current: &ObjectId,
        given: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        if current == given {
            return Ok(Some(current.clone()));
        }

        let mut visits = HashMap::<ObjectId, Visit>::new();
        self.walk(current, VisitState::VISITED_FROM_CURRENT, &mut visits)?;
        self.walk(given, VisitState::VISITED_FROM_GIVEN, &mut visits)?;

        let common = visits
            .iter()
            .filter(|(_, visit)| visit.state.contains(VisitState::VISITED_FROM_BOTH))
            .map(|(oid, _)| oid.clone())
            .collect::<HashSet<_>>();

        tracing::trace!(visited = visits.len(), common = common.len(), "split point walk");

        for oid in &common {
            let parents = visits
                .get(oid)
                .map(|visit| visit.commit.parents.clone())
                .unwrap_or_default();
            for parent in parents {
                if let Some(parent_visit) = visits.get_mut(&parent) {
                    parent_visit.state |= VisitState::REDUNDANT;
                }
            }
        }

        let split_point = common
            .iter()
            .filter_map(|oid| visits.get(oid))
            .filter(|visit| !visit.state.contains(VisitState::REDUNDANT))
            .min_by(|left, right| {
                left.combined_distance()
                    .cmp(&right.combined_distance())
                    .then_with(|| right.commit.timestamp.cmp(&left.commit.timestamp))
                    .then_with(|| left.commit.oid.cmp(&right.commit.oid))
            })
            .map(|visit| visit.commit.oid.clone());

        if let Some(split_point) = &split_point {
            tracing::debug!(%current, %given, %split_point, "found split point");
        }

        Ok(split_point)
    }

    /// Breadth-first walk over all parents, recording distances from `start`
    fn walk(
        &self,
        start: &ObjectId,
        side: VisitState,
        visits: &mut HashMap<ObjectId, Visit>,
    ) -> anyhow::Result<()> {
        let mut queue = VecDeque::from([(start.clone(), 0usize)]);

        while let Some((oid, distance)) = queue.pop_front() {
            if visits
                .get(&oid)
                .is_some_and(|visit| visit.state.contains(side))
            {
                continue;
            }

            if !visits.contains_key(&oid) {
                let commit = (self.commit_loader)(&oid)?;
                visits.insert(
                    oid.clone(),
                    Visit {
                        state: VisitState::NONE,
                        from_current: 0,
                        from_given: 0,
                        commit,
                    },
                );
            }
            let Some(visit) = visits.get_mut(&oid) else {
                continue;
            };

            visit.state |= side;
            if side == VisitState::VISITED_FROM_CURRENT {
                visit.from_current = distance;
            } else {
                visit.from_given = distance;
            }

            for parent in &visit.commit.parents {
                queue.push_back((parent.clone(), distance + 1));
            }
        }

        Ok(())
    }
}
