use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Best-known distance to a node. `Infinite` means no path has been found yet
/// and orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Infinite => f.pad("inf"),
        }
    }
}

/// What happened in the step that produced a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind<N> {
    /// Emitted before any node is processed
    Initial,
    /// A node was popped from the frontier and its distance settled
    Finalized,
    /// The expanded node improved the distance to `neighbor`
    Relaxed { neighbor: N },
    /// The frontier is empty; the snapshot carries the predecessor table
    Complete,
}

/// Immutable record of the algorithm state at one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot<N: Ord, W> {
    step: usize,
    start: N,
    kind: StepKind<N>,
    current: Option<N>,
    distances: BTreeMap<N, Distance<W>>,
    visited: BTreeSet<N>,
    predecessors: Option<BTreeMap<N, Option<N>>>,
}

impl<N: Ord, W: Copy> StateSnapshot<N, W> {
    pub(crate) fn new(
        step: usize,
        start: N,
        kind: StepKind<N>,
        current: Option<N>,
        distances: BTreeMap<N, Distance<W>>,
        visited: BTreeSet<N>,
        predecessors: Option<BTreeMap<N, Option<N>>>,
    ) -> Self {
        StateSnapshot {
            step,
            start,
            kind,
            current,
            distances,
            visited,
            predecessors,
        }
    }

    /// Zero-based position of this snapshot in the sequence
    pub fn step(&self) -> usize {
        self.step
    }

    /// Start node of the run that produced this snapshot
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn kind(&self) -> &StepKind<N> {
        &self.kind
    }

    /// The node just finalized or being expanded; `None` for the first and last snapshot
    pub fn current(&self) -> Option<&N> {
        self.current.as_ref()
    }

    pub fn distances(&self) -> &BTreeMap<N, Distance<W>> {
        &self.distances
    }

    /// Distance recorded for `node`, `Infinite` for nodes outside the table
    pub fn distance(&self, node: &N) -> Distance<W> {
        self.distances.get(node).copied().unwrap_or(Distance::Infinite)
    }

    pub fn visited(&self) -> &BTreeSet<N> {
        &self.visited
    }

    /// The predecessor table, present only in the final snapshot
    pub fn predecessors(&self) -> Option<&BTreeMap<N, Option<N>>> {
        self.predecessors.as_ref()
    }

    /// True for the terminal snapshot of a run
    pub fn is_final(&self) -> bool {
        self.predecessors.is_some()
    }
}
