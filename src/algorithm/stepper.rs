use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::iter::FusedIterator;

use crate::algorithm::dijkstra::TieBreak;
use crate::algorithm::snapshot::{Distance, StateSnapshot, StepKind};
use crate::algorithm::ShortestPathTree;
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{checked_sum, validate_non_negative, Adjacency, EdgeWeight, NodeId};
use crate::{Error, Result};

/// Where the traversal stands between two calls to `advance`
#[derive(Debug)]
enum Phase<'g, N, W> {
    /// Nothing emitted yet
    Start,
    /// Next step pops the frontier
    Popping,
    /// Relaxing the remaining neighbors of a finalized node
    Expanding {
        node: N,
        settled: W,
        neighbors: Option<btree_map::Iter<'g, N, W>>,
    },
    /// Final snapshot emitted
    Finished,
}

/// Resumable Dijkstra traversal that yields one [`StateSnapshot`] per step.
///
/// The stepper borrows the adjacency view for its whole lifetime, so the graph
/// cannot be mutated while a run is in flight. Each call to [`advance`](Self::advance)
/// does exactly the work needed to reach the next snapshot. Dropping the stepper
/// cancels the run.
#[derive(Debug)]
pub struct DijkstraStepper<'g, N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    adjacency: &'g Adjacency<N, W>,
    start: N,
    tie_break: TieBreak,
    distances: BTreeMap<N, Distance<W>>,
    predecessors: BTreeMap<N, Option<N>>,
    visited: BTreeSet<N>,
    /// Keyed by (tentative distance, tie-break sequence), then node
    frontier: BinaryHeapWrapper<N, (W, u64)>,
    pushes: u64,
    phase: Phase<'g, N, W>,
    steps: usize,
}

impl<'g, N, W> DijkstraStepper<'g, N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Creates a stepper with the default tie-break policy
    pub fn new(adjacency: &'g Adjacency<N, W>, start: N) -> Result<Self> {
        Self::with_tie_break(adjacency, start, TieBreak::default())
    }

    /// Creates a stepper, rejecting graphs that contain a negative edge.
    ///
    /// A start node missing from the adjacency view is accepted: the run then
    /// emits only the initial and final snapshots.
    pub fn with_tie_break(
        adjacency: &'g Adjacency<N, W>,
        start: N,
        tie_break: TieBreak,
    ) -> Result<Self> {
        validate_non_negative(adjacency)?;

        let mut distances: BTreeMap<N, Distance<W>> = adjacency
            .keys()
            .map(|node| (node.clone(), Distance::Infinite))
            .collect();
        let predecessors = adjacency.keys().map(|node| (node.clone(), None)).collect();

        let rooted = adjacency.contains_key(&start);
        if rooted {
            distances.insert(start.clone(), Distance::Finite(W::zero()));
        } else {
            log::debug!("start node {:?} not in graph, traversal will be empty", start);
        }

        let mut stepper = DijkstraStepper {
            adjacency,
            start: start.clone(),
            tie_break,
            distances,
            predecessors,
            visited: BTreeSet::new(),
            frontier: BinaryHeapWrapper::new(),
            pushes: 0,
            phase: Phase::Start,
            steps: 0,
        };
        if rooted {
            stepper.push(start, W::zero());
        }

        Ok(stepper)
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// True once the final snapshot has been emitted
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Number of snapshots produced so far
    pub fn steps_emitted(&self) -> usize {
        self.steps
    }

    /// Frontier entries waiting to be popped, stale duplicates included
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Runs the traversal up to the next snapshot.
    ///
    /// Returns [`Error::Exhausted`] once the final snapshot has been handed out.
    pub fn advance(&mut self) -> Result<StateSnapshot<N, W>> {
        loop {
            match std::mem::replace(&mut self.phase, Phase::Finished) {
                Phase::Start => {
                    self.phase = Phase::Popping;
                    return Ok(self.emit(StepKind::Initial, None));
                }

                Phase::Popping => {
                    let Some((node, (distance, _))) = self.frontier.pop() else {
                        return Ok(self.emit_final());
                    };

                    // Stale entry left behind by a later improvement
                    if self.visited.contains(&node) {
                        log::trace!("discarding stale frontier entry {:?} at {:?}", node, distance);
                        self.phase = Phase::Popping;
                        continue;
                    }

                    self.visited.insert(node.clone());
                    let adjacency = self.adjacency;
                    let neighbors = adjacency.get(&node).map(|n| n.iter());
                    let snapshot = self.emit(StepKind::Finalized, Some(node.clone()));
                    self.phase = Phase::Expanding {
                        node,
                        settled: distance,
                        neighbors,
                    };
                    return Ok(snapshot);
                }

                Phase::Expanding {
                    node,
                    settled,
                    mut neighbors,
                } => {
                    while let Some((neighbor, weight)) = neighbors.as_mut().and_then(|it| it.next()) {
                        if self.visited.contains(neighbor) {
                            continue;
                        }

                        let Some(candidate) = checked_sum(settled, *weight) else {
                            log::warn!(
                                "distance to {:?} via {:?} overflows, keeping current",
                                neighbor,
                                node
                            );
                            continue;
                        };
                        let recorded = self
                            .distances
                            .get(neighbor)
                            .copied()
                            .unwrap_or(Distance::Infinite);
                        if Distance::Finite(candidate) >= recorded {
                            continue;
                        }

                        self.distances.insert(neighbor.clone(), Distance::Finite(candidate));
                        self.predecessors.insert(neighbor.clone(), Some(node.clone()));
                        self.push(neighbor.clone(), candidate);

                        let snapshot = self.emit(
                            StepKind::Relaxed {
                                neighbor: neighbor.clone(),
                            },
                            Some(node.clone()),
                        );
                        self.phase = Phase::Expanding {
                            node,
                            settled,
                            neighbors,
                        };
                        return Ok(snapshot);
                    }

                    self.phase = Phase::Popping;
                }

                Phase::Finished => return Err(Error::Exhausted),
            }
        }
    }

    /// Advances until the final snapshot and returns the completed tree
    pub fn run_to_completion(mut self) -> Result<ShortestPathTree<N, W>> {
        loop {
            let snapshot = self.advance()?;
            if snapshot.is_final() {
                return ShortestPathTree::from_snapshot(&snapshot).ok_or(Error::Exhausted);
            }
        }
    }

    fn push(&mut self, node: N, distance: W) {
        let tie = match self.tie_break {
            TieBreak::NodeId => 0,
            TieBreak::InsertionOrder => self.pushes,
        };
        self.pushes += 1;
        self.frontier.push(node, (distance, tie));
    }

    fn emit(&mut self, kind: StepKind<N>, current: Option<N>) -> StateSnapshot<N, W> {
        let step = self.steps;
        self.steps += 1;
        log::debug!("step {}: {:?} at {:?}", step, kind, current);

        StateSnapshot::new(
            step,
            self.start.clone(),
            kind,
            current,
            self.distances.clone(),
            self.visited.clone(),
            None,
        )
    }

    fn emit_final(&mut self) -> StateSnapshot<N, W> {
        let step = self.steps;
        self.steps += 1;
        log::debug!(
            "step {}: complete, {} of {} nodes finalized",
            step,
            self.visited.len(),
            self.distances.len()
        );

        debug_assert!(self.frontier.is_empty());

        StateSnapshot::new(
            step,
            self.start.clone(),
            StepKind::Complete,
            None,
            std::mem::take(&mut self.distances),
            std::mem::take(&mut self.visited),
            Some(std::mem::take(&mut self.predecessors)),
        )
    }
}

impl<'g, N, W> Iterator for DijkstraStepper<'g, N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    type Item = StateSnapshot<N, W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }
}

impl<'g, N, W> FusedIterator for DijkstraStepper<'g, N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
}
