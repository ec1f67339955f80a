//! Priority frontiers: cost-ordered worklists of paths with pruning of expanded states.
use crate::path::Path;
use crate::search::Graph;
use crate::types::Cost;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

#[cfg(test)]
mod tests;

/// Generic trait for the worklists of a graph search.
///
/// Each Frontier is also an Iterator, which yields the next path to be expanded and marks its
/// head as expanded. If there is nothing left to expand, the iterator will end.
pub trait Frontier<S, L>: Iterator<Item = Path<S, L>> {
    /// Add a path to the frontier.
    /// Paths whose head was already expanded are discarded.
    fn add(&mut self, path: Path<S, L>);
    /// States whose paths were returned so far.
    fn expanded(&self) -> &HashSet<S>;
    /// Deconstruct the frontier to the set of expanded states.
    fn into_expanded(self) -> HashSet<S>;
}

/// An entry in the priority queue.
struct Entry<S, L> {
    priority: Cost,
    /// Insertion order, used for breaking ties.
    sequence: usize,
    path: Path<S, L>,
}

impl<S, L> PartialEq for Entry<S, L> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<S, L> Eq for Entry<S, L> {}

impl<S, L> Ord for Entry<S, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed to pop the lowest
        // (priority, sequence) first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<S, L> PartialOrd for Entry<S, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of paths together with the set of expanded states.
/// Common part of the frontiers in this module.
struct PriorityQueue<S, L> {
    container: BinaryHeap<Entry<S, L>>,
    expanded: HashSet<S>,
    /// Number of entries pushed so far. Sequence numbers are unique and increasing.
    entry_count: usize,
}

impl<S: Eq + Hash + Clone, L> PriorityQueue<S, L> {
    fn new() -> Self {
        PriorityQueue {
            container: BinaryHeap::new(),
            expanded: HashSet::new(),
            entry_count: 0,
        }
    }

    /// True if the path should be added, i.e. its head is not expanded yet.
    #[inline]
    fn accepts(&self, path: &Path<S, L>) -> bool {
        !self.expanded.contains(path.head())
    }

    fn push(&mut self, path: Path<S, L>, priority: Cost) {
        self.container.push(Entry {
            priority,
            sequence: self.entry_count,
            path,
        });
        self.entry_count += 1;
    }

    /// Pop the best path whose head is not expanded, and mark its head as expanded.
    fn pop(&mut self) -> Option<Path<S, L>> {
        while let Some(Entry { path, .. }) = self.container.pop() {
            // A cheaper path to the same state may have been expanded after this one was added.
            if self.expanded.insert(path.head().clone()) {
                return Some(path);
            }
        }
        None
    }
}

/// A* frontier: the priority of a path is its cost plus the estimated cost from its head to
/// the nearest goal.
pub struct AStarFrontier<'a, G: Graph> {
    graph: &'a G,
    queue: PriorityQueue<G::State, G::Label>,
}

impl<'a, G: Graph> AStarFrontier<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        AStarFrontier {
            graph,
            queue: PriorityQueue::new(),
        }
    }
}

impl<'a, G: Graph> Iterator for AStarFrontier<'a, G> {
    type Item = Path<G::State, G::Label>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }
}

impl<'a, G: Graph> Frontier<G::State, G::Label> for AStarFrontier<'a, G> {
    fn add(&mut self, path: Path<G::State, G::Label>) {
        if !self.queue.accepts(&path) {
            return;
        }
        let priority = path.cost() + self.graph.estimated_cost_to_goal(path.head());
        self.queue.push(path, priority);
    }

    fn expanded(&self) -> &HashSet<G::State> {
        &self.queue.expanded
    }

    fn into_expanded(self) -> HashSet<G::State> {
        self.queue.expanded
    }
}

/// Lowest-cost-first frontier: the priority of a path is its cost alone.
/// Equivalent to [`AStarFrontier`] with a heuristic that is always 0.
pub struct LowestCostFrontier<S, L> {
    queue: PriorityQueue<S, L>,
}

impl<S: Eq + Hash + Clone, L> LowestCostFrontier<S, L> {
    pub fn new() -> Self {
        LowestCostFrontier {
            queue: PriorityQueue::new(),
        }
    }
}

impl<S: Eq + Hash + Clone, L> Default for LowestCostFrontier<S, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone, L> Iterator for LowestCostFrontier<S, L> {
    type Item = Path<S, L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }
}

impl<S: Eq + Hash + Clone, L> Frontier<S, L> for LowestCostFrontier<S, L> {
    fn add(&mut self, path: Path<S, L>) {
        if !self.queue.accepts(&path) {
            return;
        }
        let priority = path.cost();
        self.queue.push(path, priority);
    }

    fn expanded(&self) -> &HashSet<S> {
        &self.queue.expanded
    }

    fn into_expanded(self) -> HashSet<S> {
        self.queue.expanded
    }
}
