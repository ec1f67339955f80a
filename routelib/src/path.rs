//! Arcs and paths of the search graph.
//!
//! Paths are persistent singly linked lists pointing from the last arc towards the start.
//! Extending a path shares the storage of its prefix, so the frontier can hold many paths with
//! common prefixes without copying them.
use crate::types::Cost;

use serde::{Serialize, Serializer};
use std::rc::Rc;

/// A labeled, costed transition between two states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Arc<S, L> {
    pub tail: S,
    pub head: S,
    pub label: L,
    pub cost: Cost,
}

impl<S, L> Arc<S, L> {
    pub fn new(tail: S, head: S, label: L, cost: Cost) -> Self {
        Arc {
            tail,
            head,
            label,
            cost,
        }
    }
}

enum Link<S, L> {
    /// Zero-length path that consists of a start state only.
    Start(S),
    /// Last arc of the path and the path leading to its tail.
    Step { arc: Arc<S, L>, prefix: Path<S, L> },
}

struct Node<S, L> {
    link: Link<S, L>,
    /// Sum of arc costs.
    cost: Cost,
    /// Number of arcs.
    len: usize,
}

/// Ordered sequence of arcs from a start state.
pub struct Path<S, L>(Rc<Node<S, L>>);

impl<S, L> Clone for Path<S, L> {
    fn clone(&self) -> Self {
        Path(Rc::clone(&self.0))
    }
}

/// Frees uniquely owned prefixes one node at a time, so dropping a long path does not recurse
/// once per arc.
impl<S, L> Drop for Path<S, L> {
    fn drop(&mut self) {
        while Rc::strong_count(&self.0) == 1 {
            let prefix = match &self.0.link {
                Link::Step { prefix, .. } => Rc::clone(&prefix.0),
                Link::Start(_) => return,
            };
            // The detached node still refers to its prefix, which is shared with `self` now,
            // so dropping it stops at that prefix.
            let node = std::mem::replace(&mut self.0, prefix);
            drop(node);
        }
    }
}

impl<S, L> Path<S, L> {
    /// A path without arcs located at the given start state.
    pub fn start(state: S) -> Self {
        Path(Rc::new(Node {
            link: Link::Start(state),
            cost: 0,
            len: 0,
        }))
    }

    /// A new path consisting of this one followed by `arc`.
    /// The tail of `arc` should be the head of this path.
    pub fn extend(&self, arc: Arc<S, L>) -> Self {
        let cost = self.0.cost.saturating_add(arc.cost);
        Path(Rc::new(Node {
            link: Link::Step {
                arc,
                prefix: self.clone(),
            },
            cost,
            len: self.0.len + 1,
        }))
    }

    /// Last state of the path.
    pub fn head(&self) -> &S {
        match &self.0.link {
            Link::Start(state) => state,
            Link::Step { arc, .. } => &arc.head,
        }
    }

    /// Total cost of the path.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.0.cost
    }

    /// Number of arcs.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.len == 0
    }

    /// Last arc of the path, `None` for a zero-length path.
    pub fn last_arc(&self) -> Option<&Arc<S, L>> {
        match &self.0.link {
            Link::Start(_) => None,
            Link::Step { arc, .. } => Some(arc),
        }
    }

    /// Iterate over the arcs from the last one to the first one.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Arc<S, L>> {
        let mut current = Some(self);
        std::iter::from_fn(move || {
            let path = current?;
            match &path.0.link {
                Link::Start(_) => {
                    current = None;
                    None
                }
                Link::Step { arc, prefix } => {
                    current = Some(prefix);
                    Some(arc)
                }
            }
        })
    }

    /// The state this path starts from.
    pub fn start_state(&self) -> &S {
        let mut path = self;
        loop {
            match &path.0.link {
                Link::Start(state) => return state,
                Link::Step { prefix, .. } => path = prefix,
            }
        }
    }
}

impl<S: Clone, L: Clone> Path<S, L> {
    /// Arcs in order from the start.
    pub fn arcs(&self) -> Vec<Arc<S, L>> {
        let mut arcs: Vec<Arc<S, L>> = self.iter_rev().cloned().collect();
        arcs.reverse();
        arcs
    }

    /// States visited by this path in order, including the start state.
    pub fn states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.iter_rev().map(|arc| arc.head.clone()).collect();
        states.push(self.start_state().clone());
        states.reverse();
        states
    }
}

impl<S: std::fmt::Debug, L: std::fmt::Debug> std::fmt::Debug for Path<S, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut arcs: Vec<&Arc<S, L>> = self.iter_rev().collect();
        arcs.reverse();
        f.debug_struct("Path")
            .field("start", self.start_state())
            .field("arcs", &arcs)
            .field("cost", &self.cost())
            .finish()
    }
}

/// Paths are serialized as the list of their arcs.
impl<S: Serialize, L: Serialize> Serialize for Path<S, L> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut arcs: Vec<&Arc<S, L>> = self.iter_rev().collect();
        arcs.reverse();
        serializer.collect_seq(arcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path<u32, char> {
        Path::start(0)
            .extend(Arc::new(0, 1, 'a', 5))
            .extend(Arc::new(1, 2, 'b', 15))
    }

    #[test]
    fn zero_length() {
        let path: Path<u32, char> = Path::start(7);
        assert_eq!(*path.head(), 7);
        assert_eq!(*path.start_state(), 7);
        assert_eq!(path.cost(), 0);
        assert!(path.is_empty());
        assert!(path.last_arc().is_none());
        assert!(path.arcs().is_empty());
        assert_eq!(path.states(), vec![7]);
    }

    #[test]
    fn extension() {
        let path = sample();
        assert_eq!(*path.head(), 2);
        assert_eq!(*path.start_state(), 0);
        assert_eq!(path.cost(), 20);
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.arcs(),
            vec![Arc::new(0, 1, 'a', 5), Arc::new(1, 2, 'b', 15)]
        );
        assert_eq!(path.states(), vec![0, 1, 2]);
        assert_eq!(path.last_arc(), Some(&Arc::new(1, 2, 'b', 15)));
    }

    #[test]
    fn shared_prefix() {
        let prefix = sample();
        let a = prefix.extend(Arc::new(2, 3, 'c', 5));
        let b = prefix.extend(Arc::new(2, 4, 'd', 5));
        // Prefix is referenced by itself and two extensions
        assert_eq!(Rc::strong_count(&prefix.0), 3);
        assert_eq!(a.states(), vec![0, 1, 2, 3]);
        assert_eq!(b.states(), vec![0, 1, 2, 4]);
        // The original is not modified
        assert_eq!(prefix.len(), 2);
        assert_eq!(prefix.cost(), 20);
    }

    #[test]
    fn cost_saturates() {
        let path = Path::start(0)
            .extend(Arc::new(0, 1, 'a', Cost::MAX - 1))
            .extend(Arc::new(1, 2, 'b', 5));
        assert_eq!(path.cost(), Cost::MAX);
    }

    #[test]
    fn drop_long_path() {
        let mut path: Path<u32, char> = Path::start(0);
        for i in 0..200_000 {
            path = path.extend(Arc::new(i, i + 1, 'a', 1));
        }
        let branch = path.extend(Arc::new(200_000, 0, 'b', 1));
        assert_eq!(branch.len(), 200_001);
        // Shared prefix survives dropping the branch
        drop(branch);
        assert_eq!(path.len(), 200_000);
        assert_eq!(*path.head(), 200_000);
        drop(path);
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "tail": 0, "head": 1, "label": "a", "cost": 5 },
                { "tail": 1, "head": 2, "label": "b", "cost": 15 },
            ])
        );
    }
}
