use super::*;
use crate::path::Arc;

/// Graph with integer nodes and a fixed heuristic table, only used to build frontiers.
struct Table {
    h: Vec<Cost>,
}

impl Graph for Table {
    type State = usize;
    type Label = char;

    fn starting_states(&self) -> Vec<usize> {
        vec![0]
    }

    fn is_goal(&self, _state: &usize) -> bool {
        false
    }

    fn outgoing_arcs(&self, _tail: &usize) -> Vec<Arc<usize, char>> {
        Vec::new()
    }

    fn estimated_cost_to_goal(&self, state: &usize) -> Cost {
        self.h[*state]
    }
}

fn step(from: usize, to: usize, cost: Cost) -> Path<usize, char> {
    Path::start(from).extend(Arc::new(from, to, 'x', cost))
}

#[test]
fn lowest_cost_order() {
    let mut frontier = LowestCostFrontier::new();
    frontier.add(step(0, 1, 10));
    frontier.add(step(0, 2, 5));
    frontier.add(step(0, 3, 7));

    let heads: Vec<usize> = frontier.by_ref().map(|p| *p.head()).collect();
    assert_eq!(heads, vec![2, 3, 1]);
    assert!(frontier.next().is_none());
}

#[test]
fn ties_pop_in_insertion_order() {
    let mut frontier = LowestCostFrontier::new();
    frontier.add(step(0, 4, 5));
    frontier.add(step(0, 2, 5));
    frontier.add(step(0, 9, 5));
    frontier.add(step(0, 1, 1));

    let heads: Vec<usize> = frontier.map(|p| *p.head()).collect();
    assert_eq!(heads, vec![1, 4, 2, 9]);
}

#[test]
fn astar_uses_heuristic() {
    let graph = Table {
        h: vec![0, 100, 0, 3],
    };
    let mut frontier = AStarFrontier::new(&graph);
    frontier.add(step(0, 1, 1)); // 101
    frontier.add(step(0, 2, 50)); // 50
    frontier.add(step(0, 3, 10)); // 13

    let heads: Vec<usize> = frontier.map(|p| *p.head()).collect();
    assert_eq!(heads, vec![3, 2, 1]);
}

#[test]
fn expanded_heads_are_pruned() {
    let mut frontier = LowestCostFrontier::new();
    frontier.add(Path::start(1));
    let first = frontier.next().unwrap();
    assert_eq!(*first.head(), 1);
    assert!(frontier.expanded().contains(&1));

    // A path to an expanded state is silently discarded
    frontier.add(step(0, 1, 0));
    assert!(frontier.next().is_none());
}

#[test]
fn stale_entries_are_skipped() {
    let mut frontier = LowestCostFrontier::new();
    // Two paths to the same state, the second one is more expensive.
    frontier.add(step(0, 7, 3));
    frontier.add(step(5, 7, 8));
    frontier.add(step(0, 6, 4));

    let paths: Vec<Path<usize, char>> = frontier.by_ref().collect();
    let heads: Vec<usize> = paths.iter().map(|p| *p.head()).collect();
    assert_eq!(heads, vec![7, 6]);
    assert_eq!(paths[0].cost(), 3);
    assert_eq!(*paths[0].start_state(), 0);

    let expanded = frontier.into_expanded();
    assert_eq!(expanded.len(), 2);
    assert!(expanded.contains(&7));
    assert!(expanded.contains(&6));
}

#[test]
fn empty_frontier_is_exhausted() {
    let graph = Table { h: vec![0] };
    let mut frontier = AStarFrontier::new(&graph);
    assert!(frontier.next().is_none());
    assert!(frontier.expanded().is_empty());
}
