//! Generic best-first graph search.
mod solve_variations;
pub use solve_variations::*;

use crate::frontier::Frontier;
use crate::path::{Arc, Path};
use crate::types::Cost;
use crate::{SearchFailure, ALLOCATOR};

use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::time::Instant;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

/// A search problem: start states, a goal test, a successor function and a heuristic.
pub trait Graph {
    /// Nodes of the graph.
    type State: Clone + Eq + Hash + std::fmt::Debug;
    /// Labels of the arcs.
    type Label: Clone + std::fmt::Debug;

    /// States from which the search starts.
    fn starting_states(&self) -> Vec<Self::State>;

    /// True if the search can stop at the given state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Arcs that leave the given state.
    fn outgoing_arcs(&self, tail: &Self::State) -> Vec<Arc<Self::State, Self::Label>>;

    /// Lower bound on the cost to reach a goal from the given state.
    /// The default of 0 is admissible for every graph.
    fn estimated_cost_to_goal(&self, _state: &Self::State) -> Cost {
        0
    }
}

/// Limits on a single search run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Maximum number of expanded states.
    pub max_expansions: Option<usize>,
    /// Maximum duration of the search in seconds.
    pub time_limit: Option<f64>,
    /// Memory limit in bytes, as reported by the global allocator.
    pub max_memory: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_expansions: None,
            time_limit: None,
            max_memory: usize::MAX,
        }
    }
}

/// Result of a search that ran to completion.
pub struct SearchOutcome<S, L> {
    /// Path to a goal with the minimum cost, or `None` if the frontier was exhausted without
    /// reaching a goal.
    pub solution: Option<Path<S, L>>,
    /// States whose outgoing arcs were generated, including the goal state of the solution.
    pub expanded: HashSet<S>,
    /// Number of paths taken from the frontier.
    pub expansions: usize,
    /// Total time of the search in seconds.
    pub total_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
}

impl<S, L> SearchOutcome<S, L> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Cost of the solution, if any.
    pub fn cost(&self) -> Option<Cost> {
        self.solution.as_ref().map(Path::cost)
    }
}

/// Run the search loop on `graph` with the given frontier.
///
/// Paths of length zero are created for each start state. Then the best path is repeatedly taken
/// from the frontier, returned if it ends in a goal, or extended with each outgoing arc of its
/// head otherwise. The frontier decides the order of expansion and prunes expanded states.
///
/// Returns a [`SearchFailure`] only when one of the limits in `config` is exceeded.
pub fn generic_search<G, F>(
    graph: &G,
    mut frontier: F,
    config: &Config,
) -> Result<SearchOutcome<G::State, G::Label>, SearchFailure>
where
    G: Graph,
    F: Frontier<G::State, G::Label>,
{
    const SAMPLE_PERIOD: usize = 2_usize.pow(10);
    let start_time = Instant::now();
    let mut max_memory: usize = 0;
    let mut expansions: usize = 0;

    for state in graph.starting_states() {
        frontier.add(Path::start(state));
    }

    let solution = loop {
        let path = match frontier.next() {
            Some(path) => path,
            None => break None,
        };
        expansions += 1;
        log::trace!("Expanding {:?} at cost {}", path.head(), path.cost());

        if graph.is_goal(path.head()) {
            break Some(path);
        }

        if let Some(limit) = config.max_expansions {
            if expansions >= limit {
                return Err(SearchFailure::BudgetExceeded { expansions, limit });
            }
        }
        if expansions % SAMPLE_PERIOD == 0 {
            let allocated = ALLOCATOR.allocated();
            max_memory = std::cmp::max(max_memory, allocated);
            if allocated > config.max_memory {
                return Err(SearchFailure::OutOfMemory {
                    used: max_memory,
                    limit: config.max_memory,
                });
            }
            if let Some(limit) = config.time_limit {
                let elapsed = start_time.elapsed().as_secs_f64();
                if elapsed > limit {
                    return Err(SearchFailure::Timeout { elapsed, limit });
                }
            }
        }

        for arc in graph.outgoing_arcs(path.head()) {
            frontier.add(path.extend(arc));
        }
    };

    max_memory = std::cmp::max(max_memory, ALLOCATOR.allocated());
    let total_time = start_time.elapsed().as_secs_f64();

    match &solution {
        Some(path) => log::info!(
            "Found a path of {} arcs with cost {} after {} expansions",
            path.len(),
            path.cost(),
            expansions
        ),
        None => log::info!("Frontier exhausted after {expansions} expansions, no solution"),
    }

    Ok(SearchOutcome {
        solution,
        expanded: frontier.into_expanded(),
        expansions,
        total_time,
        max_memory,
    })
}
