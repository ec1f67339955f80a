//! Variations of search function
use super::*;
use crate::frontier::{AStarFrontier, LowestCostFrontier};
use crate::grid::Grid;
use crate::state::State;
use crate::transitions::Move;

/// Outcome of a search on a [`Grid`].
pub type RouteOutcome = SearchOutcome<State, Move>;

/// Find a minimum-cost route on the grid with A* search.
pub fn solve_astar(grid: &Grid, config: &Config) -> Result<RouteOutcome, SearchFailure> {
    generic_search(grid, AStarFrontier::new(grid), config)
}

/// Find a minimum-cost route on the grid without using the heuristic.
pub fn solve_lowest_cost(grid: &Grid, config: &Config) -> Result<RouteOutcome, SearchFailure> {
    generic_search(grid, LowestCostFrontier::new(), config)
}

/// Macro for generating code that reads the frontier class name from a variable and calls the
/// appropriate search function variation.
macro_rules! generate_solve_code {
    ($name:ident; $grid:expr, $config:expr; $($frontier:ident => $solve:ident),+ $(,)?) => {
        match $name {
            $(stringify!($frontier) => $solve($grid, $config),)+
            _ => Err(SearchFailure::BadInput(format!("Undefined frontier: {}", $name))),
        }
    };
}

/// Find a route with the frontier class given by name.
pub fn solve_custom(
    grid: &Grid,
    config: &Config,
    frontier: &str,
) -> Result<RouteOutcome, SearchFailure> {
    generate_solve_code!(
        frontier; grid, config;
        AStarFrontier => solve_astar,
        LowestCostFrontier => solve_lowest_cost,
    )
}

/// Names of all frontier classes accepted by [`solve_custom`].
pub fn all_frontiers() -> Vec<&'static str> {
    vec!["AStarFrontier", "LowestCostFrontier"]
}
