//! Text rendering of search results on the map.
use super::*;
use crate::transitions::Path;

use itertools::Itertools;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

/// Symbol for the cells on the route.
pub const ROUTE_SYMBOL: char = '*';
/// Symbol for the expanded cells that are not on the route.
pub const EXPANDED_SYMBOL: char = '.';

/// Render the map with the cells of the solution and the expanded states marked.
///
/// Only open cells are marked, so starts, goals, stations and walls keep their symbols.
/// Route cells are marked first, so they take precedence over expanded cells.
pub fn render_map(grid: &Grid, solution: Option<&Path>, expanded: &HashSet<State>) -> String {
    let mut rows = grid.symbol_rows();

    let mut mark = |(row, col): (usize, usize), symbol: char| {
        if rows[row][col] == ' ' {
            rows[row][col] = symbol;
        }
    };

    if let Some(path) = solution {
        for arc in path.iter_rev() {
            mark(arc.head.position(), ROUTE_SYMBOL);
        }
    }
    for state in expanded.iter() {
        mark(state.position(), EXPANDED_SYMBOL);
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .join("\n")
}
