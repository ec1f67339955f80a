//! Successor function and heuristic of the routing problem.
use crate::grid::Grid;
use crate::path;
use crate::search::Graph;
use crate::state::{Fuel, State};
use crate::types::*;
use crate::utils::manhattan_distance;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Labels of the arcs in the routing graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "Fuel up")]
    FuelUp,
}

/// Cardinal moves in the order their arcs are generated, with `(row, column)` offsets.
pub const DIRECTIONS: [(Move, isize, isize); 4] = [
    (Move::North, -1, 0),
    (Move::East, 0, 1),
    (Move::South, 1, 0),
    (Move::West, 0, -1),
];

impl Move {
    /// Fixed cost of taking this move.
    #[inline]
    pub fn cost(self) -> Cost {
        match self {
            Move::FuelUp => REFUEL_COST,
            _ => MOVE_COST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::North => "N",
            Move::East => "E",
            Move::South => "S",
            Move::West => "W",
            Move::FuelUp => "Fuel up",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arc of the routing graph.
pub type Arc = path::Arc<State, Move>;
/// Path in the routing graph.
pub type Path = path::Path<State, Move>;

fn refuel_arc(tail: State) -> Arc {
    let head = State::new(tail.row, tail.col, Fuel::Limited(MAX_FUEL));
    Arc::new(tail, head, Move::FuelUp, Move::FuelUp.cost())
}

impl Grid {
    /// Arcs leaving the given state, in the order N, E, S, W, Fuel up.
    ///
    /// - With an empty tank, the only possible arc is refueling on a fuel station.
    /// - Otherwise each passable neighbor can be reached with one unit of fuel, and refueling is
    ///   possible on a fuel station if the tank is not full.
    /// - Unlimited fuel is never consumed and never refueled.
    pub fn outgoing_arcs(&self, tail: &State) -> Vec<Arc> {
        let tail = *tail;
        let on_station = self.is_fuel_station(tail.row, tail.col);

        if tail.fuel.is_empty() {
            return if on_station {
                vec![refuel_arc(tail)]
            } else {
                Vec::new()
            };
        }

        let fuel = tail.fuel.after_move();
        let mut arcs: Vec<Arc> = DIRECTIONS
            .iter()
            .filter_map(|&(label, dr, dc)| {
                let (row, col) = self.neighbor(tail.position(), (dr, dc))?;
                Some(Arc::new(tail, State::new(row, col, fuel), label, label.cost()))
            })
            .collect();

        if on_station && tail.fuel.can_refuel() {
            arcs.push(refuel_arc(tail));
        }

        arcs
    }

    /// Admissible heuristic: the Manhattan distance to the nearest goal multiplied by the cost of
    /// the cheapest move.
    pub fn estimated_cost_to_goal(&self, state: &State) -> Cost {
        let nearest = self
            .goals()
            .iter()
            .map(|&goal| manhattan_distance(state.position(), goal))
            .min()
            .unwrap_or(0);
        Cost::try_from(nearest)
            .unwrap_or(Cost::MAX)
            .saturating_mul(MOVE_COST)
    }
}

impl Graph for Grid {
    type State = State;
    type Label = Move;

    fn starting_states(&self) -> Vec<State> {
        Grid::starting_states(self).to_vec()
    }

    fn is_goal(&self, state: &State) -> bool {
        Grid::is_goal(self, state)
    }

    fn outgoing_arcs(&self, tail: &State) -> Vec<Arc> {
        Grid::outgoing_arcs(self, tail)
    }

    fn estimated_cost_to_goal(&self, state: &State) -> Cost {
        Grid::estimated_cost_to_goal(self, state)
    }
}
