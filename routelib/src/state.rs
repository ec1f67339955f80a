//! Search states: agent position together with the fuel in the tank.
use crate::types::*;

use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Amount of fuel available to the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fuel {
    /// A fuel tank holding the given number of moves.
    Limited(FuelLevel),
    /// Starts marked with `S` never run out of fuel.
    Unlimited,
}

impl Fuel {
    /// Fuel left after a single move.
    ///
    /// Must not be called on an empty tank.
    #[inline]
    pub fn after_move(self) -> Fuel {
        match self {
            Fuel::Limited(f) => {
                debug_assert!(f > 0, "Cannot move with an empty tank");
                Fuel::Limited(f - 1)
            }
            Fuel::Unlimited => Fuel::Unlimited,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Fuel::Limited(0)
    }

    /// True if refueling would increase the fuel level.
    /// Always false for [`Fuel::Unlimited`].
    #[inline]
    pub fn can_refuel(self) -> bool {
        matches!(self, Fuel::Limited(f) if f < MAX_FUEL)
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Fuel::Limited(level) => write!(f, "{}", level),
            Fuel::Unlimited => write!(f, "inf"),
        }
    }
}

/// Struct representing a state in the search space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub row: Index,
    pub col: Index,
    pub fuel: Fuel,
}

impl State {
    pub fn new(row: Index, col: Index, fuel: Fuel) -> State {
        State { row, col, fuel }
    }

    /// Position of this state on the grid as `(row, column)`.
    #[inline]
    pub fn position(&self) -> (Index, Index) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.fuel)
    }
}

/// States are serialized as `[row, column, fuel]` where unlimited fuel is `null`.
impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fuel: Option<FuelLevel> = match self.fuel {
            Fuel::Limited(f) => Some(f),
            Fuel::Unlimited => None,
        };
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.row)?;
        tuple.serialize_element(&self.col)?;
        tuple.serialize_element(&fuel)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (row, col, fuel) = <(Index, Index, Option<FuelLevel>)>::deserialize(deserializer)?;
        let fuel = match fuel {
            Some(f) => Fuel::Limited(f),
            None => Fuel::Unlimited,
        };
        Ok(State { row, col, fuel })
    }
}
