//! # Fuel-Constrained Routing Library
//!
//! A* search over grid maps where every move burns fuel and fuel can only be replenished at
//! stations. Common functionality for the command line interface.

use serde::{Deserialize, Serialize};

pub mod frontier;
pub mod grid;
pub mod io;
pub mod path;
pub mod search;
pub mod state;
pub mod transitions;
pub mod types;
pub mod utils;

pub use types::*;

#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> = cap::Cap::new(std::alloc::System, usize::MAX);

/// Represents the reasons why a search attempt might fail.
///
/// Exhausting the frontier without reaching a goal is not a failure, see
/// [`search::SearchOutcome::solution`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "content")] // content will be used for MalformedMap(String)
pub enum SearchFailure {
    MalformedMap(String),
    BadInput(String),
    BudgetExceeded { expansions: usize, limit: usize },
    Timeout { elapsed: f64, limit: f64 },
    OutOfMemory { used: usize, limit: usize },
}

impl std::error::Error for SearchFailure {}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchFailure::MalformedMap(reason) => write!(f, "Malformed map: {}", reason),
            SearchFailure::BadInput(reason) => write!(f, "Bad input: {}", reason),
            SearchFailure::BudgetExceeded { expansions, limit } => {
                write!(
                    f,
                    "Expansion budget exceeded! Expanded {} of {}.",
                    expansions, limit
                )
            }
            SearchFailure::Timeout { elapsed, limit } => {
                write!(f, "Time limit exceeded! Ran {:.3}s of {:.3}s.", elapsed, limit)
            }
            SearchFailure::OutOfMemory { used, limit } => {
                write!(f, "Out of memory! Used {} of {}.", used, limit)
            }
        }
    }
}
