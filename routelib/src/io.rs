//! Input output module.
//!
//! Contains structs to read routing problems from files and to serialize search results.
use crate::grid::Grid;
use crate::search::{self, Config, RouteOutcome};
use crate::state::State;
use crate::transitions::Arc;
use crate::types::Cost;
use crate::SearchFailure;

use serde::{Deserialize, Serialize};
use std::path::Path;

mod experiments;
pub use experiments::*;
mod render;
pub use render::*;


/// Represents a routing problem: a map and the limits of the search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteProblem {
    pub name: Option<String>,
    /// Map text, one line per row.
    pub map: String,
    #[serde(default)]
    pub config: Config,
}

impl RouteProblem {
    /// Create a problem from the map text with the default configuration.
    pub fn from_map(map: String) -> Self {
        RouteProblem {
            name: None,
            map,
            config: Config::default(),
        }
    }

    /// Read a problem from a file.
    ///
    /// `.json`, `.yaml` and `.yml` files must contain a [`RouteProblem`] object, whose map may
    /// refer to a separate file as `{ "file": "..." }`. Any other file is read as the map text
    /// itself, and the problem is named after the file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<RouteProblem> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match extension {
            "json" | "yaml" | "yml" => {
                let mut value: serde_json::Value = if extension == "json" {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)
                        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?
                };
                read_map_from_file(&mut value, path)?;
                Ok(serde_json::from_value(value)?)
            }
            _ => {
                let mut problem = RouteProblem::from_map(content);
                problem.name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned());
                Ok(problem)
            }
        }
    }

    /// Parse the map of this problem.
    pub fn grid(&self) -> Result<Grid, SearchFailure> {
        Grid::parse(&self.map)
    }

    /// Solve this routing problem with the given frontier class and return a [`RouteSolution`].
    pub fn solve_custom(&self, frontier: &str) -> Result<RouteSolution, SearchFailure> {
        let grid = self.grid()?;
        let outcome = search::solve_custom(&grid, &self.config, frontier)?;
        Ok(RouteSolution::new(self.name.clone(), frontier, &grid, outcome))
    }

    /// Solve with the given frontier class and return a [`SearchSummary`].
    pub fn benchmark_custom(&self, frontier: &str) -> Result<SearchSummary, SearchFailure> {
        let grid = self.grid()?;
        let outcome = search::solve_custom(&grid, &self.config, frontier)?;
        Ok(SearchSummary::from(&outcome))
    }
}

/// This struct is the serializable result of a search on a routing problem.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteSolution {
    pub name: Option<String>,
    /// Frontier class used for the search.
    pub frontier: String,
    /// Total cost of the route, `None` if no route exists.
    pub cost: Option<Cost>,
    /// Arcs of the route, `None` if no route exists.
    pub solution: Option<Vec<Arc>>,
    /// Expanded states in sorted order.
    pub expanded: Vec<State>,
    /// Number of paths taken from the frontier.
    pub expansions: usize,
    /// Total time of the search in seconds.
    pub total_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
    /// The map with the route marked by `*` and other expanded cells marked by `.`.
    pub rendered: String,
}

impl RouteSolution {
    pub fn new(name: Option<String>, frontier: &str, grid: &Grid, outcome: RouteOutcome) -> Self {
        let rendered = render_map(grid, outcome.solution.as_ref(), &outcome.expanded);
        let mut expanded: Vec<State> = outcome.expanded.into_iter().collect();
        expanded.sort_unstable();
        RouteSolution {
            name,
            frontier: frontier.to_string(),
            cost: outcome.solution.as_ref().map(|p| p.cost()),
            solution: outcome.solution.as_ref().map(|p| p.arcs()),
            expanded,
            expansions: outcome.expansions,
            total_time: outcome.total_time,
            max_memory: outcome.max_memory,
            rendered,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Labels of the route, e.g. `["N", "E", "Fuel up"]`.
    pub fn labels(&self) -> Vec<&'static str> {
        self.solution
            .iter()
            .flatten()
            .map(|arc| arc.label.as_str())
            .collect()
    }
}

/// Simplified result struct for storing benchmark-related data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    /// Total cost of the route, `None` if no route exists.
    pub cost: Option<Cost>,
    /// Number of arcs in the route.
    pub length: Option<usize>,
    /// Number of paths taken from the frontier.
    pub expansions: usize,
    /// Number of distinct expanded states.
    pub expanded: usize,
    /// Total time of the search in seconds.
    pub total_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
}

impl From<&RouteOutcome> for SearchSummary {
    fn from(outcome: &RouteOutcome) -> Self {
        SearchSummary {
            cost: outcome.cost(),
            length: outcome.solution.as_ref().map(|p| p.len()),
            expansions: outcome.expansions,
            expanded: outcome.expanded.len(),
            total_time: outcome.total_time,
            max_memory: outcome.max_memory,
        }
    }
}
