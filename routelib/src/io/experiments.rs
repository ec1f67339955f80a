//! Experiments: running several problems with several frontier classes.
use std::path::{Path, PathBuf};

use super::*;
use serde::ser::SerializeMap;
use serde::Serializer;

/// Given a problem as `serde_json::Value`, replace a `map` field of the form
/// `{ "file": "..." }` with the text of that file, relative to the given `path`.
///
/// Returns true if a map file was read.
pub fn read_map_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    path: P,
) -> std::io::Result<bool> {
    let map = match value.get_mut("map") {
        Some(map) if map.is_object() => map,
        _ => return Ok(false),
    };
    let file = match map.get("file") {
        Some(serde_json::Value::String(file)) => file,
        _ => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "map object must have a file field",
            ))
        }
    };
    let mut map_path = PathBuf::new();
    map_path.push(path);
    map_path.pop();
    map_path.push(file);
    log::debug!("Reading map from {}", map_path.display());
    let content = std::fs::read_to_string(&map_path)?;
    *map = serde_json::Value::String(content);
    Ok(true)
}

pub fn serialize_search_result<S>(
    result: &Result<SearchSummary, SearchFailure>,
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match result {
        Ok(result) => {
            let mut ser = s.serialize_map(Some(1))?;
            ser.serialize_entry("success", result)?;
            ser.end()
        }
        Err(failure) => {
            let mut ser = s.serialize_map(Some(2))?;
            ser.serialize_entry("error", failure)?;
            ser.serialize_entry("description", format!("{}", failure).as_str())?;
            ser.end()
        }
    }
}

/// Result of a single problem and frontier combination in an experiment.
#[derive(Serialize, Debug)]
pub struct ExperimentResult {
    pub name: Option<String>,
    pub frontier: String,
    #[serde(serialize_with = "serialize_search_result")]
    pub result: Result<SearchSummary, SearchFailure>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExperimentTask {
    pub problems: Vec<RouteProblem>,
    pub frontiers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub name: Option<String>,
    pub tasks: Vec<ExperimentTask>,
}

impl Experiment {
    /// Total number of problem and frontier combinations.
    pub fn run_count(&self) -> usize {
        self.tasks
            .iter()
            .map(|task| task.problems.len() * task.frontiers.len())
            .sum()
    }

    /// Run every problem of every task with each frontier of that task.
    pub fn run(&self) -> Vec<ExperimentResult> {
        let total = self.run_count();
        let mut results = Vec::with_capacity(total);
        for task in self.tasks.iter() {
            for problem in task.problems.iter() {
                for frontier in task.frontiers.iter() {
                    log::info!(
                        "[{}/{}] {} with {}",
                        results.len() + 1,
                        total,
                        problem.name.as_deref().unwrap_or("-"),
                        frontier
                    );
                    let result = problem.benchmark_custom(frontier);
                    if let Err(e) = &result {
                        log::warn!("Search failed: {e}");
                    }
                    results.push(ExperimentResult {
                        name: problem.name.clone(),
                        frontier: frontier.clone(),
                        result,
                    });
                }
            }
        }
        results
    }
}

pub fn read_experiment_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Experiment> {
    let content = std::fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    read_experiment_from_value(value, path)
}

/// Parse an experiment, reading the map files of its problems relative to the given `path`.
pub fn read_experiment_from_value<P: AsRef<Path>>(
    mut value: serde_json::Value,
    path: P,
) -> std::io::Result<Experiment> {
    let tasks = match value.get_mut("tasks") {
        Some(serde_json::Value::Array(tasks)) => tasks,
        Some(_) => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "tasks field is not array",
            ))
        }
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Missing field: tasks",
            ))
        }
    };
    for task in tasks.iter_mut() {
        match task.get_mut("problems") {
            Some(serde_json::Value::Array(problems)) => {
                for problem in problems.iter_mut() {
                    read_map_from_file(problem, &path)?;
                }
            }
            _ => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "Each task must have a list of problems",
                ))
            }
        }
    }
    let experiment: Experiment = serde_json::from_value(value)?;
    Ok(experiment)
}
