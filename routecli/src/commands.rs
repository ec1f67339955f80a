use super::*;

mod solve;
mod run;

mod list;
pub use list::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Find a route on a single map.
    #[command(alias = "s")]
    Solve(Solve),

    /// Validate a map and print its summary.
    #[command(alias = "c")]
    Check(Check),

    /// Run an experiment.
    #[command(alias = "r")]
    Run(Run),

    /// Print the list of all frontier classes.
    ListFrontiers,
}

#[derive(clap::Args, Debug)]
pub struct Solve {
    /// Path to the map text file, or a JSON/YAML problem file.
    path: PathBuf,
    /// Frontier class.
    #[arg(short, long, default_value = "AStarFrontier")]
    frontier: String,
    /// Print the results as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
    /// Do not print the map with the route.
    #[arg(long, default_value_t = false)]
    no_render: bool,
}

#[derive(clap::Args, Debug)]
pub struct Check {
    /// Path to the map text file, or a JSON/YAML problem file.
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the experiment JSON file.
    path: PathBuf,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Solve(args) => args.run(),
            Command::Check(args) => args.run(),
            Command::Run(args) => args.run(),
            Command::ListFrontiers => list_frontiers(),
        }
    }
}

/// Read a problem file or exit.
fn read_problem(path: &PathBuf) -> RouteProblem {
    match RouteProblem::read_from_file(path) {
        Ok(x) => x,
        Err(err) => fatal_error!(1, "Cannot read problem: {}", err),
    }
}
