/// Printing map summaries and frontier classes.
use super::*;

pub fn list_frontiers() {
    let result = search::all_frontiers();
    let serialized = match serde_json::to_string_pretty(&result) {
        Ok(s) => s,
        Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
    };
    println!("{}", serialized);
}

impl Check {
    pub fn run(self) {
        let Check { path } = self;

        let problem = read_problem(&path);
        let grid = match problem.grid() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Invalid map: {}", err),
        };
        let (rows, cols) = grid.shape();

        println!(
            "{:14}{}",
            "Problem Name:".bold(),
            problem.name.as_deref().unwrap_or("-")
        );
        println!("{:14}{} x {}", "Shape:".bold(), rows, cols);
        println!("{:14}{}", "Starts:".bold(), grid.starting_states().len());
        println!("{:14}{}", "Goals:".bold(), grid.goals().len());
        println!("{:14}{}", "Stations:".bold(), grid.fuel_stations().len());
        println!("{}", "Map is valid".green().bold());
    }
}
