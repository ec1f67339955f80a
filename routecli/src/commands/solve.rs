/// Solving a single problem.
use super::*;

fn print_solution(solution: &RouteSolution, render: bool) {
    println!(
        "{:14}{}",
        "Problem Name:".bold(),
        solution.name.as_deref().unwrap_or("-")
    );
    println!("{:14}{}", "Frontier:".bold(), solution.frontier);
    println!("{:14}{}", "Expansions:".bold(), solution.expansions);
    println!("{:14}{}", "Total time:".bold(), solution.total_time);
    println!("{:14}{}", "Max memory:".bold(), solution.max_memory);

    match solution.cost {
        Some(cost) => {
            println!("{:14}{}", "Route:".bold(), solution.labels().join(", "));
            println!("{:14}{}", "Cost:".bold(), cost);
        }
        None => println!("{}", "No route found".red().bold()),
    }

    if render {
        println!();
        println!("{}", solution.rendered);
    }
}

impl Solve {
    pub fn run(self) {
        let Solve {
            path,
            frontier,
            json,
            no_render,
        } = self;

        let problem = read_problem(&path);
        let solution = match problem.solve_custom(&frontier) {
            Ok(s) => s,
            Err(err @ SearchFailure::MalformedMap(_)) | Err(err @ SearchFailure::BadInput(_)) => {
                fatal_error!(1, "Invalid problem: {}", err)
            }
            Err(err) => fatal_error!(2, "Search failed: {}", err),
        };

        if json {
            let serialized = match serde_json::to_string_pretty(&solution) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            println!("{}", serialized);
        } else {
            print_solution(&solution, !no_render);
        }
    }
}
