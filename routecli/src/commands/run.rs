/// Commands related to running experiments.
use super::*;

fn print_result(result: &ExperimentResult) {
    eprintln!(
        "{:14}{}",
        "Problem Name:".bold(),
        result.name.as_deref().unwrap_or("-")
    );
    eprintln!("{:14}{}", "Frontier:".bold(), result.frontier);
    match &result.result {
        Ok(summary) => {
            match summary.cost {
                Some(cost) => eprintln!("{:14}{}", "Cost:".bold(), cost),
                None => eprintln!("{:14}{}", "Cost:".bold(), "no route".red()),
            }
            eprintln!("{:14}{}", "Expansions:".bold(), summary.expansions);
            eprintln!("{:14}{}", "Total time:".bold(), summary.total_time);
        }
        Err(failure) => {
            eprintln!("{}", "Benchmark failed!".red().bold());
            eprintln!("{}", failure);
        }
    }
    eprintln!();
}

impl Run {
    pub fn run(self) {
        let Run { path } = self;

        let experiment = match read_experiment_from_file(&path) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot parse experiment: {}", err),
        };
        eprintln!(
            "{:14}{}\n",
            "Experiment:".bold(),
            experiment.name.as_deref().unwrap_or("-")
        );

        let results = experiment.run();
        for result in results.iter() {
            print_result(result);
        }

        let serialized = match serde_json::to_string_pretty(&results) {
            Ok(s) => s,
            Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
        };
        println!("{}", serialized);
        eprintln!("{}", "Done!".green().bold());
    }
}
