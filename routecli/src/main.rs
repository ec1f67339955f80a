use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use routelib::io::*;
use routelib::search;
use routelib::SearchFailure;

/// Log the error message and exit with the given status code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        log::error!($($arg)*);
        std::process::exit($code)
    }};
}

mod commands;
use commands::*;

/// Fuel-constrained grid routing with best-first search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cli.command.run();
}
