//! medalign CLI - minimum edit distance and global alignment
//!
//! Computes the weighted edit distance between two strings and an optimal
//! Needleman-Wunsch alignment, then prints how the source is edited into
//! the target one column at a time.
//!
//! # Usage
//!
//! ```bash
//! # Edit distance (default costs insert=1, delete=1, substitute=2)
//! medalign distance GAMBOL GUMBO
//! medalign distance --substitute 1 --matrix kitten sitting
//!
//! # Global alignment and transformation steps
//! medalign align --match 2 --mismatch -1 --gap -2 kitten sitting
//!
//! # Full report; prompts for strings not given on the command line
//! medalign report
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

mod cli;

const COMMANDS: &[&str] = &["distance", "align", "report", "help", "version"];

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];
    let command_args = &args[2..];

    match command.as_str() {
        "distance" => cli::distance::distance(command_args),
        "align" => cli::align::align(command_args),
        "report" => cli::report::report(command_args),

        "help" | "--help" | "-h" => print_help(),
        "version" | "--version" | "-V" => print_version(),

        _ => {
            eprintln!("Error: Unknown command '{}'", command);

            let suggestions = suggest_similar_command(command);
            if !suggestions.is_empty() {
                eprintln!();
                eprintln!("Did you mean:");
                for suggestion in suggestions {
                    eprintln!("    medalign {}", suggestion);
                }
            }

            eprintln!();
            eprintln!("Run 'medalign --help' to see all available commands.");
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    println!("medalign {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    medalign <COMMAND> [OPTIONS] [SOURCE TARGET]");
    println!();
    println!("COMMANDS:");
    println!("    distance    Minimum edit distance (optionally with the full matrix)");
    println!("    align       Needleman-Wunsch alignment and transformation steps");
    println!("    report      Distance matrix, distance, alignment and steps");
    println!("    help        Show this help message");
    println!("    version     Show version information");
    println!();
    println!("Strings not given on the command line are read interactively.");
    println!("For command-specific help: medalign <COMMAND> --help");
}

fn print_help() {
    print_usage();
}

fn print_version() {
    println!("medalign {}", env!("CARGO_PKG_VERSION"));
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
}

/// Suggest commands within edit distance 2 of a mistyped one
fn suggest_similar_command(input: &str) -> Vec<&'static str> {
    use medalign::alignment::{edit_distance, EditCosts};

    let mut suggestions = Vec::new();

    match input.to_lowercase().as_str() {
        "dist" | "med" | "levenshtein" => suggestions.push("distance"),
        "nw" | "alignment" | "needleman-wunsch" => suggestions.push("align"),
        "all" | "full" => suggestions.push("report"),
        _ => {}
    }

    if suggestions.is_empty() && input.chars().count() > 3 {
        let typed: Vec<char> = input.to_lowercase().chars().collect();
        let unit = EditCosts::new(1, 1, 1);
        for &command in COMMANDS {
            let candidate: Vec<char> = command.chars().collect();
            if edit_distance(&typed, &candidate, &unit) <= 2 {
                suggestions.push(command);
            }
        }
    }

    suggestions.truncate(3);
    suggestions
}
