//! Minimum edit distance command

use medalign::compute;

use super::options::{self, fail, Parsed, COST_OPTIONS, MATRIX};

/// Print the weighted edit distance between two strings
///
/// Usage: medalign distance [OPTIONS] [SOURCE TARGET]
///
/// OPTIONS:
///     --insert N       Insertion cost (default: 1)
///     --delete N       Deletion cost (default: 1)
///     --substitute N   Substitution cost (default: 2)
///     --matrix         Also print the labeled distance matrix
///     --help           Show help message
pub fn distance(args: &[String]) {
    let accepted: Vec<&str> = COST_OPTIONS.iter().copied().chain([MATRIX]).collect();
    let run = match options::parse(args, &accepted) {
        Ok(Parsed::Run(run)) => run,
        Ok(Parsed::Help) => {
            print_distance_help();
            return;
        }
        Err(e) => fail(e),
    };

    let (source, target) = options::source_and_target(&run.positional).unwrap_or_else(|e| fail(e));
    let result = compute(&source, &target, &run.config).unwrap_or_else(|e| fail(e));

    if run.show_matrix {
        println!("{}", result.cost_matrix);
    }
    println!("{}", result.distance);
}

fn print_distance_help() {
    println!("Minimum edit distance between two strings");
    println!();
    println!("USAGE:");
    println!("    medalign distance [OPTIONS] [SOURCE TARGET]");
    println!();
    println!("OPTIONS:");
    println!("    --insert N       Insertion cost (default: 1)");
    println!("    --delete N       Deletion cost (default: 1)");
    println!("    --substitute N   Substitution cost (default: 2)");
    println!("    --matrix         Also print the labeled distance matrix");
    println!("    -h, --help       Show this help message");
    println!();
    println!("EXAMPLE:");
    println!("    medalign distance GAMBOL GUMBO        # prints 3");
}
