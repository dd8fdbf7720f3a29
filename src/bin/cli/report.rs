//! Full report command

use medalign::{compute, Report};

use super::options::{self, fail, Parsed, COST_OPTIONS, SCORING_OPTIONS};

/// Print the distance matrix, distance, alignment and steps
///
/// Usage: medalign report [OPTIONS] [SOURCE TARGET]
///
/// Accepts every cost and scoring option of `distance` and `align`.
pub fn report(args: &[String]) {
    let accepted: Vec<&str> = COST_OPTIONS.iter().chain(SCORING_OPTIONS).copied().collect();
    let run = match options::parse(args, &accepted) {
        Ok(Parsed::Run(run)) => run,
        Ok(Parsed::Help) => {
            print_report_help();
            return;
        }
        Err(e) => fail(e),
    };

    let (source, target) = options::source_and_target(&run.positional).unwrap_or_else(|e| fail(e));
    let result = compute(&source, &target, &run.config).unwrap_or_else(|e| fail(e));

    print!("{}", Report::new(&result));
}

fn print_report_help() {
    println!("Distance matrix, edit distance, alignment and transformation steps");
    println!();
    println!("USAGE:");
    println!("    medalign report [OPTIONS] [SOURCE TARGET]");
    println!();
    println!("OPTIONS:");
    println!("    --insert N, --delete N, --substitute N    Edit costs (default: 1, 1, 2)");
    println!("    --match N, --mismatch N, --gap N          Alignment weights (default: 1, -1, -1)");
    println!("    --gap-filler C                            Gap symbol (default: -, or the first of * . ~ + = | ^ not in either string)");
    println!("    -h, --help                                Show this help message");
    println!();
    println!("Missing SOURCE/TARGET are read interactively.");
}
