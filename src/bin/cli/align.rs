//! Global alignment command

use medalign::compute;

use super::options::{self, fail, Parsed, SCORE_MATRIX, SCORING_OPTIONS};

/// Align two strings and print the transformation steps
///
/// Usage: medalign align [OPTIONS] [SOURCE TARGET]
///
/// OPTIONS:
///     --match N          Match reward (default: 1)
///     --mismatch N       Mismatch penalty (default: -1)
///     --gap N            Gap penalty (default: -1)
///     --gap-filler C     Gap symbol (default: -, or the first of * . ~ + = | ^ not in either string)
///     --score-matrix     Also print the labeled score matrix
///     --help             Show help message
pub fn align(args: &[String]) {
    let accepted: Vec<&str> = SCORING_OPTIONS.iter().copied().chain([SCORE_MATRIX]).collect();
    let run = match options::parse(args, &accepted) {
        Ok(Parsed::Run(run)) => run,
        Ok(Parsed::Help) => {
            print_align_help();
            return;
        }
        Err(e) => fail(e),
    };

    let (source, target) = options::source_and_target(&run.positional).unwrap_or_else(|e| fail(e));
    let result = compute(&source, &target, &run.config).unwrap_or_else(|e| fail(e));
    let pair = &result.alignment.pair;

    if run.show_score_matrix {
        println!("{}", result.score_matrix);
    }
    println!("Score:    {}", result.alignment.score);
    println!("Identity: {:.1}%", pair.identity() * 100.0);
    println!("CIGAR:    {}", pair.cigar_string());
    print!("{}", result.transformation);
}

fn print_align_help() {
    println!("Needleman-Wunsch global alignment with step-by-step transformation");
    println!();
    println!("USAGE:");
    println!("    medalign align [OPTIONS] [SOURCE TARGET]");
    println!();
    println!("OPTIONS:");
    println!("    --match N          Match reward (default: 1)");
    println!("    --mismatch N       Mismatch penalty (default: -1)");
    println!("    --gap N            Gap penalty (default: -1)");
    println!("    --gap-filler C     Gap symbol, must not occur in either string (default: first free of - * . ~ + = | ^)");
    println!("    --score-matrix     Also print the labeled score matrix");
    println!("    -h, --help         Show this help message");
    println!();
    println!("Ties between optimal alignments are broken diagonal, then deletion, then insertion.");
}
