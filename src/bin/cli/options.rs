//! Argument parsing and interactive input shared by all commands

use std::io::{self, BufRead, Write};
use std::process;

use medalign::config::{parse_gap_filler, parse_weight};
use medalign::{MedConfig, MedError};

/// Options that take a value
pub const INSERT: &str = "--insert";
pub const DELETE: &str = "--delete";
pub const SUBSTITUTE: &str = "--substitute";
pub const MATCH: &str = "--match";
pub const MISMATCH: &str = "--mismatch";
pub const GAP: &str = "--gap";
pub const GAP_FILLER: &str = "--gap-filler";

/// Switches
pub const MATRIX: &str = "--matrix";
pub const SCORE_MATRIX: &str = "--score-matrix";

/// Edit-distance cost options
pub const COST_OPTIONS: &[&str] = &[INSERT, DELETE, SUBSTITUTE];
/// Alignment weight options
pub const SCORING_OPTIONS: &[&str] = &[MATCH, MISMATCH, GAP, GAP_FILLER];

/// Parsed command line for one command
#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: MedConfig,
    pub show_matrix: bool,
    pub show_score_matrix: bool,
    pub positional: Vec<String>,
}

/// Result of parsing: run with options, or help was requested
pub enum Parsed {
    Run(RunOptions),
    Help,
}

/// Parse `args`, accepting only the options listed in `accepted`
///
/// Values may be negative (`--gap -2`), so the token after a valued option
/// is always taken as its value.
pub fn parse(args: &[String], accepted: &[&str]) -> Result<Parsed, String> {
    let mut options = RunOptions::default();
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--help" | "-h" => return Ok(Parsed::Help),
            _ if arg.starts_with("--") && !accepted.contains(&arg) => {
                return Err(format!("Unknown option '{}'", arg));
            }
            MATRIX => {
                options.show_matrix = true;
                i += 1;
            }
            SCORE_MATRIX => {
                options.show_score_matrix = true;
                i += 1;
            }
            _ if arg.starts_with("--") => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                apply(&mut options.config, arg, value).map_err(|e| e.to_string())?;
                i += 2;
            }
            _ => {
                options.positional.push(args[i].clone());
                i += 1;
            }
        }
    }

    if options.positional.len() > 2 {
        return Err(format!(
            "Expected at most SOURCE and TARGET, got {} strings",
            options.positional.len()
        ));
    }

    Ok(Parsed::Run(options))
}

fn apply(config: &mut MedConfig, option: &str, value: &str) -> Result<(), MedError> {
    *config = match option {
        INSERT => config.with_insert(parse_weight("insert", value)?),
        DELETE => config.with_delete(parse_weight("delete", value)?),
        SUBSTITUTE => config.with_substitute(parse_weight("substitute", value)?),
        MATCH => config.with_match(parse_weight("match", value)?),
        MISMATCH => config.with_mismatch(parse_weight("mismatch", value)?),
        GAP => config.with_gap(parse_weight("gap", value)?),
        GAP_FILLER => config.with_gap_filler(parse_gap_filler(value)?),
        _ => *config,
    };
    Ok(())
}

/// Source and target from the command line, prompting for any that are missing
pub fn source_and_target(positional: &[String]) -> Result<(String, String), MedError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let source = match positional.first() {
        Some(s) => s.clone(),
        None => prompt(&mut input, "Source string: ")?,
    };
    let target = match positional.get(1) {
        Some(t) => t.clone(),
        None => prompt(&mut input, "Target string: ")?,
    };
    Ok((source, target))
}

fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<String, MedError> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", label)?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input").into());
    }
    // Only the line terminator is dropped; other whitespace is a symbol
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

/// Print an error and exit with status 1
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}
