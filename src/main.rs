use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::*;

use fibmark::bench::{run_selection, Selection};
use fibmark::error::{FibmarkError, FibmarkResult};
use fibmark::fibonacci::{MemoTable, MEMO_CAPACITY};
use fibmark::report;

/// fibmark - time three Fibonacci generators against each other
#[derive(Parser)]
#[command(name = "fibmark")]
#[command(author = "Arthur")]
#[command(version = "0.1.0")]
#[command(about = "Fibonacci benchmarks - iterative vs recursive vs memoized", long_about = None)]
struct Cli {
    /// How many Fibonacci numbers to generate (1 up to the table capacity)
    #[arg(value_name = "N", allow_hyphen_values = true)]
    count: Option<String>,

    /// Algorithm selector: 0 iterative, 1 recursive, 2 memoized,
    /// 3 all three (default), 4 iterative and memoized
    #[arg(value_name = "SELECTOR", allow_hyphen_values = true)]
    selector: Option<String>,

    /// Give any value here to print each generated series
    #[arg(value_name = "PRINT")]
    print: Option<String>,

    /// Append a timestamped metrics row per trial to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Emit the report as a single JSON document instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> FibmarkResult<()> {
    let count = parse_count(cli.count.as_deref())?;
    let (code, selection) = parse_selector(cli.selector.as_deref())?;
    let print_series = cli.print.is_some();

    let mut table = MemoTable::new();
    let slots = run_selection(selection, count, &mut table)?;

    if cli.json {
        let run_report = report::RunReport::new(count, code, &slots, print_series);
        println!("{}", run_report.to_json()?);
    } else {
        if print_series {
            for (_, slot) in &slots {
                if let Some(trial) = slot {
                    println!("{}", report::series_line(&trial.series));
                }
            }
        }
        match slots.as_slice() {
            [(_, Some(trial))] if selection.single().is_some() => {
                println!("{}", report::single_line(trial));
            }
            _ => println!("{}", report::comparison_line(&slots)),
        }
    }

    if let Some(path) = &cli.csv {
        report::append_csv(path, &slots)?;
    }

    Ok(())
}

/// The count is validated by hand so every bad shape - missing,
/// non-numeric, zero or negative, at or past the table capacity - gets
/// its own message and a clean exit status of 1.
fn parse_count(raw: Option<&str>) -> FibmarkResult<usize> {
    let raw = raw.ok_or(FibmarkError::MissingCount)?;
    let count: i64 = raw.trim().parse().map_err(|_| FibmarkError::InvalidCount {
        value: raw.to_string(),
    })?;
    if count <= 0 {
        return Err(FibmarkError::InvalidCount {
            value: raw.to_string(),
        });
    }
    let count = count as usize;
    if count >= MEMO_CAPACITY {
        return Err(FibmarkError::CountTooLarge {
            count,
            capacity: MEMO_CAPACITY,
        });
    }
    Ok(count)
}

fn parse_selector(raw: Option<&str>) -> FibmarkResult<(u8, Selection)> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Ok((3, Selection::All)),
    };
    let code: u8 = raw
        .trim()
        .parse()
        .map_err(|_| FibmarkError::InvalidSelector {
            value: raw.to_string(),
        })?;
    let selection = Selection::from_code(code)?;
    Ok((code, selection))
}
