//! Boolean formula calculator - command line interface
//!
//! Reads one formula per line from the source file and writes the
//! selected report to the destination file. A parse fault on any line
//! replaces the whole destination content with the fault message.

use boolcalc::{completeness_report, table_report, zhegalkin_report};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Mode {
    /// Build the truth table of every formula
    Table,
    /// Build the Zhegalkin polynomial of every formula
    Zhegalkin,
    /// Check the system of formulas for functional completeness
    Isfull,
}

#[derive(Parser, Debug)]
#[command(name = "boolcalc")]
#[command(about = "Boolean formula calculator", long_about = None)]
#[command(version)]
struct Args {
    /// Operation to perform
    #[arg(value_enum)]
    mode: Mode,

    /// Input file, one formula per line
    #[arg(value_name = "SOURCE")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "DEST")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let input = match fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading '{}': {}", args.input.display(), e);
            process::exit(2);
        }
    };

    let report = match args.mode {
        Mode::Table => table_report(&input),
        Mode::Zhegalkin => zhegalkin_report(&input),
        Mode::Isfull => completeness_report(&input),
    };

    // all-or-nothing: a fault message replaces the whole report
    let output = match report {
        Ok(text) => text,
        Err(e) => e.to_string(),
    };

    if let Err(e) = fs::write(&args.output, output) {
        eprintln!("Error writing '{}': {}", args.output.display(), e);
        process::exit(3);
    }
}
