//! # cuketab
//!
//! A CLI tool that turns CSV exports into Cucumber-ready data tables.
//!
//! ## Overview
//!
//! cuketab is built on top of cuketablib and provides a command-line
//! interface for the conversion pipeline: it reads a CSV file, blanks out
//! sentinel `NULL` values, pads every column to a uniform width, and writes
//! a pipe-delimited table that can be pasted straight into a Gherkin
//! feature file.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a CSV export, writing to the default tmp/test.txt
//! cuketab -i export.csv
//!
//! # Choose the output file and a wider padding
//! cuketab -i export.csv -o features/users.table -p 5
//!
//! # Echo every intermediate stage while converting
//! cuketab -i export.csv -v
//! ```

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use cuketablib::{convert_file, write_lines, Conversion, ConvertOptions, DEFAULT_PADDING};

/// Default destination when `-o` is not given.
const DEFAULT_OUTPUT: &str = "tmp/test.txt";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("cuketab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert a CSV file into a fixed-width Cucumber data table")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .value_name("PATH")
                .help("Input CSV file to convert"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .default_value(DEFAULT_OUTPUT)
                .help("Output file for the rendered table"),
        )
        .arg(
            Arg::new("padding")
                .short('p')
                .long("padding")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("3")
                .help("Extra spaces beyond the widest value in each column"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Echo each intermediate pipeline stage to stdout"),
        )
}

/// Print one staged artifact as pretty JSON under a styled heading.
fn echo_stage<T: serde::Serialize>(label: &str, value: &T) {
    println!("{}", style(label).bold());
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("(unprintable: {e})"),
    }
}

/// Echo the intermediate stages of a conversion.
///
/// Records are echoed as cell rows in header order, so the output reads
/// like the CSV rather than like the alphabetized record mapping.
fn echo_conversion(conversion: &Conversion) {
    let dataset = &conversion.dataset;
    echo_stage(
        "Sanitized records:",
        &serde_json::json!({
            "header": dataset.header,
            "records": dataset.rows(),
        }),
    );
    echo_stage("Column widths:", &conversion.widths);
    echo_stage("Padded rows:", &conversion.padded);
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT);
    let padding = matches
        .get_one::<usize>("padding")
        .copied()
        .unwrap_or(DEFAULT_PADDING);
    let verbose = matches.get_flag("verbose");

    println!("Converting {}", style(input).bold());

    let options = ConvertOptions::new().padding(padding);
    let conversion = convert_file(input, options)?;

    if verbose {
        echo_conversion(&conversion);
    }

    println!(
        "Rendered {} lines, writing to {}",
        conversion.lines.len(),
        style(output).bold()
    );

    // The default destination lives under tmp/, which a clean checkout
    // won't have yet.
    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {}", parent.display()))?;
        }
    }

    write_lines(output, &conversion.lines)
        .with_context(|| format!("failed to write output file {output}"))?;

    println!("{}", style("Done.").green());
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
