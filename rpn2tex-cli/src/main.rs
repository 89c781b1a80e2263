mod error_formatter;

use crate::error_formatter::ErrorFormatter;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use rpn2tex::interpreter::convert_to_tree;
use rpn2tex::interpreter::generator::generate;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const STDIN_PATH: &str = "-";

/// Converts Reverse Polish Notation expressions to LaTeX
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// Input file path, or "-" to read from stdin
    input: String,

    /// Output file path (default: stdout)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Also print the parsed expression tree to stderr
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Arguments) -> Result<()> {
    let source = read_input(&args.input, io::stdin().lock())?;
    debug!("read {} bytes from {}", source.len(), args.input);

    let latex = convert_source(&source, args.tree)?;

    write_output(
        args.output.as_deref(),
        &latex,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Converts the source, rendering any conversion error with its surrounding source lines.
fn convert_source(source: &str, print_tree: bool) -> Result<String> {
    let tree = convert_to_tree(source).map_err(|error| {
        let formatter = ErrorFormatter::new(source);
        anyhow!(formatter.format_error(&error.to_string(), error.line(), error.column()))
    })?;

    if print_tree {
        eprint!("{}", tree);
    }

    Ok(generate(&tree))
}

fn read_input(path: &str, mut stdin: impl Read) -> Result<String> {
    if path == STDIN_PATH {
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path))
    }
}

/// Writes the LaTeX to `path`, or to `stdout` when no path is given. Writing to a file reports
/// the generated path on `stderr`.
fn write_output(
    path: Option<&Path>,
    latex: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", latex))
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("wrote {} bytes", latex.len() + 1);
            writeln!(stderr, "Generated: {}", path.display())?;
        }
        None => writeln!(stdout, "{}", latex).context("Failed to write to stdout")?,
    }
    Ok(())
}
