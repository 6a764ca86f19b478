use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;

use rematch::Pattern;

/// Input name standing for standard input.
const STDIN_NAME: &str = "-";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to look for
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Files to read (standard input if none, or for `-`)
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Match from the start of each line instead of searching within it
    #[arg(short = 'x', long)]
    full: bool,

    /// Select lines that do not match
    #[arg(short = 'v', long)]
    invert_match: bool,

    /// Print only a count of selected lines
    #[arg(short = 'c', long)]
    count: bool,

    /// Prefix each line with its line number
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Prefix each line with its file name
    #[arg(short = 'H', long)]
    with_filename: bool,
}

impl Args {
    fn selects(&self, pattern: &Pattern, line: &str) -> bool {
        let matched = if self.full {
            pattern.full_match(line)
        } else {
            pattern.search(line)
        };
        matched != self.invert_match
    }

    fn show_filename(&self) -> bool {
        self.with_filename || self.files.len() > 1
    }

    fn input_names(&self) -> Vec<&str> {
        if self.files.is_empty() {
            vec![STDIN_NAME]
        } else {
            self.files.iter().map(String::as_str).collect()
        }
    }
}

/// Totals over all inputs of one run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Outcome {
    selected: usize,
    failed: usize,
}

impl Outcome {
    /// 2 if any input could not be read, else 0 if a line was selected, else 1.
    fn status(&self) -> u8 {
        if self.failed > 0 {
            2
        } else if self.selected > 0 {
            0
        } else {
            1
        }
    }
}

fn read_input(name: &str) -> Result<Vec<u8>> {
    if name == STDIN_NAME {
        let mut contents = Vec::new();
        io::stdin()
            .read_to_end(&mut contents)
            .context("Failed to read stdin")?;
        Ok(contents)
    } else {
        fs::read(name).with_context(|| format!("Failed to read {}", name))
    }
}

/// Print selected lines of every input to `out`.
///
/// An input that cannot be read is reported to `err` and skipped; the
/// remaining inputs are still processed. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD before matching.
fn run<R, W, E>(args: &Args, mut read: R, out: &mut W, err: &mut E) -> Result<Outcome>
where
    R: FnMut(&str) -> Result<Vec<u8>>,
    W: Write,
    E: Write,
{
    let pattern = Pattern::new(&args.pattern);
    debug!(
        "pattern {:?} (anchored: {}), {} file(s), full: {}",
        pattern.as_str(),
        pattern.is_anchored(),
        args.files.len(),
        args.full
    );

    let mut outcome = Outcome::default();
    for name in args.input_names() {
        let bytes = match read(name) {
            Ok(bytes) => bytes,
            Err(e) => {
                writeln!(err, "{:#}", e)?;
                outcome.failed += 1;
                continue;
            }
        };
        let contents = String::from_utf8_lossy(&bytes);

        let mut selected = 0;
        for (idx, line) in contents.lines().enumerate() {
            if !args.selects(&pattern, line) {
                continue;
            }
            selected += 1;
            if args.count {
                continue;
            }
            if args.show_filename() {
                write!(out, "{}:", name)?;
            }
            if args.line_number {
                write!(out, "{}:", idx + 1)?;
            }
            writeln!(out, "{}", line)?;
        }
        debug!("{}: {} line(s) selected", name, selected);
        if args.count {
            if args.show_filename() {
                writeln!(out, "{}:{}", name, selected)?;
            } else {
                writeln!(out, "{}", selected)?;
            }
        }
        outcome.selected += selected;
    }
    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&args, read_input, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => ExitCode::from(outcome.status()),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(2)
        }
    }
}
