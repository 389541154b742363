//! Rolls dice notation from the command line.
//!
//! ```bash
//! roll 1d20+5
//! roll -v 2d6 1d8-1
//! echo "The chest holds [3d6 + 10] gold and [1d4] gems" | roll --text
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use tabledice::roll::{LabeledStringifier, SimpleStringifier};
use tabledice::{Roller, Stringify};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roll", about = "Roll dice notation such as 1d20+5")]
struct Args {
    /// One or more roll specs, like 1d6+2.
    #[arg(value_name = "ROLLSPEC", required_unless_present = "text")]
    specs: Vec<String>,

    /// Print every die rolled, not just the total.
    #[arg(short, long)]
    verbose: bool,

    /// Seed the random source to make rolls reproducible.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read lines from stdin and roll every bracketed expression in them.
    #[arg(short, long, conflicts_with = "specs")]
    text: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabledice=warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(seed = ?args.seed, text = args.text, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.text {
        annotate_lines(io::stdin().lock(), &mut out, &mut rng)
    } else {
        roll_specs(&args.specs, args.verbose, &mut out, &mut rng)
    }
}

fn roll_specs<W: Write, R: Roller>(
    specs: &[String],
    verbose: bool,
    out: &mut W,
    rng: &mut R,
) -> Result<()> {
    for spec in specs {
        let expr =
            tabledice::parse(spec).with_context(|| format!("invalid roll spec {:?}", spec))?;
        let roll = expr.roll(rng);

        let line = match (verbose, specs.len() > 1) {
            (false, _) => roll.total().to_string(),
            (true, false) => SimpleStringifier::new().stringify(&roll),
            (true, true) => LabeledStringifier::new(spec.trim()).stringify(&roll),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn annotate_lines<I: BufRead, W: Write, R: Roller>(
    input: I,
    out: &mut W,
    rng: &mut R,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        writeln!(out, "{}", tabledice::substitute(&line, rng))?;
    }
    Ok(())
}
