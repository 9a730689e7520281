//! Estimates the percolation threshold of an `n x n` grid.
//!
//! By default this prints the mean, standard deviation and 95% confidence interval of the
//! fraction of open sites at which `trials` random grids first percolate.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use percolation::report::{OutputFormat, render};
use percolation::utils::json::save_json;
use percolation::{Estimator, EstimatorConfig, SiteSelection};

/// CLI arguments for threshold estimation
#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate the site percolation threshold by Monte Carlo simulation", long_about = None)]
struct Args {
    /// Grid side length (n)
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Base seed; trial i uses seed + i. Random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// How the next closed site is picked
    #[arg(long, value_enum, default_value_t)]
    selection: SiteSelection,

    /// Run trials in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Also write the full estimate as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = EstimatorConfig {
        grid_size: args.n,
        trials: args.trials,
        seed: args.seed,
        selection: args.selection,
        parallel: args.parallel,
    };
    let estimator = Estimator::new(config).context("invalid arguments")?;

    if args.verbose {
        eprintln!(
            "{} {} trials on a {}x{} grid (seed {}, {:?} selection{})",
            "Running".green().bold(),
            args.trials,
            args.n,
            args.n,
            estimator.seed(),
            args.selection,
            if args.parallel { ", parallel" } else { "" }
        );
    }

    let start = Instant::now();
    let estimate = estimator.estimate()?;

    if args.verbose {
        eprintln!(
            "{} in {:?}, {} sites opened in total",
            "Finished".green().bold(),
            start.elapsed(),
            estimate.outcomes.iter().map(|o| o.open_sites).sum::<usize>()
        );
        if estimate.stats.stddev.is_nan() {
            eprintln!(
                "{} a single trial leaves the standard deviation undefined",
                "warning:".yellow().bold()
            );
        }
    }

    print!("{}", render(&estimate, args.format)?);

    if let Some(path) = &args.output {
        save_json(&estimate, path)?;
        if args.verbose {
            eprintln!("{} estimate to {}", "Saved".green().bold(), path.display());
        }
    }

    Ok(())
}
