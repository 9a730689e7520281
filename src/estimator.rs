//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens random closed sites of a fresh [`PercolationGrid`] until it percolates and
//! records the fraction of open sites at that moment. The threshold estimate is the mean of those
//! fractions over all trials.

use std::time::{Duration, Instant};

use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use serde::Serialize;
use tabled::Tabled;

use crate::{
    error::InvalidArgument,
    grid::PercolationGrid,
    random::{RandomSource, SitePicker, SiteSelection},
    stats::{ThresholdStats, format_value},
};

fn format_duration(duration: &Duration) -> String {
    format!("{:?}", duration)
}

/// Result of a single trial.
#[derive(Clone, Debug, Serialize, Tabled)]
pub struct TrialOutcome {
    #[tabled(rename = "Open Sites")]
    pub open_sites: usize,
    #[tabled(rename = "Fraction", display_with = "format_value")]
    pub fraction: f64,
    #[tabled(rename = "Time", display_with = "format_duration")]
    pub time: Duration,
}

/// Runs one trial on a fresh `n x n` grid, drawing sites from `source`.
pub fn run_trial(
    n: usize,
    source: &mut impl RandomSource,
    selection: SiteSelection,
) -> Result<TrialOutcome, InvalidArgument> {
    let start = Instant::now();
    let mut grid = PercolationGrid::new(n)?;
    let mut picker = SitePicker::new(selection, n);

    while !grid.percolates() {
        // A fully open grid always percolates, so the picker cannot run dry first.
        let Some((row, col)) = picker.next_closed(&grid, source)? else {
            break;
        };
        grid.open(row, col)?;
    }

    let open_sites = grid.number_of_open_sites();
    Ok(TrialOutcome {
        open_sites,
        fraction: open_sites as f64 / grid.site_count() as f64,
        time: start.elapsed(),
    })
}

/// Runs `trials` sequential trials on `n x n` grids with rejection sampling from `source`.
pub fn run(
    n: usize,
    trials: usize,
    source: &mut impl RandomSource,
) -> Result<ThresholdStats, InvalidArgument> {
    validate(n, trials)?;

    let samples = (0..trials)
        .map(|_| run_trial(n, source, SiteSelection::Rejection).map(|outcome| outcome.fraction))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ThresholdStats::from_samples(&samples))
}

fn validate(n: usize, trials: usize) -> Result<(), InvalidArgument> {
    if n == 0 || n.checked_mul(n).and_then(|sites| sites.checked_add(2)).is_none() {
        return Err(InvalidArgument::GridSize(n));
    }
    if trials == 0 {
        return Err(InvalidArgument::TrialCount(trials));
    }

    Ok(())
}

/// Configuration of an [`Estimator`].
#[derive(Clone, Debug, Serialize)]
pub struct EstimatorConfig {
    /// Side length of every grid
    pub grid_size: usize,
    /// Number of independent trials
    pub trials: usize,
    /// Base seed; trial `i` uses `seed + i`. Drawn from entropy when absent.
    pub seed: Option<u64>,
    /// How closed sites are picked
    pub selection: SiteSelection,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: None,
            selection: SiteSelection::default(),
            parallel: false,
        }
    }
}

/// Per-trial outcomes together with their summary.
#[derive(Clone, Debug, Serialize)]
pub struct Estimate {
    pub config: EstimatorConfig,
    /// The base seed actually used.
    pub seed: u64,
    pub outcomes: Vec<TrialOutcome>,
    pub stats: ThresholdStats,
}

/// Threshold estimator where every trial owns a generator seeded from a common base seed.
///
/// Trials share no state, so the same seed gives the same samples whether or not they run in
/// parallel.
#[derive(Clone, Debug)]
pub struct Estimator {
    config: EstimatorConfig,
    seed: u64,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, InvalidArgument> {
        validate(config.grid_size, config.trials)?;
        let seed = config.seed.unwrap_or_else(rand::random);

        Ok(Self { config, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn estimate(&self) -> Result<Estimate, InvalidArgument> {
        let outcomes = if self.config.parallel {
            (0..self.config.trials)
                .into_par_iter()
                .map(|trial| self.trial(trial))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..self.config.trials)
                .map(|trial| self.trial(trial))
                .collect::<Result<Vec<_>, _>>()?
        };

        let samples = outcomes.iter().map(|o| o.fraction).collect::<Vec<_>>();
        Ok(Estimate {
            config: self.config.clone(),
            seed: self.seed,
            stats: ThresholdStats::from_samples(&samples),
            outcomes,
        })
    }

    fn trial(&self, trial: usize) -> Result<TrialOutcome, InvalidArgument> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(trial as u64));
        run_trial(self.config.grid_size, &mut rng, self.config.selection)
    }
}
