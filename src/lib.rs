//! Site percolation on square grids and Monte Carlo estimation of the percolation threshold.

pub mod error;
pub mod estimator;
pub mod grid;
pub mod random;
pub mod report;
pub mod stats;
pub mod union_find;
pub mod utils;

pub use error::InvalidArgument;
pub use estimator::{Estimate, Estimator, EstimatorConfig, TrialOutcome, run, run_trial};
pub use grid::PercolationGrid;
pub use random::{RandomSource, SiteSelection};
pub use stats::ThresholdStats;
