//! Random site selection for Monte Carlo trials.
//!
//! The estimator only ever needs uniform integers in a half-open range, which is what
//! [`RandomSource`] provides. Any [`rand::Rng`] is a source; tests plug in scripted ones.

use clap::ValueEnum;
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::InvalidArgument, grid::PercolationGrid};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `[low, high_exclusive)`.
    fn next_int(&mut self, low: usize, high_exclusive: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, low: usize, high_exclusive: usize) -> usize {
        self.gen_range(low..high_exclusive)
    }
}

/// How a trial picks the next closed site to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SiteSelection {
    /// Draw coordinates uniformly over the whole grid, redrawing when the site is already open.
    #[default]
    Rejection,
    /// Draw uniformly among the sites that are still closed.
    Shuffle,
}

/// Per-trial state for a [`SiteSelection`].
#[derive(Debug)]
pub(crate) enum SitePicker {
    Rejection { n: usize },
    /// Closed sites not yet drawn.
    Shuffle { remaining: Vec<(usize, usize)> },
}

impl SitePicker {
    pub fn new(selection: SiteSelection, n: usize) -> Self {
        match selection {
            SiteSelection::Rejection => Self::Rejection { n },
            SiteSelection::Shuffle => Self::Shuffle {
                remaining: iproduct!(1..=n, 1..=n).collect(),
            },
        }
    }

    /// Picks a closed site of `grid`, or `None` once every site is open.
    pub fn next_closed(
        &mut self,
        grid: &PercolationGrid,
        source: &mut impl RandomSource,
    ) -> Result<Option<(usize, usize)>, InvalidArgument> {
        match self {
            Self::Rejection { n } => {
                if grid.number_of_open_sites() == grid.site_count() {
                    return Ok(None);
                }

                loop {
                    let row = source.next_int(1, *n + 1);
                    let col = source.next_int(1, *n + 1);
                    if !grid.is_open(row, col)? {
                        return Ok(Some((row, col)));
                    }
                }
            }
            Self::Shuffle { remaining } => {
                while !remaining.is_empty() {
                    let index = source.next_int(0, remaining.len());
                    let (row, col) = remaining.swap_remove(index);
                    if !grid.is_open(row, col)? {
                        return Ok(Some((row, col)));
                    }
                }

                Ok(None)
            }
        }
    }
}
