//! The single error kind raised by the percolation core.
//!
//! Every public operation validates its arguments before touching any state, so
//! a returned [`InvalidArgument`] always means nothing was modified.

use std::{error::Error, fmt};

/// An argument passed to a public operation was outside its valid domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The grid side length was zero, or `n * n + 2` does not fit in a `usize`.
    GridSize(usize),
    /// The number of trials was zero.
    TrialCount(usize),
    /// A 1-indexed site coordinate was outside `[1, n]`.
    Site { row: usize, col: usize, n: usize },
    /// An element id was outside `[0, count)`.
    Element { id: usize, count: usize },
    /// A union-find was requested over zero elements.
    EmptyUniverse,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSize(n) => write!(f, "invalid grid size {n}, must be positive"),
            Self::TrialCount(trials) => {
                write!(f, "invalid trial count {trials}, must be positive")
            }
            Self::Site { row, col, n } => {
                write!(f, "site ({row}, {col}) is outside the {n}x{n} grid")
            }
            Self::Element { id, count } => {
                write!(f, "element {id} is out of range for {count} elements")
            }
            Self::EmptyUniverse => write!(f, "a union-find needs at least one element"),
        }
    }
}

impl Error for InvalidArgument {}
