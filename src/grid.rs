//! Site percolation on an `n x n` grid.
//!
//! Sites are addressed with 1-indexed `(row, col)` pairs in `[1, n] x [1, n]`. Internally each
//! site maps to the element id `(row - 1) * n + (col - 1)`, followed by two virtual elements:
//! `n * n` (virtual top) and `n * n + 1` (virtual bottom). Opening a site in the first or last
//! row wires it to the matching virtual element, so "the system percolates" reduces to a single
//! connectivity check between the two.

use crate::{
    error::InvalidArgument,
    union_find::{SetId, UnionFind},
};

/// An `n x n` grid of open or closed sites with incremental connectivity queries.
///
/// Two union-finds are kept in lockstep. `connectivity` includes both virtual elements and
/// answers [`PercolationGrid::percolates`]. `fullness` only has the virtual top, so a bottom row
/// site never becomes full just because the bottom row is joined to the top through some other
/// path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PercolationGrid {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    connectivity: UnionFind,
    fullness: UnionFind,
}

impl PercolationGrid {
    /// Creates a grid with every site closed.
    pub fn new(n: usize) -> Result<Self, InvalidArgument> {
        let site_count = n
            .checked_mul(n)
            .filter(|&count| count > 0 && count.checked_add(2).is_some())
            .ok_or(InvalidArgument::GridSize(n))?;

        Ok(Self {
            n,
            open: vec![false; site_count],
            open_count: 0,
            connectivity: UnionFind::with_size(site_count + 2)?,
            fullness: UnionFind::with_size(site_count + 1)?,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn site_count(&self) -> usize {
        self.open.len()
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens the site at `(row, col)` and connects it to its open neighbours.
    ///
    /// Opening an already open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), InvalidArgument> {
        let site = self.site_id(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        let (top, bottom) = (self.top(), self.bottom());
        if row == 1 {
            self.join(site, top)?;
        }
        if row == self.n {
            self.connectivity.union(site, bottom)?;
        }

        for (neighbour_row, neighbour_col) in neighbours(self.n, row, col) {
            let neighbour = self.site_id(neighbour_row, neighbour_col)?;
            if self.open[neighbour] {
                self.join(site, neighbour)?;
            }
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        Ok(self.open[self.site_id(row, col)?])
    }

    /// Whether the site at `(row, col)` is open and connected to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        let site = self.site_id(row, col)?;
        if !self.open[site] {
            return Ok(false);
        }

        self.fullness.connected(site, self.top())
    }

    /// Whether a path of open sites connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        // Both virtual ids are always in range.
        matches!(self.connectivity.connected(self.top(), self.bottom()), Ok(true))
    }

    fn top(&self) -> SetId {
        self.site_count()
    }

    fn bottom(&self) -> SetId {
        self.site_count() + 1
    }

    fn join(&mut self, a: SetId, b: SetId) -> Result<(), InvalidArgument> {
        self.connectivity.union(a, b)?;
        self.fullness.union(a, b)?;
        Ok(())
    }

    fn site_id(&self, row: usize, col: usize) -> Result<SetId, InvalidArgument> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok((row - 1) * self.n + (col - 1))
        } else {
            Err(InvalidArgument::Site { row, col, n: self.n })
        }
    }
}

/// The in-bounds 4-neighbours of a valid site.
fn neighbours(n: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        (row > 1).then(|| (row - 1, col)),
        (row < n).then(|| (row + 1, col)),
        (col > 1).then(|| (row, col - 1)),
        (col < n).then(|| (row, col + 1)),
    ]
    .into_iter()
    .flatten()
}
