use percolation::{
    Estimator, EstimatorConfig, InvalidArgument, PercolationGrid, RandomSource, SiteSelection,
};

/// Cycles through a fixed list of values.
struct Cycle {
    values: Vec<usize>,
    next: usize,
}

impl RandomSource for Cycle {
    fn next_int(&mut self, low: usize, high_exclusive: usize) -> usize {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        assert!((low..high_exclusive).contains(&value));
        value
    }
}

#[test]
fn two_by_two_trace() {
    let mut grid = PercolationGrid::new(2).unwrap();

    grid.open(1, 1).unwrap();
    assert!(grid.is_open(1, 1).unwrap());
    assert!(!grid.percolates());

    grid.open(2, 2).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(2, 2).unwrap());

    grid.open(2, 1).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(2, 2).unwrap());
    assert!(!grid.is_open(1, 2).unwrap());
    assert_eq!(grid.number_of_open_sites(), 3);
}

#[test]
fn bottom_row_pocket_is_not_full_after_percolation() {
    let n = 6;
    let mut grid = PercolationGrid::new(n).unwrap();
    for row in 1..=n {
        grid.open(row, 3).unwrap();
    }
    // A pocket of sites along the bottom right, cut off from column 3.
    for (row, col) in [(6, 5), (6, 6), (5, 6), (4, 6)] {
        grid.open(row, col).unwrap();
    }

    assert!(grid.percolates());
    for (row, col) in [(6, 5), (6, 6), (5, 6), (4, 6)] {
        assert!(grid.is_open(row, col).unwrap());
        assert!(!grid.is_full(row, col).unwrap(), "({row}, {col}) is not full");
    }

    grid.open(6, 4).unwrap();
    assert!(grid.is_full(4, 6).unwrap());
}

#[test]
fn scripted_source_drives_a_trial() {
    // Opens (1, 1), (2, 2) and then (1, 2), which completes a path.
    let mut source = Cycle {
        values: vec![1, 1, 2, 2, 1, 2],
        next: 0,
    };
    let outcome = percolation::run_trial(2, &mut source, SiteSelection::Rejection).unwrap();

    assert_eq!(outcome.open_sites, 3);
    assert_eq!(source.next, 6);
}

#[test]
fn estimator_rejects_zero_grid() {
    let config = EstimatorConfig {
        grid_size: 0,
        trials: 3,
        ..Default::default()
    };

    assert_eq!(
        Estimator::new(config).unwrap_err(),
        InvalidArgument::GridSize(0)
    );
}

#[test]
fn unit_grid_estimate() {
    let config = EstimatorConfig {
        grid_size: 1,
        trials: 25,
        seed: Some(9),
        selection: SiteSelection::Shuffle,
        parallel: true,
    };
    let estimate = Estimator::new(config).unwrap().estimate().unwrap();

    assert_eq!(estimate.stats.mean, 1.0);
    assert_eq!(estimate.stats.stddev, 0.0);
    assert!(estimate.outcomes.iter().all(|o| o.open_sites == 1));
}
