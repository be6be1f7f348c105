// Flood fill benchmark runner.
// Copies the fixture grid fresh for every timed iteration, runs each
// strategy, checks that every strategy lands on the same grid and
// produces a per-strategy timing report.

use std::time::{Duration, Instant};

use crate::core::{Grid, Result, Strategy};
use crate::fill::fill_cells;
use crate::perception::grid::{fingerprint, validate_seed, FillFixture};

#[derive(Debug)]
pub struct BenchmarkReport {
    pub rows: usize,
    pub cols: usize,
    pub iterations: usize,
    pub cells_filled: usize,
    pub equivalent: bool,
    pub elapsed_ms: u64,
    pub per_strategy: Vec<StrategyReport>,
}

#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub total_ns: u128,
    pub mean_ns: f64,
    pub min_ns: u128,
    pub samples: usize,
    pub cells_filled: usize,
    pub fingerprint: u64,
}

/// Run `iterations` fills of the fixture with each of `strategies`.
pub fn run_benchmark(fixture: &FillFixture, strategies: &[Strategy], iterations: usize) -> Result<BenchmarkReport> {
    let (row, col) = fixture.seed;
    let (rows, cols) = validate_seed(&fixture.grid, row, col)?;
    let iterations = iterations.max(1);
    let total_start = Instant::now();
    let mut per_strategy = Vec::with_capacity(strategies.len());
    let mut reference: Option<Grid> = None;
    let mut equivalent = true;

    for &strategy in strategies {
        let mut cells_filled = 0;
        let mut samples: Vec<Duration> = Vec::with_capacity(iterations);
        let mut last = fixture.grid.clone();
        for _ in 0..iterations {
            let mut grid = fixture.grid.clone();
            let start = Instant::now();
            cells_filled = fill_cells(strategy, &mut grid, row, col, fixture.new_color)?;
            samples.push(start.elapsed());
            last = grid;
        }

        let total_ns: u128 = samples.iter().map(Duration::as_nanos).sum();
        let min_ns = samples.iter().map(Duration::as_nanos).min().unwrap_or(0);
        log::debug!("{}: {} iterations, {} ns total", strategy, iterations, total_ns);

        per_strategy.push(StrategyReport {
            strategy,
            total_ns,
            mean_ns: total_ns as f64 / samples.len() as f64,
            min_ns,
            samples: samples.len(),
            cells_filled,
            fingerprint: fingerprint(&last),
        });

        if !reference.as_ref().map_or(true, |first| same_result(first, &last)) {
            log::warn!("{} disagrees with {} on the filled grid", strategy, per_strategy[0].strategy);
            equivalent = false;
        }
        if reference.is_none() {
            reference = Some(last);
        }
    }

    if let Some(best) = per_strategy.iter().min_by(|a, b| a.mean_ns.total_cmp(&b.mean_ns)) {
        log::info!("fastest strategy: {} ({:.0} ns/iter)", best.strategy, best.mean_ns);
    }

    Ok(BenchmarkReport {
        rows,
        cols,
        iterations,
        cells_filled: per_strategy.first().map_or(0, |s| s.cells_filled),
        equivalent,
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        per_strategy,
    })
}

fn same_result(reference: &Grid, grid: &Grid) -> bool {
    reference == grid
}

impl BenchmarkReport {
    pub fn print_summary(&self) {
        println!("=== Flood Fill Benchmark ===");
        println!("Grid: {}x{} | Iterations: {} | Cells filled: {}",
            self.rows, self.cols, self.iterations, self.cells_filled);
        println!("Time: {}ms | Equivalent: {}", self.elapsed_ms, if self.equivalent { "yes" } else { "NO" });
        println!("\nBy strategy:");
        for s in &self.per_strategy {
            println!("  {:<13} mean={:>10.1}ns min={:>8}ns total={}ns",
                s.strategy.name(), s.mean_ns, s.min_ns, s.total_ns);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FillError;

    #[test]
    fn sample_report() {
        let fx = FillFixture::sample();
        let report = run_benchmark(&fx, &Strategy::ALL, 5).unwrap();
        assert!(report.equivalent);
        assert_eq!(report.iterations, 5);
        assert_eq!(report.cells_filled, 9);
        assert_eq!((report.rows, report.cols), (6, 6));
        assert_eq!(report.per_strategy.len(), 4);
        for s in &report.per_strategy {
            assert_eq!(s.cells_filled, 9);
            assert!(s.min_ns <= s.total_ns);
        }
        assert_eq!(fx, FillFixture::sample());
    }

    #[test]
    fn repeated_strategy_gets_its_own_samples() {
        let fx = FillFixture::sample();
        let report = run_benchmark(&fx, &[Strategy::StackDfs, Strategy::StackDfs], 4).unwrap();
        assert_eq!(report.per_strategy.len(), 2);
        for s in &report.per_strategy {
            assert_eq!(s.samples, 4);
            assert!(s.min_ns <= s.total_ns);
        }
        assert!(report.equivalent);
    }

    #[test]
    fn results_compared_cell_by_cell() {
        let a = vec![vec![1, 0], vec![0, 1]];
        let mut b = a.clone();
        assert!(same_result(&a, &b));
        b[1][1] = 2;
        assert!(!same_result(&a, &b));
    }

    #[test]
    fn zero_iterations_still_runs_once() {
        let report = run_benchmark(&FillFixture::sample(), &[Strategy::QueueBfs], 0).unwrap();
        assert_eq!(report.iterations, 1);
        assert_eq!(report.per_strategy.len(), 1);
    }

    #[test]
    fn bad_seed_propagates() {
        let mut fx = FillFixture::sample();
        fx.seed = (10, 0);
        let err = run_benchmark(&fx, &Strategy::ALL, 1).unwrap_err();
        assert!(matches!(err, FillError::OutOfRangeSeed { .. }));
    }
}
