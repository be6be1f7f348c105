// Flood fill over label grids.
//
// Four strategies share one contract: validate, read the seed color,
// bail out if it already equals the new color, then recolor every cell
// 4-connected to the seed through cells of the seed color. They differ
// only in traversal order and in how pending cells are held.

pub mod frontier;
mod recursive;

use std::collections::VecDeque;

use crate::core::{Cell, Color, Grid, Result, Strategy, FOUR_WAY};
use crate::perception::grid::{validate_seed, FillFixture};
use frontier::{cardinal_neighbors, drain, drain_offsets};

/// Fills the region at `(row, col)` with `new_color` and returns the grid.
///
/// Fails with `OutOfRangeSeed`, `MalformedGrid` or `EmptyGrid` before
/// touching any cell.
pub fn fill(strategy: Strategy, grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<&mut Grid> {
    fill_cells(strategy, grid, row, col, new_color)?;
    Ok(grid)
}

/// Like [`fill`], returning the number of cells changed instead.
pub fn fill_cells(strategy: Strategy, grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<usize> {
    validate_seed(grid, row, col)?;
    let old = grid[row][col];
    if old == new_color {
        return Ok(0);
    }
    let seed: Cell = (row, col);
    let filled = run(strategy, grid, seed, old, new_color, |_| {});
    log::trace!("{} fill from {:?}: {} -> {}, {} cells", strategy, seed, old, new_color, filled);
    Ok(filled)
}

/// Like [`fill`], returning the recolored cells in the order they were written.
/// The seed comes first; the rest follows the strategy's traversal order.
pub fn fill_order(strategy: Strategy, grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<Vec<Cell>> {
    validate_seed(grid, row, col)?;
    let old = grid[row][col];
    let mut order = Vec::new();
    if old != new_color {
        run(strategy, grid, (row, col), old, new_color, |cell| order.push(cell));
    }
    Ok(order)
}

fn run(strategy: Strategy, grid: &mut Grid, seed: Cell, old: Color, new: Color, visit: impl FnMut(Cell)) -> usize {
    match strategy {
        Strategy::Recursive => recursive::fill_from(grid, seed.0, seed.1, old, new, visit),
        Strategy::StackDfs => drain(grid, Vec::<Cell>::new(), seed, old, new, visit),
        Strategy::QueueBfs => drain(grid, VecDeque::<Cell>::new(), seed, old, new, visit),
        Strategy::OffsetStack => drain_offsets(grid, seed, old, new, FOUR_WAY, visit),
    }
}

pub fn fill_recursive(grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<&mut Grid> {
    fill(Strategy::Recursive, grid, row, col, new_color)
}

pub fn fill_stack(grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<&mut Grid> {
    fill(Strategy::StackDfs, grid, row, col, new_color)
}

pub fn fill_queue(grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<&mut Grid> {
    fill(Strategy::QueueBfs, grid, row, col, new_color)
}

pub fn fill_offsets(grid: &mut Grid, row: usize, col: usize, new_color: Color) -> Result<&mut Grid> {
    fill(Strategy::OffsetStack, grid, row, col, new_color)
}

/// Offset-table fill with a caller-supplied neighborhood, e.g.
/// [`EIGHT_WAY`](crate::core::EIGHT_WAY) for diagonal connectivity.
pub fn fill_with_offsets<'a>(
    grid: &'a mut Grid,
    row: usize,
    col: usize,
    new_color: Color,
    offsets: &[(isize, isize)],
) -> Result<&'a mut Grid> {
    validate_seed(grid, row, col)?;
    let old = grid[row][col];
    if old != new_color {
        let filled = drain_offsets(grid, (row, col), old, new_color, offsets, |_| {});
        log::trace!("offset fill ({} offsets) from {:?}: {} cells", offsets.len(), (row, col), filled);
    }
    Ok(grid)
}

/// Fills a fresh copy of the fixture grid, leaving the fixture untouched.
pub fn apply(strategy: Strategy, fixture: &FillFixture) -> Result<Grid> {
    let mut grid = fixture.grid.clone();
    let (row, col) = fixture.seed;
    fill_cells(strategy, &mut grid, row, col, fixture.new_color)?;
    Ok(grid)
}

/// Number of cells 4-connected to `(row, col)` that share its color.
pub fn region_size(grid: &Grid, row: usize, col: usize) -> Result<usize> {
    let (rows, cols) = validate_seed(grid, row, col)?;
    let color = grid[row][col];
    let mut seen = vec![vec![false; cols]; rows];
    let mut queue = VecDeque::from([(row, col)]);
    seen[row][col] = true;
    let mut count = 0;

    while let Some((r, c)) = queue.pop_front() {
        count += 1;
        for (nr, nc) in cardinal_neighbors(rows, cols, r, c) {
            if !seen[nr][nc] && grid[nr][nc] == color {
                seen[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    Ok(count)
}
