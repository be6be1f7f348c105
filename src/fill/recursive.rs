// Recursive depth-first fill.
//
// One call frame per filled cell, so a region of N cells can nest N deep.
// Large uniform grids will overflow the thread stack; the frontier-based
// strategies have no such limit. Kept as the reference implementation.

use super::frontier::cardinal_neighbors;
use crate::core::{Cell, Color, Grid};

pub(crate) fn fill_from<V: FnMut(Cell)>(grid: &mut Grid, r: usize, c: usize, old: Color, new: Color, mut visit: V) -> usize {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut filled = 0;
    recurse(grid, rows, cols, (r, c), old, new, &mut |cell| {
        filled += 1;
        visit(cell);
    });
    filled
}

fn recurse<V: FnMut(Cell)>(grid: &mut Grid, rows: usize, cols: usize, (r, c): Cell, old: Color, new: Color, visit: &mut V) {
    if grid[r][c] != old {
        return;
    }
    grid[r][c] = new;
    visit((r, c));
    for n in cardinal_neighbors(rows, cols, r, c) {
        recurse(grid, rows, cols, n, old, new, visit);
    }
}
