// Pending-cell containers for the iterative traversals.
//
// The traversal loop is written once against `Frontier`; the discipline
// of the container decides whether the walk is depth-first (Vec, LIFO)
// or breadth-first (VecDeque, FIFO).

use std::collections::VecDeque;

use crate::core::{Cell, Color, Grid};

pub trait Frontier {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
    fn is_empty(&self) -> bool;
}

impl Frontier for Vec<Cell> {
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl Frontier for VecDeque<Cell> {
    fn push(&mut self, cell: Cell) {
        self.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

/// In-bounds cardinal neighbors of `(r, c)`: down, up, right, left.
pub(crate) fn cardinal_neighbors(rows: usize, cols: usize, r: usize, c: usize) -> impl Iterator<Item = Cell> {
    let down = (r + 1 < rows).then(|| (r + 1, c));
    let up = r.checked_sub(1).map(|r| (r, c));
    let right = (c + 1 < cols).then(|| (r, c + 1));
    let left = c.checked_sub(1).map(|c| (r, c));
    [down, up, right, left].into_iter().flatten()
}

/// Cell at `(r + dr, c + dc)` if it lies inside the grid.
pub(crate) fn offset_cell(rows: usize, cols: usize, r: usize, c: usize, dr: isize, dc: isize) -> Option<Cell> {
    let nr = r.checked_add_signed(dr)?;
    let nc = c.checked_add_signed(dc)?;
    (nr < rows && nc < cols).then_some((nr, nc))
}

/// Drains `frontier` from `seed`, recoloring `old` cells to `new`.
/// Neighbors are pushed without a color check and tested on pop, so stale
/// duplicates are skipped. `visit` sees each cell as it is recolored.
/// Returns the number of cells changed.
pub(crate) fn drain<F: Frontier, V: FnMut(Cell)>(
    grid: &mut Grid,
    mut frontier: F,
    seed: Cell,
    old: Color,
    new: Color,
    mut visit: V,
) -> usize {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut filled = 0;
    frontier.push(seed);

    while let Some((r, c)) = frontier.pop() {
        if grid[r][c] != old {
            continue;
        }
        grid[r][c] = new;
        filled += 1;
        visit((r, c));
        for n in cardinal_neighbors(rows, cols, r, c) {
            frontier.push(n);
        }
    }
    debug_assert!(frontier.is_empty());
    filled
}

/// Stack traversal with neighbors taken from an offset table.
pub(crate) fn drain_offsets(
    grid: &mut Grid,
    seed: Cell,
    old: Color,
    new: Color,
    offsets: &[(isize, isize)],
    mut visit: impl FnMut(Cell),
) -> usize {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut filled = 0;
    let mut stack: Vec<Cell> = vec![seed];

    while let Some((r, c)) = stack.pop() {
        if grid[r][c] != old {
            continue;
        }
        grid[r][c] = new;
        filled += 1;
        visit((r, c));
        stack.extend(offsets.iter().filter_map(|&(dr, dc)| offset_cell(rows, cols, r, c, dr, dc)));
    }
    filled
}
