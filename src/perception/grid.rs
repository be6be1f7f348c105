// Grid validation, fixtures and inspection helpers.
//
// A fixture is the unit the benchmark runner and CLI operate on:
// a grid plus the seed and color for one fill. Fixtures are stored
// as JSON, e.g. {"grid": [[0,1],[1,1]], "seed": [0,1], "new_color": 2}.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, FillError, Grid, Result};

const MIX_A: u64 = 0x517cc1b727220a95;
const MIX_B: u64 = 0x6c62272e07bb0142;
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Sample grid with a ring-shaped `1` region and a disconnected `1` strip
/// along the bottom edge.
pub const SAMPLE_GRID: [[Color; 6]; 6] = [
    [0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 1, 0],
    [0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillFixture {
    pub grid: Grid,
    pub seed: Cell,
    pub new_color: Color,
}

impl FillFixture {
    pub fn sample() -> Self {
        Self { grid: sample_grid(), seed: (1, 1), new_color: 2 }
    }
}

/// Fresh owned copy of [`SAMPLE_GRID`].
pub fn sample_grid() -> Grid {
    SAMPLE_GRID.iter().map(|row| row.to_vec()).collect()
}

/// Checks the grid is non-empty and rectangular, returning `(rows, cols)`.
pub fn validate_grid(grid: &Grid) -> Result<(usize, usize)> {
    let Some(first) = grid.first() else {
        return Err(FillError::EmptyGrid);
    };
    let cols = first.len();
    if let Some((row, bad)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(FillError::MalformedGrid { row, expected: cols, found: bad.len() });
    }
    if cols == 0 {
        return Err(FillError::EmptyGrid);
    }
    Ok((grid.len(), cols))
}

/// Validates the grid and that `(row, col)` lies inside it.
pub fn validate_seed(grid: &Grid, row: usize, col: usize) -> Result<(usize, usize)> {
    let (rows, cols) = validate_grid(grid)?;
    if row >= rows || col >= cols {
        return Err(FillError::OutOfRangeSeed { row, col, rows, cols });
    }
    Ok((rows, cols))
}

pub fn parse_fixture(content: &str) -> Result<FillFixture> {
    let fixture: FillFixture =
        serde_json::from_str(content).map_err(|e| FillError::Fixture(e.to_string()))?;
    validate_seed(&fixture.grid, fixture.seed.0, fixture.seed.1)?;
    Ok(fixture)
}

pub fn load_fixture(path: impl AsRef<Path>) -> Result<FillFixture> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| FillError::Fixture(format!("{}: {}", path.display(), e)))?;
    let fixture = parse_fixture(&content)?;
    log::debug!(
        "loaded fixture {} ({}x{}, seed {:?})",
        path.display(),
        fixture.grid.len(),
        fixture.grid[0].len(),
        fixture.seed
    );
    Ok(fixture)
}

pub fn grid_to_string(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn color_histogram(grid: &Grid) -> FxHashMap<Color, usize> {
    let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
    for row in grid {
        for &c in row {
            *counts.entry(c).or_default() += 1;
        }
    }
    counts
}

/// Cells whose value differs between two grids of the same shape, row-major.
pub fn changed_cells(before: &Grid, after: &Grid) -> Vec<Cell> {
    let mut out = Vec::new();
    for (r, (a, b)) in before.iter().zip(after).enumerate() {
        for (c, (x, y)) in a.iter().zip(b).enumerate() {
            if x != y {
                out.push((r, c));
            }
        }
    }
    out
}

/// Position-mixed FNV hash of the grid contents.
pub fn fingerprint(grid: &Grid) -> u64 {
    let mut h = FNV_OFFSET;
    for (r, row) in grid.iter().enumerate() {
        for (c, &val) in row.iter().enumerate() {
            let cell = (r as u64).wrapping_mul(MIX_A)
                ^ (c as u64).wrapping_mul(MIX_B)
                ^ (val as u32 as u64);
            h = h.wrapping_mul(FNV_PRIME) ^ cell;
        }
    }
    h
}

/// Deterministic pseudo-random grid with labels in `0..colors`.
/// Fewer colors give larger connected regions.
pub fn generate_grid(rows: usize, cols: usize, colors: Color, seed: u64) -> Grid {
    let colors = colors.max(1) as u64;
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let h = ((r as u64).wrapping_mul(MIX_A) ^ (c as u64).wrapping_mul(MIX_B) ^ seed)
                        .wrapping_mul(FNV_PRIME);
                    ((h >> 32) % colors) as Color
                })
                .collect()
        })
        .collect()
}
