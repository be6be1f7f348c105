use gridfill::bench::runner::run_benchmark;
use gridfill::perception::grid::{changed_cells, generate_grid, load_fixture, sample_grid, SAMPLE_GRID};
use gridfill::{apply, fill, region_size, FillError, FillFixture, Grid, Strategy};

fn fill_all(base: &Grid, seed: (usize, usize), new_color: i32) -> Vec<Grid> {
    Strategy::ALL
        .iter()
        .map(|&st| {
            let mut grid = base.clone();
            fill(st, &mut grid, seed.0, seed.1, new_color).unwrap();
            grid
        })
        .collect()
}

#[test]
fn strategies_agree_across_shapes() {
    let shapes = [(1, 1), (1, 40), (40, 1), (9, 9), (31, 17)];
    for (i, &(rows, cols)) in shapes.iter().enumerate() {
        for colors in 1..=4 {
            let base = generate_grid(rows, cols, colors, i as u64 * 31 + colors as u64);
            let seed = (rows / 2, cols / 3);
            let results = fill_all(&base, seed, 5);
            for (st, grid) in Strategy::ALL.iter().zip(&results) {
                assert_eq!(grid, &results[0], "{} on {}x{} with {} colors", st, rows, cols, colors);
            }
        }
    }
}

#[test]
fn changed_cells_match_region_size() {
    for seed in 0..10u64 {
        let base = generate_grid(25, 25, 2, seed);
        let region = region_size(&base, 12, 12).unwrap();
        for grid in fill_all(&base, (12, 12), 7) {
            let changed = changed_cells(&base, &grid);
            assert_eq!(changed.len(), region);
            assert!(changed.iter().all(|&(r, c)| grid[r][c] == 7 && base[r][c] == base[12][12]));
        }
    }
}

#[test]
fn sample_constant_is_never_mutated() {
    let _ = fill_all(&sample_grid(), (1, 1), 2);
    let fresh: Grid = SAMPLE_GRID.iter().map(|r| r.to_vec()).collect();
    assert_eq!(sample_grid(), fresh);
    assert_eq!(fresh[1][1], 1);
}

#[test]
fn fixture_file_round_trip() {
    let fixture = FillFixture { grid: generate_grid(8, 5, 3, 11), seed: (3, 2), new_color: 4 };
    let path = std::env::temp_dir().join(format!("gridfill-fixture-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&fixture).unwrap()).unwrap();
    let loaded = load_fixture(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, fixture);

    let report = run_benchmark(&loaded, &Strategy::ALL, 3).unwrap();
    assert!(report.equivalent);
    assert_eq!(report.cells_filled, region_size(&fixture.grid, 3, 2).unwrap());
}

#[test]
fn errors_leave_grid_unchanged() {
    let base = sample_grid();
    for st in Strategy::ALL {
        let mut grid = base.clone();
        assert!(matches!(fill(st, &mut grid, 0, 6, 3), Err(FillError::OutOfRangeSeed { .. })));
        assert_eq!(grid, base);
    }
    let mut empty: Grid = Vec::new();
    assert_eq!(fill(Strategy::StackDfs, &mut empty, 0, 0, 1).unwrap_err(), FillError::EmptyGrid);
}

#[test]
fn independent_grids_fill_concurrently() {
    let handles: Vec<_> = Strategy::ALL
        .into_iter()
        .map(|st| std::thread::spawn(move || apply(st, &FillFixture::sample()).unwrap()))
        .collect();
    let results: Vec<Grid> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0][3], vec![0, 2, 2, 2, 2, 0]);
}
