use battleship_sim::{Grid, GridError, PlacementGrid, Rotation, ShotsGrid};

#[test]
fn test_set_then_get_returns_written_value() {
    let mut grid: Grid<u32> = Grid::new();
    for row in 1..=10 {
        for col in 1..=10 {
            grid.set(row, col, (row * 100 + col) as u32).unwrap();
        }
    }
    for row in 1..=10 {
        for col in 1..=10 {
            assert_eq!(grid.get(row, col).unwrap(), (row * 100 + col) as u32);
        }
    }
}

#[test]
fn test_access_outside_bounds_fails() {
    let mut grid: Grid<u8> = Grid::new();
    for (row, col) in [(0, 1), (1, 0), (11, 1), (1, 11), (0, 0), (11, 11)] {
        assert_eq!(grid.get(row, col), Err(GridError::OutOfRange { row, col }));
        assert_eq!(
            grid.set(row, col, 1),
            Err(GridError::OutOfRange { row, col })
        );
    }
}

#[test]
fn test_explicit_dimensions_bound_access() {
    let grid: Grid<u8> = Grid::with_size(3, 7);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 7);
    assert!(grid.get(3, 7).is_ok());
    assert!(grid.get(4, 7).is_err());
    assert!(grid.get(3, 8).is_err());
}

#[test]
fn test_iteration_is_row_major() {
    let grid: Grid<u8> = Grid::with_size(2, 3);
    let coords: Vec<_> = grid.iter().map(|(cell, _)| cell).collect();
    assert_eq!(
        coords,
        vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_empty_placement_grid_renders_bordered_box() {
    let grid = PlacementGrid::with_size(2, 2);
    assert_eq!(grid.to_string(), "/--\\\n|  |\n|  |\n\\--/");
}

#[test]
fn test_shots_grid_renders_hit_and_miss_symbols() {
    let mut placements = PlacementGrid::with_size(1, 2);
    assert!(placements.place(1, 1, 1, Rotation::Deg0));
    let mut shots = ShotsGrid::with_size(1, 2);
    assert!(shots.guess(1, 1, &placements).unwrap());
    assert!(!shots.guess(1, 2, &placements).unwrap());
    assert_eq!(shots.to_string(), "/--\\\n|X*|\n\\--/");
}

#[test]
fn test_occupied_cells_render_as_ship_symbol() {
    let mut grid = PlacementGrid::with_size(1, 3);
    assert!(grid.place(1, 1, 2, Rotation::Deg0));
    assert_eq!(grid.to_string(), "/---\\\n|OO |\n\\---/");
}
