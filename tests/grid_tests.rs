//! Grid tests - row clearing semantics

use handblock::core::Grid;
use handblock::types::{NeonColor, COLS, ROWS};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), COLS);
    assert_eq!(grid.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLS as i8 {
            assert!(grid.is_free(x, y), "cell ({}, {}) should be free", x, y);
        }
    }
}

#[test]
fn test_get_set_out_of_bounds() {
    let mut grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(COLS as i8, 0), None);
    assert_eq!(grid.get(0, ROWS as i8), None);

    assert!(!grid.set(-1, 0, Some(NeonColor::Cyan)));
    assert!(!grid.set(0, ROWS as i8, Some(NeonColor::Cyan)));
}

#[test]
fn test_clear_full_rows_removes_only_full_rows() {
    let mut grid = Grid::new();
    grid.fill_row(19, NeonColor::Red);
    grid.fill_row(18, NeonColor::Green);
    grid.set(0, 18, None); // row 18 is one cell short

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 1);

    // Row 18's content shifted down into row 19.
    assert!(grid.is_free(0, 19));
    assert!(grid.is_occupied(1, 19));
    assert!(grid.is_free(1, 18));
}

#[test]
fn test_clear_preserves_relative_order_of_survivors() {
    let mut grid = Grid::new();
    // Distinct markers above and below a full row.
    grid.set(0, 15, Some(NeonColor::Cyan));
    grid.fill_row(16, NeonColor::Red);
    grid.set(0, 17, Some(NeonColor::Gold));
    grid.fill_row(18, NeonColor::Red);
    grid.set(0, 19, Some(NeonColor::Purple));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Bottom row stays in place; partial rows collapse above it in order.
    assert_eq!(grid.get(0, 19), Some(Some(NeonColor::Purple)));
    assert_eq!(grid.get(0, 18), Some(Some(NeonColor::Gold)));
    assert_eq!(grid.get(0, 17), Some(Some(NeonColor::Cyan)));
    assert!(grid.is_free(0, 16));
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut grid = Grid::new();
    for y in 16..20 {
        grid.fill_row(y, NeonColor::Pink);
    }
    grid.set(3, 15, Some(NeonColor::Cyan));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 4);

    // The lone survivor dropped four rows.
    assert_eq!(grid.get(3, 19), Some(Some(NeonColor::Cyan)));
    for y in 0..19 {
        for x in 0..COLS as i8 {
            assert!(grid.is_free(x, y), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_clear_inserts_empty_rows_at_top() {
    let mut grid = Grid::new();
    grid.fill_row(0, NeonColor::Red);
    grid.fill_row(19, NeonColor::Red);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    for x in 0..COLS as i8 {
        assert!(grid.is_free(x, 0));
        assert!(grid.is_free(x, 1));
        assert!(grid.is_free(x, 19));
    }
}

#[test]
fn test_clear_on_empty_grid_is_noop() {
    let mut grid = Grid::new();
    assert!(grid.clear_full_rows().is_empty());
    assert!(grid.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_set_overwrites_prior_value() {
    let mut grid = Grid::new();
    grid.set(4, 10, Some(NeonColor::Cyan));
    grid.set(4, 10, Some(NeonColor::Gold));
    assert_eq!(grid.get(4, 10), Some(Some(NeonColor::Gold)));
}
