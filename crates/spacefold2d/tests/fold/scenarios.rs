use approx::assert_relative_eq;
use na::Vector2;
use spacefold2d::cell::{CellType, CutSide};
use spacefold2d::fold::{FoldSystem, Region};
use spacefold2d::grid::{CellDirectory, CellGrid};
use spacefold2d::math::{GridPos, Real};

const CELL_SIZE: Real = 64.0;
const FULL: Real = CELL_SIZE * CELL_SIZE;

fn grid(x: i32, y: i32) -> CellGrid {
    CellGrid::new_filled(GridPos::new(x, y), CELL_SIZE, CellType::Empty)
}

#[test]
fn adjacent_anchors_on_a_10x10_grid() {
    let mut grid = grid(10, 10);
    let mut folds = FoldSystem::new();
    let anchor1 = GridPos::new(3, 4);
    let anchor2 = GridPos::new(4, 3);

    let a1 = grid.grid_to_local(&anchor1);
    let a2 = grid.grid_to_local(&anchor2);
    let lines = folds.calculate_cut_lines(&a1, &a2).unwrap();
    let before = grid.clone();
    let region = |x, y| folds.classify_cell_region(before.get_cell(&GridPos::new(x, y)).unwrap(), &lines);
    assert_eq!(region(3, 4), Region::SplitLine1);
    assert_eq!(region(4, 3), Region::SplitLine2);
    assert_eq!(region(4, 4), Region::Removed);
    assert_eq!(region(0, 9), Region::KeptLeft);
    assert_eq!(region(9, 0), Region::KeptRight);

    let report = folds.execute_diagonal_fold(&mut grid, anchor1, anchor2).unwrap();

    assert_relative_eq!(report.shift, Vector2::new(-64.0, 64.0), epsilon = 1.0e-3);
    assert_eq!(report.grid_shift, GridPos::new(-1, 1));
    assert!(report.removed.iter().all(|pos| pos.x == pos.y));
    assert!(report.split.contains(&anchor1) && report.split.contains(&anchor2));
    assert!(report.merged.contains(&anchor1));

    // The second anchor's cell was folded onto the first one.
    assert_eq!(report.translate(&anchor2), Some(anchor1));
    let joined = grid.get_cell(&anchor1).unwrap();
    assert!(!joined.is_partial());
    assert_relative_eq!(joined.area(), FULL, max_relative = 1.0e-4);
    assert_eq!(joined.pieces()[0].source().side(), Some(CutSide::Line1));
    assert_eq!(joined.pieces()[1].source().side(), Some(CutSide::Line2));
    assert_eq!(joined.geometry().len(), 4);

    // The kept-right block moved by one column left and one row up.
    for translation in &report.translations {
        assert_eq!(translation.to - translation.from, GridPos::new(-1, 1));
    }
    assert_eq!(grid.len(), 81);
}

#[test]
fn distant_diagonal_anchors_on_a_5x5_grid() {
    let mut grid = grid(5, 5);
    let mut folds = FoldSystem::new();
    let report = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(0, 0), GridPos::new(2, 2))
        .unwrap();

    assert_eq!(report.grid_shift, GridPos::new(-2, -2));
    assert_eq!(report.removed.len(), 9);
    assert_eq!(report.split.len(), 6);
    assert_eq!(report.merged, vec![GridPos::new(0, 0)]);

    assert_eq!(grid.len(), 15);
    assert_relative_eq!(grid.total_area(), 13.0 * FULL, max_relative = 1.0e-4);

    // Halves of the second line moved out of the grid stay partial.
    let outside = grid.get_cell(&GridPos::new(-2, 2)).unwrap();
    assert!(outside.is_partial());
    assert_relative_eq!(outside.area(), FULL * 0.5, max_relative = 1.0e-4);
    assert!(!grid.in_bounds(&outside.grid_position()));

    let corner = grid.get_cell(&GridPos::new(2, 2)).unwrap();
    assert!(!corner.is_partial());
    assert_eq!(report.translate(&GridPos::new(4, 4)), Some(GridPos::new(2, 2)));
}

#[test]
fn straight_fold_splices_columns() {
    let mut grid = grid(6, 3);
    let wall = GridPos::new(5, 1);
    let _ = grid.insert_or_replace(spacefold2d::cell::Cell::new(wall, CellType::Wall, CELL_SIZE));

    let mut folds = FoldSystem::new();
    let report = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(1, 1), GridPos::new(3, 1))
        .unwrap();

    assert_eq!(report.grid_shift, GridPos::new(-2, 0));
    assert_eq!(report.removed.len(), 3);
    assert_eq!(report.merged.len(), 3);
    assert_eq!(grid.len(), 12);

    let moved = grid.get_cell(&GridPos::new(3, 1)).unwrap();
    assert_eq!(moved.cell_type(), CellType::Wall);
    assert!(!moved.is_partial());
    assert_relative_eq!(moved.centroid(), grid.grid_to_local(&GridPos::new(3, 1)), epsilon = 1.0e-3);
}

#[test]
fn reversed_anchors_fold_the_other_way() {
    let mut grid = grid(10, 10);
    let mut folds = FoldSystem::new();
    let report = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(4, 3), GridPos::new(3, 4))
        .unwrap();

    assert_eq!(report.grid_shift, GridPos::new(1, -1));
    assert_eq!(report.merged.len(), 9);
    assert_eq!(grid.len(), 81);
    assert!(grid.cells().all(|cell| !cell.is_partial()));
}

#[test]
fn folds_can_be_chained() {
    let mut grid = grid(8, 8);
    let mut folds = FoldSystem::new();
    let first = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(0, 1), GridPos::new(1, 0))
        .unwrap();
    // The cells joined back by the first fold are cut again along their seam.
    let second = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(0, 3), GridPos::new(1, 2))
        .unwrap();

    assert_eq!((first.fold_id, second.fold_id), (0, 1));
    assert_eq!(folds.folds_performed(), 2);

    let cell = grid.get_cell(&GridPos::new(0, 3)).unwrap();
    let folds_seen: Vec<_> = cell.pieces().iter().map(|p| p.source().fold_id()).collect();
    assert!(folds_seen.contains(&Some(0)) && folds_seen.contains(&Some(1)));
    assert_relative_eq!(cell.area(), FULL, max_relative = 1.0e-4);

    let mut positions = grid.positions();
    let count = positions.len();
    positions.sort_unstable_by_key(|pos| (pos.x, pos.y));
    positions.dedup();
    assert_eq!(positions.len(), count);
}

#[test]
fn leftover_fragments_join_cells_moved_by_a_later_fold() {
    let mut grid = grid(9, 8);
    let mut folds = FoldSystem::new();
    let _ = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(1, 4), GridPos::new(7, 1))
        .unwrap();
    let area = grid.total_area();

    // The fragment of (0, 1) kept beyond the second line lands on a cell cut by the first one.
    let report = folds
        .execute_diagonal_fold(&mut grid, GridPos::new(3, 4), GridPos::new(1, 1))
        .unwrap();
    assert_eq!(report.translate(&GridPos::new(0, 1)), Some(GridPos::new(2, 4)));
    assert!(report.merged.contains(&GridPos::new(2, 4)));

    assert!(grid.total_area() <= area);
    assert!(grid.cells().all(|cell| cell.area() <= FULL * 1.001));

    let mut positions = grid.positions();
    let count = positions.len();
    positions.sort_unstable_by_key(|pos| (pos.x, pos.y));
    positions.dedup();
    assert_eq!(positions.len(), count);
}
