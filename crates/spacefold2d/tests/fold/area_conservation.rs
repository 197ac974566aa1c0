use approx::assert_relative_eq;
use spacefold2d::cell::{Cell, CellType, AREA_TOLERANCE};
use spacefold2d::fold::{calculate_cut_lines, CutLinePair, FoldError, FoldReport, FoldSystem};
use spacefold2d::geometry::{polygon_area, split_polygon_by_line};
use spacefold2d::grid::{CellDirectory, CellGrid};
use spacefold2d::math::{GridPos, Real};

const CELL_SIZE: Real = 64.0;

/// The area a cell keeps after a fold: the part of its pieces behind the first line, plus the
/// part beyond the second line.
fn retained_area(cell: &Cell, lines: &CutLinePair) -> Real {
    cell.pieces()
        .iter()
        .map(|piece| {
            let vertices = piece.vertices();
            let behind = split_polygon_by_line(vertices, &lines.line1.point, &lines.line1.normal);
            let beyond = split_polygon_by_line(vertices, &lines.line2.point, &lines.line2.normal);
            polygon_area(&behind.right) + polygon_area(&beyond.left)
        })
        .sum()
}

fn random_anchor(rng: &mut oorandom::Rand32, size: &GridPos) -> GridPos {
    GridPos::new(
        rng.rand_range(0..size.x as u32) as i32,
        rng.rand_range(0..size.y as u32) as i32,
    )
}

fn random_size(rng: &mut oorandom::Rand32) -> GridPos {
    GridPos::new(
        3 + rng.rand_range(0..8) as i32,
        3 + rng.rand_range(0..8) as i32,
    )
}

fn assert_consistent(grid: &CellGrid, report: &FoldReport, expected_area: Real) {
    assert_relative_eq!(grid.total_area(), expected_area, max_relative = 1.0e-3);
    for translation in &report.translations {
        assert_eq!(translation.to - translation.from, report.grid_shift);
    }

    let full = CELL_SIZE * CELL_SIZE;
    let mut positions = Vec::new();

    for cell in grid.cells() {
        assert_eq!(cell.is_partial(), cell.area() < full * (1.0 - AREA_TOLERANCE));
        assert!(cell.area() <= full * (1.0 + AREA_TOLERANCE));
        positions.push(cell.grid_position());

        if !cell.is_partial() {
            let center = grid.grid_to_local(&cell.grid_position());
            assert!((cell.centroid() - center).norm() < CELL_SIZE);
        }
    }

    let count = positions.len();
    positions.sort_unstable_by_key(|pos| (pos.x, pos.y));
    positions.dedup();
    assert_eq!(positions.len(), count);
}

#[test]
fn random_folds_conserve_area() {
    let mut rng = oorandom::Rand32::new(42);
    let mut performed = 0;

    for _ in 0..200 {
        let size = random_size(&mut rng);
        let anchor1 = random_anchor(&mut rng, &size);
        let anchor2 = random_anchor(&mut rng, &size);

        if anchor1 == anchor2 {
            continue;
        }

        let mut grid = CellGrid::new_filled(size, CELL_SIZE, CellType::Empty);
        let a1 = grid.grid_to_local(&anchor1);
        let a2 = grid.grid_to_local(&anchor2);
        let lines = calculate_cut_lines(&a1, &a2).unwrap();
        let expected: Real = grid.cells().map(|cell| retained_area(cell, &lines)).sum();

        let mut folds = FoldSystem::new();
        let report = folds
            .execute_diagonal_fold(&mut grid, anchor1, anchor2)
            .unwrap_or_else(|e| panic!("fold {anchor1:?} -> {anchor2:?} on {size:?} failed: {e}"));
        performed += 1;

        assert_consistent(&grid, &report, expected);
    }

    assert!(performed > 150);
}

#[test]
fn chained_random_folds_conserve_area() {
    let mut rng = oorandom::Rand32::new(7);
    let mut chained = 0;

    for _ in 0..100 {
        let size = random_size(&mut rng);
        let mut grid = CellGrid::new_filled(size, CELL_SIZE, CellType::Empty);
        let mut folds = FoldSystem::new();

        for step in 0..3 {
            let anchor1 = random_anchor(&mut rng, &size);
            let anchor2 = random_anchor(&mut rng, &size);

            if anchor1 == anchor2 {
                continue;
            }

            let a1 = grid.grid_to_local(&anchor1);
            let a2 = grid.grid_to_local(&anchor2);
            let lines = calculate_cut_lines(&a1, &a2).unwrap();
            let expected: Real = grid.cells().map(|cell| retained_area(cell, &lines)).sum();
            let before = grid.clone();
            let performed = folds.folds_performed();

            match folds.execute_diagonal_fold(&mut grid, anchor1, anchor2) {
                Ok(report) => {
                    assert_consistent(&grid, &report, expected);
                    assert!(grid.total_area() <= before.total_area() * (1.0 + AREA_TOLERANCE));
                    if step > 0 {
                        chained += 1;
                    }
                }
                // A leftover fragment may only keep a sliver; the grid must then be untouched.
                Err(FoldError::DegenerateSplit { .. }) => {
                    assert_eq!(grid.len(), before.len());
                    for cell in before.cells() {
                        assert_eq!(grid.get_cell(&cell.grid_position()), Some(cell));
                    }
                    assert_eq!(folds.folds_performed(), performed);
                }
                Err(e) => panic!("fold {anchor1:?} -> {anchor2:?} on {size:?} failed: {e}"),
            }
        }
    }

    assert!(chained > 100);
}
