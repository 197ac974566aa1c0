use crate::cell::Cell;
use crate::math::{GridPos, Point, Real};

/// A mapping from grid positions to the live cells of a grid.
///
/// This is the only view the fold engine has on the grid. Folds are computed on a clone of
/// the directory which replaces the original one once the fold succeeded.
pub trait CellDirectory {
    /// The cell at `pos`, if any.
    fn get_cell(&self, pos: &GridPos) -> Option<&Cell>;

    /// The positions of all the live cells.
    fn positions(&self) -> Vec<GridPos>;

    /// Inserts `cell` at its grid position, returning the cell it replaced, if any.
    fn insert_or_replace(&mut self, cell: Cell) -> Option<Cell>;

    /// Removes and returns the cell at `pos`, if any.
    fn remove(&mut self, pos: &GridPos) -> Option<Cell>;

    /// The side length of a cell, in world units.
    fn cell_size(&self) -> Real;

    /// The number of cells along each axis of the grid.
    fn grid_size(&self) -> GridPos;

    /// Whether a cell lives at `pos`.
    fn contains(&self, pos: &GridPos) -> bool {
        self.get_cell(pos).is_some()
    }

    /// Whether `pos` lies inside the grid bounds.
    fn in_bounds(&self, pos: &GridPos) -> bool {
        let size = self.grid_size();
        pos.x >= 0 && pos.y >= 0 && pos.x < size.x && pos.y < size.y
    }

    /// The center of the cell at `pos`, in local space.
    fn grid_to_local(&self, pos: &GridPos) -> Point<Real> {
        let cell_size = self.cell_size();
        Point::new(
            (pos.x as Real + 0.5) * cell_size,
            (pos.y as Real + 0.5) * cell_size,
        )
    }

    /// The grid position of the cell containing the local point `pt`.
    fn local_to_grid(&self, pt: &Point<Real>) -> GridPos {
        let cell_size = self.cell_size();
        GridPos::new(
            (pt.x / cell_size).floor() as i32,
            (pt.y / cell_size).floor() as i32,
        )
    }

    /// The sum of the areas of all the live cells.
    fn total_area(&self) -> Real {
        self.positions()
            .iter()
            .filter_map(|pos| self.get_cell(pos))
            .map(|cell| cell.area())
            .sum()
    }
}
