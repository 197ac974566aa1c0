//! Storage of the grid cells.

pub use self::cell_grid::CellGrid;
pub use self::directory::CellDirectory;

mod cell_grid;
mod directory;
