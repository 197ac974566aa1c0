use crate::fold::CutLinePair;
use crate::grid::CellDirectory;
use crate::math::{GridPos, Point, Real, Vector};

/// A cell moved by a fold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CellTranslation {
    /// The grid position of the cell before the fold.
    pub from: GridPos,
    /// The grid position of the cell after the fold.
    pub to: GridPos,
}

/// Everything a successful fold did to the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FoldReport {
    /// The identifier of the fold, also found in the provenance of the pieces it cut.
    pub fold_id: u32,
    /// The lines the grid was cut along.
    pub cut_lines: CutLinePair,
    /// The translation applied to the moved cells, in local space.
    pub shift: Vector<Real>,
    /// The translation applied to the moved cells, in grid units.
    pub grid_shift: GridPos,
    /// Positions of the deleted cells.
    pub removed: Vec<GridPos>,
    /// Positions, before the fold, of the cells clipped by a cut line.
    pub split: Vec<GridPos>,
    /// Positions, after the fold, of the cells where a moved cell joined a stationary one.
    pub merged: Vec<GridPos>,
    /// Every cell moved by the fold.
    pub translations: Vec<CellTranslation>,
}

impl FoldReport {
    /// Where the cell that was at `pos` before the fold lies now, if it was moved.
    pub fn translate(&self, pos: &GridPos) -> Option<GridPos> {
        self.translations
            .iter()
            .find(|t| t.from == *pos)
            .map(|t| t.to)
    }

    /// Whether the cell that was at `pos` before the fold got deleted.
    pub fn was_removed(&self, pos: &GridPos) -> bool {
        self.removed.contains(pos)
    }

    /// Moves `dependent` along with its cell.
    ///
    /// The dependent ends at the center of its new cell. Returns `true` if it moved.
    pub fn relocate<D: FoldDependent + ?Sized>(
        &self,
        dependent: &mut D,
        directory: &impl CellDirectory,
    ) -> bool {
        let from = dependent.grid_position();

        match self.translate(&from) {
            Some(to) => {
                log::debug!(
                    "fold {}: dependent follows its cell from ({}, {}) to ({}, {})",
                    self.fold_id,
                    from.x,
                    from.y,
                    to.x,
                    to.y
                );
                dependent.relocate(to, directory.grid_to_local(&to));
                true
            }
            None => false,
        }
    }
}

/// An entity standing on a grid cell, which must follow it when a fold moves it.
pub trait FoldDependent {
    /// The grid position of the cell this entity stands on.
    fn grid_position(&self) -> GridPos;

    /// Moves this entity to a new cell, whose center is at `local_position`.
    fn relocate(&mut self, grid_position: GridPos, local_position: Point<Real>);
}

/// The player's footprint on the grid.
///
/// Only positions are tracked here; movement and animations are the game's business.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Player {
    /// The cell the player stands on.
    pub grid_position: GridPos,
    /// The player's position in local space.
    pub local_position: Point<Real>,
}

impl Player {
    /// A player standing at the center of the cell at `grid_position`.
    pub fn new(grid_position: GridPos, directory: &impl CellDirectory) -> Self {
        Self {
            grid_position,
            local_position: directory.grid_to_local(&grid_position),
        }
    }
}

impl FoldDependent for Player {
    fn grid_position(&self) -> GridPos {
        self.grid_position
    }

    fn relocate(&mut self, grid_position: GridPos, local_position: Point<Real>) {
        self.grid_position = grid_position;
        self.local_position = local_position;
    }
}
