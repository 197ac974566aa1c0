use crate::cell::{Cell, CellType};
use crate::grid::CellDirectory;
use crate::math::{GridPos, Real};
use hashbrown::HashMap;

/// A dense arena of cells indexed by their grid position.
///
/// Cells are stored contiguously; removing a cell moves the last cell into its slot.
///
/// Only the cells are serialized: the position index is rebuilt when deserializing.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "SerializedCellGrid")
)]
pub struct CellGrid {
    cells: Vec<Cell>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    index: HashMap<GridPos, usize>,
    grid_size: GridPos,
    cell_size: Real,
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct SerializedCellGrid {
    cells: Vec<Cell>,
    grid_size: GridPos,
    cell_size: Real,
}

#[cfg(feature = "serde-serialize")]
impl From<SerializedCellGrid> for CellGrid {
    fn from(data: SerializedCellGrid) -> Self {
        let mut grid = Self::new(data.grid_size, data.cell_size);

        for cell in data.cells {
            let _ = grid.insert_or_replace(cell);
        }

        grid
    }
}

impl CellGrid {
    /// An empty grid.
    pub fn new(grid_size: GridPos, cell_size: Real) -> Self {
        Self {
            cells: Vec::new(),
            index: HashMap::new(),
            grid_size,
            cell_size,
        }
    }

    /// A grid with a whole cell of type `cell_type` at every in-bounds position.
    pub fn new_filled(grid_size: GridPos, cell_size: Real, cell_type: CellType) -> Self {
        let mut grid = Self::new(grid_size, cell_size);

        for y in 0..grid_size.y {
            for x in 0..grid_size.x {
                let _ = grid.insert_or_replace(Cell::new(GridPos::new(x, y), cell_type, cell_size));
            }
        }

        grid
    }

    /// The number of live cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this grid has no live cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates through all the live cells.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    /// A mutable reference to the cell at `pos`, if any.
    pub fn get_cell_mut(&mut self, pos: &GridPos) -> Option<&mut Cell> {
        let id = *self.index.get(pos)?;
        self.cells.get_mut(id)
    }

    /// Inserts `cell` unless its position is already taken, in which case it is given back.
    pub fn try_insert(&mut self, cell: Cell) -> Result<(), Cell> {
        if self.index.contains_key(&cell.grid_position()) {
            return Err(cell);
        }

        let _ = self.insert_or_replace(cell);
        Ok(())
    }
}

impl CellDirectory for CellGrid {
    fn get_cell(&self, pos: &GridPos) -> Option<&Cell> {
        self.index.get(pos).map(|id| &self.cells[*id])
    }

    fn positions(&self) -> Vec<GridPos> {
        self.cells.iter().map(|cell| cell.grid_position()).collect()
    }

    fn insert_or_replace(&mut self, cell: Cell) -> Option<Cell> {
        let pos = cell.grid_position();

        if let Some(id) = self.index.get(&pos) {
            Some(core::mem::replace(&mut self.cells[*id], cell))
        } else {
            let _ = self.index.insert(pos, self.cells.len());
            self.cells.push(cell);
            None
        }
    }

    fn remove(&mut self, pos: &GridPos) -> Option<Cell> {
        let id = self.index.remove(pos)?;
        let removed = self.cells.swap_remove(id);

        if let Some(moved) = self.cells.get(id) {
            let _ = self.index.insert(moved.grid_position(), id);
        }

        Some(removed)
    }

    fn cell_size(&self) -> Real {
        self.cell_size
    }

    fn grid_size(&self) -> GridPos {
        self.grid_size
    }
}
