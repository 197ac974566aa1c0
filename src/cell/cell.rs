use crate::cell::{CellPiece, PieceSource};
use crate::geometry;
use crate::math::{GridPos, Point, Real, Vector, DEFAULT_EPSILON};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Relative tolerance used when comparing a cell's area to the area of a full cell.
pub const AREA_TOLERANCE: Real = 1.0e-3;

/// The semantic type of a cell.
///
/// The discriminants are the values used by level files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CellType {
    /// A walkable cell.
    #[default]
    Empty = 0,
    /// A blocking cell.
    Wall = 1,
    /// A water cell.
    Water = 2,
    /// The cell the player must reach.
    Goal = 3,
}

impl CellType {
    /// The cell type encoded by `value` in level files, if any.
    pub fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(CellType::Empty),
            1 => Some(CellType::Wall),
            2 => Some(CellType::Water),
            3 => Some(CellType::Goal),
            _ => None,
        }
    }
}

/// A cell of the grid, made of one or several polygonal pieces.
///
/// A cell that was never cut has a single piece covering its whole square. Folds cut cells
/// into partial cells, and partial cells meeting again after a fold are merged into a cell
/// with several pieces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Cell {
    grid_position: GridPos,
    cell_type: CellType,
    pieces: SmallVec<[CellPiece; 2]>,
    is_partial: bool,
}

impl Cell {
    /// A whole cell covering the square of `grid_position`.
    pub fn new(grid_position: GridPos, cell_type: CellType, cell_size: Real) -> Self {
        let piece = CellPiece::new(
            Self::square(&grid_position, cell_size),
            cell_type,
            PieceSource::Original,
        );
        Self {
            grid_position,
            cell_type,
            pieces: smallvec::smallvec![piece],
            is_partial: false,
        }
    }

    /// A cell made of the given pieces.
    pub fn from_pieces(
        grid_position: GridPos,
        cell_type: CellType,
        pieces: impl IntoIterator<Item = CellPiece>,
        cell_size: Real,
    ) -> Self {
        let mut result = Self {
            grid_position,
            cell_type,
            pieces: pieces.into_iter().collect(),
            is_partial: false,
        };
        result.refresh_partial(cell_size);
        result
    }

    /// The counter-clockwise square covered by the cell at `grid_position`.
    pub fn square(grid_position: &GridPos, cell_size: Real) -> Vec<Point<Real>> {
        let min = Point::new(
            grid_position.x as Real * cell_size,
            grid_position.y as Real * cell_size,
        );
        vec![
            min,
            min + Vector::new(cell_size, 0.0),
            min + Vector::new(cell_size, cell_size),
            min + Vector::new(0.0, cell_size),
        ]
    }

    /// The position of this cell on the grid.
    #[inline]
    pub fn grid_position(&self) -> GridPos {
        self.grid_position
    }

    /// The semantic type of this cell.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Changes the semantic type of this cell.
    #[inline]
    pub fn set_cell_type(&mut self, cell_type: CellType) {
        self.cell_type = cell_type;
    }

    /// The pieces this cell is made of.
    #[inline]
    pub fn pieces(&self) -> &[CellPiece] {
        &self.pieces
    }

    /// Whether this cell covers less than a full cell.
    #[inline]
    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    /// The total area of this cell's pieces.
    pub fn area(&self) -> Real {
        self.pieces.iter().map(|piece| piece.area()).sum()
    }

    /// The area-weighted centroid of this cell's pieces.
    pub fn centroid(&self) -> Point<Real> {
        let mut area = 0.0;
        let mut weighted = Vector::zeros();
        let mut unweighted = Vector::zeros();

        for piece in &self.pieces {
            let (piece_area, piece_center) = piece.area_and_centroid();
            area += piece_area;
            weighted += piece_center.coords * piece_area;
            unweighted += piece_center.coords;
        }

        if area > 0.0 {
            Point::from(weighted / area)
        } else if !self.pieces.is_empty() {
            Point::from(unweighted / self.pieces.len() as Real)
        } else {
            Point::origin()
        }
    }

    /// The visible outline of this cell.
    ///
    /// Pieces sharing edges are merged into a single polygon. If the pieces don't form a
    /// single outline, the largest piece is returned.
    pub fn geometry(&self) -> Vec<Point<Real>> {
        if let [piece] = &self.pieces[..] {
            return piece.vertices().to_vec();
        }

        geometry::merge_polygons(self.pieces.iter().map(|p| p.vertices()), DEFAULT_EPSILON)
            .or_else(|| {
                self.pieces
                    .iter()
                    .max_by_key(|p| OrderedFloat(p.area()))
                    .map(|p| p.vertices().to_vec())
            })
            .unwrap_or_default()
    }

    /// Replaces the pieces of this cell.
    pub fn set_pieces(&mut self, pieces: impl IntoIterator<Item = CellPiece>, cell_size: Real) {
        self.pieces = pieces.into_iter().collect();
        self.refresh_partial(cell_size);
    }

    /// Moves this cell: its geometry by `shift` and its grid position by `grid_shift`.
    ///
    /// Both must describe the same displacement for the geometry to stay inside the cell.
    pub fn translate(&mut self, shift: &Vector<Real>, grid_shift: &GridPos) {
        self.grid_position += grid_shift;
        self.pieces = self.pieces.iter().map(|p| p.translated(shift)).collect();
    }

    /// Appends the pieces of `other` to the pieces of this cell.
    ///
    /// The cell type of `self` is kept unless it is [`CellType::Empty`].
    pub fn absorb(&mut self, other: Cell, cell_size: Real) {
        if self.cell_type == CellType::Empty {
            self.cell_type = other.cell_type;
        }

        self.pieces.extend(other.pieces);
        self.refresh_partial(cell_size);
    }

    /// Recomputes whether this cell is partial, given the size of a full cell.
    pub fn refresh_partial(&mut self, cell_size: Real) {
        let full = cell_size * cell_size;
        self.is_partial = self.area() < full * (1.0 - AREA_TOLERANCE);
    }
}
