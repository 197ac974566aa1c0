use crate::cell::CellType;
use crate::geometry;
use crate::math::{Point, Real, Vector};

/// Which of the two cut lines of a fold produced a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CutSide {
    /// The line passing through the first anchor.
    Line1,
    /// The line passing through the second anchor.
    Line2,
}

/// Provenance of a cell piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PieceSource {
    /// The piece was part of the level before any fold.
    #[default]
    Original,
    /// The piece was cut by one of the lines of a fold.
    Fold {
        /// Identifier of the fold that cut this piece.
        fold_id: u32,
        /// The cut line that produced this piece.
        side: CutSide,
    },
}

impl PieceSource {
    /// The identifier of the fold that produced this piece, if any.
    pub fn fold_id(&self) -> Option<u32> {
        match self {
            PieceSource::Original => None,
            PieceSource::Fold { fold_id, .. } => Some(*fold_id),
        }
    }

    /// The cut line that produced this piece, if any.
    pub fn side(&self) -> Option<CutSide> {
        match self {
            PieceSource::Original => None,
            PieceSource::Fold { side, .. } => Some(*side),
        }
    }
}

/// A polygonal fragment of a cell.
///
/// Pieces are never modified in place: clipping or moving a piece creates a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CellPiece {
    vertices: Vec<Point<Real>>,
    cell_type: CellType,
    source: PieceSource,
}

impl CellPiece {
    /// Creates a piece from its polygon, the type of the cell it came from, and its provenance.
    pub fn new(vertices: Vec<Point<Real>>, cell_type: CellType, source: PieceSource) -> Self {
        Self {
            vertices,
            cell_type,
            source,
        }
    }

    /// The polygon of this piece.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The type of the cell this piece originally belonged to.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The provenance of this piece.
    #[inline]
    pub fn source(&self) -> PieceSource {
        self.source
    }

    /// The area of this piece's polygon.
    #[inline]
    pub fn area(&self) -> Real {
        geometry::polygon_area(&self.vertices)
    }

    /// The area and centroid of this piece's polygon.
    #[inline]
    pub fn area_and_centroid(&self) -> (Real, Point<Real>) {
        geometry::polygon_area_and_centroid(&self.vertices)
    }

    /// A new piece cut out of this one, inheriting its cell type.
    pub fn clipped(&self, vertices: Vec<Point<Real>>, source: PieceSource) -> Self {
        Self::new(vertices, self.cell_type, source)
    }

    /// A copy of this piece moved by `shift`.
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self::new(
            geometry::translate_polygon(&self.vertices, shift),
            self.cell_type,
            self.source,
        )
    }
}
