use crate::cell::Cell;
use crate::fold::CutLinePair;
use crate::geometry::{self, CutLine};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// Where a cell lies relative to the cut lines of a fold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Region {
    /// Entirely on the first anchor's side of the band. The cell does not move.
    KeptLeft,
    /// Entirely on the second anchor's side of the band. The cell is moved back.
    KeptRight,
    /// Entirely inside the band. The cell is deleted.
    Removed,
    /// Crossed by the first line. The cell is clipped and does not move.
    SplitLine1,
    /// Crossed by the second line. The cell is clipped and moved back.
    SplitLine2,
}

impl Region {
    /// Whether cells of this region are translated by the fold.
    #[inline]
    pub fn is_shifted(self) -> bool {
        matches!(self, Region::KeptRight | Region::SplitLine2)
    }

    /// Whether cells of this region are clipped by the fold.
    #[inline]
    pub fn is_split(self) -> bool {
        matches!(self, Region::SplitLine1 | Region::SplitLine2)
    }
}

/// Tests if any piece of `cell` is crossed by the given line.
#[inline]
pub fn does_cell_intersect_line(
    cell: &Cell,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
) -> bool {
    does_cell_intersect_line_with_epsilon(cell, line_point, line_normal, DEFAULT_EPSILON)
}

/// Same as [`does_cell_intersect_line`] with a custom on-line tolerance.
///
/// Pieces merely touching the line don't count as crossed.
pub fn does_cell_intersect_line_with_epsilon(
    cell: &Cell,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
    epsilon: Real,
) -> bool {
    cell.pieces().iter().any(|piece| {
        geometry::polygon_straddles_line(piece.vertices(), line_point, line_normal, epsilon)
    })
}

/// Labels a cell with the region of the fold it lies in.
#[inline]
pub fn classify_cell_region(cell: &Cell, cut_lines: &CutLinePair) -> Region {
    classify_cell_region_with_epsilon(cell, cut_lines, DEFAULT_EPSILON)
}

/// Same as [`classify_cell_region`] with a custom on-line tolerance.
///
/// Cells crossed by a line are split cells, whatever the position of their centroid. This
/// includes cells whose pieces lie on both sides of a line without any of them being crossed,
/// like a cell joined back along a previous fold line. A cell crossed by both lines is
/// reported as [`Region::SplitLine1`]. The other cells are labelled after the position of
/// their centroid.
pub fn classify_cell_region_with_epsilon(
    cell: &Cell,
    cut_lines: &CutLinePair,
    epsilon: Real,
) -> Region {
    let CutLinePair { line1, line2 } = cut_lines;

    if cell_spans_line(cell, line1, epsilon) {
        return Region::SplitLine1;
    }

    if cell_spans_line(cell, line2, epsilon) {
        return Region::SplitLine2;
    }

    let centroid = cell.centroid();

    if line1.side(&centroid, epsilon) <= 0.0 {
        Region::KeptLeft
    } else if line2.side(&centroid, epsilon) >= 0.0 {
        Region::KeptRight
    } else {
        Region::Removed
    }
}

/// Whether the pieces of `cell`, taken together, have vertices strictly on both sides of `line`.
///
/// This is implied by [`does_cell_intersect_line_with_epsilon`].
pub(crate) fn cell_spans_line(cell: &Cell, line: &CutLine, epsilon: Real) -> bool {
    let mut negative = false;
    let mut positive = false;

    for pt in cell.pieces().iter().flat_map(|piece| piece.vertices()) {
        let side = line.side(pt, epsilon);
        negative |= side < 0.0;
        positive |= side > 0.0;

        if negative && positive {
            return true;
        }
    }

    false
}
