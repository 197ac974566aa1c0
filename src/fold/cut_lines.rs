use crate::geometry::CutLine;
use crate::math::{Point, Real, Unit, UnitVector, Vector, DEFAULT_EPSILON};

/// The two parallel lines delimiting the band removed by a fold.
///
/// Both lines share the same normal, pointing from the first anchor toward the second one.
/// The band lies on the positive side of `line1` and on the negative side of `line2`, so a
/// fold keeps the negative side of `line1` and the positive side of `line2`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CutLinePair {
    /// The line passing through the first anchor.
    pub line1: CutLine,
    /// The line passing through the second anchor.
    pub line2: CutLine,
}

impl CutLinePair {
    /// The normal shared by both lines.
    #[inline]
    pub fn normal(&self) -> UnitVector<Real> {
        self.line1.normal
    }

    /// The width of the band between the two lines.
    #[inline]
    pub fn width(&self) -> Real {
        self.line1.normal.dot(&(self.line2.point - self.line1.point))
    }

    /// The translation bringing the second line onto the first one.
    #[inline]
    pub fn shift(&self) -> Vector<Real> {
        self.line1.point - self.line2.point
    }
}

/// Builds the cut lines of a fold from the local-space centers of its two anchor cells.
///
/// Returns `None` if the anchors are too close to each other to define a direction.
pub fn calculate_cut_lines(
    anchor1_local: &Point<Real>,
    anchor2_local: &Point<Real>,
) -> Option<CutLinePair> {
    let normal = Unit::try_new(anchor2_local - anchor1_local, DEFAULT_EPSILON)?;

    Some(CutLinePair {
        line1: CutLine::new(*anchor1_local, normal),
        line2: CutLine::new(*anchor2_local, normal),
    })
}
