use crate::geometry::{local_split, SplitResult};
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// An infinite line delimiting two half-planes.
///
/// The line passes through `point`. The half-plane the `normal` points to is called the
/// positive side, the other one the negative side.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CutLine {
    /// A point the line passes through.
    pub point: Point<Real>,
    /// The unit normal of the line, pointing toward its positive side.
    pub normal: UnitVector<Real>,
}

impl CutLine {
    /// Builds a line from one of its points and its unit normal.
    #[inline]
    pub fn new(point: Point<Real>, normal: UnitVector<Real>) -> Self {
        Self { point, normal }
    }

    /// The signed distance from `pt` to this line, positive on the side `normal` points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&(pt - self.point))
    }

    /// Same as [`point_side_of_line_with_epsilon`] for this line.
    #[inline]
    pub fn side(&self, pt: &Point<Real>, epsilon: Real) -> Real {
        point_side_of_line_with_epsilon(pt, &self.point, &self.normal, epsilon)
    }

    /// The distance between the origin and this line, along its normal.
    #[inline]
    pub fn bias(&self) -> Real {
        self.normal.dot(&self.point.coords)
    }

    /// Splits `polygon` by this line.
    ///
    /// See [`local_split`] for the layout of the result.
    pub fn split_polygon(
        &self,
        polygon: &[Point<Real>],
        epsilon: Real,
    ) -> SplitResult<Vec<Point<Real>>> {
        local_split(polygon, &self.normal, self.bias(), epsilon)
    }

    /// This line moved by `shift`. The normal is unchanged.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self::new(self.point + shift, self.normal)
    }
}

/// Determines on which side of a line a point lies.
///
/// Returns `(point - line_point) · line_normal`. Values smaller than [`DEFAULT_EPSILON`] in
/// magnitude are snapped to exactly `0.0`, meaning the point lies on the line.
#[inline]
pub fn point_side_of_line(
    point: &Point<Real>,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
) -> Real {
    point_side_of_line_with_epsilon(point, line_point, line_normal, DEFAULT_EPSILON)
}

/// Same as [`point_side_of_line`] with a custom on-line tolerance.
pub fn point_side_of_line_with_epsilon(
    point: &Point<Real>,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
    epsilon: Real,
) -> Real {
    let distance = (point - line_point).dot(line_normal);

    if distance.abs() < epsilon {
        0.0
    } else {
        distance
    }
}

/// Computes the intersection between the segment `[seg_start, seg_end]` and an infinite line.
///
/// Returns `None` if the segment is parallel to the line or does not reach it.
#[inline]
pub fn segment_line_intersection(
    seg_start: &Point<Real>,
    seg_end: &Point<Real>,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
) -> Option<Point<Real>> {
    segment_line_intersection_with_epsilon(
        seg_start,
        seg_end,
        line_point,
        line_normal,
        DEFAULT_EPSILON,
    )
}

/// Same as [`segment_line_intersection`] with a custom tolerance.
///
/// The segment parameter is allowed to overshoot `[0, 1]` by `epsilon`, the resulting point
/// being clamped back on the segment.
pub fn segment_line_intersection_with_epsilon(
    seg_start: &Point<Real>,
    seg_end: &Point<Real>,
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
    epsilon: Real,
) -> Option<Point<Real>> {
    let seg_dir = seg_end - seg_start;
    let denom = seg_dir.dot(line_normal);

    if denom.abs() < epsilon {
        return None;
    }

    let t = (line_point - seg_start).dot(line_normal) / denom;

    if t < -epsilon || t > 1.0 + epsilon {
        return None;
    }

    Some(seg_start + seg_dir * t.clamp(0.0, 1.0))
}
