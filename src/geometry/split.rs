use crate::geometry::line::{
    point_side_of_line_with_epsilon, segment_line_intersection_with_epsilon,
};
use crate::geometry::polygon::polygon_area;
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// The result of a line-splitting operation.
pub enum SplitResult<T> {
    /// The split operation yield two results: one lying on the negative half-plane of the line
    /// and the second lying on the positive half-plane of the line.
    Pair(T, T),
    /// The shape being split is fully contained in the negative half-plane of the line.
    Negative,
    /// The shape being split is fully contained in the positive half-plane of the line.
    Positive,
}

/// The two sides of a polygon cut by a line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSplit {
    /// The part of the polygon on the positive side of the line (where the normal points).
    pub left: Vec<Point<Real>>,
    /// The part of the polygon on the negative side of the line.
    pub right: Vec<Point<Real>>,
    /// The points where the polygon boundary crosses the line.
    pub intersections: Vec<Point<Real>>,
}

impl PolygonSplit {
    /// Whether the positive side holds a polygon (at least 3 vertices).
    #[inline]
    pub fn has_left(&self) -> bool {
        self.left.len() >= 3
    }

    /// Whether the negative side holds a polygon (at least 3 vertices).
    #[inline]
    pub fn has_right(&self) -> bool {
        self.right.len() >= 3
    }
}

/// Splits a polygon by an infinite line.
///
/// This is a Sutherland-Hodgman clip against both half-planes at once: each vertex goes to
/// `left` if it lies on the positive side of the line or on the line, and to `right` if it
/// lies on the negative side or on the line. When an edge crosses the line, the crossing point
/// is appended to both outputs. The winding order of the input is preserved.
///
/// A side with less than 3 vertices holds no geometry.
#[inline]
pub fn split_polygon_by_line(
    polygon: &[Point<Real>],
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
) -> PolygonSplit {
    split_polygon_by_line_with_epsilon(polygon, line_point, line_normal, DEFAULT_EPSILON)
}

/// Same as [`split_polygon_by_line`] with a custom on-line tolerance.
pub fn split_polygon_by_line_with_epsilon(
    polygon: &[Point<Real>],
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
    epsilon: Real,
) -> PolygonSplit {
    let mut result = PolygonSplit::default();

    if polygon.len() < 3 {
        return result;
    }

    let n = polygon.len();
    let sides: Vec<Real> = polygon
        .iter()
        .map(|pt| point_side_of_line_with_epsilon(pt, line_point, line_normal, epsilon))
        .collect();

    for i in 0..n {
        let j = (i + 1) % n;
        let current = polygon[i];

        if sides[i] >= 0.0 {
            result.left.push(current);
        }
        if sides[i] <= 0.0 {
            result.right.push(current);
        }

        if sides[i] * sides[j] < 0.0 {
            if let Some(inter) = segment_line_intersection_with_epsilon(
                &current,
                &polygon[j],
                line_point,
                line_normal,
                epsilon,
            ) {
                result.intersections.push(inter);
                result.left.push(inter);
                result.right.push(inter);
            }
        }
    }

    result
}

/// Tests if some vertices of `polygon` lie strictly on each side of the line.
///
/// Vertices closer than `epsilon` to the line count as lying on it, so a polygon merely
/// touching the line does not straddle it.
pub fn polygon_straddles_line(
    polygon: &[Point<Real>],
    line_point: &Point<Real>,
    line_normal: &Vector<Real>,
    epsilon: Real,
) -> bool {
    let mut positive = false;
    let mut negative = false;

    for pt in polygon {
        let side = point_side_of_line_with_epsilon(pt, line_point, line_normal, epsilon);
        positive |= side > 0.0;
        negative |= side < 0.0;

        if positive && negative {
            return true;
        }
    }

    false
}

/// Splits a polygon by a line identified by its normal `local_axis` and the `bias` (i.e. the
/// line passes through the point equal to `local_axis * bias`).
///
/// # Result
/// Returns the result of the split. The first polygon returned is the piece lying on the
/// negative half-plane delimited by the line. The second polygon returned is the piece lying on
/// the positive half-plane. A polygon lying on the line itself is reported as `Negative`.
pub fn local_split(
    polygon: &[Point<Real>],
    local_axis: &UnitVector<Real>,
    bias: Real,
    epsilon: Real,
) -> SplitResult<Vec<Point<Real>>> {
    let line_point = Point::from(local_axis.into_inner() * bias);

    if !polygon_straddles_line(polygon, &line_point, local_axis, epsilon) {
        let any_positive = polygon.iter().any(|pt| {
            point_side_of_line_with_epsilon(pt, &line_point, local_axis, epsilon) > 0.0
        });

        return if any_positive {
            SplitResult::Positive
        } else {
            SplitResult::Negative
        };
    }

    let split = split_polygon_by_line_with_epsilon(polygon, &line_point, local_axis, epsilon);

    match (split.has_right(), split.has_left()) {
        (true, true) => SplitResult::Pair(split.right, split.left),
        // Only reachable with slivers thinner than `epsilon`: attribute to the larger side.
        _ if polygon_area(&split.left) > polygon_area(&split.right) => SplitResult::Positive,
        _ => SplitResult::Negative,
    }
}
