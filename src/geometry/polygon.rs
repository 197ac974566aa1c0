use crate::math::{Point, Real, Vector};
use ordered_float::OrderedFloat;

/// The signed area of a polygon, positive if its vertices are ordered counter-clockwise.
///
/// Polygons with less than 3 vertices have a zero area.
pub fn polygon_signed_area(polygon: &[Point<Real>]) -> Real {
    if polygon.len() < 3 {
        return 0.0;
    }

    // Relative to the first vertex so large grid coordinates don't eat the f32 precision.
    let origin = polygon[0];
    let mut area2 = 0.0;

    for i in 1..polygon.len() - 1 {
        let a = polygon[i] - origin;
        let b = polygon[i + 1] - origin;
        area2 += a.perp(&b);
    }

    area2 * 0.5
}

/// The area of a polygon, computed with the shoelace formula.
///
/// The result does not depend on the winding order of the vertices.
#[inline]
pub fn polygon_area(polygon: &[Point<Real>]) -> Real {
    polygon_signed_area(polygon).abs()
}

/// Computes the area and the centroid of a polygon.
///
/// Degenerate inputs still get a meaningful centroid: the vertex itself for a single point,
/// the midpoint for two points, and the average of the vertices for a zero-area polygon.
pub fn polygon_area_and_centroid(polygon: &[Point<Real>]) -> (Real, Point<Real>) {
    match polygon.len() {
        0 => (0.0, Point::origin()),
        1 => (0.0, polygon[0]),
        2 => (0.0, na::center(&polygon[0], &polygon[1])),
        n => {
            let origin = polygon[0];
            let mut area2 = 0.0;
            let mut weighted = Vector::zeros();

            for i in 1..n - 1 {
                let a = polygon[i] - origin;
                let b = polygon[i + 1] - origin;
                let cross = a.perp(&b);
                area2 += cross;
                weighted += (a + b) * cross;
            }

            if area2.abs() <= Real::EPSILON {
                let sum = polygon
                    .iter()
                    .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
                (0.0, Point::from(sum / n as Real))
            } else {
                (area2.abs() * 0.5, origin + weighted / (3.0 * area2))
            }
        }
    }
}

/// The area-weighted centroid of a polygon.
#[inline]
pub fn polygon_centroid(polygon: &[Point<Real>]) -> Point<Real> {
    polygon_area_and_centroid(polygon).1
}

/// A copy of `polygon` with every vertex moved by `shift`.
pub fn translate_polygon(polygon: &[Point<Real>], shift: &Vector<Real>) -> Vec<Point<Real>> {
    polygon.iter().map(|pt| pt + shift).collect()
}

/// Computes the outline of the union of polygons sharing edges.
///
/// Every polygon is oriented counter-clockwise, then the edges lying on the boundary between
/// two polygons cancel out and the remaining ones are chained into a single loop. Edges only
/// partially shared are subdivided at the vertices of the other polygons first. Collinear
/// vertices are removed from the result.
///
/// Returns `None` if the polygons don't form a single simple outline, e.g., if they are
/// disjoint or only touch at a vertex.
pub fn merge_polygons<'a>(
    polygons: impl IntoIterator<Item = &'a [Point<Real>]>,
    epsilon: Real,
) -> Option<Vec<Point<Real>>> {
    let polygons: Vec<&[Point<Real>]> = polygons.into_iter().filter(|p| p.len() >= 3).collect();
    let all_vertices: Vec<Point<Real>> = polygons.iter().flat_map(|p| p.iter().copied()).collect();
    let mut edges = Vec::new();

    for poly in &polygons {
        let ccw = polygon_signed_area(poly) >= 0.0;
        let n = poly.len();

        for i in 0..n {
            let (a, b) = if ccw {
                (poly[i], poly[(i + 1) % n])
            } else {
                (poly[(i + 1) % n], poly[i])
            };
            push_subdivided_edge(a, b, &all_vertices, epsilon, &mut edges);
        }
    }

    let mut alive = vec![true; edges.len()];

    for i in 0..edges.len() {
        if !alive[i] {
            continue;
        }

        for j in i + 1..edges.len() {
            if alive[j]
                && same_point(&edges[i][0], &edges[j][1], epsilon)
                && same_point(&edges[i][1], &edges[j][0], epsilon)
            {
                alive[i] = false;
                alive[j] = false;
                break;
            }
        }
    }

    let mut remaining: Vec<[Point<Real>; 2]> = edges
        .into_iter()
        .zip(alive)
        .filter_map(|(edge, alive)| alive.then_some(edge))
        .collect();

    if remaining.len() < 3 {
        return None;
    }

    let first = remaining.swap_remove(0);
    let mut outline = vec![first[0]];
    let mut current = first[1];

    while !same_point(&current, &outline[0], epsilon) {
        let next = remaining
            .iter()
            .position(|edge| same_point(&edge[0], &current, epsilon))?;
        let edge = remaining.swap_remove(next);
        outline.push(edge[0]);
        current = edge[1];
    }

    if !remaining.is_empty() {
        // More than one loop: holes or disjoint components.
        return None;
    }

    remove_collinear_vertices(&mut outline, epsilon);
    (outline.len() >= 3).then_some(outline)
}

#[inline]
fn same_point(a: &Point<Real>, b: &Point<Real>, epsilon: Real) -> bool {
    na::distance_squared(a, b) <= epsilon * epsilon
}

fn push_subdivided_edge(
    a: Point<Real>,
    b: Point<Real>,
    vertices: &[Point<Real>],
    epsilon: Real,
    out: &mut Vec<[Point<Real>; 2]>,
) {
    if same_point(&a, &b, epsilon) {
        return;
    }

    let dir = b - a;
    let len = dir.norm();
    let param_eps = epsilon / len;
    let mut cuts: Vec<Real> = vertices
        .iter()
        .filter_map(|v| {
            let t = (v - a).dot(&dir) / (len * len);
            let off_line = ((v - a) - dir * t).norm();
            (t > param_eps && t < 1.0 - param_eps && off_line <= epsilon).then_some(t)
        })
        .collect();
    cuts.sort_by_key(|t| OrderedFloat(*t));
    cuts.dedup_by(|t1, t2| (*t1 - *t2).abs() <= param_eps);

    let mut start = a;
    for t in cuts {
        let end = a + dir * t;
        out.push([start, end]);
        start = end;
    }
    out.push([start, b]);
}

fn remove_collinear_vertices(outline: &mut Vec<Point<Real>>, epsilon: Real) {
    let mut i = 0;

    while outline.len() >= 3 && i < outline.len() {
        let n = outline.len();
        let prev = outline[(i + n - 1) % n];
        let curr = outline[i];
        let next = outline[(i + 1) % n];
        let dir = next - prev;
        let len = dir.norm();
        let deviation = if len <= epsilon {
            (curr - prev).norm()
        } else {
            dir.perp(&(curr - prev)).abs() / len
        };

        if deviation <= epsilon {
            let _ = outline.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}
