//! Pure 2D geometric primitives: side tests, polygon clipping, areas and outlines.
//!
//! Polygons are plain slices of points. Consecutive points form an edge and the last point
//! is implicitly connected to the first one.

pub use self::line::{
    point_side_of_line, point_side_of_line_with_epsilon, segment_line_intersection,
    segment_line_intersection_with_epsilon, CutLine,
};
pub use self::polygon::{
    merge_polygons, polygon_area, polygon_area_and_centroid, polygon_centroid,
    polygon_signed_area, translate_polygon,
};
pub use self::split::{
    local_split, polygon_straddles_line, split_polygon_by_line,
    split_polygon_by_line_with_epsilon, PolygonSplit, SplitResult,
};

mod line;
mod polygon;
mod split;
