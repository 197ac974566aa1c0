/*!
spacefold2d
===========

**spacefold2d** is the geometry engine behind grid "space folding": two anchor cells define a
band of the grid which gets cut out, after which the two remaining halves are spliced back
together. Cells crossed by the cut lines are clipped into partial pieces, and the pieces
meeting again after the splice are merged back into a single cell.

The entry point is [`fold::FoldSystem::execute_diagonal_fold`]. It works on any
[`grid::CellDirectory`], the crate providing [`grid::CellGrid`] as a ready-made arena.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod cell;
pub mod fold;
pub mod geometry;
pub mod grid;
#[cfg(feature = "serde-serialize")]
pub mod level;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Unit, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for side tests and intersections.
    pub const DEFAULT_EPSILON: Real = 1.0e-3;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub type UnitVector<N> = Unit<Vector2<N>>;

    /// An integer position on the cell grid.
    pub type GridPos = Vector2<i32>;
}
