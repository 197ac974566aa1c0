//! Folding a grid along the band delimited by two anchor cells.
//!
//! A fold is computed in four stages:
//!
//! 1. [`calculate_cut_lines`] builds two parallel lines passing through the centers of the
//!    anchor cells, both perpendicular to the direction going from the first anchor to the second.
//! 2. Every cell is labelled with a [`Region`] by [`classify_cell_region`].
//! 3. Cells between the lines are deleted, cells crossed by a line are clipped, and everything
//!    beyond the second line is moved back by the distance between the anchors.
//! 4. Clipped halves meeting again are merged into a single cell.
//!
//! [`FoldSystem::execute_diagonal_fold`] runs all of these and returns a [`FoldReport`] that
//! entities standing on the grid (see [`FoldDependent`]) use to follow their cell.

pub use self::cut_lines::{calculate_cut_lines, CutLinePair};
pub use self::error::{FoldError, InvalidAnchorsReason};
pub use self::fold_system::{FoldConfig, FoldSystem};
pub use self::region::{
    classify_cell_region, classify_cell_region_with_epsilon, does_cell_intersect_line,
    does_cell_intersect_line_with_epsilon, Region,
};
pub use self::report::{CellTranslation, FoldDependent, FoldReport, Player};

mod cut_lines;
mod error;
mod fold_system;
mod region;
mod report;
