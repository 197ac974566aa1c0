use crate::math::{GridPos, Real};

/// Why a pair of anchors cannot define a fold.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidAnchorsReason {
    /// At least one anchor lies outside of the grid.
    #[error("an anchor lies outside of the grid")]
    OutOfBounds,
    /// Both anchors are the same cell.
    #[error("the anchors are the same cell")]
    Coincident,
    /// The anchors share a row or a column while the fold must be diagonal.
    #[error("the anchors are not diagonal to each other")]
    NotDiagonal,
}

/// Errors preventing a fold from being applied.
///
/// Whatever the error, the directory given to the fold is left untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FoldError {
    /// The anchors don't define a valid fold.
    ///
    /// This is detected before any work is done.
    #[error("invalid fold anchors ({}, {}) and ({}, {}): {reason}", .anchor1.x, .anchor1.y, .anchor2.x, .anchor2.y)]
    InvalidAnchors {
        /// The first anchor of the rejected fold.
        anchor1: GridPos,
        /// The second anchor of the rejected fold.
        anchor2: GridPos,
        /// Why the anchors were rejected.
        reason: InvalidAnchorsReason,
    },
    /// Two cells would end up at the same grid position after the fold, and they are not the
    /// two halves of a cell cut by this fold.
    #[error(
        "cells from ({}, {}) and ({}, {}) would both end up at ({}, {})",
        .first_origin.x, .first_origin.y, .second_origin.x, .second_origin.y,
        .destination.x, .destination.y
    )]
    DestinationCollision {
        /// The original position of the cell already occupying the destination.
        first_origin: GridPos,
        /// The original position of the cell moved onto the destination.
        second_origin: GridPos,
        /// The position both cells would occupy.
        destination: GridPos,
    },
    /// Clipping the cell at `position` left no usable geometry on the kept side.
    #[error("splitting the cell at ({}, {}) leaves a degenerate piece of area {area}", .position.x, .position.y)]
    DegenerateSplit {
        /// The position of the cell before the fold.
        position: GridPos,
        /// The area left after clipping.
        area: Real,
    },
}
