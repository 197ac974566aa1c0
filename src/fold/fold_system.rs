use crate::cell::{Cell, CellPiece, CutSide, PieceSource, AREA_TOLERANCE};
use crate::fold::region::cell_spans_line;
use crate::fold::{
    calculate_cut_lines, classify_cell_region_with_epsilon, does_cell_intersect_line_with_epsilon,
    CellTranslation, CutLinePair, FoldError, FoldReport, InvalidAnchorsReason, Region,
};
use crate::geometry::{CutLine, SplitResult};
use crate::grid::CellDirectory;
use crate::math::{GridPos, Point, Real, Vector, DEFAULT_EPSILON};
use hashbrown::HashMap;

/// Tolerances and rules applied by a [`FoldSystem`].
///
/// # Examples
///
/// ```
/// # use spacefold2d::fold::FoldConfig;
/// let strict = FoldConfig {
///     require_diagonal: true,
///     ..FoldConfig::default()
/// };
/// assert!(strict.epsilon > 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FoldConfig {
    /// Points closer than this distance to a cut line are considered to lie on it.
    pub epsilon: Real,
    /// Relative tolerance used when comparing merged areas to the area of a full cell.
    pub area_tolerance: Real,
    /// Clipped cells keeping less than this fraction of a full cell are rejected.
    pub degenerate_area: Real,
    /// Whether anchors sharing a row or a column are rejected.
    pub require_diagonal: bool,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            area_tolerance: AREA_TOLERANCE,
            degenerate_area: 1.0e-4,
            require_diagonal: false,
        }
    }
}

/// Applies folds to a cell directory.
///
/// The system only remembers how many folds it performed, so that pieces cut by different
/// folds can be told apart.
#[derive(Clone, Debug, Default)]
pub struct FoldSystem {
    config: FoldConfig,
    next_fold_id: u32,
}

impl FoldSystem {
    /// A fold system with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fold system with a custom configuration.
    pub fn with_config(config: FoldConfig) -> Self {
        Self {
            config,
            next_fold_id: 0,
        }
    }

    /// The configuration of this fold system.
    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// The number of folds successfully applied so far.
    pub fn folds_performed(&self) -> u32 {
        self.next_fold_id
    }

    /// Builds the cut lines of a fold from the local-space centers of its anchor cells.
    pub fn calculate_cut_lines(
        &self,
        anchor1_local: &Point<Real>,
        anchor2_local: &Point<Real>,
    ) -> Option<CutLinePair> {
        calculate_cut_lines(anchor1_local, anchor2_local)
    }

    /// Labels `cell` with its region relative to `cut_lines`, using this system's tolerance.
    pub fn classify_cell_region(&self, cell: &Cell, cut_lines: &CutLinePair) -> Region {
        classify_cell_region_with_epsilon(cell, cut_lines, self.config.epsilon)
    }

    /// Tests if any piece of `cell` is crossed by a line, using this system's tolerance.
    pub fn does_cell_intersect_line(
        &self,
        cell: &Cell,
        line_point: &Point<Real>,
        line_normal: &Vector<Real>,
    ) -> bool {
        does_cell_intersect_line_with_epsilon(cell, line_point, line_normal, self.config.epsilon)
    }

    /// Checks that two anchors can define a fold on `directory`.
    pub fn validate_anchors<D: CellDirectory + ?Sized>(
        &self,
        directory: &D,
        anchor1: &GridPos,
        anchor2: &GridPos,
    ) -> Result<(), FoldError> {
        let reason = if !directory.in_bounds(anchor1) || !directory.in_bounds(anchor2) {
            Some(InvalidAnchorsReason::OutOfBounds)
        } else if anchor1 == anchor2 {
            Some(InvalidAnchorsReason::Coincident)
        } else if self.config.require_diagonal
            && (anchor1.x == anchor2.x || anchor1.y == anchor2.y)
        {
            Some(InvalidAnchorsReason::NotDiagonal)
        } else {
            None
        };

        match reason {
            Some(reason) => Err(FoldError::InvalidAnchors {
                anchor1: *anchor1,
                anchor2: *anchor2,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Folds the grid so that the cell at `anchor2` lands onto the cell at `anchor1`.
    ///
    /// The band between the two lines passing through the anchor centers (and perpendicular to
    /// the anchors direction) is deleted. Cells crossed by these lines are clipped, and the
    /// part of the grid beyond `anchor2` is moved back by `anchor1 - anchor2`. A moved cell
    /// landing on a cell that stayed put is merged with it, as long as their pieces fit in a
    /// single cell.
    ///
    /// The fold is computed on a copy of `directory`, which is only replaced on success: on
    /// error, `directory` is left exactly as it was.
    pub fn execute_diagonal_fold<D: CellDirectory + Clone>(
        &mut self,
        directory: &mut D,
        anchor1: GridPos,
        anchor2: GridPos,
    ) -> Result<FoldReport, FoldError> {
        self.validate_anchors(directory, &anchor1, &anchor2)?;

        let fold_id = self.next_fold_id;
        let cell_size = directory.cell_size();
        let anchor1_local = directory.grid_to_local(&anchor1);
        let anchor2_local = directory.grid_to_local(&anchor2);
        let cut_lines = calculate_cut_lines(&anchor1_local, &anchor2_local).ok_or(
            FoldError::InvalidAnchors {
                anchor1,
                anchor2,
                reason: InvalidAnchorsReason::Coincident,
            },
        )?;
        let shift = cut_lines.shift();
        let grid_shift = GridPos::new(
            (shift.x / cell_size).round() as i32,
            (shift.y / cell_size).round() as i32,
        );

        log::debug!(
            "fold {}: anchors ({}, {}) -> ({}, {}), grid shift ({}, {})",
            fold_id,
            anchor1.x,
            anchor1.y,
            anchor2.x,
            anchor2.y,
            grid_shift.x,
            grid_shift.y
        );

        let mut staged = directory.clone();
        let mut positions = staged.positions();
        positions.sort_unstable_by_key(|pos| (pos.y, pos.x));

        let mut report = FoldReport {
            fold_id,
            cut_lines,
            shift,
            grid_shift,
            removed: Vec::new(),
            split: Vec::new(),
            merged: Vec::new(),
            translations: Vec::new(),
        };
        let mut moving = Vec::new();

        for pos in positions {
            let Some(cell) = staged.get_cell(&pos) else {
                continue;
            };
            let region = self.classify_cell_region(cell, &cut_lines);
            log::trace!("fold {}: cell ({}, {}) is {:?}", fold_id, pos.x, pos.y, region);

            match region {
                Region::KeptLeft => {}
                Region::Removed => {
                    let _ = staged.remove(&pos);
                    report.removed.push(pos);
                }
                Region::SplitLine1 => {
                    if cell_spans_line(cell, &cut_lines.line2, self.config.epsilon) {
                        // The parts beyond each line would have to go to different places.
                        return Err(FoldError::DegenerateSplit {
                            position: pos,
                            area: cell.area(),
                        });
                    }

                    let half = self.split_cell(
                        cell,
                        &cut_lines.line1,
                        CutSide::Line1,
                        fold_id,
                        cell_size,
                    )?;
                    let _ = staged.insert_or_replace(half);
                    report.split.push(pos);
                }
                Region::SplitLine2 => {
                    let mut half = self.split_cell(
                        cell,
                        &cut_lines.line2,
                        CutSide::Line2,
                        fold_id,
                        cell_size,
                    )?;
                    half.translate(&shift, &grid_shift);
                    let _ = staged.remove(&pos);
                    moving.push((pos, half));
                    report.split.push(pos);
                }
                Region::KeptRight => {
                    if let Some(mut moved) = staged.remove(&pos) {
                        moved.translate(&shift, &grid_shift);
                        moving.push((pos, moved));
                    }
                }
            }
        }

        // Original positions of the cells already moved to their destination.
        let mut origins: HashMap<GridPos, GridPos> = HashMap::new();

        for (from, cell) in moving {
            let to = cell.grid_position();

            match staged.remove(&to) {
                None => {
                    let _ = staged.insert_or_replace(cell);
                }
                Some(mut occupant) => {
                    let collision = FoldError::DestinationCollision {
                        first_origin: origins.get(&to).copied().unwrap_or(to),
                        second_origin: from,
                        destination: to,
                    };

                    // Moved material lies beyond the first line and stationary material on
                    // its near side, so they can only meet inside a cell the line crosses.
                    if origins.contains_key(&to) {
                        return Err(collision);
                    }

                    let full = cell_size * cell_size;
                    if occupant.area() + cell.area() > full * (1.0 + self.config.area_tolerance) {
                        // The pieces overlap instead of completing each other.
                        return Err(collision);
                    }

                    log::trace!(
                        "fold {}: merging ({}, {}) into ({}, {})",
                        fold_id,
                        from.x,
                        from.y,
                        to.x,
                        to.y
                    );
                    occupant.absorb(cell, cell_size);
                    let _ = staged.insert_or_replace(occupant);
                    report.merged.push(to);
                }
            }

            let _ = origins.insert(to, from);
            report.translations.push(CellTranslation { from, to });
        }

        log::debug!(
            "fold {}: {} removed, {} split, {} merged, {} moved",
            fold_id,
            report.removed.len(),
            report.split.len(),
            report.merged.len(),
            report.translations.len()
        );

        *directory = staged;
        self.next_fold_id += 1;
        Ok(report)
    }

    /// Clips every piece of `cell` by `line`, keeping the side facing away from the band.
    fn split_cell(
        &self,
        cell: &Cell,
        line: &CutLine,
        side: CutSide,
        fold_id: u32,
        cell_size: Real,
    ) -> Result<Cell, FoldError> {
        let source = PieceSource::Fold { fold_id, side };
        let min_area = self.config.degenerate_area * cell_size * cell_size;
        let mut pieces: Vec<CellPiece> = Vec::with_capacity(cell.pieces().len());

        for piece in cell.pieces() {
            let kept = match (line.split_polygon(piece.vertices(), self.config.epsilon), side) {
                (SplitResult::Pair(negative, _), CutSide::Line1) => {
                    Some(piece.clipped(negative, source))
                }
                (SplitResult::Pair(_, positive), CutSide::Line2) => {
                    Some(piece.clipped(positive, source))
                }
                (SplitResult::Negative, CutSide::Line1)
                | (SplitResult::Positive, CutSide::Line2) => Some(piece.clone()),
                _ => None,
            };

            // Slivers thinner than the tolerance are dropped.
            if let Some(kept) = kept.filter(|p| p.area() >= min_area) {
                pieces.push(kept);
            }
        }

        let area: Real = pieces.iter().map(|p| p.area()).sum();

        if pieces.is_empty() || area < min_area {
            return Err(FoldError::DegenerateSplit {
                position: cell.grid_position(),
                area,
            });
        }

        Ok(Cell::from_pieces(
            cell.grid_position(),
            cell.cell_type(),
            pieces,
            cell_size,
        ))
    }
}
