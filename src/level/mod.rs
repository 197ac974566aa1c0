//! Level files: the initial layout of a grid and where the player starts.
//!
//! Levels are JSON objects:
//!
//! ```json
//! {
//!     "level_id": "tutorial_01",
//!     "level_name": "First Fold",
//!     "grid_size": { "x": 5, "y": 5 },
//!     "player_start_position": { "x": 0, "y": 0 },
//!     "cell_data": { "4,4": 3, "2,0": 1 },
//!     "difficulty": 1
//! }
//! ```
//!
//! `cell_data` maps `"x,y"` keys to [`CellType`] indices. Positions missing from it are
//! empty cells.

use crate::cell::{Cell, CellType};
use crate::fold::Player;
use crate::grid::{CellDirectory, CellGrid};
use crate::math::{GridPos, Real};
use hashbrown::HashMap;

/// The default side length of a cell, in local units.
pub const DEFAULT_CELL_SIZE: Real = 64.0;

fn default_cell_size() -> Real {
    DEFAULT_CELL_SIZE
}

/// Errors making a level unplayable.
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// The level is not valid JSON, or misses a required field.
    #[error("malformed level file: {0}")]
    Json(#[from] serde_json::Error),
    /// The grid has no cell along one of its axes.
    #[error("grid size must be positive (got {x}x{y})")]
    InvalidGridSize {
        /// The number of columns.
        x: i32,
        /// The number of rows.
        y: i32,
    },
    /// The cell size is not a positive number.
    #[error("cell size must be positive (got {0})")]
    InvalidCellSize(Real),
    /// The player starts outside of the grid.
    #[error("player start position ({x}, {y}) is outside of the grid")]
    PlayerOutOfBounds {
        /// The starting column.
        x: i32,
        /// The starting row.
        y: i32,
    },
    /// A `cell_data` key is not of the form `"x,y"`.
    #[error("malformed cell position {0:?}")]
    MalformedCellKey(String),
    /// A `cell_data` value is not a known cell type.
    #[error("unknown cell type {value} at {key:?}")]
    UnknownCellType {
        /// The offending `cell_data` key.
        key: String,
        /// The offending value.
        value: i64,
    },
    /// A `cell_data` key lies outside of the grid.
    #[error("cell ({x}, {y}) is outside of the grid")]
    CellOutOfBounds {
        /// The column of the cell.
        x: i32,
        /// The row of the cell.
        y: i32,
    },
    /// No cell is a goal.
    #[error("no goal cell defined")]
    NoGoal,
}

/// A pair of integer coordinates, as written in level files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelCoords {
    /// The column.
    pub x: i32,
    /// The row.
    pub y: i32,
}

impl From<LevelCoords> for GridPos {
    fn from(coords: LevelCoords) -> Self {
        GridPos::new(coords.x, coords.y)
    }
}

/// A level description, as loaded from a level file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// A unique identifier of the level.
    pub level_id: String,
    /// The displayed name of the level.
    pub level_name: String,
    /// The number of columns and rows of the grid.
    pub grid_size: LevelCoords,
    /// The cell the player starts on.
    pub player_start_position: LevelCoords,
    /// Cell type indices keyed by `"x,y"` positions.
    pub cell_data: HashMap<String, i64>,
    /// The expected difficulty, usually between 1 and 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    /// The side length of a cell, in local units.
    #[serde(default = "default_cell_size")]
    pub cell_size: Real,
}

impl Level {
    /// Parses a level from its JSON text.
    ///
    /// Only the structure of the file is checked here, see [`Level::validate`] for the rest.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this level to JSON.
    pub fn to_json_string(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The grid size of this level.
    pub fn grid_size(&self) -> GridPos {
        self.grid_size.into()
    }

    /// The cells listed by this level, sorted by row then column.
    pub fn cells(&self) -> Result<Vec<(GridPos, CellType)>, LevelError> {
        let mut cells = Vec::with_capacity(self.cell_data.len());

        for (key, value) in &self.cell_data {
            let pos = parse_cell_key(key)?;
            let cell_type = CellType::from_index(*value).ok_or_else(|| {
                LevelError::UnknownCellType {
                    key: key.clone(),
                    value: *value,
                }
            })?;
            cells.push((pos, cell_type));
        }

        cells.sort_unstable_by_key(|(pos, _)| (pos.y, pos.x));
        Ok(cells)
    }

    /// Checks that this level is playable.
    ///
    /// Returns the list of soft issues found, which are also logged as warnings.
    pub fn validate(&self) -> Result<Vec<String>, LevelError> {
        let size = self.grid_size();

        if size.x <= 0 || size.y <= 0 {
            return Err(LevelError::InvalidGridSize {
                x: size.x,
                y: size.y,
            });
        }

        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(LevelError::InvalidCellSize(self.cell_size));
        }

        let in_bounds =
            |pos: &GridPos| pos.x >= 0 && pos.y >= 0 && pos.x < size.x && pos.y < size.y;
        let start = self.player_start_position;

        if !in_bounds(&start.into()) {
            return Err(LevelError::PlayerOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }

        let cells = self.cells()?;

        if let Some((pos, _)) = cells.iter().find(|(pos, _)| !in_bounds(pos)) {
            return Err(LevelError::CellOutOfBounds { x: pos.x, y: pos.y });
        }

        if !cells.iter().any(|(_, cell_type)| *cell_type == CellType::Goal) {
            return Err(LevelError::NoGoal);
        }

        let mut warnings = Vec::new();

        if self.level_id.is_empty() {
            warnings.push("level has an empty id".to_string());
        }

        if let Some(difficulty) = self.difficulty {
            if !(1.0..=5.0).contains(&difficulty) {
                warnings.push(format!(
                    "difficulty {} is outside of the usual range (1-5)",
                    difficulty
                ));
            }
        }

        for warning in &warnings {
            log::warn!("level {:?}: {}", self.level_name, warning);
        }

        Ok(warnings)
    }

    /// Builds the grid of this level after validating it.
    ///
    /// Every position of the grid gets a whole cell.
    pub fn build_grid(&self) -> Result<CellGrid, LevelError> {
        let _ = self.validate()?;
        let mut grid = CellGrid::new_filled(self.grid_size(), self.cell_size, CellType::Empty);

        for (pos, cell_type) in self.cells()? {
            let _ = grid.insert_or_replace(Cell::new(pos, cell_type, self.cell_size));
        }

        log::debug!(
            "level {:?}: built a {}x{} grid",
            self.level_id,
            self.grid_size.x,
            self.grid_size.y
        );

        Ok(grid)
    }

    /// The player standing on its start position in `directory`.
    pub fn spawn_player(&self, directory: &impl CellDirectory) -> Player {
        Player::new(self.player_start_position.into(), directory)
    }
}

fn parse_cell_key(key: &str) -> Result<GridPos, LevelError> {
    let malformed = || LevelError::MalformedCellKey(key.to_string());
    let (x, y) = key.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse().map_err(|_| malformed())?;
    let y = y.trim().parse().map_err(|_| malformed())?;
    Ok(GridPos::new(x, y))
}
