//! Grid cells and the geometry pieces they are made of.

pub use self::cell::{Cell, CellType, AREA_TOLERANCE};
pub use self::cell_piece::{CellPiece, CutSide, PieceSource};

mod cell;
mod cell_piece;
