//! Common types for the engine: coordinates, attack outcomes and errors.

use core::fmt;

use crate::engine::ship::ShipId;

/// A cell position on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move by (`d_row`, `d_col`), returning `None` when the result leaves
    /// the `n`×`n` board.
    pub fn offset(self, d_row: isize, d_col: isize, n: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < n && col < n).then_some(Coord { row, col })
    }

    /// Orthogonal neighbours inside an `n`×`n` board, in the order
    /// down, up, right, left.
    pub fn neighbors(self, n: usize) -> impl Iterator<Item = Coord> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc, n))
    }

    /// Whether the coordinate lies on an `n`×`n` board.
    pub fn within(self, n: usize) -> bool {
        self.row < n && self.col < n
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of resolving an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Cell was already hit or missed; nothing changed.
    AlreadyAttacked,
    /// No ship at the target.
    Miss,
    /// Hit a ship that still has intact cells.
    Hit(ShipId),
    /// Hit the last intact cell of a ship.
    HitAndSunk(ShipId),
}

impl Outcome {
    /// `true` for both plain hits and sinking hits.
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_) | Outcome::HitAndSunk(_))
    }

    /// Ship struck by this attack, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Outcome::Hit(id) | Outcome::HitAndSunk(id) => Some(id),
            Outcome::AlreadyAttacked | Outcome::Miss => None,
        }
    }
}

/// Reasons a placement request is turned down. All of them are recoverable:
/// the board is left untouched and the player may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementRejection {
    /// Some footprint cell lies outside the board.
    OutOfBounds,
    /// Some footprint cell is already occupied.
    Overlap,
    /// This ship was placed earlier in the same match.
    AlreadyPlaced,
    /// The ship id is not part of the roster.
    UnknownShip,
    /// Requested width/height is neither the ship's shape nor its rotation.
    WrongDimensions,
    /// Every roster ship is already on the board.
    FleetComplete,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRejection::OutOfBounds => write!(f, "ship would leave the board"),
            PlacementRejection::Overlap => write!(f, "ship would overlap another ship"),
            PlacementRejection::AlreadyPlaced => write!(f, "ship is already placed"),
            PlacementRejection::UnknownShip => write!(f, "ship is not part of the roster"),
            PlacementRejection::WrongDimensions => {
                write!(f, "dimensions do not match the ship")
            }
            PlacementRejection::FleetComplete => write!(f, "all ships are already placed"),
        }
    }
}

/// Errors returned by board operations. These signal misuse by the caller,
/// not a game condition the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Footprint intersects a cell that is not empty.
    ShipOverlaps,
    /// Ships can no longer be added once the board has been attacked.
    PlacementClosed,
    /// No valid position exists for the ship (random placement failed).
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate out of bounds: row={}, col={}", row, col)
            }
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps with another ship"),
            BoardError::PlacementClosed => write!(f, "board has already been attacked"),
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
