//! Board model and placement validation.
//!
//! Every cell carries a tagged state so ship identity and attack status never
//! have to be encoded in a shared value.

use alloc::vec::Vec;
use core::fmt;

use log::{trace, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::engine::common::{BoardError, Coord, PlacementRejection};
use crate::engine::config::BOARD_SIZE;
use crate::engine::ship::{Axis, Footprint, ShipDef, ShipId};

/// Random samples tried per ship before falling back to a full scan.
const MAX_RANDOM_ATTEMPTS: usize = 256;

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Intact part of a ship.
    Occupied(ShipId),
    /// Part of a ship that has been struck.
    Hit(ShipId),
    /// Attacked, nothing there.
    Miss,
}

impl Cell {
    /// `true` once the cell has been fired at.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }

    /// Ship on this cell, hit or not.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(id),
            Cell::Empty | Cell::Miss => None,
        }
    }
}

/// Square `N`×`N` grid of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[Cell; N]; N],
}

/// The standard 10×10 board.
pub type Board = Grid<BOARD_SIZE>;

impl<const N: usize> Grid<N> {
    /// Side length.
    pub const SIZE: usize = N;

    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })?;
        *slot = cell;
        Ok(())
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Coord::new(r, c), *cell))
        })
    }

    /// `true` once any cell has been hit or missed.
    pub fn has_attacks(&self) -> bool {
        self.iter().any(|(_, cell)| cell.is_attacked())
    }

    /// Check a footprint against bounds and occupancy.
    pub fn check_placement(&self, footprint: &Footprint) -> Result<(), PlacementRejection> {
        if !footprint.fits(N) {
            return Err(PlacementRejection::OutOfBounds);
        }
        if footprint
            .cells()
            .any(|c| self.cell(c) != Some(Cell::Empty))
        {
            return Err(PlacementRejection::Overlap);
        }
        Ok(())
    }

    /// Whether `footprint` lies on the board and covers only empty cells.
    pub fn can_place(&self, footprint: &Footprint) -> bool {
        self.check_placement(footprint).is_ok()
    }

    /// Mark every cell of `footprint` as occupied by `ship`. The board must
    /// not have been attacked yet and the footprint must be placeable.
    pub fn place(&mut self, ship: ShipId, footprint: &Footprint) -> Result<(), BoardError> {
        if self.has_attacks() {
            return Err(BoardError::PlacementClosed);
        }
        match self.check_placement(footprint) {
            Ok(()) => {}
            Err(PlacementRejection::OutOfBounds) => {
                return Err(BoardError::OutOfBounds {
                    row: footprint.origin.row,
                    col: footprint.origin.col,
                })
            }
            Err(_) => return Err(BoardError::ShipOverlaps),
        }
        for coord in footprint.cells() {
            self.set(coord, Cell::Occupied(ship))?;
        }
        trace!("placed ship {} at {:?}", ship, footprint);
        Ok(())
    }

    /// Place `def` at a uniformly random origin with a coin-flip axis,
    /// resampling on failure. After [`MAX_RANDOM_ATTEMPTS`] misses every
    /// remaining valid position is enumerated and one is chosen at random.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        def: &ShipDef,
    ) -> Result<Footprint, BoardError> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let axis = if rng.random() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let origin = Coord::new(rng.random_range(0..N), rng.random_range(0..N));
            let footprint = def.footprint(origin, axis);
            if self.can_place(&footprint) {
                self.place(def.id(), &footprint)?;
                return Ok(footprint);
            }
        }

        warn!(
            "random placement of {} gave up after {} attempts, scanning",
            def.name(),
            MAX_RANDOM_ATTEMPTS
        );
        let mut candidates = Vec::new();
        for r in 0..N {
            for c in 0..N {
                for axis in [Axis::Horizontal, Axis::Vertical] {
                    let footprint = def.footprint(Coord::new(r, c), axis);
                    if self.can_place(&footprint) {
                        candidates.push(footprint);
                    }
                }
            }
        }
        let footprint = *candidates
            .choose(rng)
            .ok_or(BoardError::UnableToPlaceShip)?;
        self.place(def.id(), &footprint)?;
        Ok(footprint)
    }

    /// Randomly place every ship of `roster`.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        roster: &[ShipDef],
    ) -> Result<(), BoardError> {
        for def in roster {
            self.place_randomly(rng, def)?;
        }
        Ok(())
    }

    /// A ship is sunk when none of its cells is still intact. Only
    /// meaningful for ships that were placed.
    pub fn is_sunk(&self, ship: ShipId) -> bool {
        !self
            .cells
            .iter()
            .flatten()
            .any(|cell| *cell == Cell::Occupied(ship))
    }

    /// Identity of the ship at `coord` if the attacker has already seen it,
    /// i.e. the cell is a hit. Intact ship cells stay hidden.
    pub fn revealed_ship(&self, coord: Coord) -> Option<ShipId> {
        match self.cell(coord)? {
            Cell::Hit(id) => Some(id),
            _ => None,
        }
    }

    /// Number of cells holding `ship`, intact or hit.
    pub fn ship_cells(&self, ship: ShipId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.ship() == Some(ship))
            .count()
    }

    /// Number of cells covered by any ship.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.ship().is_some())
            .count()
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", N)?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(_) => 'S',
                    Cell::Hit(_) => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
