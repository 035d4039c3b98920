//! Per-side fleet bookkeeping: which ships are deployed, which are sunk and
//! how many hits the fleet has taken.

use crate::engine::board::Grid;
use crate::engine::config::{NUM_SHIPS, TOTAL_SHIP_CELLS};
use crate::engine::ship::ShipId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetState {
    placed: [bool; NUM_SHIPS],
    sunk: [bool; NUM_SHIPS],
    hits_taken: usize,
}

impl FleetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ship` as deployed. Returns `false` if it already was or the id
    /// is outside the roster.
    pub fn mark_placed(&mut self, ship: ShipId) -> bool {
        match self.placed.get_mut(ship.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_placed(&self, ship: ShipId) -> bool {
        self.placed.get(ship.index()).copied().unwrap_or(false)
    }

    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|p| **p).count()
    }

    pub fn all_placed(&self) -> bool {
        self.placed.iter().all(|p| *p)
    }

    /// Ids of roster ships not yet deployed, in roster order.
    pub fn pending(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.placed
            .iter()
            .enumerate()
            .filter(|(_, placed)| !**placed)
            .map(|(i, _)| ShipId(i as u8))
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits_taken += 1;
    }

    /// Hits this fleet has taken, i.e. the attacker's tally.
    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    /// Record `ship` as sunk. Returns `true` only the first time, so callers
    /// can report each sinking exactly once. Ships that were never placed are
    /// ignored.
    pub fn record_sunk(&mut self, ship: ShipId) -> bool {
        if !self.is_placed(ship) {
            return false;
        }
        match self.sunk.get_mut(ship.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Check `ship` on its owner's board and record it if it has just gone
    /// down. Returns `true` only for a newly sunk ship.
    pub fn check_sunk<const N: usize>(&mut self, board: &Grid<N>, ship: ShipId) -> bool {
        self.is_placed(ship) && !self.is_sunk(ship) && board.is_sunk(ship) && self.record_sunk(ship)
    }

    pub fn is_sunk(&self, ship: ShipId) -> bool {
        self.sunk.get(ship.index()).copied().unwrap_or(false)
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk.iter().filter(|s| **s).count()
    }

    /// `true` once every ship cell has been hit.
    pub fn is_defeated(&self) -> bool {
        self.hits_taken >= TOTAL_SHIP_CELLS
    }
}
