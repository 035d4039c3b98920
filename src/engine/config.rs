//! Fixed match parameters: board size, the two rosters, difficulty tiers and
//! the pacing used to present the computer's shots.

use core::fmt;
use core::time::Duration;

use crate::engine::ship::{ShipDef, ShipId};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Ships per side.
pub const NUM_SHIPS: usize = 5;

/// Fleet deployed by the human player.
pub const HUMAN_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new(0, "Archerfish", 1, 2),
    ShipDef::new(1, "Gearing", 1, 3),
    ShipDef::new(2, "Sumner", 1, 3),
    ShipDef::new(3, "Des Moines", 1, 4),
    ShipDef::new(4, "Montana", 1, 5),
];

/// Fleet deployed by the computer.
pub const COMPUTER_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new(0, "I-56", 1, 2),
    ShipDef::new(1, "Shimakaze", 1, 3),
    ShipDef::new(2, "Hayate", 1, 3),
    ShipDef::new(3, "Zao", 1, 4),
    ShipDef::new(4, "Yamato", 1, 5),
];

/// Total number of ship cells in one fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&HUMAN_FLEET);

const _: () = assert!(fleet_cells(&HUMAN_FLEET) == fleet_cells(&COMPUTER_FLEET));
const _: () = assert!(TOTAL_SHIP_CELLS == 2 + 3 + 3 + 4 + 5);

const fn fleet_cells(fleet: &[ShipDef]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].cells();
        i += 1;
    }
    total
}

/// One of the two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The side being attacked when `self` attacks.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Strength of the computer's targeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random shots, no follow-up on hits.
    #[default]
    Easy,
    /// Random search, then probes all four neighbours of every hit.
    Medium,
    /// Checkerboard search, then locks onto the axis of aligned hits.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Roster belonging to `side`.
pub fn roster(side: Side) -> &'static [ShipDef; NUM_SHIPS] {
    match side {
        Side::Human => &HUMAN_FLEET,
        Side::Computer => &COMPUTER_FLEET,
    }
}

/// Look up a ship definition by id. Returns `None` for ids outside the roster.
pub fn ship_def(side: Side, id: ShipId) -> Option<&'static ShipDef> {
    roster(side).get(id.index())
}

/// Delays used when presenting the computer's shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait before the first shot of a computer turn.
    pub opening_delay: Duration,
    /// Wait between consecutive computer steps.
    pub attack_delay: Duration,
}

impl Pacing {
    /// No delays at all; used by tests and the simulator.
    pub const fn immediate() -> Self {
        Self {
            opening_delay: Duration::ZERO,
            attack_delay: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            opening_delay: Duration::from_millis(1000),
            attack_delay: Duration::from_millis(400),
        }
    }
}

/// Settings chosen before a match starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    /// Fix every random decision of the match (e.g. `Some(12345)`).
    pub seed: Option<u64>,
    pub pacing: Pacing,
}
