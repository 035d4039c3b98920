//! Game-state engine (no_std + alloc).
//!
//! Boards, fleets, attack resolution, the computer's targeting and the turn
//! orchestrator. Nothing here renders, sleeps or performs I/O.

pub mod ai;
pub mod attack;
pub mod board;
pub mod cellset;
pub mod common;
pub mod config;
pub mod events;
pub mod fleet;
pub mod game;
pub mod ship;

pub use ai::{follow_ups, parity_cells, run_ends, Adversary, GuessSet, HuntMode};
pub use attack::resolve;
pub use board::{Board, Cell, Grid};
pub use cellset::CellSet;
pub use common::{BoardError, Coord, Outcome, PlacementRejection};
pub use config::*;
pub use events::MatchEvent;
pub use fleet::FleetState;
pub use game::{
    MatchEngine, MatchError, Phase, PlacementReply, PlacementRequest, Shot, TurnCounts,
};
pub use ship::{Axis, Footprint, ShipDef, ShipId};
