//! Commonly used types and utilities for ease of import.

pub use crate::engine::{
    Adversary, Board, Coord, Difficulty, MatchConfig, MatchEngine, MatchEvent, Outcome, Pacing,
    Phase, PlacementReply, PlacementRequest, Side,
};

#[cfg(feature = "std")]
pub use crate::pacing::{drive_computer_turn, EventLog, EventSink};
