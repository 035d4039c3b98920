//! Events emitted by the match engine, one per resolved action, for the
//! presentation layer to render.

use crate::engine::common::{Coord, Outcome, PlacementRejection};
use crate::engine::config::Side;
use crate::engine::game::{Phase, TurnCounts};
use crate::engine::ship::{Footprint, ShipId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum MatchEvent {
    /// A human ship was put on the board.
    PlacementAccepted { ship: ShipId, footprint: Footprint },
    /// A placement request was turned down; the board is unchanged.
    PlacementRejected {
        ship: ShipId,
        reason: PlacementRejection,
    },
    /// The last human ship was placed; the match can be confirmed.
    AllShipsPlaced,
    PhaseChanged { from: Phase, to: Phase },
    /// `side` fired at `target`.
    AttackResult {
        side: Side,
        target: Coord,
        outcome: Outcome,
    },
    /// A ship belonging to `owner` went down.
    ShipSunk { owner: Side, ship: ShipId },
    /// `side` hit every opposing ship cell. Emitted once per match.
    MatchWon { side: Side, turns: TurnCounts },
}
