//! Turn orchestration for a human-versus-computer match.
//!
//! The engine exclusively owns both boards, both fleets and the adversary.
//! Callers drive it with placement and attack requests and read back the
//! queued [`MatchEvent`]s.

use alloc::vec::Vec;
use core::{fmt, mem};

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::engine::ai::Adversary;
use crate::engine::attack;
use crate::engine::board::Board;
use crate::engine::common::{BoardError, Coord, Outcome, PlacementRejection};
#[cfg(feature = "std")]
use crate::engine::config::MatchConfig;
use crate::engine::config::{roster, ship_def, Difficulty, Side, TOTAL_SHIP_CELLS};
use crate::engine::events::MatchEvent;
use crate::engine::fleet::FleetState;
use crate::engine::ship::{Footprint, ShipDef, ShipId};

/// Stage of a match. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// The human is deploying ships.
    Placement,
    /// The computer is due to fire.
    ComputerAttacking,
    /// The computer has fired; waiting for the human to take the turn.
    AwaitingHumanTurnStart,
    /// The human is due to fire.
    HumanAttacking,
    GameOver,
}

/// Resolved shots per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnCounts {
    pub human: u32,
    pub computer: u32,
}

/// Request to deploy a human ship with its top-left cell at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    pub ship: ShipId,
    pub origin: Coord,
    pub width: usize,
    pub height: usize,
}

impl PlacementRequest {
    /// Request for `def` in its roster shape.
    pub fn new(def: &ShipDef, origin: Coord) -> Self {
        Self {
            ship: def.id(),
            origin,
            width: def.width(),
            height: def.height(),
        }
    }

    /// Same request turned by a quarter: width and height swapped.
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            ..self
        }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.origin, self.width, self.height)
    }
}

/// Answer to a [`PlacementRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementReply {
    Accepted,
    Rejected(PlacementRejection),
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub side: Side,
    pub target: Coord,
    pub outcome: Outcome,
}

/// Misuse of the engine: a request arriving in the wrong phase or breaking a
/// precondition. State is never changed when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    WrongPhase { expected: Phase, actual: Phase },
    /// Placement can only be confirmed once every ship is deployed.
    FleetIncomplete,
    /// The adversary has fired at every cell.
    TargetsExhausted,
    Board(BoardError),
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::WrongPhase { expected, actual } => {
                write!(f, "expected phase {:?}, match is in {:?}", expected, actual)
            }
            MatchError::FleetIncomplete => write!(f, "not every ship has been placed"),
            MatchError::TargetsExhausted => write!(f, "no cells left to attack"),
            MatchError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// A single match between the human and the computer.
pub struct MatchEngine {
    difficulty: Difficulty,
    phase: Phase,
    rng: SmallRng,
    human_board: Board,
    computer_board: Board,
    human_fleet: FleetState,
    computer_fleet: FleetState,
    adversary: Adversary,
    turns: TurnCounts,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// New match in the placement phase. All randomness comes from `rng`.
    pub fn new(difficulty: Difficulty, mut rng: SmallRng) -> Self {
        let adversary = Adversary::new(difficulty, &mut rng);
        Self {
            difficulty,
            phase: Phase::Placement,
            rng,
            human_board: Board::new(),
            computer_board: Board::new(),
            human_fleet: FleetState::new(),
            computer_fleet: FleetState::new(),
            adversary,
            turns: TurnCounts::default(),
            events: Vec::new(),
        }
    }

    /// New match from `config`, seeded from the thread RNG when no seed is set.
    #[cfg(feature = "std")]
    pub fn from_config(config: &MatchConfig) -> Self {
        use rand::SeedableRng;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::new(config.difficulty, rng)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// Fleet bookkeeping for the ships owned by `side`.
    pub fn fleet(&self, side: Side) -> &FleetState {
        match side {
            Side::Human => &self.human_fleet,
            Side::Computer => &self.computer_fleet,
        }
    }

    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }

    pub fn turn_counts(&self) -> TurnCounts {
        self.turns
    }

    /// Hits scored by `side` so far.
    pub fn tally(&self, side: Side) -> usize {
        self.fleet(side.opponent()).hits_taken()
    }

    /// The side whose tally reached the total ship cell count, if any.
    pub fn winner(&self) -> Option<Side> {
        [Side::Human, Side::Computer]
            .into_iter()
            .find(|side| self.tally(*side) >= TOTAL_SHIP_CELLS)
    }

    /// Human ships still waiting to be placed, in roster order.
    pub fn pending_ships(&self) -> impl Iterator<Item = &'static ShipDef> + '_ {
        self.human_fleet
            .pending()
            .filter_map(|id| ship_def(Side::Human, id))
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        mem::take(&mut self.events)
    }

    /// Deploy one human ship. Rejections are reported in the reply and leave
    /// the board unchanged.
    pub fn place_ship(&mut self, request: PlacementRequest) -> Result<PlacementReply, MatchError> {
        self.expect_phase(Phase::Placement)?;
        let footprint = match self.check_request(&request) {
            Ok(footprint) => footprint,
            Err(reason) => {
                debug!("placement of {} rejected: {}", request.ship, reason);
                self.emit(MatchEvent::PlacementRejected {
                    ship: request.ship,
                    reason,
                });
                return Ok(PlacementReply::Rejected(reason));
            }
        };
        self.human_board.place(request.ship, &footprint)?;
        self.accept_placement(request.ship, footprint);
        Ok(PlacementReply::Accepted)
    }

    /// Deploy every remaining human ship at random.
    pub fn place_remaining_randomly(&mut self) -> Result<(), MatchError> {
        self.expect_phase(Phase::Placement)?;
        let pending: Vec<&'static ShipDef> = self.pending_ships().collect();
        for def in pending {
            let footprint = self.human_board.place_randomly(&mut self.rng, def)?;
            self.accept_placement(def.id(), footprint);
        }
        Ok(())
    }

    /// Lock in the human fleet, deploy the computer fleet and hand the first
    /// turn to the computer.
    pub fn confirm_placement(&mut self) -> Result<(), MatchError> {
        self.expect_phase(Phase::Placement)?;
        if !self.human_fleet.all_placed() {
            return Err(MatchError::FleetIncomplete);
        }
        let mut board = Board::new();
        board.place_fleet_randomly(&mut self.rng, roster(Side::Computer))?;
        self.computer_board = board;
        self.computer_fleet = FleetState::new();
        for def in roster(Side::Computer) {
            self.computer_fleet.mark_placed(def.id());
        }
        self.transition(Phase::ComputerAttacking);
        Ok(())
    }

    /// One scheduled computer step. Returns `Ok(None)` without doing anything
    /// when the match is no longer in [`Phase::ComputerAttacking`], which is
    /// how a pending step gets cancelled.
    pub fn computer_tick(&mut self) -> Result<Option<Shot>, MatchError> {
        if self.phase != Phase::ComputerAttacking {
            debug!("computer step skipped in {:?}", self.phase);
            return Ok(None);
        }
        let target = self
            .adversary
            .next_target(&mut self.rng)
            .ok_or(MatchError::TargetsExhausted)?;
        let outcome = attack::resolve(&mut self.human_board, &mut self.human_fleet, target)?;
        self.adversary
            .record_outcome(target, outcome, &self.human_board);
        let shot = Shot {
            side: Side::Computer,
            target,
            outcome,
        };
        if outcome != Outcome::AlreadyAttacked {
            self.turns.computer += 1;
            self.after_shot(shot);
        }
        Ok(Some(shot))
    }

    /// Hand the turn to the human after the computer has fired.
    pub fn start_human_turn(&mut self) -> Result<(), MatchError> {
        self.expect_phase(Phase::AwaitingHumanTurnStart)?;
        self.transition(Phase::HumanAttacking);
        Ok(())
    }

    /// Fire at the computer's board. A cell attacked before yields
    /// [`Outcome::AlreadyAttacked`] and the human keeps the turn.
    pub fn human_attack(&mut self, target: Coord) -> Result<Outcome, MatchError> {
        self.expect_phase(Phase::HumanAttacking)?;
        let outcome = attack::resolve(&mut self.computer_board, &mut self.computer_fleet, target)?;
        if outcome != Outcome::AlreadyAttacked {
            self.turns.human += 1;
            self.after_shot(Shot {
                side: Side::Human,
                target,
                outcome,
            });
        }
        Ok(outcome)
    }

    /// Abandon the current match and start a fresh one at the same difficulty.
    pub fn reset(&mut self) {
        self.reset_with(self.difficulty);
    }

    /// Start a fresh match at `difficulty`, clearing all per-match state.
    pub fn reset_with(&mut self, difficulty: Difficulty) {
        let from = self.phase;
        self.difficulty = difficulty;
        self.phase = Phase::Placement;
        self.human_board = Board::new();
        self.computer_board = Board::new();
        self.human_fleet = FleetState::new();
        self.computer_fleet = FleetState::new();
        self.adversary.reset(difficulty, &mut self.rng);
        self.turns = TurnCounts::default();
        self.events.clear();
        info!("new {} match", difficulty);
        if from != Phase::Placement {
            self.emit(MatchEvent::PhaseChanged {
                from,
                to: Phase::Placement,
            });
        }
    }

    fn check_request(&self, request: &PlacementRequest) -> Result<Footprint, PlacementRejection> {
        if self.human_fleet.all_placed() {
            return Err(PlacementRejection::FleetComplete);
        }
        let def = ship_def(Side::Human, request.ship).ok_or(PlacementRejection::UnknownShip)?;
        if self.human_fleet.is_placed(request.ship) {
            return Err(PlacementRejection::AlreadyPlaced);
        }
        if !def.fits_shape(request.width, request.height) {
            return Err(PlacementRejection::WrongDimensions);
        }
        let footprint = request.footprint();
        self.human_board.check_placement(&footprint)?;
        Ok(footprint)
    }

    fn accept_placement(&mut self, ship: ShipId, footprint: Footprint) {
        self.human_fleet.mark_placed(ship);
        self.emit(MatchEvent::PlacementAccepted { ship, footprint });
        if self.human_fleet.all_placed() {
            info!("human fleet deployed");
            self.emit(MatchEvent::AllShipsPlaced);
        }
    }

    fn after_shot(&mut self, shot: Shot) {
        self.emit(MatchEvent::AttackResult {
            side: shot.side,
            target: shot.target,
            outcome: shot.outcome,
        });
        if let Outcome::HitAndSunk(ship) = shot.outcome {
            self.emit(MatchEvent::ShipSunk {
                owner: shot.side.opponent(),
                ship,
            });
        }
        if self.tally(shot.side) >= TOTAL_SHIP_CELLS {
            info!("{} wins after {:?}", shot.side, self.turns);
            self.transition(Phase::GameOver);
            self.emit(MatchEvent::MatchWon {
                side: shot.side,
                turns: self.turns,
            });
            return;
        }
        let next = match shot.side {
            Side::Computer => Phase::AwaitingHumanTurnStart,
            Side::Human => Phase::ComputerAttacking,
        };
        self.transition(next);
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), MatchError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(MatchError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        debug!("phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.emit(MatchEvent::PhaseChanged { from, to });
    }

    fn emit(&mut self, event: MatchEvent) {
        self.events.push(event);
    }
}
