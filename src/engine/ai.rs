//! Computer targeting: a search/hunt state machine in three strengths.
//!
//! The adversary only ever learns what the attack results reveal. Hits are
//! remembered in a buffer until the ship they belong to is confirmed sunk;
//! follow-up candidates live on a LIFO stack so the most recent lead is
//! explored first.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::engine::board::Board;
use crate::engine::cellset::CellSet;
use crate::engine::common::{Coord, Outcome};
use crate::engine::config::{Difficulty, BOARD_SIZE, NUM_SHIPS};
use crate::engine::ship::{Axis, ShipId};

/// Coordinates fired at during one match.
pub type GuessSet = CellSet<u128, BOARD_SIZE>;

/// Rejection samples drawn before enumerating the open cells instead.
const MAX_RANDOM_SAMPLES: usize = 64;

/// What the adversary is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HuntMode {
    /// No live lead; shots come from the search pattern.
    #[default]
    Searching,
    /// Probing the orthogonal neighbours of unresolved hits.
    HuntingGeneric,
    /// Two aligned hits fixed the axis; only the ends of the run are probed.
    HuntingDirectional(Axis),
}

impl HuntMode {
    pub fn is_hunting(&self) -> bool {
        !matches!(self, HuntMode::Searching)
    }
}

/// Follow-up candidates for `mode` after a hit at `latest`, in push order
/// (the last element is tried first).
pub fn follow_ups(mode: HuntMode, hits: &[Coord], latest: Coord) -> Vec<Coord> {
    match mode {
        HuntMode::Searching => Vec::new(),
        HuntMode::HuntingGeneric => latest.neighbors(BOARD_SIZE).collect(),
        HuntMode::HuntingDirectional(axis) => {
            run_ends(hits, latest, axis).into_iter().flatten().collect()
        }
    }
}

/// The cells just beyond both ends of the contiguous run of `hits` through
/// `through` along `axis`: `[before, after]`, `None` where the run touches
/// the edge.
pub fn run_ends(hits: &[Coord], through: Coord, axis: Axis) -> [Option<Coord>; 2] {
    let (d_row, d_col) = match axis {
        Axis::Horizontal => (0, 1),
        Axis::Vertical => (1, 0),
    };
    let extend = |step: isize| {
        let mut end = through;
        loop {
            match end.offset(d_row * step, d_col * step, BOARD_SIZE) {
                Some(next) if hits.contains(&next) => end = next,
                beyond => return beyond,
            }
        }
    };
    [extend(-1), extend(1)]
}

/// Every board cell with `(row + col)` even. Any ship of length two or more
/// covers at least one of them in either orientation.
pub fn parity_cells() -> Vec<Coord> {
    (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| Coord::new(r, c)))
        .filter(|c| (c.row + c.col) % 2 == 0)
        .collect()
}

/// Targeting state for one match.
#[derive(Debug, Clone)]
pub struct Adversary {
    difficulty: Difficulty,
    mode: HuntMode,
    guessed: GuessSet,
    hunt_queue: Vec<Coord>,
    hit_buffer: Vec<Coord>,
    last_hit: Option<Coord>,
    parity: Vec<Coord>,
    sunk: [bool; NUM_SHIPS],
}

impl Adversary {
    /// Fresh adversary. The hard tier shuffles its parity pattern with `rng`.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let mut adversary = Self {
            difficulty,
            mode: HuntMode::Searching,
            guessed: GuessSet::new(),
            hunt_queue: Vec::new(),
            hit_buffer: Vec::new(),
            last_hit: None,
            parity: Vec::new(),
            sunk: [false; NUM_SHIPS],
        };
        adversary.reset(difficulty, rng);
        adversary
    }

    /// Forget everything and start over, e.g. for a new match.
    pub fn reset<R: Rng + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.difficulty = difficulty;
        self.mode = HuntMode::Searching;
        self.guessed.clear();
        self.hunt_queue.clear();
        self.hit_buffer.clear();
        self.last_hit = None;
        self.sunk = [false; NUM_SHIPS];
        self.parity.clear();
        if difficulty == Difficulty::Hard {
            self.parity = parity_cells();
            self.parity.shuffle(rng);
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> HuntMode {
        self.mode
    }

    /// Pending candidates; the last element is tried next.
    pub fn hunt_queue(&self) -> &[Coord] {
        &self.hunt_queue
    }

    /// Hits whose ship has not been confirmed sunk, oldest first.
    pub fn hit_buffer(&self) -> &[Coord] {
        &self.hit_buffer
    }

    pub fn guessed(&self) -> &GuessSet {
        &self.guessed
    }

    /// Parity cells not drawn yet (hard tier only).
    pub fn parity_remaining(&self) -> usize {
        self.parity.len()
    }

    /// Choose the next coordinate to fire at and remember it as guessed.
    /// Returns `None` only when every cell has been fired at.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let target = match self.take_hunt_target() {
            Some(target) => target,
            None => match self.reseed_from_buffer() {
                Some(target) => target,
                None => self.search(rng)?,
            },
        };
        self.guessed.insert(target);
        trace!("adversary targets {} ({:?})", target, self.mode);
        Some(target)
    }

    /// Feed the result of a shot at `target` back into the state machine.
    /// `board` is the attacked board; only cells already revealed as hits are
    /// read from it.
    pub fn record_outcome(&mut self, target: Coord, outcome: Outcome, board: &Board) {
        self.guessed.insert(target);
        match outcome {
            Outcome::Hit(_) => self.process_hit(target),
            Outcome::HitAndSunk(ship) => {
                self.process_hit(target);
                self.process_sunk(ship, board);
            }
            Outcome::Miss | Outcome::AlreadyAttacked => {}
        }
    }

    /// Bookkeeping after a hit at `hit`.
    pub fn process_hit(&mut self, hit: Coord) {
        self.guessed.insert(hit);
        let mode = match self.difficulty {
            Difficulty::Easy => return,
            Difficulty::Medium => HuntMode::HuntingGeneric,
            Difficulty::Hard => self.infer_mode(hit),
        };
        if !self.hit_buffer.contains(&hit) {
            self.hit_buffer.push(hit);
        }
        if let HuntMode::HuntingDirectional(_) = mode {
            self.hunt_queue.clear();
        }
        self.set_mode(mode);
        for candidate in follow_ups(mode, &self.hit_buffer, hit) {
            self.push_candidate(candidate);
        }
        self.last_hit = Some(hit);
    }

    /// Bookkeeping after `ship` was confirmed sunk. Hits on that ship stop
    /// counting as leads; hits on other ships keep the hunt alive. Calling it
    /// again for the same ship does nothing.
    pub fn process_sunk(&mut self, ship: ShipId, board: &Board) {
        let Some(recorded) = self.sunk.get_mut(ship.index()) else {
            return;
        };
        if *recorded {
            return;
        }
        *recorded = true;

        self.hit_buffer
            .retain(|hit| board.revealed_ship(*hit) != Some(ship));
        self.hunt_queue.clear();
        self.last_hit = None;
        if self.hit_buffer.is_empty() {
            self.set_mode(HuntMode::Searching);
        } else {
            self.set_mode(HuntMode::HuntingGeneric);
        }
    }

    fn infer_mode(&self, hit: Coord) -> HuntMode {
        let previous = self
            .last_hit
            .filter(|last| *last != hit && self.hit_buffer.contains(last))
            .or_else(|| self.hit_buffer.iter().rev().copied().find(|h| *h != hit));
        match previous.and_then(|prev| Axis::between(prev, hit)) {
            Some(axis) => HuntMode::HuntingDirectional(axis),
            None => HuntMode::HuntingGeneric,
        }
    }

    fn set_mode(&mut self, mode: HuntMode) {
        if self.mode != mode {
            debug!("adversary mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn push_candidate(&mut self, candidate: Coord) {
        if candidate.within(BOARD_SIZE)
            && !self.guessed.contains(candidate)
            && !self.hunt_queue.contains(&candidate)
        {
            self.hunt_queue.push(candidate);
        }
    }

    fn pop_unguessed(&mut self) -> Option<Coord> {
        while let Some(candidate) = self.hunt_queue.pop() {
            if !self.guessed.contains(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn take_hunt_target(&mut self) -> Option<Coord> {
        if !self.mode.is_hunting() || self.hunt_queue.is_empty() {
            return None;
        }
        let target = self.pop_unguessed();
        if target.is_none() {
            debug!("hunt queue exhausted");
            self.set_mode(HuntMode::Searching);
        }
        target
    }

    /// Hard tier: rebuild candidates from the unresolved hits when the stack
    /// ran dry. Neighbours of the oldest hit end up on top; if that hit has an
    /// aligned neighbour in the buffer the run's open ends go above them.
    fn reseed_from_buffer(&mut self) -> Option<Coord> {
        if self.difficulty != Difficulty::Hard || self.hit_buffer.is_empty() {
            return None;
        }
        let seeds: Vec<Coord> = self
            .hit_buffer
            .iter()
            .rev()
            .flat_map(|hit| hit.neighbors(BOARD_SIZE))
            .collect();
        for seed in seeds {
            self.push_candidate(seed);
        }

        let anchor = self.hit_buffer[0];
        let axis = anchor
            .neighbors(BOARD_SIZE)
            .find(|n| self.hit_buffer.contains(n))
            .and_then(|n| Axis::between(anchor, n));
        let mode = match axis {
            Some(axis) => {
                // Run ends may already sit among the neighbour seeds; lift
                // them to the top of the stack.
                for end in run_ends(&self.hit_buffer, anchor, axis).into_iter().flatten() {
                    self.hunt_queue.retain(|c| *c != end);
                    self.push_candidate(end);
                }
                HuntMode::HuntingDirectional(axis)
            }
            None => HuntMode::HuntingGeneric,
        };
        self.set_mode(mode);

        let target = self.pop_unguessed();
        if target.is_none() {
            self.set_mode(HuntMode::Searching);
        }
        target
    }

    fn search<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.difficulty == Difficulty::Hard {
            while let Some(cell) = self.parity.pop() {
                if !self.guessed.contains(cell) {
                    return Some(cell);
                }
            }
        }
        self.random_unguessed(rng)
    }

    fn random_unguessed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        if self.guessed.is_full() {
            return None;
        }
        for _ in 0..MAX_RANDOM_SAMPLES {
            let cell = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.guessed.contains(cell) {
                return Some(cell);
            }
        }
        let open: Vec<Coord> = self.guessed.complement().collect();
        open.choose(rng).copied()
    }
}
