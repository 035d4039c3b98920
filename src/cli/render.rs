//! Text rendering of boards and events.

use std::fmt::Write;

use crate::cli::input::coord_label;
use crate::engine::{ship_def, Board, Cell, Coord, MatchEvent, Outcome, Side, BOARD_SIZE};

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
}

fn render(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    header(&mut out);
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match board.cell(Coord::new(r, c)) {
                Some(Cell::Hit(_)) => 'X',
                Some(Cell::Miss) => 'o',
                Some(Cell::Occupied(_)) if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// The player's own board with ships visible.
pub fn render_own_board(board: &Board) -> String {
    render(board, true)
}

/// The opponent's board as the player knows it: only hits and misses.
pub fn render_target_board(board: &Board) -> String {
    render(board, false)
}

fn ship_name(owner: Side, ship: crate::engine::ShipId) -> &'static str {
    ship_def(owner, ship).map(|d| d.name()).unwrap_or("unknown ship")
}

/// One-line description of an event, or `None` for events that need no text.
pub fn describe(event: &MatchEvent) -> Option<String> {
    let line = match *event {
        MatchEvent::PlacementAccepted { ship, footprint } => format!(
            "{} deployed at {}.",
            ship_name(Side::Human, ship),
            coord_label(footprint.origin)
        ),
        MatchEvent::PlacementRejected { reason, .. } => {
            format!("Invalid placement: {}.", reason)
        }
        MatchEvent::AllShipsPlaced => "All ships deployed.".to_string(),
        MatchEvent::PhaseChanged { .. } => return None,
        MatchEvent::AttackResult {
            side,
            target,
            outcome,
        } => {
            let who = match side {
                Side::Human => "You fire",
                Side::Computer => "Computer fires",
            };
            let what = match outcome {
                Outcome::Miss => "miss",
                Outcome::Hit(_) | Outcome::HitAndSunk(_) => "hit!",
                Outcome::AlreadyAttacked => "already attacked",
            };
            format!("{} at {}: {}", who, coord_label(target), what)
        }
        MatchEvent::ShipSunk { owner, ship } => match owner {
            Side::Human => format!("Your {} was sunk!", ship_name(owner, ship)),
            Side::Computer => format!("You sank the enemy {}!", ship_name(owner, ship)),
        },
        MatchEvent::MatchWon { side, turns } => {
            let verdict = match side {
                Side::Human => "You win!",
                Side::Computer => "The computer wins.",
            };
            format!(
                "Game over after {} of your shots and {} computer shots. {}",
                turns.human, turns.computer, verdict
            )
        }
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{attack, FleetState, Footprint, ShipId};

    #[test]
    fn target_board_hides_intact_ships() {
        let mut board = Board::new();
        board
            .place(ShipId(0), &Footprint::new(Coord::new(0, 0), 2, 1))
            .unwrap();
        let mut fleet = FleetState::new();
        fleet.mark_placed(ShipId(0));
        attack::resolve(&mut board, &mut fleet, Coord::new(0, 0)).unwrap();
        attack::resolve(&mut board, &mut fleet, Coord::new(5, 5)).unwrap();

        let own = render_own_board(&board);
        let target = render_target_board(&board);
        let own_first_row = own.lines().nth(1).unwrap();
        let target_first_row = target.lines().nth(1).unwrap();
        assert_eq!(own_first_row, " 1  X S . . . . . . . .");
        assert_eq!(target_first_row, " 1  X . . . . . . . . .");
        assert!(target.lines().nth(6).unwrap().contains('o'));
    }

    #[test]
    fn describes_sinking() {
        let line = describe(&MatchEvent::ShipSunk {
            owner: Side::Computer,
            ship: ShipId(4),
        })
        .unwrap();
        assert_eq!(line, "You sank the enemy Yamato!");
        assert!(describe(&MatchEvent::PhaseChanged {
            from: crate::engine::Phase::Placement,
            to: crate::engine::Phase::ComputerAttacking,
        })
        .is_none());
    }
}
