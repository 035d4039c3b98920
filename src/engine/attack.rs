//! Attack resolution against a single board.

use log::trace;

use crate::engine::board::{Cell, Grid};
use crate::engine::common::{BoardError, Coord, Outcome};
use crate::engine::fleet::FleetState;

/// Fire at `target` on `board`, whose owner's bookkeeping is `fleet`.
///
/// Cells that were already hit or missed yield [`Outcome::AlreadyAttacked`]
/// and leave both board and fleet untouched. A hit bumps the fleet's
/// hits-taken tally and reports [`Outcome::HitAndSunk`] the first time the
/// ship has no intact cells left. Targets off the board are an error.
pub fn resolve<const N: usize>(
    board: &mut Grid<N>,
    fleet: &mut FleetState,
    target: Coord,
) -> Result<Outcome, BoardError> {
    let cell = board.cell(target).ok_or(BoardError::OutOfBounds {
        row: target.row,
        col: target.col,
    })?;
    let outcome = match cell {
        Cell::Hit(_) | Cell::Miss => Outcome::AlreadyAttacked,
        Cell::Empty => {
            board.set(target, Cell::Miss)?;
            Outcome::Miss
        }
        Cell::Occupied(ship) => {
            board.set(target, Cell::Hit(ship))?;
            fleet.record_hit();
            if fleet.check_sunk(board, ship) {
                Outcome::HitAndSunk(ship)
            } else {
                Outcome::Hit(ship)
            }
        }
    };
    trace!("attack at {} -> {:?}", target, outcome);
    Ok(outcome)
}
