use gridbattle::{
    resolve, Board, BoardError, Cell, Coord, FleetState, Footprint, Outcome, ShipId,
};

fn board_with_destroyer() -> (Board, FleetState) {
    let mut board = Board::new();
    let mut fleet = FleetState::new();
    board
        .place(ShipId(0), &Footprint::new(Coord::new(0, 0), 2, 1))
        .unwrap();
    fleet.mark_placed(ShipId(0));
    (board, fleet)
}

#[test]
fn test_miss_marks_cell() {
    let (mut board, mut fleet) = board_with_destroyer();
    assert_eq!(resolve(&mut board, &mut fleet, Coord::new(5, 5)), Ok(Outcome::Miss));
    assert_eq!(board.cell(Coord::new(5, 5)), Some(Cell::Miss));
    assert_eq!(fleet.hits_taken(), 0);
}

#[test]
fn test_hit_then_sink() {
    let (mut board, mut fleet) = board_with_destroyer();
    assert_eq!(
        resolve(&mut board, &mut fleet, Coord::new(0, 0)),
        Ok(Outcome::Hit(ShipId(0)))
    );
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit(ShipId(0))));
    assert!(!fleet.is_sunk(ShipId(0)));
    assert_eq!(
        resolve(&mut board, &mut fleet, Coord::new(0, 1)),
        Ok(Outcome::HitAndSunk(ShipId(0)))
    );
    assert!(board.is_sunk(ShipId(0)));
    assert!(fleet.is_sunk(ShipId(0)));
    assert_eq!(fleet.hits_taken(), 2);
    assert_eq!(fleet.sunk_count(), 1);
}

#[test]
fn test_repeat_attack_changes_nothing() {
    let (mut board, mut fleet) = board_with_destroyer();
    resolve(&mut board, &mut fleet, Coord::new(0, 0)).unwrap();
    resolve(&mut board, &mut fleet, Coord::new(3, 3)).unwrap();
    let board_before = board.clone();
    let fleet_before = fleet;

    assert_eq!(
        resolve(&mut board, &mut fleet, Coord::new(0, 0)),
        Ok(Outcome::AlreadyAttacked)
    );
    assert_eq!(
        resolve(&mut board, &mut fleet, Coord::new(3, 3)),
        Ok(Outcome::AlreadyAttacked)
    );
    assert_eq!(board, board_before);
    assert_eq!(fleet, fleet_before);
}

#[test]
fn test_out_of_bounds_attack() {
    let (mut board, mut fleet) = board_with_destroyer();
    assert_eq!(
        resolve(&mut board, &mut fleet, Coord::new(10, 2)),
        Err(BoardError::OutOfBounds { row: 10, col: 2 })
    );
}

#[test]
fn test_sunk_recorded_once() {
    let (mut board, mut fleet) = board_with_destroyer();
    resolve(&mut board, &mut fleet, Coord::new(0, 0)).unwrap();
    resolve(&mut board, &mut fleet, Coord::new(0, 1)).unwrap();
    // Ship already recorded: a second check must not report it again.
    assert!(!fleet.check_sunk(&board, ShipId(0)));
    assert!(!fleet.record_sunk(ShipId(0)));
    assert_eq!(fleet.sunk_count(), 1);
}

#[test]
fn test_unplaced_ship_never_sunk() {
    let mut fleet = FleetState::new();
    assert!(!fleet.record_sunk(ShipId(2)));
    assert!(fleet.mark_placed(ShipId(2)));
    assert!(!fleet.mark_placed(ShipId(2)));
    assert!(fleet.record_sunk(ShipId(2)));
    assert!(!fleet.mark_placed(ShipId(9)));
}

#[test]
fn test_pending_ships_in_roster_order() {
    let mut fleet = FleetState::new();
    fleet.mark_placed(ShipId(1));
    fleet.mark_placed(ShipId(3));
    let pending: Vec<_> = fleet.pending().collect();
    assert_eq!(pending, vec![ShipId(0), ShipId(2), ShipId(4)]);
    assert_eq!(fleet.placed_count(), 2);
    assert!(!fleet.all_placed());
}
