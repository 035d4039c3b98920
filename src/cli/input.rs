//! Parsing of typed coordinates such as `B7` and placements such as `B7 H`.

use crate::engine::{Axis, Coord, BOARD_SIZE};

/// Parse a cell label: column letter followed by a 1-based row number.
/// Labels outside the board are rejected.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    let coord = Coord::new(row - 1, col);
    coord.within(BOARD_SIZE).then_some(coord)
}

/// Parse `<cell> [H|V]`. The axis defaults to vertical, the roster shape.
pub fn parse_placement(input: &str) -> Option<(Coord, Axis)> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next()?)?;
    let axis = match parts.next().map(|p| p.to_ascii_uppercase()) {
        None => Axis::Vertical,
        Some(p) if p.starts_with('V') => Axis::Vertical,
        Some(p) if p.starts_with('H') => Axis::Horizontal,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((coord, axis))
}

/// Label for a coordinate, inverse of [`parse_coord`].
pub fn coord_label(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels() {
        assert_eq!(parse_coord("a1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord(" J10 "), Some(Coord::new(9, 9)));
        assert_eq!(parse_coord("K1"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A11"), None);
        assert_eq!(parse_coord("7"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn parses_placements() {
        assert_eq!(parse_placement("C4 h"), Some((Coord::new(3, 2), Axis::Horizontal)));
        assert_eq!(parse_placement("C4"), Some((Coord::new(3, 2), Axis::Vertical)));
        assert_eq!(parse_placement("C4 x"), None);
        assert_eq!(parse_placement("C4 H extra"), None);
    }

    #[test]
    fn label_roundtrip() {
        let c = Coord::new(6, 1);
        assert_eq!(coord_label(c), "B7");
        assert_eq!(parse_coord(&coord_label(c)), Some(c));
    }
}
