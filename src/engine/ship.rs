//! Ship definitions and footprints.

use core::fmt;

use crate::engine::common::Coord;

/// Identity of a ship within its owner's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u8);

impl ShipId {
    /// Position of the ship in its roster.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis a ship (or a run of hits) extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Axis shared by two distinct cells on the same row or column.
    pub fn between(a: Coord, b: Coord) -> Option<Axis> {
        if a == b {
            None
        } else if a.row == b.row {
            Some(Axis::Horizontal)
        } else if a.col == b.col {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}

/// Immutable roster entry: identity, display name and rectangular shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    id: ShipId,
    name: &'static str,
    width: usize,
    height: usize,
}

impl ShipDef {
    pub const fn new(id: u8, name: &'static str, width: usize, height: usize) -> Self {
        Self {
            id: ShipId(id),
            name,
            width,
            height,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells covered by the ship.
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Whether `width`×`height` is this ship's shape, possibly rotated.
    pub fn fits_shape(&self, width: usize, height: usize) -> bool {
        (width, height) == (self.width, self.height)
            || (width, height) == (self.height, self.width)
    }

    /// Footprint with the long side laid along `axis`.
    pub fn footprint(&self, origin: Coord, axis: Axis) -> Footprint {
        let long = self.width.max(self.height);
        let short = self.width.min(self.height);
        match axis {
            Axis::Horizontal => Footprint::new(origin, long, short),
            Axis::Vertical => Footprint::new(origin, short, long),
        }
    }
}

/// Rectangle of cells anchored at its top-left `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub origin: Coord,
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const fn new(origin: Coord, width: usize, height: usize) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Same origin with width and height swapped.
    pub fn rotated(self) -> Self {
        Self::new(self.origin, self.height, self.width)
    }

    /// Whether every cell lies on an `n`×`n` board.
    pub fn fits(&self, n: usize) -> bool {
        let rows = self.origin.row.checked_add(self.height);
        let cols = self.origin.col.checked_add(self.width);
        matches!((rows, cols), (Some(r), Some(c)) if r <= n && c <= n)
    }

    /// Covered cells in row-major order. Only meaningful when the footprint
    /// fits the board.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Footprint {
            origin,
            width,
            height,
        } = *self;
        (0..height).flat_map(move |r| {
            (0..width).map(move |c| Coord::new(origin.row + r, origin.col + c))
        })
    }
}
