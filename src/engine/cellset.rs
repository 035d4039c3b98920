//! A fixed-size set of board cells packed into a single unsigned integer.
//!
//! The adversary uses it to remember every coordinate it has fired at. It is
//! `no_std` friendly and never allocates.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::engine::common::Coord;

/// Set of cells on an `N`×`N` board stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "board does not fit in T");

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        CellSet { bits: T::zero() }
    }

    #[inline]
    fn bit(coord: Coord) -> Option<T> {
        coord
            .within(N)
            .then(|| T::one() << (coord.row * N + coord.col))
    }

    /// Add `coord`. Returns `true` if it was not present before; cells off the
    /// board are ignored and report `false`.
    pub fn insert(&mut self, coord: Coord) -> bool {
        match Self::bit(coord) {
            Some(bit) if (self.bits & bit).is_zero() => {
                self.bits = self.bits | bit;
                true
            }
            _ => false,
        }
    }

    /// Remove `coord`, returning whether it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match Self::bit(coord) {
            Some(bit) if !(self.bits & bit).is_zero() => {
                self.bits = self.bits & !bit;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        Self::bit(coord).is_some_and(|bit| !(self.bits & bit).is_zero())
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` once every board cell is in the set.
    pub fn is_full(&self) -> bool {
        self.len() == Self::CELLS
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Cells in the set, row-major.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { set: self, idx: 0 }
    }

    /// Board cells not in the set, row-major.
    pub fn complement(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..Self::CELLS)
            .map(|idx| Coord::new(idx / N, idx % N))
            .filter(move |c| !self.contains(*c))
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coord> for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = Self::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}> ({} cells):", N, self.len())?;
        for r in 0..N {
            for c in 0..N {
                let mark = if self.contains(Coord::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    set: &'a CellSet<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.set.bits >> idx) & T::one()).is_zero() {
                return Some(Coord::new(idx / N, idx % N));
            }
        }
        None
    }
}
