//! A fixed-size set of board cells packed into an unsigned integer.
//!
//! Cells are addressed by [`Coordinate`]; positions outside the `N×N` grid are
//! never members and cannot be inserted.

use core::fmt;
use core::mem;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Set of cells on an `N×N` grid stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(N * N <= mem::size_of::<T>() * 8, "{}x{} grid does not fit", N, N);
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn bit(coord: Coordinate) -> Option<T> {
        coord
            .grid_index(N)
            .map(|(row, col)| T::one() << (row * N + col))
    }

    /// Returns `true` if `coord` is in the set.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        Self::bit(coord).is_some_and(|b| !(self.bits & b).is_zero())
    }

    /// Adds `coord`. Returns `true` if it was not already present; off-grid
    /// positions are ignored and return `false`.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Some(b) if (self.bits & b).is_zero() => {
                self.bits = self.bits | b;
                true
            }
            _ => false,
        }
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let ch = if self.contains(Coordinate::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
