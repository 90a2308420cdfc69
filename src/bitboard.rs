//! A fixed-size occupancy mask using const generics.
//!
//! An `N×N` grid is packed into one unsigned integer `T`, cell (row, col)
//! living at bit `row * N + col`. The board keeps one mask per cell kind
//! (ships, hits, misses), so whole-board questions such as "is any ship cell
//! still intact?" reduce to a couple of bitwise operations.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
    /// Run endpoints do not share a row or column, or are descending.
    NotStraight {
        start: (usize, usize),
        end: (usize, usize),
    },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BitBoardError::NotStraight { start, end } => {
                write!(f, "NotStraight: {:?} -> {:?}", start, end)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
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
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared).
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Mask of the inclusive straight run from `start` to `end`.
    ///
    /// The run is vertical when the columns match, horizontal otherwise, so
    /// equal endpoints give a single cell. Endpoints must be ascending.
    pub fn run(start: (usize, usize), end: (usize, usize)) -> Result<Self, BitBoardError> {
        let (r0, c0) = start;
        let (r1, c1) = end;
        check_bounds::<N>(r0, c0)?;
        check_bounds::<N>(r1, c1)?;
        if (r0 != r1 && c0 != c1) || r0 > r1 || c0 > c1 {
            return Err(BitBoardError::NotStraight { start, end });
        }
        let mut board = Self::new();
        if c0 == c1 {
            for r in r0..=r1 {
                board.set(r, c0)?;
            }
        } else {
            for c in c0..=c1 {
                board.set(r0, c)?;
            }
        }
        Ok(board)
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True if `self` and `other` share any set cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        check_bounds::<N>(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        check_bounds::<N>(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Iterator over the set bits of the board, row-major.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

#[inline]
fn check_bounds<const N: usize>(row: usize, col: usize) -> Result<(), BitBoardError> {
    if row >= N || col >= N {
        Err(BitBoardError::IndexOutOfBounds { row, col })
    } else {
        Ok(())
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() & rhs.into_raw())
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() | rhs.into_raw())
    }
}

/// Bitwise NOT, kept within board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
