//! Random fleet layout on a board in setup.

use core::fmt;

use rand::Rng;

use crate::board::{BoardState, BB};
use crate::common::{BoardError, Placement};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};

/// The two ascending endpoints of a straight ship, zero-based (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipSpan {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl ShipSpan {
    pub const fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }

    /// Number of cells covered, assuming a straight run.
    pub fn cell_count(&self) -> usize {
        let rows = self.end.0.abs_diff(self.start.0);
        let cols = self.end.1.abs_diff(self.start.1);
        (rows.max(cols) as usize).saturating_add(1)
    }

    /// Place this span on `board`.
    pub fn place_on(&self, board: &mut BoardState) -> Result<Placement, BoardError> {
        board.place_ship(self.start.0, self.start.1, self.end.0, self.end.1)
    }
}

impl fmt::Display for ShipSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}

/// Errors from laying out a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    Board(BoardError),
    /// No free run of this length was found.
    NoRoom(usize),
}

impl From<BoardError> for FleetError {
    fn from(err: BoardError) -> Self {
        FleetError::Board(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Board(e) => write!(f, "{}", e),
            FleetError::NoRoom(len) => write!(f, "No room left for a ship of length {}", len),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

/// Pick a random free straight run of `length` cells.
///
/// Returns `Ok(None)` when `length` cannot fit on the board at all or no
/// free run turned up within the attempt limit.
pub fn random_span<R: Rng>(
    board: &BoardState,
    rng: &mut R,
    length: usize,
) -> Result<Option<ShipSpan>, BoardError> {
    let occupied = board.occupancy()?;
    let size = BOARD_SIZE as usize;
    if length == 0 || length > size {
        return Ok(None);
    }
    for _ in 0..PLACEMENT_ATTEMPTS {
        let vertical: bool = rng.random();
        let (max_r, max_c) = if vertical {
            (size - length, size - 1)
        } else {
            (size - 1, size - length)
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let (end_r, end_c) = if vertical {
            (r + length - 1, c)
        } else {
            (r, c + length - 1)
        };
        let run = BB::run((r, c), (end_r, end_c))?;
        if !occupied.intersects(&run) {
            return Ok(Some(ShipSpan::new(
                (r as i32, c as i32),
                (end_r as i32, end_c as i32),
            )));
        }
    }
    Ok(None)
}

/// Place one ship per entry of `lengths`, in order, at random free spans.
pub fn place_fleet<R: Rng>(
    board: &mut BoardState,
    rng: &mut R,
    lengths: &[usize],
) -> Result<(), FleetError> {
    for &length in lengths {
        let span = random_span(board, rng, length)?.ok_or(FleetError::NoRoom(length))?;
        if !span.place_on(board)?.is_placed() {
            return Err(FleetError::NoRoom(length));
        }
        log::debug!("fleet: length {} at {}", length, span);
    }
    Ok(())
}
