//! Common types for the board: cell states, lifecycle phases, operation
//! results and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    /// A ship cell that has been attacked. Terminal.
    Hit,
    /// An attacked cell that held no ship.
    Miss,
}

/// Lifecycle stage of a [`BoardState`](crate::BoardState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No grid has been allocated yet.
    Uninitialized,
    /// Grid exists; ships may be placed, attacks are refused.
    Setup,
    /// Attacks and loss checks are allowed.
    Active,
}

/// Outcome of a ship placement that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Every cell of the run now holds a ship.
    Placed,
    /// At least one cell of the run was occupied; the board is unchanged.
    Rejected,
}

impl Placement {
    pub fn is_placed(self) -> bool {
        self == Placement::Placed
    }
}

/// Result of an incoming attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// The attack struck an intact ship cell.
    Hit,
    /// No new hit was scored: open water, a previous miss, or a cell that
    /// was already hit.
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        self == AttackResult::Hit
    }
}

/// Which coordinates failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCoordinates {
    /// A single point lies outside the board.
    Point { row: i32, col: i32 },
    /// Two in-bounds endpoints that do not describe a straight, ascending run.
    Span {
        start: (i32, i32),
        end: (i32, i32),
    },
}

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCoordinates::Point { row, col } => write!(f, "({}, {})", row, col),
            InvalidCoordinates::Span { start, end } => {
                write!(f, "({}, {}), ({}, {})", start.0, start.1, end.0, end.1)
            }
        }
    }
}

/// Errors returned by [`BoardState`](crate::BoardState) operations.
///
/// These signal misuse by the caller. Expected gameplay outcomes such as an
/// occupied placement or a repeated attack are reported through
/// [`Placement`] and [`AttackResult`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The operation needs a grid and `initialize` has not been called.
    BoardNotInitialized,
    /// Attacks and loss checks need `start` to have been called.
    GameNotStarted,
    /// The game is already active.
    GameAlreadyStarted,
    /// Out-of-bounds coordinates or malformed ship geometry.
    InvalidCoordinates(InvalidCoordinates),
}

impl BoardError {
    pub(crate) fn point(row: i32, col: i32) -> Self {
        BoardError::InvalidCoordinates(InvalidCoordinates::Point { row, col })
    }

    pub(crate) fn span(start: (i32, i32), end: (i32, i32)) -> Self {
        BoardError::InvalidCoordinates(InvalidCoordinates::Span { start, end })
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BoardNotInitialized => write!(f, "Board needs to be initialised first"),
            BoardError::GameNotStarted => write!(f, "Game hasn't started yet"),
            BoardError::GameAlreadyStarted => write!(f, "Game has already started"),
            BoardError::InvalidCoordinates(c) => write!(f, "Invalid coordinates: {}", c),
        }
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        let wide = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::point(wide(row), wide(col)),
            BitBoardError::NotStraight { start, end } => {
                BoardError::span((wide(start.0), wide(start.1)), (wide(end.0), wide(end.1)))
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
