//! Console markers and board printout.
//!
//! The glyph table lives here rather than on [`CellState`] so the board
//! itself carries no display concerns.

use core::fmt;

use crate::board::Snapshot;
use crate::common::CellState;

/// Glyph used for each cell state.
pub const fn marker(state: CellState) -> char {
    match state {
        CellState::Empty => '~',
        CellState::Ship => 'O',
        CellState::Hit => 'X',
        CellState::Miss => '*',
    }
}

/// Displays a snapshot in the classic layout: a blank line, one row per
/// line with every marker followed by a space, then another blank line.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    reveal_ships: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            reveal_ships: true,
        }
    }

    /// Opponent's view: intact ship cells are drawn as open water.
    pub fn concealed(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            reveal_ships: false,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.snapshot.rows() {
            for &state in row {
                let shown = match state {
                    CellState::Ship if !self.reveal_ships => CellState::Empty,
                    s => s,
                };
                write!(f, "{} ", marker(shown))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Render a snapshot with ships visible.
#[cfg(feature = "std")]
pub fn render(snapshot: &Snapshot) -> std::string::String {
    use std::string::ToString;
    BoardView::new(snapshot).to_string()
}

/// Print a snapshot to stdout with ships visible.
#[cfg(feature = "std")]
pub fn print_board(snapshot: &Snapshot) {
    std::print!("{}", BoardView::new(snapshot));
}
