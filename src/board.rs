//! One player's board: ship placement, incoming attacks and loss detection.

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError, CellState, Phase, Placement};
use crate::config::{BOARD_END, BOARD_SIZE};
use log::{debug, trace};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const SIZE: usize = BOARD_SIZE as usize;

/// Cell contents, one mask per kind. A hit cell keeps its ship bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Grid {
    ships: BB,
    hits: BB,
    misses: BB,
}

impl Grid {
    fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let state = if self.hits.get(row, col)? {
            CellState::Hit
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else if self.ships.get(row, col)? {
            CellState::Ship
        } else {
            CellState::Empty
        };
        Ok(state)
    }

    fn occupied(&self) -> BB {
        self.ships | self.hits | self.misses
    }

    fn intact(&self) -> BB {
        self.ships & !self.hits
    }
}

/// Read-only copy of every cell, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    cells: [[CellState; SIZE]; SIZE],
}

impl Snapshot {
    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; SIZE]> {
        self.cells.iter()
    }

    /// Every cell with its coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &s)| ((r, c), s)))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&(_, s)| s == state).count()
    }
}

/// Sole authority over one player's grid.
///
/// A board starts uninitialized, gets its grid from [`initialize`], takes
/// ships during setup and accepts attacks once [`start`] has been called.
///
/// [`initialize`]: BoardState::initialize
/// [`start`]: BoardState::start
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    grid: Option<Grid>,
    started: bool,
}

impl BoardState {
    /// Create a board with no grid allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (self.grid.is_some(), self.started) {
            (false, _) => Phase::Uninitialized,
            (true, false) => Phase::Setup,
            (true, true) => Phase::Active,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Allocate an all-empty grid and enter setup.
    ///
    /// Calling this again during setup discards any placed ships.
    pub fn initialize(&mut self) -> Result<(), BoardError> {
        self.ensure_not_started()?;
        if self.grid.is_some() {
            debug!("re-initializing board, placed ships discarded");
        }
        self.grid = Some(Grid::default());
        Ok(())
    }

    /// Freeze placement and allow attacks.
    pub fn start(&mut self) -> Result<(), BoardError> {
        let ships = self.grid()?.ships.count_ones();
        self.ensure_not_started()?;
        self.started = true;
        debug!("game started with {} ship cells", ships);
        Ok(())
    }

    /// Place a ship covering the inclusive run between the two endpoints.
    ///
    /// Endpoints must be on the board, share a row or column, and ascend.
    /// Returns [`Placement::Rejected`] without touching the board when any
    /// cell of the run is already occupied.
    pub fn place_ship(
        &mut self,
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
    ) -> Result<Placement, BoardError> {
        self.grid()?;
        self.ensure_not_started()?;
        let start = to_cell(start_row, start_col)?;
        let end = to_cell(end_row, end_col)?;
        let run = BB::run(start, end)
            .map_err(|_| BoardError::span((start_row, start_col), (end_row, end_col)))?;

        let grid = self.grid_mut()?;
        if grid.occupied().intersects(&run) {
            debug!(
                "placement ({}, {})-({}, {}) rejected: cell occupied",
                start_row, start_col, end_row, end_col
            );
            return Ok(Placement::Rejected);
        }
        grid.ships |= run;
        debug!(
            "placed ship ({}, {})-({}, {}), {} cells",
            start_row,
            start_col,
            end_row,
            end_col,
            run.count_ones()
        );
        Ok(Placement::Placed)
    }

    /// Resolve an opponent's shot at (row, col).
    ///
    /// Repeating a shot is always legal; a cell that is already hit stays
    /// hit and reports [`AttackResult::Miss`].
    pub fn receive_attack(&mut self, row: i32, col: i32) -> Result<AttackResult, BoardError> {
        self.ensure_started()?;
        let (r, c) = to_cell(row, col)?;
        let grid = self.grid_mut()?;
        let result = match grid.cell(r, c)? {
            CellState::Ship => {
                grid.hits.set(r, c)?;
                AttackResult::Hit
            }
            CellState::Hit => AttackResult::Miss,
            CellState::Empty | CellState::Miss => {
                grid.misses.set(r, c)?;
                AttackResult::Miss
            }
        };
        trace!("attack ({}, {}): {:?}", row, col, result);
        Ok(result)
    }

    /// True once no ship cell remains intact.
    pub fn has_lost(&self) -> Result<bool, BoardError> {
        self.ensure_started()?;
        Ok(self.grid()?.intact().is_empty())
    }

    /// Number of ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> Result<usize, BoardError> {
        Ok(self.grid()?.intact().count_ones())
    }

    /// State of a single cell.
    pub fn cell(&self, row: i32, col: i32) -> Result<CellState, BoardError> {
        let grid = self.grid()?;
        let (r, c) = to_cell(row, col)?;
        grid.cell(r, c)
    }

    /// Copy of the whole grid for display.
    pub fn snapshot(&self) -> Result<Snapshot, BoardError> {
        let grid = self.grid()?;
        let mut cells = [[CellState::Empty; SIZE]; SIZE];
        // hits last so they win over the ship bit they share
        let layers = [
            (grid.ships, CellState::Ship),
            (grid.misses, CellState::Miss),
            (grid.hits, CellState::Hit),
        ];
        for (mask, state) in layers {
            for (r, c) in mask.iter_set_bits() {
                cells[r][c] = state;
            }
        }
        Ok(Snapshot { cells })
    }

    /// Mask of every non-empty cell.
    pub(crate) fn occupancy(&self) -> Result<BB, BoardError> {
        Ok(self.grid()?.occupied())
    }

    fn grid(&self) -> Result<&Grid, BoardError> {
        self.grid.as_ref().ok_or(BoardError::BoardNotInitialized)
    }

    fn grid_mut(&mut self) -> Result<&mut Grid, BoardError> {
        self.grid.as_mut().ok_or(BoardError::BoardNotInitialized)
    }

    fn ensure_started(&self) -> Result<(), BoardError> {
        if self.started {
            Ok(())
        } else {
            Err(BoardError::GameNotStarted)
        }
    }

    fn ensure_not_started(&self) -> Result<(), BoardError> {
        if self.started {
            Err(BoardError::GameAlreadyStarted)
        } else {
            Ok(())
        }
    }
}

/// Validate a signed coordinate pair and convert it to grid indices.
fn to_cell(row: i32, col: i32) -> Result<(usize, usize), BoardError> {
    let end = i32::from(BOARD_END);
    if !(0..=end).contains(&row) || !(0..=end).contains(&col) {
        return Err(BoardError::point(row, col));
    }
    Ok((row as usize, col as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cell_accepts_board_corners() {
        assert_eq!(to_cell(0, 0), Ok((0, 0)));
        assert_eq!(to_cell(9, 9), Ok((9, 9)));
    }

    #[test]
    fn to_cell_rejects_each_edge() {
        for (r, c) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)] {
            assert_eq!(to_cell(r, c), Err(BoardError::point(r, c)));
        }
    }

    #[test]
    fn snapshot_agrees_with_cell_lookup() {
        let mut board = BoardState::new();
        board.initialize().unwrap();
        board.place_ship(1, 1, 1, 4).unwrap();
        board.place_ship(3, 7, 6, 7).unwrap();
        board.start().unwrap();
        for (r, c) in [(1, 1), (1, 2), (4, 7), (0, 0), (9, 9)] {
            board.receive_attack(r, c).unwrap();
        }
        let snapshot = board.snapshot().unwrap();
        for ((r, c), state) in snapshot.cells() {
            assert_eq!(board.cell(r as i32, c as i32), Ok(state));
        }
        assert_eq!(snapshot.count(CellState::Hit), 3);
        assert_eq!(snapshot.count(CellState::Miss), 2);
        assert_eq!(snapshot.count(CellState::Ship), 5);
    }

    #[test]
    fn hit_cell_keeps_ship_bit() {
        let mut grid = Grid::default();
        grid.ships.set(4, 4).unwrap();
        grid.hits.set(4, 4).unwrap();
        assert_eq!(grid.cell(4, 4), Ok(CellState::Hit));
        assert!(grid.intact().is_empty());
    }
}
