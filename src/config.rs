//! Fixed board geometry and driver defaults.

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;
/// Highest valid row or column index.
pub const BOARD_END: u8 = BOARD_SIZE - 1;
/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Ship lengths laid out by [`place_fleet`](crate::place_fleet) in the standard game.
pub const STANDARD_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Total number of ship cells in [`STANDARD_FLEET`].
pub const STANDARD_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement gives up after this many candidate spans.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Pause between driver steps, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;
