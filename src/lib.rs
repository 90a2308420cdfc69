#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod render;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{BoardState, Snapshot};
pub use common::*;
pub use config::*;
pub use fleet::{place_fleet, random_span, FleetError, ShipSpan};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::{marker, BoardView};
#[cfg(feature = "std")]
pub use render::{print_board, render};
