#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod common;
mod config;
mod game;
mod grid;
mod knowledge;
mod placement;
mod player;
mod player_nightmare;
mod player_reactive;
pub mod region;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{neighbors, BitBoard, BitBoardError, Bits};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use knowledge::*;
pub use placement::*;
pub use player::*;
pub use player_nightmare::*;
pub use player_reactive::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use player_cli::*;
