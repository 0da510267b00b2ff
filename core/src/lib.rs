#![no_std]

//! Rule engine for a Minesweeper board: mine placement, neighbor counts and the reveal
//! operation with flood opening of zero-count regions.

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;
