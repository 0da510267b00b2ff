use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position.
///
/// Mine placement and the neighbor count are fixed once the board is built,
/// only the open flag changes afterwards and it never goes back to closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    x: Coord,
    y: Coord,
    is_mine: bool,
    is_open: bool,
    neighbor_mine_count: u8,
}

impl Cell {
    pub(crate) const fn closed((x, y): Coord2, is_mine: bool) -> Self {
        Self {
            x,
            y,
            is_mine,
            is_open: false,
            neighbor_mine_count: 0,
        }
    }

    pub const fn x(&self) -> Coord {
        self.x
    }

    pub const fn y(&self) -> Coord {
        self.y
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Mines among the in-bounds neighbors, always 0 for mine cells.
    pub const fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mine_count
    }

    pub(crate) fn set_neighbor_mine_count(&mut self, count: u8) {
        self.neighbor_mine_count = count;
    }

    pub(crate) fn open(&mut self) {
        self.is_open = true;
    }
}
