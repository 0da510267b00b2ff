use alloc::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// One or more cells were opened
    Continue,
    /// Target was open before the call, nothing changed
    AlreadyOpen,
    /// Target holds a mine, the board is left untouched
    MineHit,
}

impl RevealOutcome {
    /// Whether this outcome changed the board and needs a re-render
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Continue => true,
            AlreadyOpen => false,
            MineHit => false,
        }
    }

    pub const fn is_mine_hit(self) -> bool {
        matches!(self, Self::MineHit)
    }
}

impl Board {
    /// Reveals the cell at `coords`, flooding out from zero-count cells.
    ///
    /// Out-of-range coordinates are rejected before anything is touched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = *self.cell_at(coords);

        if cell.is_open() {
            log::trace!("Cell at {:?} already open", coords);
            return Ok(AlreadyOpen);
        }

        if cell.is_mine() {
            log::debug!("Mine hit at {:?}", coords);
            return Ok(MineHit);
        }

        let opened_before = self.open_count();
        if cell.neighbor_mine_count() > 0 {
            self.open_cell(coords);
        } else {
            self.flood_open(coords);
        }
        log::debug!(
            "Revealed {:?}, mine count: {}, opened {} cells",
            coords,
            cell.neighbor_mine_count(),
            self.open_count() - opened_before
        );

        Ok(Continue)
    }

    /// Opens the zero-count region connected to `start` along with its numbered border.
    fn flood_open(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let visit_cell = *self.cell_at(visit_coords);
            if visit_cell.is_open() {
                continue;
            }

            self.open_cell(visit_coords);
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                visit_coords,
                visit_cell.neighbor_mine_count()
            );

            // only zero cells keep spreading
            if visit_cell.neighbor_mine_count() == 0 {
                let board = &*self;
                to_visit.extend(board.neighbors(visit_coords).filter(|&pos| {
                    let neighbor = board.cell_at(pos);
                    !neighbor.is_mine() && !neighbor.is_open()
                }));
            }
        }
    }
}

/// Reveals `(x, y)` on `board`, see [`Board::reveal`].
pub fn reveal(board: &mut Board, x: Coord, y: Coord) -> Result<RevealOutcome> {
    board.reveal((x, y))
}
