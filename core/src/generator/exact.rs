use alloc::vec;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Samples mine positions without replacement so exactly the requested number of mines is
/// placed, capped at the number of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactCountGenerator {
    seed: u64,
}

impl ExactCountGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ExactCountGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let total_cells = config.total_cells();
        let mines = if config.mines > total_cells {
            log::warn!(
                "Minefield already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask = vec![false; usize::from(total_cells)];
        for i in index::sample(&mut rng, mine_mask.len(), usize::from(mines)) {
            mine_mask[i] = true;
        }

        let width = usize::from(config.size.0);
        let board = Board::build(config.size, config.mines, |(x, y)| {
            mine_mask[usize::from(y) * width + usize::from(x)]
        });

        // double check mine count
        let placed = board.placed_mines();
        if placed != mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                placed,
                mines
            );
        }
        Ok(board)
    }
}
