use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Places mines with an independent trial per cell, so the realized count only matches the
/// requested one on average.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for BernoulliGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        if config.mines > config.total_cells() {
            log::warn!(
                "Requested {} mines but only {} cells fit, every cell will be a mine",
                config.mines,
                config.total_cells()
            );
        }

        let density = config.density();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::build(config.size, config.mines, |_| rng.random_bool(density));

        log::debug!(
            "Generated {}x{} board with density {:.3}, placed: {}, requested: {}",
            config.size.0,
            config.size.1,
            density,
            board.placed_mines(),
            config.mines
        );
        Ok(board)
    }
}
