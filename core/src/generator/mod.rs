use crate::*;
pub use bernoulli::*;
pub use exact::*;

mod bernoulli;
mod exact;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Builds a `width` x `height` board where each cell is a mine with probability
/// `mines / (width * height)`.
pub fn generate(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Board> {
    let config = GameConfig::new((width, height), mines)?;
    BernoulliGenerator::new(seed).generate(config)
}
