use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use sapper_core::*;

/// How mines get placed on a fresh board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Independent trial per cell
    Bernoulli,
    /// Exactly the requested number of mines
    Exact,
}

impl Placement {
    fn generate(self, config: GameConfig, seed: u64) -> Result<Board> {
        match self {
            Self::Bernoulli => BernoulliGenerator::new(seed).generate(config),
            Self::Exact => ExactCountGenerator::new(seed).generate(config),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    New,
    Restart,
    Show,
    Help,
    Quit,
}

fn parse_coord(word: Option<&str>, axis: &str) -> anyhow::Result<Coord> {
    let word = word.ok_or_else(|| anyhow!("Missing {axis} coordinate"))?;
    word.parse()
        .with_context(|| format!("Invalid {axis} coordinate: {word:?}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            bail!("Empty command");
        };

        let command = match first {
            "open" | "o" => {
                let x = parse_coord(words.next(), "x")?;
                let y = parse_coord(words.next(), "y")?;
                Self::Open((x, y))
            }
            "new" | "n" => Self::New,
            "restart" | "r" => Self::Restart,
            "show" | "s" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                let x = parse_coord(Some(first), "x")
                    .with_context(|| format!("Unknown command: {first:?}"))?;
                let y = parse_coord(words.next(), "y")?;
                Self::Open((x, y))
            }
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected argument: {extra:?}");
        }
        Ok(command)
    }
}

/// Holds the current board for the terminal front end and swaps it out on new games.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    placement: Placement,
    seed: u64,
    board: Board,
    game_over: bool,
}

impl Session {
    pub fn new(config: GameConfig, placement: Placement, seed: u64) -> Result<Self> {
        let board = placement.generate(config, seed)?;
        log::debug!("New game with seed {}", seed);
        Ok(Self {
            config,
            placement,
            seed,
            board,
            game_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Reveals a cell, a mine hit ends the session until a new game or restart.
    pub fn open(&mut self, coords: Coord2) -> anyhow::Result<RevealOutcome> {
        if self.game_over {
            bail!("Game over, start a new game or restart");
        }

        let outcome = self.board.reveal(coords)?;
        if outcome.is_mine_hit() {
            self.game_over = true;
        }
        Ok(outcome)
    }

    /// Fresh layout with the same settings.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config, self.placement, seed)?;
        Ok(())
    }

    /// Same layout again with every cell closed.
    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.seed)
    }
}
