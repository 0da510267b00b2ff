use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sapper_core::{CellCount, Coord, GameConfig, RevealOutcome};

use session::{Command, Placement, Session};

mod logging;
mod render;
mod session;

const HELP: &str = "\
Commands:
  open X Y | X Y   reveal the cell at column X, row Y
  new              new board with a fresh seed
  restart          same board again, all cells closed
  show             redraw the board
  help             this message
  quit             leave the game";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = 12)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 12)]
    height: Coord,

    /// Nominal number of mines, sets the per-cell mine probability
    #[arg(short, long, default_value_t = 12)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Place exactly the requested number of mines instead of sampling each cell
    #[arg(long)]
    exact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose.log_level_filter())?;

    let config = GameConfig::new((args.width, args.height), args.mines)
        .context("Invalid board settings")?;
    let placement = if args.exact {
        Placement::Exact
    } else {
        Placement::Bernoulli
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = Session::new(config, placement, seed)?;
    println!("{HELP}\n");
    println!("{}", render::render(session.board(), false));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match command {
            Command::Open(coords) => match session.open(coords) {
                Ok(RevealOutcome::MineHit) => {
                    println!("{}", render::render(session.board(), true));
                    println!("Game Over!");
                }
                Ok(RevealOutcome::AlreadyOpen) => println!("Already open"),
                Ok(RevealOutcome::Continue) => {
                    println!("{}", render::render(session.board(), false));
                }
                Err(err) => println!("{err:#}"),
            },
            Command::New => {
                session.new_game(rand::random())?;
                log::debug!("seed: {}", session.seed());
                println!("{}", render::render(session.board(), false));
            }
            Command::Restart => {
                session.restart()?;
                println!("{}", render::render(session.board(), false));
            }
            Command::Show => {
                println!("{}", render::render(session.board(), session.is_over()));
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}
