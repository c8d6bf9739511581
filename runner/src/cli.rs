use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use libgame::{
    Game,
    board::{GameBoard, TileState},
    format::{self, Seed},
    rule::Rule,
};
use log::info;

use crate::config::{Config, Settings};

/// Runs a Game of Life seed file for a number of generations and prints the final board.
#[derive(Debug, Clone, Parser)]
#[command(name = "life", version)]
pub struct Args {
    /// Seed file: generations, rows and columns on the first three lines, then the cells.
    /// Defaults to `input.txt`.
    pub input: Option<PathBuf>,

    /// Write the final board to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run this many generations instead of the count in the seed file.
    #[arg(short, long, allow_negative_numbers = true)]
    pub generations: Option<i64>,

    /// JSON config file with defaults for the other options.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print board size and population before and after to stderr.
    #[arg(short, long)]
    pub summary: bool,

    /// More logging, repeat for more detail. `RUST_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let settings = Settings::resolve(args, config);

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();

    let seed_text = fs::read_to_string(&settings.input)
        .with_context(|| format!("Couldn't read seed file {}", settings.input.display()))?;
    info!("Read seed file {}", settings.input.display());

    let seed = Seed::parse(&seed_text)
        .with_context(|| format!("Couldn't parse seed file {}", settings.input.display()))?;

    let generations = match settings.generations {
        Some(generations) => generations,
        None => i64::try_from(seed.generations).context("Generation count too large")?,
    };

    let game = Game::new(seed.board, Rule::default());

    let start_instant = Instant::now();
    let finished_board = game
        .run_checked(generations)
        .with_context(|| format!("Couldn't run {generations} generations"))?;
    info!(
        "Finished in {:.2?}",
        Instant::now().duration_since(start_instant)
    );

    let rendered = format::render(&finished_board);

    match &settings.output {
        Some(output_path) => {
            fs::write(output_path, rendered)
                .with_context(|| format!("Couldn't write board to {}", output_path.display()))?;
            info!("Wrote board to {}", output_path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Couldn't write board to stdout")?;
        }
    }

    if settings.summary {
        eprintln!("{}", summary(&game.board, generations, &finished_board));
    }

    Ok(())
}

fn summary(initial: &GameBoard, generations: i64, finished: &GameBoard) -> String {
    format!(
        "{}x{} board, {generations} generations, {} alive -> {} alive",
        initial.rows(),
        initial.cols(),
        initial.count_cells(TileState::Alive),
        finished.count_cells(TileState::Alive),
    )
}
