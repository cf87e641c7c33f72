//! Command-line frontend for linelace puzzles.
//!
//! # Usage
//!
//! Play a tier, resuming from saved progress:
//!
//! ```sh
//! linelace play puzzles.json --tier easy --progress progress.json
//! ```
//!
//! Check that every puzzle in a catalog parses:
//!
//! ```sh
//! linelace validate puzzles.json
//! ```
//!
//! Print a single entry:
//!
//! ```sh
//! linelace show puzzles.json easy.3
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use linelace_game::{Board, BoardView, Catalog, CatalogError, PuzzleId};

use crate::{error::CliError, progress_file::ProgressFile, session::Session};

mod command;
mod error;
mod progress_file;
mod session;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Play puzzles, reading gestures and commands from stdin.
    Play {
        /// Puzzle catalog (JSON).
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Entry to start at, as `tier.index`.
        #[arg(long, value_name = "ID", conflicts_with = "tier")]
        puzzle: Option<PuzzleId>,

        /// Tier to play, resuming at its furthest unlocked entry.
        #[arg(long, value_name = "NAME", default_value = "tutorial")]
        tier: String,

        /// File to load and save progress in (JSON).
        #[arg(long, value_name = "FILE")]
        progress: Option<PathBuf>,

        /// Edge length of a cell in screen units, for touch commands.
        #[arg(long, value_name = "PX", default_value_t = 40.0)]
        cell_size: f32,
    },
    /// Parse every puzzle in a catalog and report the first error.
    Validate {
        /// Puzzle catalog (JSON).
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },
    /// Print one catalog entry.
    Show {
        /// Puzzle catalog (JSON).
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Entry to print, as `tier.index`.
        #[arg(value_name = "ID")]
        id: PuzzleId,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args.command) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(action: Action) -> Result<(), CliError> {
    match action {
        Action::Play {
            catalog,
            puzzle,
            tier,
            progress,
            cell_size,
        } => {
            if !(cell_size.is_finite() && cell_size > 0.0) {
                eprintln!("--cell-size must be a positive number.");
                process::exit(2);
            }
            let catalog = load_catalog(&catalog)?;
            let progress = ProgressFile::load(progress)?;
            let id = match puzzle {
                Some(id) => id,
                None => catalog.resume_id(&tier, &progress)?,
            };
            let mut session = Session::start(&catalog, progress, cell_size, id)?;
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Action::Validate { catalog: path } => {
            let catalog = load_catalog(&path)?;
            catalog.validate()?;
            for tier in catalog.tiers() {
                println!("{tier}: {} entries", catalog.tier_len(tier)?);
            }
            println!("{}: ok", path.display());
            Ok(())
        }
        Action::Show { catalog, id } => {
            let catalog = load_catalog(&catalog)?;
            let entry = catalog.entry(&id)?;
            if let Some(message) = entry.message() {
                println!("{message}");
            }
            let puzzle = entry
                .parse_puzzle()
                .map_err(|source| CatalogError::Malformed {
                    id: id.clone(),
                    source,
                })?;
            if let Some(puzzle) = puzzle {
                let board = Board::new(puzzle);
                print!("{}", BoardView::build(&board, None, None).render_text());
            }
            Ok(())
        }
    }
}

fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;
    log::debug!(
        "loaded {} tier(s) from {}",
        catalog.tiers().count(),
        path.display()
    );
    Ok(catalog)
}
