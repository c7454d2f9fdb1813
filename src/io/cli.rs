//! Command-line interface for generating and inspecting maze grids

use crate::algorithm::inspect::inspect;
use crate::io::configuration::{DEFAULT_BOT_COUNT, DEFAULT_DIMENSION, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::matrix_text::{format_matrix, read_matrix};
use crate::maze::Maze;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mazegrid")]
#[command(
    author,
    version,
    about = "Generate perfect-maze grids for multi-agent exploration"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug log output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Carve a new maze and print it as matrix text
    Generate {
        /// Requested number of rows (normalized to an odd value of at least 3)
        #[arg(short = 'H', long, default_value_t = DEFAULT_DIMENSION as i64, allow_negative_numbers = true)]
        height: i64,

        /// Requested number of columns (normalized to an odd value of at least 3)
        #[arg(short, long, default_value_t = DEFAULT_DIMENSION as i64, allow_negative_numbers = true)]
        width: i64,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Number of bots forwarded to the exploration engine
        #[arg(short, long, default_value_t = DEFAULT_BOT_COUNT)]
        bots: usize,
    },

    /// Load a matrix text file and report its structure
    Inspect {
        /// Matrix text file to load
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Number of bots forwarded to the exploration engine
        #[arg(short, long, default_value_t = DEFAULT_BOT_COUNT)]
        bots: usize,
    },
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Runs the selected command against a maze holder
pub struct CommandRunner {
    cli: Cli,
    maze: Maze,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            maze: Maze::new(),
        }
    }

    /// Maze holder after the last run
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Execute the command, writing its output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read or parsed, or if
    /// writing the output fails
    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Command::Generate {
                height,
                width,
                seed,
                bots,
            } => {
                let advisories = self.maze.generate_seeded(*bots, *height, *width, *seed);
                for advisory in &advisories {
                    warn!("{advisory}");
                }
                out.write_all(format_matrix(self.maze.matrix()?).as_bytes())?;
            }
            Command::Inspect { path, bots } => {
                let matrix = read_matrix(path)?;
                self.maze.load(*bots, matrix);
                info!("Loaded maze from {}", path.display());

                let report = inspect(self.maze.matrix()?);
                writeln!(
                    out,
                    "size: {}x{}",
                    self.maze.height()?,
                    self.maze.width()?
                )?;
                writeln!(out, "nodes: {}", report.node_count)?;
                writeln!(out, "reachable nodes: {}", report.reachable_nodes)?;
                writeln!(out, "passages: {}", report.passage_count)?;
                writeln!(out, "stray open cells: {}", report.stray_open_cells)?;
                writeln!(out, "perfect: {}", report.is_perfect())?;
            }
        }
        Ok(())
    }
}
