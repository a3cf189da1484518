//! Command-line interface, logging setup and the text report of the `solve` command.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::{
    file_loader,
    grid::{Coordinate, Maze},
    search::{self, SolveResult, Strategy},
};

/// Directory scanned for maze files when none is given.
pub const DEFAULT_MAPS_DIR: &str = "mazes";

/// Solve mazes with depth-first, breadth-first, greedy and A* search.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Action to run; the terminal front end when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Write log output to this file instead of standard error.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Actions offered on the command line.
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Browse the mazes and watch them being solved in the terminal.
    Play {
        /// Directory scanned for `.txt` maze files.
        #[arg(long, value_name = "DIR", default_value = DEFAULT_MAPS_DIR)]
        maps_dir: PathBuf,
    },
    /// Solve a maze file and print the result.
    Solve {
        /// Maze description file.
        file: PathBuf,
        /// Strategy to solve with; every strategy when omitted.
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
        /// Draw the maze with the path under each result.
        #[arg(long)]
        render: bool,
    },
}

impl Cli {
    /// Returns the requested command, falling back to the terminal front end.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Play {
            maps_dir: PathBuf::from(DEFAULT_MAPS_DIR),
        })
    }

    /// Maximum log level selected by the `-v` flags.
    pub const fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Installs the global logger.
    ///
    /// The level comes from the `-v` flags and can be overridden with `RUST_LOG`. Logs go to the
    /// `--log-file` when one is given, to standard error otherwise. An `interactive` run without a
    /// log file installs no logger at all, so that nothing is written over the terminal UI.
    ///
    /// # Errors
    ///
    /// This function may return errors if the log file cannot be created or a logger is already
    /// installed.
    pub fn init_logging(&self, interactive: bool) -> Result<()> {
        let mut builder = Builder::new();
        let _ = builder.filter_level(self.level_filter()).parse_default_env();

        if let Some(path) = &self.log_file {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            let _ = builder.target(Target::Pipe(Box::new(file)));
        } else if interactive {
            return Ok(());
        }

        builder.try_init()?;

        Ok(())
    }
}

/// Solves a maze file and returns the printable report.
///
/// # Errors
///
/// This function may return errors if the file cannot be read or is not a well-formed maze.
pub fn solve_file(path: &Path, strategy: Option<Strategy>, render: bool) -> Result<String> {
    let map = file_loader::load_file(path)?;

    let results = match strategy {
        Some(strategy) => vec![(strategy, search::solve(&map.maze, strategy))],
        None => search::solve_all(&map.maze),
    };

    Ok(report(&map.key, &map.maze, &results, render))
}

/// Formats a coordinate as `(row, col)`.
fn format_coord((row, col): Coordinate) -> String {
    format!("({row}, {col})")
}

/// Builds the text report of one or more solves of the same maze.
///
/// The report starts with a summary of the maze, followed by one block per strategy with the
/// number of expanded nodes and the path, and the rendered maze when `render` is set.
pub fn report(
    name: &str,
    maze: &Maze,
    results: &[(Strategy, SolveResult)],
    render: bool,
) -> String {
    let mut lines = vec![format!(
        "maze {name}: {} rows x {} columns, start {}, goal {}",
        maze.height(),
        maze.width(),
        format_coord(maze.start()),
        format_coord(maze.goal())
    )];

    for (strategy, result) in results {
        lines.push(String::new());
        lines.push(format!("[{strategy}] {}", strategy.label()));
        lines.push(format!("nodes expanded: {}", result.node_count));

        if result.is_solved() {
            lines.push(format!(
                "path: {} cells, {} steps",
                result.path.len(),
                result.steps()
            ));
            lines.push(
                result
                    .path
                    .iter()
                    .map(|&coord| format_coord(coord))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        } else {
            lines.push("path: no path found".to_owned());
        }

        if render {
            lines.push(maze.render(&result.path));
        }
    }

    lines.join("\n")
}
