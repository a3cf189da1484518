//! Maze solving with interchangeable frontier search strategies.
//!
//! The library parses textual mazes into a [`grid::Maze`] and solves them with one generic search
//! loop ([`search::solve`]) whose behavior is set by the [`frontier::Frontier`] it runs on:
//! depth-first, breadth-first, greedy best-first or A*. On top of that core sit a terminal front
//! end ([`App`]) that walks the solution path on screen and a command-line interface ([`cli`]).

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has no public repository yet."
)]

pub mod cli;
pub mod frontier;
pub mod grid;
pub mod search;

mod app;
mod events;
mod file_loader;
mod map;
mod session;
mod types;
mod ui;

pub use app::App;
