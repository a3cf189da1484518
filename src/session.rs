//! Solving session and walk-through animation state.
//!
//! This module contains the [`Session`] struct, which owns everything the in-game screen shows: the
//! maze being solved, the chosen strategy, the search result and the progress of the walker along
//! the solution path.

use std::time::{Duration, Instant};

use log::info;

use crate::{
    grid::{Coordinate, Maze},
    map::Map,
    search::{self, SolveResult, Strategy},
};

/// Delay between two walker moves in milliseconds.
///
/// This constant controls the pace at which the walker follows the solution path. A lower value
/// makes the walk faster, a higher one makes it easier to follow.
pub(crate) const STEP_DELAY_MS: u64 = 500;

/// State of one maze being solved and walked.
///
/// This structure is created when the user picks a maze and is dropped when they leave the
/// in-game screen, so no solving state survives between two runs.
#[derive(Debug)]
pub(crate) struct Session {
    /// Display name of the maze.
    pub(crate) map_key: String,
    /// Maze being solved.
    pub(crate) maze: Maze,
    /// Strategy the maze was solved with.
    pub(crate) strategy: Strategy,
    /// Result of the search.
    ///
    /// This field is computed once when the session is created. The walker follows its path and
    /// the in-game screen shows its node count, so the search never runs again while walking.
    pub(crate) result: SolveResult,
    /// Number of moves the walker has made so far.
    ///
    /// This field counts how many cells of the path have been entered, so it ranges from zero
    /// to the path length.
    pub(crate) move_count: usize,
    /// Timestamp of the last walker move.
    ///
    /// This field paces the walk: the walker only moves once [`STEP_DELAY_MS`] have elapsed since
    /// this instant.
    pub(crate) last_update_time: Instant,
}

impl Session {
    /// Solves the map's maze with the strategy and positions the walker on the start cell.
    pub(crate) fn new(map: &Map, strategy: Strategy) -> Self {
        let result = search::solve(&map.maze, strategy);
        info!(
            "session on {:?} with {strategy}: {} nodes expanded",
            map.key, result.node_count
        );

        Self {
            map_key: map.key.clone(),
            maze: map.maze.clone(),
            strategy,
            result,
            move_count: 0,
            last_update_time: Instant::now(),
        }
    }

    /// Cell the walker currently stands on.
    pub(crate) fn position(&self) -> Coordinate {
        self.move_count
            .checked_sub(1)
            .and_then(|index| self.result.path.get(index))
            .copied()
            .unwrap_or_else(|| self.maze.start())
    }

    /// Cells the walker has entered so far, in order.
    pub(crate) fn trail(&self) -> &[Coordinate] {
        self.result
            .path
            .get(..self.move_count)
            .unwrap_or(&self.result.path)
    }

    /// Returns whether the walker has nothing left to walk.
    pub(crate) fn is_finished(&self) -> bool {
        self.move_count >= self.result.path.len()
    }

    /// Moves the walker one cell forward, unless the path is already walked.
    pub(crate) fn advance(&mut self) {
        if !self.is_finished() {
            self.move_count += 1;
        }
    }

    /// Advances the walker when enough time has passed since its last move.
    pub(crate) fn update(&mut self) {
        if self.last_update_time.elapsed() >= Duration::from_millis(STEP_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }
}
