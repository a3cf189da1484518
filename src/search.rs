//! Strategy-agnostic frontier search over a [`Maze`].
//!
//! This module contains the search loop shared by every strategy, the [`Strategy`] selector that
//! picks the [`Frontier`] driving it, and the [`SolveResult`] handed back to callers.

use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use log::{debug, info};

use crate::{
    frontier::{ByCostPlusHeuristic, ByHeuristic, Frontier, Queue, Stack},
    grid::{Coordinate, Maze},
};

/// Exploration strategy used to solve a maze.
///
/// Each variant maps to one [`Frontier`] implementation. The command-line names are `stack`,
/// `queue`, `greedy` and `astar`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Depth-first search backed by a stack.
    #[default]
    Stack,
    /// Breadth-first search backed by a queue.
    Queue,
    /// Greedy best-first search ordered by distance to the goal.
    Greedy,
    /// A* search ordered by cost so far plus distance to the goal.
    #[value(name = "astar")]
    AStar,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Self; 4] = [Self::Stack, Self::Queue, Self::Greedy, Self::AStar];

    /// Short name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Human-readable label shown in menus and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stack => "Depth-first (stack)",
            Self::Queue => "Breadth-first (queue)",
            Self::Greedy => "Greedy best-first",
            Self::AStar => "A*",
        }
    }

    /// Strategy following this one in menu order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Stack => Self::Queue,
            Self::Queue => Self::Greedy,
            Self::Greedy => Self::AStar,
            Self::AStar => Self::Stack,
        }
    }

    /// Strategy preceding this one in menu order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Stack => Self::AStar,
            Self::Queue => Self::Stack,
            Self::Greedy => Self::Queue,
            Self::AStar => Self::Greedy,
        }
    }

    /// Creates an empty frontier with this strategy's removal discipline.
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::Stack => Box::new(Stack::default()),
            Self::Queue => Box::new(Queue::default()),
            Self::Greedy => Box::new(ByHeuristic::default()),
            Self::AStar => Box::new(ByCostPlusHeuristic::default()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveResult {
    /// Cells from start to goal inclusive, empty when the goal cannot be reached.
    pub path: Vec<Coordinate>,
    /// Number of nodes removed from the frontier, the goal included when it was found.
    pub node_count: usize,
}

impl SolveResult {
    /// Returns whether a path to the goal was found.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, zero when there is none.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Solves the maze with the given strategy.
pub fn solve(maze: &Maze, strategy: Strategy) -> SolveResult {
    debug!("solving {}x{} maze with {strategy}", maze.height(), maze.width());

    let result = solve_with(maze, strategy.frontier().as_mut());

    info!(
        "{strategy}: {} after expanding {} nodes",
        if result.is_solved() {
            format!("path of {} cells", result.path.len())
        } else {
            "no path".to_owned()
        },
        result.node_count
    );

    result
}

/// Solves the maze with every strategy, in [`Strategy::ALL`] order.
pub fn solve_all(maze: &Maze) -> Vec<(Strategy, SolveResult)> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, solve(maze, strategy)))
        .collect()
}

/// Runs the frontier search loop over an arbitrary frontier.
///
/// The frontier is seeded with the start cell. Each iteration removes one node and counts it; the
/// goal ends the search, any other cell is marked explored and its open neighbors are pushed
/// unless they were explored already or are waiting in the frontier. A waiting node is never
/// replaced, even when a cheaper path to its cell turns up later: the first path to reach a cell
/// is the one kept. An exhausted frontier yields an empty path.
///
/// The loop always terminates, since the explored set grows with every expansion and a cell is
/// never pushed twice.
pub fn solve_with(maze: &Maze, frontier: &mut dyn Frontier) -> SolveResult {
    let start = maze.start();
    let goal = maze.goal();

    let seed = frontier.node(maze, start, Vec::new());
    frontier.push(seed);

    let mut explored = HashSet::new();
    let mut node_count = 0;

    while let Some(node) = frontier.pop_next() {
        node_count += 1;

        if node.coord == goal {
            let mut path = node.path;
            path.push(node.coord);
            return SolveResult { path, node_count };
        }

        let _ = explored.insert(node.coord);

        for neighbor in maze.neighbors(node.coord) {
            if explored.contains(&neighbor) || frontier.contains(neighbor) {
                continue;
            }

            let mut path = node.path.clone();
            path.push(node.coord);
            let next = frontier.node(maze, neighbor, path);
            frontier.push(next);
        }
    }

    SolveResult {
        path: Vec::new(),
        node_count,
    }
}
