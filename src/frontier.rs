//! Frontier collections that define the exploration order of a search.
//!
//! The search loop in [`crate::search`] is the same for every strategy; what changes is which
//! discovered node gets expanded next. Each type in this module implements [`Frontier`] with one
//! removal discipline:
//!
//! - [`Stack`]: most recently added first (depth-first search).
//! - [`Queue`]: least recently added first (breadth-first search).
//! - [`ByHeuristic`]: lowest Manhattan distance to the goal first (greedy best-first search).
//! - [`ByCostPlusHeuristic`]: lowest path cost plus distance first (A* search).
//!
//! The two prioritized frontiers break ties by insertion order, so every strategy produces the
//! same result on every run.

use std::collections::VecDeque;

use crate::grid::{Coordinate, Maze};

/// Discovered cell waiting to be expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Cell this node stands for.
    pub coord: Coordinate,
    /// Cells walked from the start up to, but not including, [`coord`](SearchNode::coord).
    pub path: Vec<Coordinate>,
    /// Ordering score, `None` for frontiers that do not prioritize.
    pub priority: Option<usize>,
}

/// Collection of discovered but not yet expanded nodes.
///
/// Implementors decide both the order in which nodes leave the collection and the priority a new
/// node is given, so the search loop itself never has to know which strategy it runs.
pub trait Frontier {
    /// Computes the priority of a node for `coord` reached through `path`.
    ///
    /// `path` holds the cells walked before `coord`, so its length is the cost of reaching it.
    fn priority(&self, maze: &Maze, coord: Coordinate, path: &[Coordinate]) -> Option<usize>;

    /// Adds a node to the frontier.
    fn push(&mut self, node: SearchNode);

    /// Removes and returns the next node to expand, or `None` when the frontier is empty.
    fn pop_next(&mut self) -> Option<SearchNode>;

    /// Returns whether a node for `coord` is waiting in the frontier, whatever its path.
    fn contains(&self, coord: Coordinate) -> bool;

    /// Returns whether the frontier holds no nodes.
    fn is_empty(&self) -> bool;

    /// Builds a node for `coord` with the priority this frontier assigns to it.
    fn node(&self, maze: &Maze, coord: Coordinate, path: Vec<Coordinate>) -> SearchNode {
        let priority = self.priority(maze, coord, &path);
        SearchNode {
            coord,
            path,
            priority,
        }
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Default)]
pub struct Stack {
    /// Waiting nodes, newest last.
    nodes: Vec<SearchNode>,
}

impl Frontier for Stack {
    fn priority(&self, _maze: &Maze, _coord: Coordinate, _path: &[Coordinate]) -> Option<usize> {
        None
    }

    fn push(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn pop_next(&mut self) -> Option<SearchNode> {
        self.nodes.pop()
    }

    fn contains(&self, coord: Coordinate) -> bool {
        self.nodes.iter().any(|node| node.coord == coord)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct Queue {
    /// Waiting nodes, oldest first.
    nodes: VecDeque<SearchNode>,
}

impl Frontier for Queue {
    fn priority(&self, _maze: &Maze, _coord: Coordinate, _path: &[Coordinate]) -> Option<usize> {
        None
    }

    fn push(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    fn pop_next(&mut self) -> Option<SearchNode> {
        self.nodes.pop_front()
    }

    fn contains(&self, coord: Coordinate) -> bool {
        self.nodes.iter().any(|node| node.coord == coord)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Nodes kept in insertion order and removed lowest priority first.
///
/// The whole collection is stably sorted before each removal, so nodes of equal priority leave in
/// the order they arrived.
#[derive(Debug, Default)]
struct SortedNodes {
    /// Waiting nodes.
    nodes: Vec<SearchNode>,
}

impl SortedNodes {
    /// Adds a node at the back.
    fn push(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    /// Sorts by priority and removes the first node.
    fn pop_minimum(&mut self) -> Option<SearchNode> {
        if self.nodes.is_empty() {
            return None;
        }

        self.nodes.sort_by_key(|node| node.priority);
        Some(self.nodes.remove(0))
    }

    /// Returns whether a node for `coord` is waiting.
    fn contains(&self, coord: Coordinate) -> bool {
        self.nodes.iter().any(|node| node.coord == coord)
    }

    /// Returns whether no node is waiting.
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Frontier ordered by distance to the goal alone.
#[derive(Debug, Default)]
pub struct ByHeuristic {
    /// Waiting nodes.
    inner: SortedNodes,
}

impl Frontier for ByHeuristic {
    fn priority(&self, maze: &Maze, coord: Coordinate, _path: &[Coordinate]) -> Option<usize> {
        Some(maze.heuristic(coord))
    }

    fn push(&mut self, node: SearchNode) {
        self.inner.push(node);
    }

    fn pop_next(&mut self) -> Option<SearchNode> {
        self.inner.pop_minimum()
    }

    fn contains(&self, coord: Coordinate) -> bool {
        self.inner.contains(coord)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Frontier ordered by cost so far plus distance to the goal.
#[derive(Debug, Default)]
pub struct ByCostPlusHeuristic {
    /// Waiting nodes.
    inner: SortedNodes,
}

impl Frontier for ByCostPlusHeuristic {
    fn priority(&self, maze: &Maze, coord: Coordinate, path: &[Coordinate]) -> Option<usize> {
        Some(path.len() + maze.heuristic(coord))
    }

    fn push(&mut self, node: SearchNode) {
        self.inner.push(node);
    }

    fn pop_next(&mut self) -> Option<SearchNode> {
        self.inner.pop_minimum()
    }

    fn contains(&self, coord: Coordinate) -> bool {
        self.inner.contains(coord)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
