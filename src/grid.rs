//! Maze grid parsing and spatial queries.
//!
//! This module contains the [`Maze`] type, which turns a textual maze description into a boolean
//! wall grid with a start and a goal cell, and answers the neighbor and heuristic queries the
//! search engine relies on.

use log::warn;
use thiserror::Error;

/// Grid position as a `(row, column)` pair.
pub type Coordinate = (usize, usize);

/// Character marking the start cell in a maze description.
const START_MARKER: char = 'A';

/// Character marking the goal cell in a maze description.
const GOAL_MARKER: char = 'B';

/// Character marking an impassable cell in a maze description.
const WALL_MARKER: char = '#';

/// Error raised when a maze description cannot be turned into a [`Maze`].
///
/// Both markers are mandatory. Reachability is not checked here: a goal that cannot be reached is
/// a valid maze, and the search engine reports it as an empty path.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MalformedMazeError {
    /// The description has no start marker.
    #[error("the maze must contain a start point ('A')")]
    MissingStart,
    /// The description has no goal marker.
    #[error("the maze must contain a goal point ('B')")]
    MissingGoal,
}

/// Immutable maze grid.
///
/// This structure holds the wall matrix of a parsed maze together with its start and goal cells.
/// Rows shorter than the longest one are padded with open floor, so the matrix is always
/// `height` rows of `width` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns, the length of the longest line.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major wall matrix; `true` marks an impassable cell.
    walls: Vec<Vec<bool>>,
    /// Start cell.
    start: Coordinate,
    /// Goal cell.
    goal: Coordinate,
}

impl Maze {
    /// Parses a textual maze description.
    ///
    /// Each line is a row. `#` is a wall, `A` the start, `B` the goal and every other character is
    /// open floor. Trailing lines that are empty or hold only whitespace are ignored. Should a
    /// marker appear more than once, the last occurrence in reading order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMazeError::MissingStart`] or [`MalformedMazeError::MissingGoal`] when the
    /// corresponding marker is absent. A missing start is reported first.
    pub fn parse(text: &str) -> Result<Self, MalformedMazeError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            let _ = lines.pop();
        }

        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut walls = Vec::with_capacity(height);
        let mut start = None;
        let mut goal = None;

        for (row_idx, line) in lines.iter().enumerate() {
            let mut row = vec![false; width];
            for (cell, (col_idx, char)) in row.iter_mut().zip(line.chars().enumerate()) {
                let coord = (row_idx, col_idx);
                match char {
                    START_MARKER => {
                        if let Some(previous) = start.replace(coord) {
                            warn!("duplicate start marker, {previous:?} replaced by {coord:?}");
                        }
                    }
                    GOAL_MARKER => {
                        if let Some(previous) = goal.replace(coord) {
                            warn!("duplicate goal marker, {previous:?} replaced by {coord:?}");
                        }
                    }
                    WALL_MARKER => *cell = true,
                    _ => {}
                }
            }
            walls.push(row);
        }

        let start = start.ok_or(MalformedMazeError::MissingStart)?;
        let goal = goal.ok_or(MalformedMazeError::MissingGoal)?;

        Ok(Self {
            width,
            height,
            walls,
            start,
            goal,
        })
    }

    /// Number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Start cell of the maze.
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Goal cell of the maze.
    pub const fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Returns whether the coordinate lies inside the grid.
    pub const fn is_in_bounds(&self, (row, col): Coordinate) -> bool {
        row < self.height && col < self.width
    }

    /// Returns whether the cell at the coordinate is a wall.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid. Callers obtain valid coordinates from
    /// [`Maze::neighbors`] or check them with [`Maze::is_in_bounds`] first.
    pub fn is_wall(&self, coord: Coordinate) -> bool {
        assert!(
            self.is_in_bounds(coord),
            "coordinate {coord:?} is outside a {}x{} maze",
            self.height,
            self.width
        );

        let (row, col) = coord;
        self.walls
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the open cells adjacent to the coordinate.
    ///
    /// Candidates are visited in the fixed order up, down, left, right and filtered to those that
    /// lie inside the grid and are not walls. The order is what makes depth-first and
    /// breadth-first tie-breaking reproducible.
    pub fn neighbors(&self, (row, col): Coordinate) -> Vec<Coordinate> {
        [
            row.checked_sub(1).map(|up| (up, col)),
            row.checked_add(1).map(|down| (down, col)),
            col.checked_sub(1).map(|left| (row, left)),
            col.checked_add(1).map(|right| (row, right)),
        ]
        .into_iter()
        .flatten()
        .filter(|&candidate| self.is_in_bounds(candidate) && !self.is_wall(candidate))
        .collect()
    }

    /// Manhattan distance from the coordinate to the goal.
    pub const fn heuristic(&self, (row, col): Coordinate) -> usize {
        row.abs_diff(self.goal.0) + col.abs_diff(self.goal.1)
    }

    /// Renders the grid as text with the given path drawn on it.
    ///
    /// Walls are `#`, the start `A`, the goal `B`, path cells `*` and open floor a space. Rows are
    /// separated by newlines, without a trailing one.
    pub fn render(&self, path: &[Coordinate]) -> String {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        let coord = (row, col);
                        if coord == self.start {
                            START_MARKER
                        } else if coord == self.goal {
                            GOAL_MARKER
                        } else if self.is_wall(coord) {
                            WALL_MARKER
                        } else if path.contains(&coord) {
                            '*'
                        } else {
                            ' '
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions_and_markers() {
        let maze = Maze::parse("A.#\n..#\n#.B").expect("maze should parse");

        assert_eq!(maze.height(), 3, "height should match the line count");
        assert_eq!(maze.width(), 3, "width should match the longest line");
        assert_eq!(maze.start(), (0, 0), "start should match the 'A' position");
        assert_eq!(maze.goal(), (2, 2), "goal should match the 'B' position");
    }

    #[test]
    fn test_parse_walls() {
        let maze = Maze::parse("A.#\n..#\n#.B").expect("maze should parse");

        assert!(maze.is_wall((0, 2)), "'#' should be a wall");
        assert!(maze.is_wall((2, 0)), "'#' should be a wall");
        assert!(!maze.is_wall((0, 1)), "'.' should be floor");
        assert!(!maze.is_wall((0, 0)), "start should not be a wall");
        assert!(!maze.is_wall((2, 2)), "goal should not be a wall");
    }

    #[test]
    fn test_parse_ragged_lines_are_padded_with_floor() {
        let maze = Maze::parse("####\nA\n#  B").expect("maze should parse");

        assert_eq!(maze.width(), 4, "width should be the longest line");
        assert_eq!(maze.height(), 3, "height should be the line count");
        assert!(!maze.is_wall((1, 3)), "missing cells should be open floor");
        assert!(!maze.is_wall((1, 1)), "missing cells should be open floor");
        assert_eq!(
            maze.neighbors((1, 0)),
            vec![(1, 1)],
            "padding should be walkable"
        );
    }

    #[test]
    fn test_parse_ignores_trailing_blank_lines() {
        let maze = Maze::parse("AB\n\n\n").expect("maze should parse");

        assert_eq!(maze.height(), 1, "trailing blank lines should be dropped");
        assert_eq!(maze.width(), 2, "width should come from the only row");
    }

    #[test]
    fn test_parse_ignores_trailing_whitespace_only_lines() {
        let maze = Maze::parse("A.\n.B\n   \n\t\n").expect("maze should parse");

        assert_eq!(maze.height(), 2, "whitespace-only trailing lines should be dropped");
        assert_eq!(maze.width(), 2, "dropped lines should not widen the maze");
        assert_eq!(maze.goal(), (1, 1), "markers should be unaffected");
    }

    #[test]
    fn test_parse_keeps_inner_whitespace_only_lines() {
        let maze = Maze::parse("A\n   \nB").expect("maze should parse");

        assert_eq!(maze.height(), 3, "a blank row between markers is open floor");
        assert!(!maze.is_wall((1, 2)), "blank row cells should be floor");
    }

    #[test]
    fn test_parse_accepts_crlf_line_endings() {
        let maze = Maze::parse("A #\r\n  B\r\n").expect("maze should parse");

        assert_eq!(maze.width(), 3, "carriage returns should not count as cells");
        assert_eq!(maze.goal(), (1, 2), "goal should be found on the second row");
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        let maze = Maze::parse("A\u{e9}\u{e9}B").expect("maze should parse");

        assert_eq!(maze.width(), 4, "width should be counted in characters");
        assert_eq!(maze.goal(), (0, 3), "goal column should be a character index");
    }

    #[test]
    fn test_parse_missing_start() {
        let result = Maze::parse("...\n..B");

        assert_eq!(
            result,
            Err(MalformedMazeError::MissingStart),
            "a maze without 'A' should be rejected"
        );
    }

    #[test]
    fn test_parse_missing_goal() {
        let result = Maze::parse("A..\n...");

        assert_eq!(
            result,
            Err(MalformedMazeError::MissingGoal),
            "a maze without 'B' should be rejected"
        );
    }

    #[test]
    fn test_parse_missing_both_reports_start() {
        assert_eq!(
            Maze::parse("###"),
            Err(MalformedMazeError::MissingStart),
            "missing start should be reported first"
        );
        assert_eq!(
            Maze::parse(""),
            Err(MalformedMazeError::MissingStart),
            "empty input has no start"
        );
    }

    #[test]
    fn test_parse_duplicate_marker_keeps_last() {
        let maze = Maze::parse("A.A\n..B").expect("maze should parse");

        assert_eq!(maze.start(), (0, 2), "the last start marker should win");
        assert!(!maze.is_wall((0, 0)), "the replaced marker cell stays floor");
    }

    #[test]
    fn test_parse_unreachable_goal_is_not_an_error() {
        let result = Maze::parse("A#B");

        assert!(result.is_ok(), "reachability is not a parse concern");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MalformedMazeError::MissingStart.to_string(),
            "the maze must contain a start point ('A')"
        );
        assert_eq!(
            MalformedMazeError::MissingGoal.to_string(),
            "the maze must contain a goal point ('B')"
        );
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 maze")]
    fn test_is_wall_out_of_bounds_panics() {
        let maze = Maze::parse("A.#\n..#\n#.B").expect("maze should parse");

        let _ = maze.is_wall((3, 0));
    }

    #[test]
    fn test_is_in_bounds() {
        let maze = Maze::parse("A..\n..B").expect("maze should parse");

        assert!(maze.is_in_bounds((1, 2)), "last cell should be in bounds");
        assert!(!maze.is_in_bounds((2, 0)), "row past the end is out of bounds");
        assert!(!maze.is_in_bounds((0, 3)), "column past the end is out of bounds");
    }

    #[test]
    fn test_neighbors_order_is_up_down_left_right() {
        let maze = Maze::parse("...\n.A.\n..B").expect("maze should parse");

        assert_eq!(
            maze.neighbors((1, 1)),
            vec![(0, 1), (2, 1), (1, 0), (1, 2)],
            "neighbors should come in up, down, left, right order"
        );
    }

    #[test]
    fn test_neighbors_filter_walls_and_bounds() {
        let maze = Maze::parse("A.#\n..#\n#.B").expect("maze should parse");

        assert_eq!(
            maze.neighbors((0, 0)),
            vec![(1, 0), (0, 1)],
            "corner should only yield in-bounds cells"
        );
        assert_eq!(
            maze.neighbors((1, 1)),
            vec![(0, 1), (2, 1), (1, 0)],
            "walls should be filtered out"
        );
        assert_eq!(
            maze.neighbors((2, 2)),
            vec![(2, 1)],
            "goal should only reach open floor"
        );
    }

    #[test]
    fn test_neighbors_are_always_open_and_in_bounds() {
        let maze = Maze::parse("#A##\n.  #\n# #B\n").expect("maze should parse");

        for row in 0..maze.height() {
            for col in 0..maze.width() {
                let found = maze.neighbors((row, col));
                assert!(found.len() <= 4, "a cell has at most four neighbors");
                for neighbor in found {
                    assert!(
                        maze.is_in_bounds(neighbor),
                        "neighbor {neighbor:?} should be in bounds"
                    );
                    assert!(
                        !maze.is_wall(neighbor),
                        "neighbor {neighbor:?} should not be a wall"
                    );
                    assert_eq!(
                        row.abs_diff(neighbor.0) + col.abs_diff(neighbor.1),
                        1,
                        "neighbor should be axis-adjacent"
                    );
                }
            }
        }
    }

    #[test]
    fn test_heuristic_is_manhattan_distance() {
        let maze = Maze::parse("A....\n.....\n...B.").expect("maze should parse");

        assert_eq!(maze.heuristic((0, 0)), 5, "distance from start");
        assert_eq!(maze.heuristic((2, 3)), 0, "distance from the goal itself");
        assert_eq!(maze.heuristic((0, 4)), 3, "distance from the far column");
    }

    #[test]
    fn test_render_marks_path() {
        let maze = Maze::parse("A.#\n..#\n#.B").expect("maze should parse");
        let path = [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)];

        assert_eq!(
            maze.render(&path),
            "A #\n**#\n#*B",
            "path cells should be starred without hiding the markers"
        );
        assert_eq!(maze.render(&[]), "A #\n  #\n# B", "empty path leaves the floor blank");
    }
}
