//! Named maze data and the built-in default maze.
//!
//! This module contains the `Map` struct, which pairs a parsed [`Maze`] with the display name it
//! is listed under in the maze menu and in reports.

use std::ffi::OsStr;

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};

use crate::grid::Maze;

/// File extension of maze description files.
pub(crate) const MAP_EXTENSION: &str = "txt";

/// Display name of the built-in maze.
const DEFAULT_MAP_KEY: &str = "Default";

/// Named maze.
///
/// This structure represents one entry of the maze catalog: a key taken from the file name
/// without its extension, and the maze parsed from the file's contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Map {
    /// Display name of the map.
    pub(crate) key: String,
    /// Parsed maze.
    pub(crate) maze: Maze,
}

impl Default for Map {
    fn default() -> Self {
        Self {
            key: DEFAULT_MAP_KEY.to_owned(),
            maze: Maze::parse(DEFAULT_MAZE).expect("built-in maze should be well-formed"),
        }
    }
}

impl Map {
    /// Builds a map from a file name and the maze description it contains.
    ///
    /// The key is the file name with the `.txt` extension removed.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The file name is not valid UTF-8
    /// - The file name doesn't end with the ".txt" extension
    /// - The contents are not a well-formed maze
    pub(crate) fn new(file_name: &OsStr, data: &str) -> Result<Self> {
        let mut key = file_name
            .to_str()
            .ok_or_eyre("failed to convert file name to string slice")?
            .to_owned();
        key.truncate(
            key.rfind(&format!(".{MAP_EXTENSION}"))
                .ok_or_eyre("failed to find extension in file name")?,
        );

        let maze = Maze::parse(data).wrap_err_with(|| format!("failed to parse maze {key:?}"))?;

        Ok(Self { key, maze })
    }
}

/// Built-in maze, available even when no maze files are found.
static DEFAULT_MAZE: &str = "\
#####################
#A    #       #     #
# ### # ##### # ### #
#   #   #   #   #   #
### ##### # ##### ###
#   #     #     #   #
# ### ######### ### #
#     #       #     #
# ##### ##### ##### #
#       #          B#
#####################";
