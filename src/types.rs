//! Type definitions and enums for the application screens and menus.

use crate::search::Strategy;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. It determines
/// which screen to render and what each key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Strategy selection screen, with the highlighted strategy.
    ///
    /// This variant is the first screen shown. Moving up and down cycles through the strategies,
    /// wrapping around at both ends.
    StrategyMenu(Strategy),
    /// Maze selection screen, with the index of the highlighted maze.
    ///
    /// This variant holds an index into the application's maze list. Unlike the strategy menu it
    /// does not wrap, and the list scrolls when it does not fit the menu box.
    MapMenu(usize),
    /// Maze walk-through screen.
    ///
    /// This variant carries no data of its own; what it shows lives in the application's session.
    InGame,
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics of each list-like menu: its title and the number of
/// entries it lists, which the layout needs to size the menu box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuType {
    /// Strategy menu with its number of entries.
    StrategyMenu(u16),
    /// Maze menu with its number of entries.
    MapMenu(u16),
}

impl MenuType {
    /// Returns the title of the menu.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::StrategyMenu(_) => "Solving Method",
            Self::MapMenu(_) => "Maze",
        }
    }

    /// Returns the number of entries in the menu.
    pub(crate) const fn value(self) -> u16 {
        match self {
            Self::StrategyMenu(value) | Self::MapMenu(value) => value,
        }
    }

    /// Returns the key hints shown at the bottom of the menu.
    pub(crate) const fn hints(&self) -> &str {
        match self {
            Self::StrategyMenu(_) => "(j) down / (k) up / (l) select / (q) quit",
            Self::MapMenu(_) => "(j) down / (k) up / (l) select / (h) return",
        }
    }
}
