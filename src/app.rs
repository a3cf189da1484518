//! Core application state and main loop of the terminal front end.

use std::path::Path;

use color_eyre::eyre::Result;
use log::warn;
use ratatui::DefaultTerminal;

use crate::{
    events, file_loader,
    map::Map,
    search::Strategy,
    session::Session,
    types::Screen,
    ui,
};

/// Application state container for the terminal front end.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui renders every frame and which key events update. The state of the maze being solved
/// lives in an explicit session that exists only while the in-game screen is shown.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is checked after every frame; once set, the main loop returns and the terminal
    /// is restored.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field decides both what gets drawn and how key events are interpreted.
    pub(crate) screen: Screen,
    /// Strategy picked in the strategy menu.
    ///
    /// This field is set when the user confirms a strategy and is used to solve the maze picked
    /// afterwards.
    pub(crate) strategy: Strategy,
    /// Collection of all available mazes.
    ///
    /// This field holds the built-in default maze followed by the mazes loaded from the maps
    /// directory, in file name order.
    pub(crate) maps: Vec<Map>,
    /// Maze being solved and walked, present only on the in-game screen.
    ///
    /// This field is filled when a maze is selected and cleared when the user returns to the
    /// menus, so every run starts from a fresh search.
    pub(crate) session: Option<Session>,
}

impl App {
    /// Creates the application with the mazes found in `maps_dir`.
    ///
    /// The built-in maze is always listed first. A missing maps directory is not an error: only the
    /// built-in maze is offered then.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maps directory exists but cannot be read.
    pub fn new(maps_dir: &Path) -> Result<Self> {
        let mut maps = vec![Map::default()];
        if maps_dir.is_dir() {
            file_loader::fetch_files(maps_dir, &mut maps)?;
        } else {
            warn!("maps directory {} not found", maps_dir.display());
        }

        Ok(Self::with_maps(maps))
    }

    /// Creates the application over an already loaded list of mazes.
    pub(crate) fn with_maps(maps: Vec<Map>) -> Self {
        Self {
            exit: false,
            screen: Screen::StrategyMenu(Strategy::default()),
            strategy: Strategy::default(),
            maps,
            session: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current screen, handles user input and advances the walker. The
    /// loop continues until the exit flag is set, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.draw(|frame| ui::draw(self, frame))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
