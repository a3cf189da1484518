//! User interface rendering functions for all application screens.

use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    search::Strategy,
    session::Session,
    types::{MenuType, Screen},
    App,
};

/// Width of the menu boxes in terminal cells.
const MENU_WIDTH: u16 = 48;

/// Rows taken by a menu box's borders.
const MENU_BORDER_ROWS: u16 = 2;

/// Symbol drawn on the walker's cell.
const WALKER_SYMBOL: &str = "@";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
pub(crate) fn draw(app: &App, frame: &mut Frame) {
    match app.screen {
        Screen::StrategyMenu(strategy) => strategy_menu(frame, strategy),
        Screen::MapMenu(index) => map_menu(app, frame, index),
        Screen::InGame => match &app.session {
            Some(session) => in_game(session, frame),
            None => clear(frame),
        },
    }
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Style of a menu entry that is not highlighted.
fn content_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style of the highlighted menu entry.
fn active_content_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Green)
}

/// Renders the generic layout structure shared by the menus.
///
/// This function draws a bordered box centered on the screen, tall enough for the menu's entries,
/// and returns one single-row area per entry. The entries themselves are rendered by the caller.
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let [space] = Layout::vertical([Constraint::Length(
        menu.value().saturating_add(MENU_BORDER_ROWS),
    )])
    .flex(Flex::Center)
    .areas(frame.area());
    let [layout] = Layout::horizontal([Constraint::Length(MENU_WIDTH)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hints())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders the strategy selection menu.
///
/// This function lists the four solving methods and highlights the one under the cursor.
pub(crate) fn strategy_menu(frame: &mut Frame, highlighted: Strategy) {
    clear(frame);

    let entries = u16::try_from(Strategy::ALL.len()).unwrap_or(u16::MAX);
    let inner_layout = init_menu(frame, MenuType::StrategyMenu(entries));

    for (strategy, area) in Strategy::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if strategy == highlighted {
            active_content_style()
        } else {
            content_style()
        };
        frame.render_widget(Line::raw(strategy.label()).centered().style(style), *area);
    }
}

/// Renders the maze selection menu.
///
/// This function lists the available mazes and highlights the one under the cursor. When the list
/// is taller than the screen, the visible window scrolls so that the cursor stays on screen.
pub(crate) fn map_menu(app: &App, frame: &mut Frame, index: usize) {
    clear(frame);

    let room = usize::from(
        frame
            .area()
            .height
            .saturating_sub(MENU_BORDER_ROWS.saturating_mul(2)),
    )
    .max(1);
    let visible = app.maps.len().min(room);
    let offset = index.saturating_sub(visible.saturating_sub(1));

    let entries = u16::try_from(visible).unwrap_or(u16::MAX);
    let inner_layout = init_menu(frame, MenuType::MapMenu(entries));

    for ((idx, map), area) in app
        .maps
        .iter()
        .enumerate()
        .skip(offset)
        .zip(inner_layout.iter())
    {
        let style = if idx == index {
            active_content_style()
        } else {
            content_style()
        };
        frame.render_widget(Line::raw(map.key.as_str()).centered().style(style), *area);
    }
}

/// Builds the styled rows of the maze with the walker and its trail drawn on it.
fn maze_lines(session: &Session) -> Vec<Line<'static>> {
    let maze = &session.maze;
    let trail = session.trail();
    let position = session.position();

    (0..maze.height())
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..maze.width())
                .map(|col| {
                    let coord = (row, col);
                    if coord == position {
                        Span::styled(
                            WALKER_SYMBOL,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if coord == maze.start() {
                        Span::styled("A", Style::default().fg(Color::LightGreen))
                    } else if coord == maze.goal() {
                        Span::styled("B", Style::default().fg(Color::LightRed))
                    } else if maze.is_wall(coord) {
                        Span::styled("#", Style::default().fg(Color::Green))
                    } else if trail.contains(&coord) {
                        Span::styled("*", Style::default().fg(Color::Red))
                    } else {
                        Span::raw(" ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Text shown under the counters, depending on the walk's progress.
fn status_message(session: &Session) -> &'static str {
    if !session.result.is_solved() {
        "No path found. (h) return to menu / (q) quit"
    } else if session.is_finished() {
        "Goal reached! Continue? (l) yes / (q) quit"
    } else {
        "(h) return to menu"
    }
}

/// Renders the in-game screen with the maze and the walker following the solution.
///
/// This function draws the maze centered in a bordered frame titled with the maze name and the
/// strategy, followed by the step and node counters and a line telling the user what to do next.
pub(crate) fn in_game(session: &Session, frame: &mut Frame) {
    clear(frame);

    let outer = Block::bordered()
        .title(format!(
            "{} - {}",
            session.map_key,
            session.strategy.label()
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Rounded);
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [maze_area, counters_area, tooltip_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    let maze_height = u16::try_from(session.maze.height()).unwrap_or(u16::MAX);
    let maze_width = u16::try_from(session.maze.width()).unwrap_or(u16::MAX);
    let [maze_rows] = Layout::vertical([Constraint::Length(maze_height)])
        .flex(Flex::Center)
        .areas(maze_area);
    let [maze_space] = Layout::horizontal([Constraint::Length(maze_width)])
        .flex(Flex::Center)
        .areas(maze_rows);

    frame.render_widget(Paragraph::new(maze_lines(session)), maze_space);

    let counters = Line::raw(format!(
        "Steps: {}   Nodes expanded: {}",
        session.move_count, session.result.node_count
    ))
    .centered()
    .style(Style::default().fg(Color::White));
    frame.render_widget(counters, counters_area);

    let tooltip = Paragraph::new(Line::raw(status_message(session)).centered()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Plain)
            .style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(tooltip, tooltip_area);
}
