pub mod adventure_scene;
pub mod register_scene;
mod stats_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::game_state::GameState;

/// Draws the adventure screen: the location on the left, player stats
/// on the right.
pub fn draw_adventure(frame: &mut Frame, game_state: &GameState, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Location and actions
            Constraint::Percentage(40), // Stats panel
        ])
        .split(frame.size());

    adventure_scene::draw_location(frame, chunks[0], game_state, message);
    stats_panel::draw_stats_panel(frame, chunks[1], game_state);
}
