use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game_state::GameState;
use crate::location::LocationId;

/// Draws the current location: description, action buttons, fight
/// extras, and the message line.
pub fn draw_location(frame: &mut Frame, area: Rect, game_state: &GameState, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Description
            Constraint::Length(6), // Action buttons
            Constraint::Length(2), // Weapon selector (fight only)
            Constraint::Length(3), // Message line
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let description = Paragraph::new(game_state.location.description())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(game_state.location.name()),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(description, chunks[0]);

    draw_actions(frame, chunks[1], game_state);

    if game_state.location == LocationId::Fight {
        draw_weapon_selector(frame, chunks[2], game_state);
    }

    if let Some(message) = message {
        let message_widget = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(message_widget, chunks[3]);
    }

    let controls = Paragraph::new("1-4: actions | w: switch weapon | Esc: quit")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[5]);
}

/// Populated slots render as numbered buttons; empty slots stay hidden.
fn draw_actions(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let mut lines = Vec::new();
    for (slot, action) in game_state.location.actions().into_iter().enumerate() {
        if let Some(action) = action {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}) ", slot + 1),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(action.label()),
            ]));
        }
    }

    let actions = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, area);
}

fn draw_weapon_selector(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let owned = game_state.inventory.owned_weapons();
    let line = if owned.is_empty() {
        Line::from(Span::styled(
            "No weapons owned. Buy one at the store.",
            Style::default().fg(Color::Red),
        ))
    } else {
        let spans: Vec<Span> = owned
            .iter()
            .map(|w| {
                let style = if game_state.selected_weapon == Some(*w) {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!("[{}] ", w.label()), style)
            })
            .collect();
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
