use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::MONSTER_MAX_HEALTH;
use crate::game_state::GameState;
use crate::location::LocationId;

/// Draws the stats panel: health, gold, xp, and the fight readouts.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with player name
            Constraint::Length(5), // Core stats
            Constraint::Length(4), // Fight readouts
            Constraint::Min(0),    // Filler
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        game_state.player_name.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).title("Player"));
    frame.render_widget(header, chunks[0]);

    let stats = vec![
        Line::from(vec![
            Span::raw("Health: "),
            Span::styled(
                game_state.health.to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Gold: "),
            Span::styled(
                game_state.gold.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("XP: "),
            Span::styled(
                game_state.xp.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];
    let stats_widget =
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats_widget, chunks[1]);

    // Monster health and equipped weapon only matter in the fight
    if game_state.location == LocationId::Fight {
        let weapon_label = game_state
            .selected_weapon
            .map(|w| w.label())
            .unwrap_or("None");
        let fight = vec![
            Line::from(format!(
                "Monster Health: {} / {}",
                game_state.monster_health, MONSTER_MAX_HEALTH
            )),
            Line::from(format!("Weapon: {}", weapon_label)),
        ];
        let fight_widget =
            Paragraph::new(fight).block(Block::default().borders(Borders::ALL).title("Fight"));
        frame.render_widget(fight_widget, chunks[2]);
    }
}
