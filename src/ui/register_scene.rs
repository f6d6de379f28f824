use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::input::{RegisterField, RegisterForm};

/// Draws the registration form: name, age, and the rules checkbox.
pub fn draw_register(frame: &mut Frame, form: &RegisterForm) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Name field
            Constraint::Length(3), // Age field
            Constraint::Length(2), // Consent checkbox
            Constraint::Length(2), // Validation
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Arena")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_field(
        frame,
        chunks[1],
        "Name",
        &form.name,
        form.focus == RegisterField::Name,
    );
    draw_field(
        frame,
        chunks[2],
        "Age",
        &form.age,
        form.focus == RegisterField::Age,
    );

    let checkbox = if form.consent { "[x]" } else { "[ ]" };
    let consent_style = if form.focus == RegisterField::Consent {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let consent = Paragraph::new(format!("{} I agree to the rules", checkbox))
        .style(consent_style);
    frame.render_widget(consent, chunks[3]);

    if let Some(error) = &form.error {
        let validation = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(validation, chunks[4]);
    }

    // Starting is gated on the checkbox, mirror that in the hint
    let start_style = if form.consent {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let controls = Line::from(vec![
        Span::raw("Tab: next field | Space: toggle rules | "),
        Span::styled("Enter: start", start_style),
        Span::raw(" | Esc: quit"),
    ]);
    let footer = Paragraph::new(controls)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[6]);
}

fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let field = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(label))
        .style(style);
    frame.render_widget(field, area);
}
