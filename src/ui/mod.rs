pub mod details;
pub mod wheel;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::wheel::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Winner / prompt
            Constraint::Min(0),    // Wheel
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_status(frame, app, chunks[0]);
    wheel::render_wheel(frame, chunks[1], &app.session, app.label_lines, app.anchor_fraction);
    render_help(frame, app, chunks[2]);

    if app.session.details_visible() {
        if let Some(project) = app.selected() {
            details::render_details(frame, chunks[1], project);
        }
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let line = match session.phase() {
        Phase::Stopped { .. } => {
            let label = session.winner().map(|slot| slot.label.as_str()).unwrap_or("");
            Line::from(vec![
                Span::styled(" 🎉 SELECTED: ", Style::default().fg(Color::Rgb(255, 255, 0)).add_modifier(Modifier::BOLD)),
                Span::styled(label.to_string(), Style::default().fg(Color::Rgb(255, 255, 0)).add_modifier(Modifier::BOLD)),
                Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("Spins: {}", session.spins_completed()), Style::default().fg(Color::Cyan)),
            ])
        }
        Phase::Spinning => Line::from(vec![
            Span::styled(" 🎡 Spinning... ", Style::default().fg(Color::Rgb(241, 196, 15)).add_modifier(Modifier::BOLD)),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("Speed: {:.1}°/tick", session.wheel().angular_velocity),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Phase::Idle => Line::from(vec![Span::styled(
            " Press SPACE to spin the wheel | ESC to exit",
            Style::default().fg(Color::Rgb(200, 200, 200)).add_modifier(Modifier::BOLD),
        )]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));

    let spans = match app.session.phase() {
        Phase::Stopped { details_visible, .. } => vec![
            Span::styled(" SPACE ", key),
            Span::styled("Spin again ", dim),
            Span::styled("│ ", sep),
            Span::styled("D ", key),
            Span::styled(if details_visible { "Hide details " } else { "Details " }, dim),
            Span::styled("│ ", sep),
            Span::styled("ESC ", key),
            Span::styled("Exit", dim),
        ],
        Phase::Spinning => vec![
            Span::styled(" ESC ", key),
            Span::styled("Exit", dim),
        ],
        Phase::Idle => vec![
            Span::styled(" SPACE ", key),
            Span::styled("Spin ", dim),
            Span::styled("│ ", sep),
            Span::styled("ESC ", key),
            Span::styled("Exit", dim),
        ],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
