use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthStr;

use crate::projects::Project;
use crate::wheel::layout;

const DESCRIPTION_WIDTH: usize = 60;
const PANEL_BG: Color = Color::Rgb(15, 15, 25);

/// Lines shown in the details panel for `project`, description wrapped to
/// `width` columns.
pub fn detail_lines(project: &Project, width: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Rgb(200, 200, 200));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Full Title: ", label),
            Span::styled(
                project.title.clone(),
                Style::default().fg(Color::Rgb(255, 255, 200)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for line in layout::wrap(&project.description, usize::MAX, |l| l.width() <= width) {
        lines.push(Line::from(Span::styled(format!("  {}", line), body)));
    }

    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("  Communities: ", label),
            Span::styled(project.communities.join(", "), body),
        ]),
        Line::from(vec![
            Span::styled("  Team Size: ", label),
            Span::styled(project.team_size.clone(), body),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press D to hide details | ESC to exit",
            Style::default().fg(Color::Rgb(150, 150, 150)),
        )),
    ]);
    lines
}

pub fn render_details(frame: &mut Frame, area: Rect, project: &Project) {
    let overlay_w = (DESCRIPTION_WIDTH as u16 + 6).min(area.width.saturating_sub(4));
    let text_width = (overlay_w as usize).saturating_sub(6).max(10);
    let lines = detail_lines(project, text_width.min(DESCRIPTION_WIDTH));

    let overlay_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(" 🏆 Project Details ")
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let p = Paragraph::new(lines)
        .style(Style::default().bg(PANEL_BG))
        .wrap(Wrap { trim: false });
    frame.render_widget(p, inner);
}
