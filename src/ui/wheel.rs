use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthStr;

use crate::wheel::layout;
use crate::wheel::{Phase, Session, WheelGeometry};

const BACKGROUND: Color = Color::Rgb(30, 30, 30);
const POINTER: Color = Color::Rgb(255, 255, 255);
const WINNER_TEXT: Color = Color::Rgb(255, 255, 0);

pub const SLICE_COLORS: [Color; 8] = [
    Color::Rgb(231, 76, 60),   // Red
    Color::Rgb(52, 152, 219),  // Blue
    Color::Rgb(155, 89, 182),  // Purple
    Color::Rgb(46, 204, 113),  // Green
    Color::Rgb(241, 196, 15),  // Yellow
    Color::Rgb(230, 126, 34),  // Orange
    Color::Rgb(52, 73, 94),    // Dark blue
    Color::Rgb(26, 188, 156),  // Teal
];

/// Columns reserved right of the rim for the pointer
const POINTER_MARGIN: f64 = 4.0;
/// A terminal cell is roughly twice as tall as it is wide
const CELL_ASPECT: f64 = 2.0;

type Cell = (char, Style);

/// Wheel dimensions in column units, derived from the available cells.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Disc {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl Disc {
    fn fit(width: usize, height: usize) -> Option<Self> {
        let radius = (width as f64 / 2.0 - POINTER_MARGIN).min(height as f64 - 1.0);
        if radius < 3.0 {
            return None;
        }
        Some(Self {
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
            radius,
        })
    }

    /// Math-convention offset (y up) to a grid cell
    fn to_cell(&self, x: f64, y: f64) -> (isize, isize) {
        let col = (self.cx + x).floor() as isize;
        let row = (self.cy - y / CELL_ASPECT).floor() as isize;
        (col, row)
    }
}

/// Rasterise the wheel into a grid of styled characters: slices coloured by
/// slot, labels wrapped to fit their slice, and the fixed pointer at 0°.
pub fn rasterize<P>(
    session: &Session<P>,
    width: usize,
    height: usize,
    label_lines: usize,
    anchor_fraction: f64,
) -> Vec<Vec<Cell>> {
    let mut grid: Vec<Vec<Cell>> = vec![vec![(' ', Style::default().bg(BACKGROUND)); width]; height];

    let Some(disc) = Disc::fit(width, height) else {
        return grid;
    };
    let Ok(geometry) = WheelGeometry::new(session.slots().len()) else {
        return grid;
    };
    let angle = session.wheel().angle;
    let winner = session.winner_index();

    // Slices
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let dx = col as f64 + 0.5 - disc.cx;
            let dy = (disc.cy - (row as f64 + 0.5)) * CELL_ASPECT;
            let dist = dx.hypot(dy);
            if dist > disc.radius {
                continue;
            }
            if dist < 1.5 {
                *cell = ('●', Style::default().fg(POINTER).bg(BACKGROUND));
                continue;
            }
            let slot = geometry.slot_at(dy.atan2(dx).to_degrees(), angle);
            *cell = (' ', Style::default().bg(SLICE_COLORS[slot % SLICE_COLORS.len()]));
        }
    }

    // Labels, centred on each slice's anchor
    let max_width = label_width(&geometry, disc.radius, anchor_fraction);
    for (index, slot) in session.slots().iter().enumerate() {
        let lines = layout::wrap(&slot.label, label_lines, |line| line.width() <= max_width);
        let (ax, ay) = geometry.label_anchor(index, angle, disc.radius, anchor_fraction);
        let (col, row) = disc.to_cell(ax, ay);
        let top = row - (lines.len() as isize - 1) / 2;

        for (line_idx, line) in lines.iter().enumerate() {
            let mut style = Style::default().fg(Color::White);
            if line_idx == 0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            if winner == Some(index) {
                style = style.fg(WINNER_TEXT).add_modifier(Modifier::BOLD);
            }
            let start = col - (line.width() as isize) / 2;
            put_text(&mut grid, top + line_idx as isize, start, line, style);
        }
    }

    // Pointer on the right rim, aiming left at 0°
    let (col, row) = disc.to_cell(disc.radius + 1.0, 0.0);
    let pointer = Style::default().fg(POINTER).bg(BACKGROUND).add_modifier(Modifier::BOLD);
    put_text(&mut grid, row, col, "◀━", pointer);

    grid
}

/// Width budget for a label: the chord across the slice at the anchor
/// distance, kept within sane bounds for very wide or narrow slices.
fn label_width(geometry: &WheelGeometry, radius: f64, anchor_fraction: f64) -> usize {
    let half_slice = (geometry.slice_width() / 2.0).min(90.0).to_radians();
    let chord = 2.0 * radius * anchor_fraction * half_slice.sin();
    chord.clamp(6.0, (radius * 0.8).max(6.0)) as usize
}

/// Overlay text onto the grid, keeping each cell's background.
fn put_text(grid: &mut [Vec<Cell>], row: isize, start: isize, text: &str, style: Style) {
    let Ok(row) = usize::try_from(row) else { return };
    let Some(cells) = grid.get_mut(row) else { return };

    for (offset, ch) in text.chars().enumerate() {
        let Ok(col) = usize::try_from(start + offset as isize) else { continue };
        if let Some(cell) = cells.get_mut(col) {
            let bg = cell.1.bg.unwrap_or(BACKGROUND);
            *cell = (ch, style.bg(bg));
        }
    }
}

pub fn render_wheel<P>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<P>,
    label_lines: usize,
    anchor_fraction: f64,
) {
    let border = match session.phase() {
        Phase::Spinning => Color::Rgb(241, 196, 15),
        Phase::Stopped { .. } => Color::Rgb(46, 204, 113),
        Phase::Idle => Color::Rgb(60, 150, 200),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(" 🎡 Hackathon Roulette ")
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = rasterize(
        session,
        inner.width as usize,
        inner.height as usize,
        label_lines,
        anchor_fraction,
    );
    let lines: Vec<Line<'static>> = grid
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
