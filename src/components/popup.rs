//! Centered floating window used for modals, link previews and help

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{Colors, Styles, UiConstants};

/// Rectangle of `percent_x` × `percent_y` centered in `area`, clamped to
/// the dialog width bounds
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let middle = vertical[1];
    let width = (middle.width * percent_x / 100)
        .clamp(UiConstants::DIALOG_MIN_WIDTH.min(area.width), UiConstants::DIALOG_MAX_WIDTH.min(area.width));
    let x = area.x + (area.width.saturating_sub(width)) / 2;

    Rect {
        x,
        y: middle.y,
        width,
        height: middle.height,
    }
}

/// Draw a bordered window with wrapped content
pub fn render_window(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    footer: Option<&str>,
) {
    let rect = centered_rect(UiConstants::DIALOG_WIDTH_PCT, 70, area);
    f.render_widget(Clear, rect);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_active())
        .title(Line::styled(format!(" {title} "), Styles::title()))
        .style(ratatui::style::Style::default().bg(Colors::BG_SECONDARY));
    if let Some(footer) = footer {
        block = block.title_bottom(Line::styled(format!(" {footer} "), Styles::nav_hint()));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, rect);
}
