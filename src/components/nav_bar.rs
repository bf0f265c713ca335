//! Bottom navigation bar showing the active key hints

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// One line of `Key Label` pairs separated by bullets
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", Styles::nav_hint()));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default().fg(Colors::PRIMARY),
            ));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Styles::text_secondary(),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(self.line()), area);
    }
}
