//! Help overlay component
//!
//! Displays context-sensitive help in a floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use super::popup;
use crate::app::AppMode;
use crate::routes::Route;
use crate::theme::Colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    pub fn new(mode: &AppMode, route: Route, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode, route);
        Self {
            content: Self::build_content(&sections, mode, route),
        }
    }

    fn build_content(sections: &[HelpSection], mode: &AppMode, route: Route) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  SL Automotive · Aide  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        let context = match mode {
            AppMode::Browsing => route.title().to_string(),
            AppMode::Editing => format!("{} · saisie", route.title()),
            AppMode::Menu => "Menu".to_string(),
            AppMode::Popup => format!("{} · fenêtre", route.title()),
        };
        lines.push(Line::from(vec![
            Span::styled("Page : ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(context, Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{key:<10}"),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    pub fn render(&self, f: &mut Frame, parent: Rect) {
        popup::render_window(
            f,
            parent,
            "Aide",
            self.content.clone(),
            Some("? ou Esc pour fermer"),
        );
    }

    #[cfg(test)]
    fn text(&self) -> String {
        self.content
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }
}
