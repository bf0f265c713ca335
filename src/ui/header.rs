//! Header bar, dealer sidebar, burger menu and the bottom navigation bar
//!
//! The header reads the single `HeaderState` owned by the app. Its look
//! depends on the route (academy header or dealer bar) and on whether the
//! page has scrolled.

use crate::app::{AppState, menu_entries};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::components::popup::render_window;
use crate::routes::{HEADER_CTA, HEADER_NAV, Route, SIDEBAR_NAV};
use crate::theme::{Styles, UiConstants};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct HeaderRenderer {
    logo: Vec<Span<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            logo: vec![
                Span::styled("SL ", Styles::title()),
                Span::styled("AUTOMOTIVE", Styles::text_bold()),
            ],
        }
    }

    fn brand(&self, route: Route) -> Vec<Span<'static>> {
        let mut spans = self.logo.clone();
        let tagline = if route.uses_sidebar() {
            " · Dealer"
        } else {
            " · Stanley Racing Academy"
        };
        spans.push(Span::styled(tagline, Styles::kicker()));
        spans
    }

    /// Entries shown inline in the header bar
    fn inline_nav(route: Route) -> Vec<Span<'static>> {
        let entries: Vec<(&str, Route)> = if route.uses_sidebar() {
            SIDEBAR_NAV.to_vec()
        } else {
            HEADER_NAV.to_vec()
        };

        let mut spans = Vec::new();
        for (label, target) in entries {
            let style = if target == route {
                Styles::focused()
            } else {
                Styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        if !route.uses_sidebar() {
            let (label, target) = HEADER_CTA;
            let style = if target == route {
                Styles::selected()
            } else {
                Styles::button_active()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {label} "), style));
        }
        spans
    }

    pub fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let route = state.route();
        let style = if state.header.scrolled {
            Styles::header_scrolled()
        } else {
            Styles::header_transparent()
        };
        let border = if state.header.scrolled {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        };

        let mut spans;
        if area.width >= UiConstants::COMPACT_WIDTH {
            spans = self.brand(route);
            spans.push(Span::raw("   "));
            spans.extend(Self::inline_nav(route));
        } else {
            // Narrow terminals keep only the logo and the burger
            spans = self.logo.clone();
            spans.push(Span::raw("   "));
            let label = if state.header.menu_open { "✕ Menu" } else { "☰ Menu (m)" };
            spans.push(Span::styled(label, Styles::title()));
        }

        let header = Paragraph::new(Line::from(spans))
            .style(style)
            .block(Block::default().borders(Borders::BOTTOM).border_style(border));
        f.render_widget(header, area);
    }
}

/// Dealer sidebar with the active entry highlighted
pub fn render_sidebar(f: &mut Frame, area: Rect, route: Route) {
    let mut lines = vec![Line::default()];
    for (label, target) in SIDEBAR_NAV {
        let style = if target == route {
            Styles::sidebar_active()
        } else {
            Styles::text_secondary()
        };
        lines.push(Line::styled(format!(" {label:<18}"), style));
        lines.push(Line::default());
    }
    let sidebar = Paragraph::new(lines)
        .block(Block::default().borders(Borders::RIGHT).border_style(Styles::border_inactive()));
    f.render_widget(sidebar, area);
}

/// Burger menu listing every destination of the current layout
pub fn render_menu(f: &mut Frame, state: &AppState) {
    let route = state.route();
    let lines: Vec<Line> = menu_entries(route)
        .into_iter()
        .enumerate()
        .map(|(i, (label, target))| {
            let style = if i == state.header.menu_selection {
                Styles::selected()
            } else if target == route {
                Styles::focused()
            } else {
                Styles::text()
            };
            Line::styled(format!("  {label}  "), style)
        })
        .collect();
    render_window(f, f.area(), "Menu", lines, Some("Enter ouvrir · Esc fermer"));
}

pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode(), state.route());
    NavBar::new(nav_items).render(f, area);
}

pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode(), state.route(), keybinding_ctx);
    help_overlay.render(f, f.area());
}
