//! User interface rendering module
//!
//! - `header` - Header bar, dealer sidebar, menu, nav bar and help overlay
//! - `view` - Line-based page building blocks
//! - `pages` - Content pages
//! - `marketplace` - Vehicle listing and vehicle sheet
//! - `booking` - Reservation page
//! - `forms` - Garage assistant, investor and contact forms
//! - `dialogs` - Modal windows

mod booking;
mod dialogs;
mod forms;
mod header;
mod marketplace;
mod pages;
pub mod view;

use crate::app::{AppState, PageState};
use crate::catalog::CatalogSource;
use crate::components::keybindings::KeybindingContext;
use crate::config_file::SiteConfig;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph, Wrap},
};

pub use header::HeaderRenderer;
use view::PageView;

/// Geometry of the page content measured during the last draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentMetrics {
    /// Largest scroll offset that still shows content
    pub max_scroll: u16,
    /// Content row of the focused control
    pub focus_row: Option<u16>,
    pub viewport_height: u16,
}

/// UI renderer for the application
pub struct UiRenderer {
    header: HeaderRenderer,
    metrics: ContentMetrics,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines of the page at the current route
pub fn build_page(state: &AppState, catalog: &dyn CatalogSource) -> PageView {
    let mut view = PageView::new();
    match &state.page {
        PageState::Home(page) => pages::home(&mut view, page),
        PageState::Academy => pages::academy(&mut view),
        PageState::Formations(page) => pages::formations(&mut view, page),
        PageState::Garage(page) => forms::garage(&mut view, page),
        PageState::Dealer(page) => pages::dealer(&mut view, page, catalog),
        PageState::Investor(page) => {
            pages::investor(&mut view);
            forms::inquiry(&mut view, page);
        }
        PageState::Infrastructure(page) => pages::infrastructure(&mut view, page),
        PageState::Marketplace(page) => marketplace::render(&mut view, page, catalog),
        PageState::Process => pages::process(&mut view),
        PageState::Reserver(page) => booking::render(&mut view, page),
        PageState::Contact(page) => forms::contact(&mut view, page),
    }
    pages::footer(&mut view);
    view
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
            metrics: ContentMetrics::default(),
        }
    }

    pub fn content_metrics(&self) -> ContentMetrics {
        self.metrics
    }

    /// Render the complete UI
    pub fn render(
        &mut self,
        f: &mut Frame,
        state: &AppState,
        catalog: &dyn CatalogSource,
        config: &SiteConfig,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());
        f.render_widget(Block::default().style(Styles::page()), f.area());

        self.header.render(f, chunks[0], state);

        let route = state.route();
        let content_area = if route.uses_sidebar() && chunks[1].width >= UiConstants::COMPACT_WIDTH
        {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(UiConstants::SIDEBAR_WIDTH),
                    Constraint::Min(1),
                ])
                .split(chunks[1]);
            header::render_sidebar(f, columns[0], route);
            columns[1]
        } else {
            chunks[1]
        };

        self.render_content(f, content_area, state, catalog);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[2]);

        // Overlays, innermost first
        match &state.page {
            PageState::Home(page) if page.modal.is_some() => {
                dialogs::render_programme_modal(f, f.area(), page);
            }
            PageState::Dealer(page) => {
                if let Some(vehicle) = page.detail.as_deref().and_then(|id| catalog.find_vehicle(id)) {
                    dialogs::render_vehicle_detail(f, f.area(), vehicle, config);
                }
            }
            PageState::Marketplace(page) => {
                if let Some(vehicle) = page.detail.as_deref().and_then(|id| catalog.find_vehicle(id)) {
                    dialogs::render_vehicle_detail(f, f.area(), vehicle, config);
                }
            }
            _ => {}
        }
        if let Some(popup) = &state.popup {
            dialogs::render_popup(f, f.area(), popup);
        }
        if state.header.menu_open {
            header::render_menu(f, state);
        }
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_content(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        catalog: &dyn CatalogSource,
    ) {
        let page = build_page(state, catalog);
        // One column of padding on each side
        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };

        let (total, focus_row) = view::measure(&page.lines, inner.width, page.focus_line);
        self.metrics = ContentMetrics {
            max_scroll: total.saturating_sub(inner.height),
            focus_row,
            viewport_height: inner.height,
        };

        let scroll = state.scroll.min(self.metrics.max_scroll);
        let paragraph = Paragraph::new(page.lines)
            .style(Styles::text())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(paragraph, inner);
    }
}
