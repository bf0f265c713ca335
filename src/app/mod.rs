//! Application module
//!
//! Contains the event loop, state management and page interaction.
//!
//! # Module Structure
//! - `state` - AppState, AppMode, the shared HeaderState
//! - `pages` - Per-page interactive state and key handling
//! - Main module - App struct and event loop

mod pages;
mod state;

pub use pages::{
    DealerPage, FormationsPage, GarageFocus, GaragePage, HomePage, InfrastructurePage,
    InquiryPage, MarketField, MarketplacePage, PageAction, PageContext, PageState, Popup,
    ReserverFocus, ReserverPage,
};
pub use state::{AppMode, AppState, HeaderState, menu_entries};

use crate::catalog::CatalogSource;
use crate::components::keybindings::KeybindingContext;
use crate::config_file::SiteConfig;
use crate::routes::Location;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Arc<dyn CatalogSource>,
    config: SiteConfig,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints and help
    keybinding_context: KeybindingContext,
    /// Focused row at the previous frame; the view follows it when it moves
    last_focus_row: Option<u16>,
}

impl App {
    /// Create the application showing `location`
    pub fn new(catalog: Arc<dyn CatalogSource>, config: SiteConfig, location: Location) -> Self {
        info!("Creating new App instance at {}", location);
        let state = {
            let ctx = PageContext {
                catalog: catalog.as_ref(),
                config: &config,
                now: Instant::now(),
            };
            AppState::new(location, &ctx)
        };

        Self {
            state,
            catalog,
            config,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            last_focus_row: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let ctx = PageContext {
                            catalog: self.catalog.as_ref(),
                            config: &self.config,
                            now: Instant::now(),
                        };
                        if self.state.handle_key(key_event, &ctx) {
                            info!("Exit requested");
                            break;
                        }
                    }
                    Event::Resize(width, height) => debug!("Terminal resized to {}x{}", width, height),
                    _ => {}
                }
            }

            // Only the displayed page owns carousels
            self.state.page.tick(Instant::now());

            terminal.draw(|f| {
                self.ui_renderer.render(
                    f,
                    &self.state,
                    self.catalog.as_ref(),
                    &self.config,
                    &self.keybinding_context,
                );
            })?;

            let layout = self.ui_renderer.content_metrics();
            let threshold = self.config.scroll_threshold;
            self.state.set_max_scroll(layout.max_scroll, threshold);
            if layout.focus_row != self.last_focus_row {
                if let Some(row) = layout.focus_row {
                    self.state.follow(row, layout.viewport_height, threshold);
                }
                self.last_focus_row = layout.focus_row;
            }
        }

        Ok(())
    }
}
