//! Application state definitions
//!
//! Contains `AppState`, the interaction `AppMode` and the shared
//! `HeaderState`. There is a single header state for the whole app; pages
//! never keep their own copy. It is parameterized by the current route and
//! reset whenever the route changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::pages::{PageAction, PageContext, PageState, Popup};
use crate::routes::{HEADER_CTA, HEADER_NAV, Location, Route, SIDEBAR_NAV};
use crate::theme::UiConstants;

/// How keys are currently interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Page keys and global shortcuts
    Browsing,
    /// A text field receives every key
    Editing,
    /// Burger menu open
    Menu,
    /// A modal or informational window covers the page
    Popup,
}

/// Header bar state shared by every page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Page scrolled past the threshold: solid header background
    pub scrolled: bool,
    /// Compact menu open
    pub menu_open: bool,
    /// Menu entry under the cursor
    pub menu_selection: usize,
}

impl HeaderState {
    pub fn update_scroll(&mut self, offset: u16, threshold: u16) {
        self.scrolled = offset > threshold;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.menu_selection = 0;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Entries of the navigation menu for a route: the dealer sidebar on dealer
/// pages, the academy header elsewhere
pub fn menu_entries(route: Route) -> Vec<(&'static str, Route)> {
    if route.uses_sidebar() {
        SIDEBAR_NAV.to_vec()
    } else {
        let mut entries = vec![("Accueil", Route::Home)];
        entries.extend(HEADER_NAV);
        entries.push(HEADER_CTA);
        entries
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page being displayed
    pub location: Location,
    /// Interactive state of that page, rebuilt on navigation
    pub page: PageState,
    pub header: HeaderState,
    /// Previously visited pages, most recent last
    pub history: Vec<Location>,
    /// Vertical scroll offset of the page content
    pub scroll: u16,
    /// Largest useful scroll offset, known after the last draw
    pub max_scroll: u16,
    pub help_visible: bool,
    pub popup: Option<Popup>,
    pub status_message: String,
}

impl AppState {
    pub fn new(location: Location, ctx: &PageContext) -> Self {
        let page = PageState::enter(&location, ctx);
        Self {
            status_message: location.route.title().to_string(),
            location,
            page,
            header: HeaderState::default(),
            history: Vec::new(),
            scroll: 0,
            max_scroll: u16::MAX,
            help_visible: false,
            popup: None,
        }
    }

    pub fn route(&self) -> Route {
        self.location.route
    }

    pub fn mode(&self) -> AppMode {
        if self.header.menu_open {
            AppMode::Menu
        } else if self.popup.is_some() || self.page.has_modal() {
            AppMode::Popup
        } else if self.page.is_editing() {
            AppMode::Editing
        } else {
            AppMode::Browsing
        }
    }

    /// Open a page, remembering the current one
    pub fn navigate(&mut self, location: Location, ctx: &PageContext) {
        info!("Navigating {} -> {}", self.location, location);
        let previous = std::mem::replace(&mut self.location, location);
        self.history.push(previous);
        self.enter_current(ctx);
    }

    /// Return to the previous page. Without history, the home page.
    pub fn back(&mut self, ctx: &PageContext) {
        let target = self
            .history
            .pop()
            .unwrap_or_else(|| Location::new(Route::Home));
        debug!("Back to {}", target);
        self.location = target;
        self.enter_current(ctx);
    }

    fn enter_current(&mut self, ctx: &PageContext) {
        self.page = PageState::enter(&self.location, ctx);
        self.header = HeaderState::default();
        self.scroll = 0;
        self.max_scroll = u16::MAX;
        self.popup = None;
        self.status_message = self.location.route.title().to_string();
    }

    pub fn scroll_by(&mut self, delta: i32, ctx: &PageContext) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(next).unwrap_or(self.scroll);
        self.header
            .update_scroll(self.scroll, ctx.config.scroll_threshold);
    }

    /// Clamp the scroll offset once the content height is known
    pub fn set_max_scroll(&mut self, max_scroll: u16, threshold: u16) {
        self.max_scroll = max_scroll;
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
            self.header.update_scroll(self.scroll, threshold);
        }
    }

    /// Scroll so that content row `row` is visible in a viewport of
    /// `height` rows
    pub fn follow(&mut self, row: u16, height: u16, threshold: u16) {
        if height == 0 {
            return;
        }
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        } else {
            return;
        }
        self.header.update_scroll(self.scroll, threshold);
    }

    fn apply(&mut self, action: PageAction, ctx: &PageContext) -> bool {
        match action {
            PageAction::Ignored => return false,
            PageAction::Handled => {}
            PageAction::Navigate(location) => self.navigate(location, ctx),
            PageAction::Back => self.back(ctx),
            PageAction::Popup(popup) => {
                self.status_message = popup.title.clone();
                self.popup = Some(popup);
            }
        }
        true
    }

    fn handle_menu_key(&mut self, key: KeyEvent, ctx: &PageContext) {
        let entries = menu_entries(self.route());
        match key.code {
            KeyCode::Up => {
                self.header.menu_selection = self.header.menu_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                self.header.menu_selection =
                    (self.header.menu_selection + 1).min(entries.len() - 1);
            }
            KeyCode::Enter => {
                if let Some((_, route)) = entries.get(self.header.menu_selection) {
                    self.navigate(Location::new(*route), ctx);
                }
            }
            KeyCode::Esc | KeyCode::Char('m') => self.header.close_menu(),
            _ => {}
        }
    }

    /// Handle a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.help_visible {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_visible = false;
            }
            return false;
        }

        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                self.popup = None;
                self.status_message = self.route().title().to_string();
            }
            return false;
        }

        if self.header.menu_open {
            self.handle_menu_key(key, ctx);
            return false;
        }

        if self.page.is_editing() {
            let action = self.page.handle_key(key, ctx);
            self.apply(action, ctx);
            return false;
        }

        if self.page.has_modal() {
            match key.code {
                KeyCode::Char('?') => self.help_visible = true,
                KeyCode::Char('q') => return true,
                _ => {
                    let action = self.page.handle_key(key, ctx);
                    self.apply(action, ctx);
                }
            }
            return false;
        }

        match key.code {
            KeyCode::Char('?') => {
                self.help_visible = true;
                return false;
            }
            KeyCode::Char('q') => return true,
            KeyCode::Char('m') => {
                self.header.toggle_menu();
                return false;
            }
            KeyCode::PageUp => {
                self.scroll_by(-i32::from(UiConstants::PAGE_SCROLL_SIZE), ctx);
                return false;
            }
            KeyCode::PageDown => {
                self.scroll_by(i32::from(UiConstants::PAGE_SCROLL_SIZE), ctx);
                return false;
            }
            _ => {}
        }

        let action = self.page.handle_key(key, ctx);
        if self.apply(action, ctx) {
            return false;
        }

        // Keys the page left alone
        match key.code {
            KeyCode::Up => self.scroll_by(-1, ctx),
            KeyCode::Down => self.scroll_by(1, ctx),
            KeyCode::Home => self.scroll_by(-i32::from(u16::MAX), ctx),
            KeyCode::Esc | KeyCode::Backspace if !self.history.is_empty() => self.back(ctx),
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_scroll_threshold() {
        let mut header = HeaderState::default();
        header.update_scroll(2, 2);
        assert!(!header.scrolled);
        header.update_scroll(3, 2);
        assert!(header.scrolled);
    }

    #[test]
    fn test_menu_entries_by_route() {
        let dealer = menu_entries(Route::Marketplace);
        assert_eq!(dealer.len(), 4);
        assert_eq!(dealer[1], ("Nos véhicules", Route::Marketplace));

        let academy = menu_entries(Route::Home);
        assert_eq!(academy.first(), Some(&("Accueil", Route::Home)));
        assert_eq!(academy.last(), Some(&HEADER_CTA));
    }
}
