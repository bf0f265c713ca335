//! Centralized theme and styling for the storefront
//!
//! Single source of truth for colors, styles and layout constants. The
//! palette follows the brand: black backgrounds, orange accents, gold for the
//! dealer side.
//!
//! # Usage
//! ```rust
//! use sl_automotive::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let accent = Style::default().fg(Colors::PRIMARY);
//! let title = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Page background
    pub const BG_PRIMARY: Color = Color::Rgb(12, 12, 14);

    /// Cards and alternate sections
    pub const BG_SECONDARY: Color = Color::Rgb(28, 28, 34);

    /// Header once the page has scrolled
    pub const BG_HEADER_SCROLLED: Color = Color::Rgb(0, 0, 0);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Body copy
    pub const FG_SECONDARY: Color = Color::Rgb(203, 213, 225);

    /// Captions, hints, disabled controls
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Brand Colors
    // -------------------------------------------------------------------------

    /// Academy orange: titles, borders, call-to-action buttons
    pub const PRIMARY: Color = Color::Rgb(234, 88, 12);

    /// Dealer gold: sidebar highlight, prices
    pub const SECONDARY: Color = Color::Rgb(184, 138, 68);

    /// Yellow used for the active sidebar entry
    pub const TERTIARY: Color = Color::Rgb(250, 204, 21);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    /// WhatsApp call-to-action
    pub const WHATSAPP: Color = Color::Rgb(37, 211, 102);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused section border
    pub const BORDER_ACTIVE: Color = Color::Rgb(234, 88, 12);

    /// Unfocused border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected option background
    pub const SELECTED_BG: Color = Color::Rgb(234, 88, 12);

    /// Selected option text
    pub const SELECTED_FG: Color = Color::Black;

    pub const UNSELECTED: Color = Color::Gray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Whole-screen background
    pub fn page() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Body copy
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Page title (orange, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase kicker above titles
    pub fn kicker() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected option in a choice row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    /// Option under the cursor but not chosen
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Primary call-to-action button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Button that cannot be pressed (modal arrows at the ends)
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    pub fn whatsapp() -> Style {
        Style::default()
            .fg(Colors::WHATSAPP)
            .add_modifier(Modifier::BOLD)
    }

    /// Header bar before the page scrolls
    pub fn header_transparent() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Header bar once the page has scrolled
    pub fn header_scrolled() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BG_HEADER_SCROLLED)
    }

    /// Active entry of the dealer sidebar
    pub fn sidebar_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::TERTIARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

pub struct UiConstants;

impl UiConstants {
    /// Modal width as percent of the screen
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    pub const DIALOG_MAX_WIDTH: u16 = 80;

    pub const DIALOG_MIN_WIDTH: u16 = 40;

    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header bar with logo and navigation
    pub const HEADER_HEIGHT: u16 = 3;

    /// Width of the dealer sidebar
    pub const SIDEBAR_WIDTH: u16 = 22;

    /// Below this width the header collapses into the burger menu
    pub const COMPACT_WIDTH: u16 = 100;

    /// Lines scrolled by PageUp/PageDown
    pub const PAGE_SCROLL_SIZE: u16 = 10;
}
