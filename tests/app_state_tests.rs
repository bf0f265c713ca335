//! Tests for Application State Management
//!
//! Drives `AppState` with key presses the way the event loop does.
//!
//! These tests verify:
//! - Navigation, history and the shared header state
//! - Mode derivation (browsing, editing, menu, popup)
//! - The reservation and marketplace flows end to end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use sl_automotive::app::{
    AppMode, AppState, MarketField, PageContext, PageState, ReserverFocus, menu_entries,
};
use sl_automotive::catalog::{CatalogSource, StaticCatalog};
use sl_automotive::config_file::SiteConfig;
use sl_automotive::routes::{Location, Route};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Run `f` against a state opened at `path` over the demo catalog
fn with_state(path: &str, f: impl FnOnce(&mut AppState, &PageContext)) {
    let catalog = StaticCatalog::demo();
    let config = SiteConfig::default();
    let ctx = PageContext {
        catalog: &catalog,
        config: &config,
        now: Instant::now(),
    };
    let mut state = AppState::new(Location::parse(path), &ctx);
    f(&mut state, &ctx);
}

fn press(state: &mut AppState, ctx: &PageContext, code: KeyCode) -> bool {
    state.handle_key(key(code), ctx)
}

fn type_text(state: &mut AppState, ctx: &PageContext, text: &str) {
    for c in text.chars() {
        assert!(!press(state, ctx, KeyCode::Char(c)));
    }
}

// =============================================================================
// Navigation and header
// =============================================================================

#[test]
fn test_unknown_route_opens_home() {
    with_state("/nope", |state, _| {
        assert_eq!(state.route(), Route::Home);
        assert!(matches!(state.page, PageState::Home(_)));
        assert_eq!(state.mode(), AppMode::Browsing);
    });
}

#[test]
fn test_quit_keys() {
    with_state("/", |state, ctx| {
        assert!(press(state, ctx, KeyCode::Char('q')));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.handle_key(ctrl_c, ctx));
    });
}

#[test]
fn test_menu_navigation_and_back() {
    with_state("/", |state, ctx| {
        press(state, ctx, KeyCode::Char('m'));
        assert_eq!(state.mode(), AppMode::Menu);

        let entries = menu_entries(Route::Home);
        let garage = entries.iter().position(|(_, r)| *r == Route::Garage).unwrap();
        for _ in 0..garage {
            press(state, ctx, KeyCode::Down);
        }
        press(state, ctx, KeyCode::Enter);

        assert_eq!(state.route(), Route::Garage);
        assert!(!state.header.menu_open);
        assert_eq!(state.header.menu_selection, 0);

        press(state, ctx, KeyCode::Esc);
        assert_eq!(state.route(), Route::Home);
        assert!(state.history.is_empty());
    });
}

#[test]
fn test_header_state_resets_on_navigation() {
    with_state("/academy", |state, ctx| {
        state.set_max_scroll(40, ctx.config.scroll_threshold);
        for _ in 0..5 {
            press(state, ctx, KeyCode::PageDown);
        }
        assert!(state.scroll > ctx.config.scroll_threshold);
        assert!(state.header.scrolled);

        // "Découvrir nos formations"
        press(state, ctx, KeyCode::Enter);
        assert_eq!(state.route(), Route::Formations);
        assert_eq!(state.scroll, 0);
        assert!(!state.header.scrolled);
    });
}

#[test]
fn test_scroll_stays_within_content() {
    with_state("/process", |state, ctx| {
        state.set_max_scroll(3, ctx.config.scroll_threshold);
        for _ in 0..10 {
            press(state, ctx, KeyCode::Down);
        }
        assert_eq!(state.scroll, 3);
        press(state, ctx, KeyCode::Home);
        assert_eq!(state.scroll, 0);
    });
}

#[test]
fn test_help_overlay_swallows_keys() {
    with_state("/", |state, ctx| {
        press(state, ctx, KeyCode::Char('?'));
        assert!(state.help_visible);
        assert!(!press(state, ctx, KeyCode::Char('q')));
        press(state, ctx, KeyCode::Esc);
        assert!(!state.help_visible);
    });
}

// =============================================================================
// WhatsApp popups
// =============================================================================

#[test]
fn test_process_whatsapp_popup() {
    with_state("/process", |state, ctx| {
        press(state, ctx, KeyCode::Char('w'));
        assert_eq!(state.mode(), AppMode::Popup);
        let popup = state.popup.as_ref().unwrap();
        assert!(popup.lines.iter().any(|l| l.starts_with("https://wa.me/35200000000?text=")));

        press(state, ctx, KeyCode::Enter);
        assert!(state.popup.is_none());
        assert_eq!(state.route(), Route::Process);
    });
}

// =============================================================================
// Reservation flow
// =============================================================================

#[test]
fn test_offer_link_focuses_date() {
    with_state("/reserver?product=karting-loisir-20", |state, _| {
        let PageState::Reserver(page) = &state.page else {
            panic!("Expected reservation page");
        };
        assert_eq!(page.focus, ReserverFocus::Date);
        assert_eq!(
            page.wizard.selected_product().map(|p| p.id.as_str()),
            Some("karting-loisir-20")
        );
    });
}

#[test]
fn test_full_reservation_by_keyboard() {
    with_state("/reserver?product=karting-loisir-20", |state, ctx| {
        // Date
        press(state, ctx, KeyCode::Enter);
        assert_eq!(state.mode(), AppMode::Editing);
        type_text(state, ctx, "2026-03-14");
        press(state, ctx, KeyCode::Enter);
        assert_eq!(state.mode(), AppMode::Browsing);

        // First Saturday slot
        press(state, ctx, KeyCode::Enter);

        // Contact details, Tab moves to the next field
        for value in ["Lou", "Stanley", "lou@example.com", "600000"] {
            press(state, ctx, KeyCode::Enter);
            type_text(state, ctx, value);
            press(state, ctx, KeyCode::Tab);
        }

        {
            let PageState::Reserver(page) = &state.page else {
                panic!("Expected reservation page");
            };
            assert_eq!(page.focus, ReserverFocus::Confirm);
            assert_eq!(page.wizard.slot(), Some("09:00"));
            assert_eq!(page.wizard.contact.email, "lou@example.com");
        }

        press(state, ctx, KeyCode::Enter);
        let popup = state.popup.as_ref().expect("confirmation popup");
        assert_eq!(popup.title, "Réservation enregistrée");
        assert!(popup.lines.iter().any(|l| l.contains("14/03/2026")));

        let PageState::Reserver(page) = &state.page else {
            panic!("Expected reservation page");
        };
        assert!(page.confirmed.is_some());
    });
}

#[test]
fn test_reservation_from_scratch_reveals_sections() {
    with_state("/reserver", |state, ctx| {
        // Karting is the second discipline
        press(state, ctx, KeyCode::Right);
        press(state, ctx, KeyCode::Enter);
        // Beginner
        press(state, ctx, KeyCode::Enter);

        let PageState::Reserver(page) = &state.page else {
            panic!("Expected reservation page");
        };
        assert_eq!(page.focus, ReserverFocus::Product);
        assert_eq!(page.option_count(ReserverFocus::Product), 1);
        assert!(!page.focus_order().contains(&ReserverFocus::Date));
    });
}

// =============================================================================
// Marketplace
// =============================================================================

#[test]
fn test_marketplace_search_then_open_sheet() {
    with_state("/marketplace", |state, ctx| {
        press(state, ctx, KeyCode::Char('/'));
        assert_eq!(state.mode(), AppMode::Editing);
        type_text(state, ctx, "330i");
        press(state, ctx, KeyCode::Enter);

        {
            let PageState::Marketplace(page) = &state.page else {
                panic!("Expected marketplace");
            };
            assert_eq!(page.focus, MarketField::Search);
            let results = page.results(ctx.catalog.vehicles());
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].stock_id, "SLA-0002");
        }

        // Move off the text field, then open the selected vehicle
        press(state, ctx, KeyCode::Tab);
        press(state, ctx, KeyCode::Enter);
        assert_eq!(state.mode(), AppMode::Popup);

        // Dossier request lands on the contact page for that stock id
        press(state, ctx, KeyCode::Char('d'));
        assert_eq!(state.route(), Route::Contact);
        assert_eq!(state.location.param("stock"), Some("SLA-0002"));
        let PageState::Contact(page) = &state.page else {
            panic!("Expected contact page");
        };
        assert_eq!(page.form.stock_id(), Some("SLA-0002"));
    });
}

#[test]
fn test_marketplace_reset() {
    with_state("/marketplace", |state, ctx| {
        press(state, ctx, KeyCode::Tab);
        press(state, ctx, KeyCode::Right);
        press(state, ctx, KeyCode::Char('o'));
        press(state, ctx, KeyCode::Char('x'));

        let PageState::Marketplace(page) = &state.page else {
            panic!("Expected marketplace");
        };
        assert!(page.filter().is_empty());
        assert_eq!(page.focus, MarketField::Search);
        assert!(!page.facets.brands.is_empty());
    });
}
