//! Rendering smoke tests on an in-memory terminal

use ratatui::{Terminal, backend::TestBackend};
use std::time::Instant;
use strum::IntoEnumIterator;

use sl_automotive::app::{AppState, PageContext};
use sl_automotive::catalog::StaticCatalog;
use sl_automotive::components::keybindings::KeybindingContext;
use sl_automotive::config_file::SiteConfig;
use sl_automotive::routes::{Location, Route};
use sl_automotive::ui::UiRenderer;

/// Draw `state` once and return the screen as text
fn draw(state: &AppState, width: u16, height: u16) -> String {
    let catalog = StaticCatalog::demo();
    let config = SiteConfig::default();
    let keys = KeybindingContext::new();
    let mut renderer = UiRenderer::new();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| renderer.render(f, state, &catalog, &config, &keys))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn state_at(location: Location) -> AppState {
    let catalog = StaticCatalog::demo();
    let config = SiteConfig::default();
    let ctx = PageContext {
        catalog: &catalog,
        config: &config,
        now: Instant::now(),
    };
    AppState::new(location, &ctx)
}

#[test]
fn test_every_route_renders() {
    for route in Route::iter() {
        let screen = draw(&state_at(route.into()), 120, 40);
        assert!(screen.contains("AUTOMOTIVE"), "{route:?} has no header");
    }
}

#[test]
fn test_every_route_renders_on_small_terminal() {
    for route in Route::iter() {
        let screen = draw(&state_at(route.into()), 40, 12);
        assert!(screen.contains("Menu"), "{route:?} has no compact menu");
    }
}

#[test]
fn test_marketplace_lists_demo_stock() {
    let screen = draw(&state_at(Route::Marketplace.into()), 140, 60);
    assert!(screen.contains("SLA-0001"));
    assert!(screen.contains("Prix sur demande"));
}

#[test]
fn test_reservation_link_shows_product_in_recap() {
    let state = state_at(Location::parse("/reserver?product=karting-loisir-20"));
    let screen = draw(&state, 120, 80);
    assert!(screen.contains("Karting loisir"));
}
