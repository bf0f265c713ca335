//! Tests for the site configuration and how it reaches the pages

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::time::Instant;
use tempfile::TempDir;

use sl_automotive::app::{AppState, PageContext};
use sl_automotive::catalog::{CatalogSource, StaticCatalog};
use sl_automotive::config_file::SiteConfig;
use sl_automotive::routes::Location;

#[test]
fn test_config_points_at_catalog_file() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("stock.json");
    let config_path = dir.path().join("site.json");

    let mut catalog = StaticCatalog::demo();
    catalog.vehicles.retain(|v| v.make == "BMW");
    catalog.save_to_file(&catalog_path).unwrap();

    let config = SiteConfig {
        catalog_path: Some(catalog_path.clone()),
        ..SiteConfig::default()
    };
    config.save_to_file(&config_path).unwrap();

    let loaded = SiteConfig::load_from_file(&config_path).unwrap();
    assert!(loaded.validate().is_ok());
    let stock = StaticCatalog::load_from_file(loaded.catalog_path.unwrap()).unwrap();
    assert_eq!(stock.vehicles().len(), 1);
    assert_eq!(stock.vehicles()[0].stock_id, "SLA-0002");
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(SiteConfig::load_from_file(&path).unwrap(), SiteConfig::default());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = SiteConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn test_validation_rules() {
    let empty_number = SiteConfig {
        whatsapp_number: "   ".to_string(),
        ..SiteConfig::default()
    };
    assert!(empty_number.validate().is_err());

    let slow_components = SiteConfig {
        components_interval_ms: 499,
        ..SiteConfig::default()
    };
    assert!(slow_components.validate().is_err());

    let boundary = SiteConfig {
        hero_interval_ms: 500,
        components_interval_ms: 500,
        ..SiteConfig::default()
    };
    assert!(boundary.validate().is_ok());
}

#[test]
fn test_configured_number_used_in_links() {
    let catalog = StaticCatalog::demo();
    let config = SiteConfig {
        whatsapp_number: "221770000000".to_string(),
        ..SiteConfig::default()
    };
    let ctx = PageContext {
        catalog: &catalog,
        config: &config,
        now: Instant::now(),
    };
    let mut state = AppState::new(Location::parse("/marketplace"), &ctx);
    state.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE), &ctx);

    let popup = state.popup.expect("WhatsApp popup");
    assert!(
        popup
            .lines
            .iter()
            .any(|l| l.starts_with("https://wa.me/221770000000?text="))
    );
}
