//! Tests for the marketplace filter and the catalog data source
//!
//! These tests verify:
//! - Free-text search and selector filters over the demo stock
//! - Price bounds and "price on request" vehicles
//! - Sort orders
//! - Loading a catalog file

use sl_automotive::catalog::{
    CatalogSource, Facets, StaticCatalog, VehicleFilter, filter_and_sort, parse_bound,
};
use sl_automotive::types::SortMode;
use std::io::Write;
use tempfile::NamedTempFile;

fn ids(vehicles: &[&sl_automotive::Vehicle]) -> Vec<String> {
    vehicles.iter().map(|v| v.stock_id.clone()).collect()
}

// =============================================================================
// Search and selectors
// =============================================================================

#[test]
fn test_search_330i_finds_only_the_bmw() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        query: "330i".to_string(),
        ..VehicleFilter::default()
    };
    let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
    assert_eq!(ids(&results), vec!["SLA-0002"]);
}

#[test]
fn test_search_matches_stock_id() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        query: "sla-0003".to_string(),
        ..VehicleFilter::default()
    };
    let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
    assert_eq!(ids(&results), vec!["SLA-0003"]);
}

#[test]
fn test_gearbox_selector_uses_gearbox_field() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        gearbox: Some("Manuelle".to_string()),
        ..VehicleFilter::default()
    };
    let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
    assert_eq!(ids(&results), vec!["SLA-0003"]);
}

#[test]
fn test_combined_filters_are_conjunctive() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        fuel: Some("Essence".to_string()),
        min_year: Some(2020.0),
        ..VehicleFilter::default()
    };
    let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
    assert_eq!(ids(&results), vec!["SLA-0002"]);
}

#[test]
fn test_no_match_gives_empty_listing() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        brand: Some("Porsche".to_string()),
        ..VehicleFilter::default()
    };
    assert!(filter_and_sort(catalog.vehicles(), &filter, SortMode::None).is_empty());
}

// =============================================================================
// Price bounds
// =============================================================================

#[test]
fn test_price_on_request_shown_without_price_bounds() {
    let catalog = StaticCatalog::demo();
    let results = filter_and_sort(catalog.vehicles(), &VehicleFilter::default(), SortMode::None);
    assert!(results.iter().any(|v| v.price.is_none()));
}

#[test]
fn test_price_on_request_hidden_by_any_price_bound() {
    let catalog = StaticCatalog::demo();
    for filter in [
        VehicleFilter {
            min_price: Some(0.0),
            ..VehicleFilter::default()
        },
        VehicleFilter {
            max_price: Some(1_000_000.0),
            ..VehicleFilter::default()
        },
    ] {
        let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
        assert!(results.iter().all(|v| v.price.is_some()));
        assert_eq!(results.len(), 2);
    }
}

#[test]
fn test_malformed_bound_is_no_bound() {
    assert_eq!(parse_bound("abc"), None);
    assert_eq!(parse_bound("  "), None);
    assert_eq!(parse_bound("35 000"), None);
    assert_eq!(parse_bound(" 35000 "), Some(35000.0));

    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter {
        min_price: parse_bound("cheap"),
        ..VehicleFilter::default()
    };
    let results = filter_and_sort(catalog.vehicles(), &filter, SortMode::None);
    assert_eq!(results.len(), catalog.vehicles().len());
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_price_sorts_keep_price_on_request_last() {
    let catalog = StaticCatalog::demo();
    let filter = VehicleFilter::default();

    let asc = filter_and_sort(catalog.vehicles(), &filter, SortMode::PriceAscending);
    assert_eq!(ids(&asc), vec!["SLA-0002", "SLA-0001", "SLA-0003"]);

    let desc = filter_and_sort(catalog.vehicles(), &filter, SortMode::PriceDescending);
    assert_eq!(ids(&desc), vec!["SLA-0001", "SLA-0002", "SLA-0003"]);
}

#[test]
fn test_newest_first() {
    let catalog = StaticCatalog::demo();
    let results =
        filter_and_sort(catalog.vehicles(), &VehicleFilter::default(), SortMode::YearDescending);
    let years: Vec<i32> = results.iter().map(|v| v.year).collect();
    assert_eq!(years, vec![2020, 2019, 2018]);
}

#[test]
fn test_facets_from_demo_stock() {
    let catalog = StaticCatalog::demo();
    let facets = Facets::from_vehicles(catalog.vehicles());
    assert_eq!(facets.brands, vec!["Audi", "BMW", "Mercedes-Benz"]);
    assert_eq!(facets.fuels, vec!["Diesel", "Essence"]);
    assert_eq!(facets.gearboxes, vec!["Automatique", "Manuelle"]);
}

// =============================================================================
// Catalog files
// =============================================================================

#[test]
fn test_catalog_file_replaces_demo_stock() {
    let mut catalog = StaticCatalog::demo();
    catalog.vehicles.truncate(1);
    let file = NamedTempFile::new().unwrap();
    catalog.save_to_file(file.path()).unwrap();

    let loaded = StaticCatalog::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.vehicles().len(), 1);
    assert_eq!(loaded.products().len(), catalog.products.len());
    assert!(loaded.find_vehicle("SLA-0001").is_some());
    assert!(loaded.find_vehicle("SLA-0002").is_none());
}

#[test]
fn test_catalog_file_with_duplicate_stock_ids_is_rejected() {
    let mut catalog = StaticCatalog::demo();
    let duplicate = catalog.vehicles[0].clone();
    catalog.vehicles.push(duplicate);
    let json = serde_json::to_string(&catalog).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    assert!(StaticCatalog::load_from_file(file.path()).is_err());
}

#[test]
fn test_catalog_file_must_be_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"vehicles = []").unwrap();
    assert!(StaticCatalog::load_from_file(file.path()).is_err());
}
