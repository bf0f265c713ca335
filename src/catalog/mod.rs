//! Read-only catalog of vehicles and booking products
//!
//! Pages never reach for literal data. They receive a [`CatalogSource`],
//! which is either the built-in demo stock ([`StaticCatalog::demo`]) or a
//! JSON document loaded from disk so a real inventory can be dropped in.
//!
//! # Modules
//! - `vehicles` - Vehicle record and the demo stock
//! - `products` - Booking product record and the academy price list
//! - `filter` - Marketplace filtering, sorting and display formatting

pub mod filter;
pub mod products;
pub mod vehicles;

pub use filter::{Facets, VehicleFilter, filter_and_sort, format_mileage, format_price, parse_bound};
pub use products::BookingProduct;
pub use vehicles::Vehicle;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::SiteError;

/// Read-only access to the data shown by the site
pub trait CatalogSource: Send + Sync {
    /// Vehicles in listing order
    fn vehicles(&self) -> &[Vehicle];

    /// Booking products in price-list order
    fn products(&self) -> &[BookingProduct];

    /// Look up a vehicle by stock id
    fn find_vehicle(&self, stock_id: &str) -> Option<&Vehicle> {
        self.vehicles().iter().find(|v| v.stock_id == stock_id)
    }

    /// Look up a booking product by id
    fn find_product(&self, id: &str) -> Option<&BookingProduct> {
        self.products().iter().find(|p| p.id == id)
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub products: Vec<BookingProduct>,
}

impl StaticCatalog {
    /// Built-in demo stock and academy price list
    pub fn demo() -> Self {
        Self {
            vehicles: vehicles::demo_vehicles(),
            products: products::demo_products(),
        }
    }

    /// Load a catalog from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;
        catalog.validate()?;

        info!(
            vehicles = catalog.vehicles.len(),
            products = catalog.products.len(),
            "Catalog loaded from {:?}",
            path.as_ref()
        );
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Reject duplicate identifiers
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut stock_ids = HashSet::new();
        for vehicle in &self.vehicles {
            if vehicle.stock_id.trim().is_empty() {
                return Err(SiteError::catalog("vehicle with empty stock id"));
            }
            if !stock_ids.insert(vehicle.stock_id.as_str()) {
                return Err(SiteError::catalog(format!(
                    "duplicate stock id {}",
                    vehicle.stock_id
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(SiteError::catalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        debug!("Catalog validated");
        Ok(())
    }
}

impl CatalogSource for StaticCatalog {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn products(&self) -> &[BookingProduct] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.vehicles().len(), 3);
        assert_eq!(catalog.products().len(), 8);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_find_helpers() {
        let catalog = StaticCatalog::demo();
        assert_eq!(
            catalog.find_vehicle("SLA-0002").map(|v| v.model.as_str()),
            Some("330i")
        );
        assert!(catalog.find_vehicle("SLA-9999").is_none());
        assert_eq!(
            catalog.find_product("karting-chrono-30").map(|p| p.price),
            Some(95)
        );
        assert!(catalog.find_product("performance-45").is_none());
    }

    #[test]
    fn test_duplicate_stock_id_rejected() {
        let mut catalog = StaticCatalog::demo();
        let copy = catalog.vehicles[0].clone();
        catalog.vehicles.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("SLA-0001"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let catalog = StaticCatalog::demo();
        catalog.save_to_file(file.path()).unwrap();

        let loaded = StaticCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = StaticCatalog::load_from_file("/nonexistent/catalog.json");
        assert!(result.is_err());
    }
}
