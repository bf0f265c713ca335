//! Marketplace filtering and sorting
//!
//! The listing is recomputed from scratch on every input change: the filter is
//! a pure function of the catalog, the [`VehicleFilter`] and the [`SortMode`].
//! Numeric bounds come from free-text inputs and go through [`parse_bound`],
//! which turns anything unparseable into "no bound" rather than an error.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use super::Vehicle;
use crate::types::SortMode;

/// Criteria applied to the vehicle listing. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    /// Free-text search over make, model, trim and stock id
    pub query: String,
    pub brand: Option<String>,
    pub fuel: Option<String>,
    pub gearbox: Option<String>,
    pub min_year: Option<f64>,
    pub max_year: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl VehicleFilter {
    /// Whether any price bound is set
    pub fn has_price_bound(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    /// Whether every criterion is at its "any" value
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.brand.is_none()
            && self.fuel.is_none()
            && self.gearbox.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
            && !self.has_price_bound()
    }

    /// Check a single vehicle against every criterion
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !vehicle.search_haystack().contains(&query) {
            return false;
        }

        if self.brand.as_ref().is_some_and(|b| *b != vehicle.make) {
            return false;
        }
        if self.fuel.as_ref().is_some_and(|f| *f != vehicle.fuel) {
            return false;
        }
        if self.gearbox.as_ref().is_some_and(|g| *g != vehicle.gearbox) {
            return false;
        }

        let year = f64::from(vehicle.year);
        if self.min_year.is_some_and(|min| year < min) {
            return false;
        }
        if self.max_year.is_some_and(|max| year > max) {
            return false;
        }

        // A vehicle without a price fails any active price bound
        if self.has_price_bound() {
            let Some(price) = vehicle.price.map(f64::from) else {
                return false;
            };
            if self.min_price.is_some_and(|min| price < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| price > max) {
                return false;
            }
        }

        true
    }
}

/// Parse a numeric bound typed by the user.
///
/// Decimals are real bounds. Empty, whitespace-only, malformed and
/// non-finite input all mean "no bound".
pub fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Filter the catalog, then order the survivors.
///
/// The result is always a subsequence of `vehicles` reordered by `sort`;
/// ties keep catalog order.
pub fn filter_and_sort<'a>(
    vehicles: &'a [Vehicle],
    filter: &VehicleFilter,
    sort: SortMode,
) -> Vec<&'a Vehicle> {
    let mut list: Vec<&Vehicle> = vehicles.iter().filter(|v| filter.matches(v)).collect();

    match sort {
        SortMode::None => {}
        SortMode::YearDescending => list.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::PriceAscending => list.sort_by(|a, b| compare_prices(a.price, b.price, false)),
        SortMode::PriceDescending => list.sort_by(|a, b| compare_prices(a.price, b.price, true)),
    }

    list
}

/// Order two optional prices. Missing prices go last in both directions.
fn compare_prices(a: Option<u32>, b: Option<u32>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct values offered by the filter selectors, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub fuels: Vec<String>,
    pub gearboxes: Vec<String>,
}

impl Facets {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let collect = |f: fn(&Vehicle) -> &String| -> Vec<String> {
            vehicles
                .iter()
                .map(f)
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        };

        Self {
            brands: collect(|v| &v.make),
            fuels: collect(|v| &v.fuel),
            gearboxes: collect(|v| &v.gearbox),
        }
    }
}

/// Group digits by thousands with a space: 62000 -> "62 000"
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Euro price as displayed on listing cards
pub fn format_price(price: Option<u32>) -> String {
    match price {
        Some(p) => format!("{},00 €", group_thousands(p)),
        None => "Prix sur demande".to_string(),
    }
}

pub fn format_mileage(km: u32) -> String {
    format!("{} km", group_thousands(km))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::vehicles::demo_vehicles;

    fn ids(list: &[&Vehicle]) -> Vec<String> {
        list.iter().map(|v| v.stock_id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_catalog_order() {
        let vehicles = demo_vehicles();
        let result = filter_and_sort(&vehicles, &VehicleFilter::default(), SortMode::None);
        assert_eq!(ids(&result), vec!["SLA-0001", "SLA-0002", "SLA-0003"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let vehicles = demo_vehicles();
        let filter = VehicleFilter {
            query: "  amg LINE ".to_string(),
            ..Default::default()
        };
        let result = filter_and_sort(&vehicles, &filter, SortMode::None);
        assert_eq!(ids(&result), vec!["SLA-0003"]);
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let vehicles = demo_vehicles();
        let filter = VehicleFilter {
            min_year: Some(2019.0),
            max_year: Some(2019.0),
            ..Default::default()
        };
        let result = filter_and_sort(&vehicles, &filter, SortMode::None);
        assert_eq!(ids(&result), vec!["SLA-0001"]);
    }

    #[test]
    fn test_price_sorts_put_on_request_last() {
        let vehicles = demo_vehicles();
        let filter = VehicleFilter::default();
        let asc = filter_and_sort(&vehicles, &filter, SortMode::PriceAscending);
        assert_eq!(ids(&asc), vec!["SLA-0002", "SLA-0001", "SLA-0003"]);
        let desc = filter_and_sort(&vehicles, &filter, SortMode::PriceDescending);
        assert_eq!(ids(&desc), vec!["SLA-0001", "SLA-0002", "SLA-0003"]);
    }

    #[test]
    fn test_newest_first() {
        let vehicles = demo_vehicles();
        let result = filter_and_sort(&vehicles, &VehicleFilter::default(), SortMode::YearDescending);
        assert_eq!(ids(&result), vec!["SLA-0002", "SLA-0001", "SLA-0003"]);
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("2019"), Some(2019.0));
        assert_eq!(parse_bound(" 30000 "), Some(30000.0));
        assert_eq!(parse_bound("12.5"), Some(12.5));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("   "), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound("NaN"), None);
    }

    #[test]
    fn test_decimal_price_bound_hides_price_on_request() {
        let vehicles = demo_vehicles();
        let filter = VehicleFilter {
            min_price: parse_bound("30000.5"),
            ..Default::default()
        };
        let result = filter_and_sort(&vehicles, &filter, SortMode::None);
        assert_eq!(ids(&result), vec!["SLA-0001", "SLA-0002"]);
    }

    #[test]
    fn test_facets_are_sorted_and_distinct() {
        let facets = Facets::from_vehicles(&demo_vehicles());
        assert_eq!(facets.brands, vec!["Audi", "BMW", "Mercedes-Benz"]);
        assert_eq!(facets.fuels, vec!["Diesel", "Essence"]);
        assert_eq!(facets.gearboxes, vec!["Automatique", "Manuelle"]);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_price(Some(38_900)), "38 900,00 €");
        assert_eq!(format_price(Some(950)), "950,00 €");
        assert_eq!(format_price(Some(1_200_000)), "1 200 000,00 €");
        assert_eq!(format_price(None), "Prix sur demande");
        assert_eq!(format_mileage(62_000), "62 000 km");
    }

    #[test]
    fn test_is_empty() {
        assert!(VehicleFilter::default().is_empty());
        let whitespace = VehicleFilter {
            query: "  ".to_string(),
            ..Default::default()
        };
        assert!(whitespace.is_empty());
        let branded = VehicleFilter {
            brand: Some("BMW".to_string()),
            ..Default::default()
        };
        assert!(!branded.is_empty());
    }
}
