//! Vehicle records and the demo stock

use serde::{Deserialize, Serialize};

/// A vehicle offered by the dealership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique stock identifier (e.g. `SLA-0001`)
    pub stock_id: String,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub year: i32,
    pub mileage_km: u32,
    /// Asking price in euros; `None` means "price on request"
    pub price: Option<u32>,
    pub image: String,
    pub gearbox: String,
    pub fuel: String,
    pub power: String,
    pub drivetrain: String,
    /// ISO country code the car is imported from
    pub provenance: String,
    pub maintenance: String,
    pub vin_masked: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub description: String,
}

impl Vehicle {
    /// "Make Model"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Text matched by the free-text search
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.make,
            self.model,
            self.trim.as_deref().unwrap_or(""),
            self.stock_id
        )
        .to_lowercase()
    }

    /// Provenance with its flag, when known
    pub fn provenance_label(&self) -> String {
        match self.provenance.as_str() {
            "DE" => "🇩🇪 Allemagne".to_string(),
            "LU" => "🇱🇺 Luxembourg".to_string(),
            other => other.to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo stock shown on the dealer and marketplace pages
pub fn demo_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            stock_id: "SLA-0001".to_string(),
            make: "Audi".to_string(),
            model: "S5 Sportback".to_string(),
            trim: Some("Quattro".to_string()),
            year: 2019,
            mileage_km: 62_000,
            price: Some(38_900),
            image: "/audi-s5.jpg".to_string(),
            gearbox: "Automatique".to_string(),
            fuel: "Essence".to_string(),
            power: "354 ch (260 kW)".to_string(),
            drivetrain: "Quattro".to_string(),
            provenance: "DE".to_string(),
            maintenance: "Concession Audi".to_string(),
            vin_masked: "WAUZZZ…1234".to_string(),
            colour: Some("Noir".to_string()),
            options: strings(&[
                "Matrix LED",
                "Virtual Cockpit",
                "Sièges sport chauffants",
                "Toit pano",
            ]),
            description: "Fin de leasing 🇩🇪, historique constructeur complet, contrôle 150 points. \
                          Dossier transparent et prêt à être transmis."
                .to_string(),
        },
        Vehicle {
            stock_id: "SLA-0002".to_string(),
            make: "BMW".to_string(),
            model: "330i".to_string(),
            trim: Some("M Sport".to_string()),
            year: 2020,
            mileage_km: 48_000,
            price: Some(32_900),
            image: "/bmw-330i.jpg".to_string(),
            gearbox: "Automatique".to_string(),
            fuel: "Essence".to_string(),
            power: "258 ch (190 kW)".to_string(),
            drivetrain: "Propulsion".to_string(),
            provenance: "LU".to_string(),
            maintenance: "BMW Luxembourg".to_string(),
            vin_masked: "WBA…5678".to_string(),
            colour: Some("Gris".to_string()),
            options: strings(&[
                "Driving Assistant",
                "Live Cockpit Pro",
                "Shadowline",
                "Harman/Kardon",
            ]),
            description: "Première main, suivi constructeur, fin de leasing. \
                          Rapport d’état détaillé disponible sur demande."
                .to_string(),
        },
        Vehicle {
            stock_id: "SLA-0003".to_string(),
            make: "Mercedes-Benz".to_string(),
            model: "C220d".to_string(),
            trim: Some("AMG Line".to_string()),
            year: 2018,
            mileage_km: 89_000,
            price: None,
            image: "/mb-c220d.jpg".to_string(),
            gearbox: "Manuelle".to_string(),
            fuel: "Diesel".to_string(),
            power: "170 ch (125 kW)".to_string(),
            drivetrain: "Propulsion".to_string(),
            provenance: "DE".to_string(),
            maintenance: "Mercedes-Benz".to_string(),
            vin_masked: "WDD…9012".to_string(),
            colour: Some("Bleu".to_string()),
            options: strings(&[
                "LED High Performance",
                "COMAND",
                "Pack Stationnement",
                "Keyless-Go",
            ]),
            description: "Réservée. Dossier complet, CT à jour, transparence totale. \
                          Contacte-nous pour la prochaine dispo."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_haystack_includes_trim_and_stock() {
        let audi = &demo_vehicles()[0];
        assert_eq!(audi.search_haystack(), "audi s5 sportback quattro sla-0001");
    }

    #[test]
    fn test_haystack_without_trim_keeps_spacing() {
        let mut car = demo_vehicles()[1].clone();
        car.trim = None;
        assert_eq!(car.search_haystack(), "bmw 330i  sla-0002");
    }

    #[test]
    fn test_only_mercedes_is_price_on_request() {
        let on_request: Vec<_> = demo_vehicles()
            .into_iter()
            .filter(|v| v.price.is_none())
            .map(|v| v.stock_id)
            .collect();
        assert_eq!(on_request, vec!["SLA-0003".to_string()]);
    }
}
