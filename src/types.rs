//! Type-safe domain enums for the storefront
//!
//! Stringly-typed choices from the catalog and forms are modelled as enums so
//! selections can be matched exhaustively. The `strum` serializations are the
//! identifiers used in query strings, JSON catalog files and CLI arguments.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Driving discipline offered by the academy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Discipline {
    #[serde(rename = "auto")]
    #[strum(serialize = "auto")]
    Automobile,
    #[serde(rename = "karting")]
    #[strum(serialize = "karting")]
    Karting,
}

impl Discipline {
    /// Label shown on the selection cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automobile => "🚗 Pilotage automobile",
            Self::Karting => "🏎️ Karting",
        }
    }
}

/// Experience level of a booking product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Level {
    #[serde(rename = "debutant")]
    #[strum(serialize = "debutant")]
    Beginner,
    #[serde(rename = "intermediaire")]
    #[strum(serialize = "intermediaire")]
    Intermediate,
    #[serde(rename = "confirme")]
    #[strum(serialize = "confirme")]
    Advanced,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Débutant",
            Self::Intermediate => "Intermédiaire",
            Self::Advanced => "Confirmé",
        }
    }
}

/// Ordering applied to the vehicle listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Catalog order
    #[default]
    #[strum(serialize = "none")]
    None,
    /// Newest model year first
    #[strum(serialize = "newest")]
    YearDescending,
    /// Cheapest first, price on request last
    #[strum(serialize = "asc")]
    PriceAscending,
    /// Most expensive first, price on request last
    #[strum(serialize = "desc")]
    PriceDescending,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Aucun",
            Self::YearDescending => "Plus récent",
            Self::PriceAscending => "Prix ↑",
            Self::PriceDescending => "Prix ↓",
        }
    }

    /// Next mode in selector order, wrapping around
    pub fn cycle(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|m| m == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous mode in selector order, wrapping around
    pub fn cycle_back(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|m| m == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Kind of workshop intervention requested through the garage intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Intervention {
    #[strum(serialize = "Diagnostic")]
    Diagnostic,
    #[strum(serialize = "Révision")]
    Service,
    #[strum(serialize = "Pneus & roues")]
    TyresAndWheels,
    #[strum(serialize = "Moteur")]
    Engine,
    #[strum(serialize = "Freinage")]
    Brakes,
    #[strum(serialize = "Électronique")]
    Electronics,
}

/// Symptom reported in the garage intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Symptom {
    #[strum(serialize = "Voyant allumé")]
    WarningLight,
    #[strum(serialize = "Bruit suspect")]
    StrangeNoise,
    #[strum(serialize = "Perte de puissance")]
    PowerLoss,
    #[strum(serialize = "Vibrations")]
    Vibrations,
    #[strum(serialize = "Démarrage difficile")]
    HardStart,
    #[strum(serialize = "Fumée")]
    Smoke,
}
