//! Booking products sold through the reservation wizard

use serde::{Deserialize, Serialize};

use crate::types::{Discipline, Level};

/// A bookable track session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingProduct {
    pub id: String,
    pub discipline: Discipline,
    pub level: Level,
    pub title: String,
    /// Human-readable duration, e.g. "45 min"
    pub duration: String,
    /// Price in euros
    pub price: u32,
    pub blurb: String,
}

impl BookingProduct {
    fn new(
        id: &str,
        discipline: Discipline,
        level: Level,
        title: &str,
        duration: &str,
        price: u32,
        blurb: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            discipline,
            level,
            title: title.to_string(),
            duration: duration.to_string(),
            price,
            blurb: blurb.to_string(),
        }
    }

    /// Whether this product passes the given discipline/level constraints.
    /// An absent constraint matches everything.
    pub fn matches(&self, discipline: Option<Discipline>, level: Option<Level>) -> bool {
        discipline.is_none_or(|d| d == self.discipline) && level.is_none_or(|l| l == self.level)
    }
}

/// Academy price list
pub fn demo_products() -> Vec<BookingProduct> {
    use Discipline::{Automobile, Karting};
    use Level::{Advanced, Beginner, Intermediate};

    vec![
        BookingProduct::new(
            "auto-decouverte-20",
            Automobile,
            Beginner,
            "Découverte circuit",
            "20 min",
            120,
            "Premiers tours, sensations et sécurité.",
        ),
        BookingProduct::new(
            "auto-initiation-30",
            Automobile,
            Beginner,
            "Initiation trajectoires",
            "30 min",
            180,
            "Bases du freinage et des trajectoires.",
        ),
        BookingProduct::new(
            "auto-performance-45",
            Automobile,
            Intermediate,
            "Stage performance",
            "45 min",
            290,
            "Rythme, précision, confiance.",
        ),
        BookingProduct::new(
            "auto-attaque-60",
            Automobile,
            Intermediate,
            "Stage attaque",
            "60 min",
            390,
            "Repousser ses limites en sécurité.",
        ),
        BookingProduct::new(
            "auto-coaching-90",
            Automobile,
            Advanced,
            "Coaching pro",
            "90 min",
            590,
            "Coaching individuel + data.",
        ),
        BookingProduct::new(
            "karting-loisir-20",
            Karting,
            Beginner,
            "Karting loisir",
            "20 min",
            60,
            "Fun et accessible.",
        ),
        BookingProduct::new(
            "karting-chrono-30",
            Karting,
            Intermediate,
            "Karting chrono",
            "30 min",
            95,
            "Travail du temps au tour.",
        ),
        BookingProduct::new(
            "karting-coaching-60",
            Karting,
            Advanced,
            "Karting coaching",
            "60 min",
            160,
            "Coaching compétition.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_discipline_level_pair_has_a_product() {
        use strum::IntoEnumIterator;
        let products = demo_products();
        for d in Discipline::iter() {
            for l in Level::iter() {
                assert!(
                    products.iter().any(|p| p.matches(Some(d), Some(l))),
                    "no product for {d}/{l}"
                );
            }
        }
    }

    #[test]
    fn test_matches_without_constraints() {
        let products = demo_products();
        assert!(products.iter().all(|p| p.matches(None, None)));
        assert_eq!(
            products
                .iter()
                .filter(|p| p.matches(Some(Discipline::Karting), None))
                .count(),
            3
        );
    }
}
