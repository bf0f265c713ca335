//! Reservation wizard
//!
//! A linear selection flow over the booking catalog. Each choice narrows the
//! next one, and changing an earlier choice clears everything that depended
//! on it.
//!
//! # State Transitions
//!
//! ```text
//! SelectDiscipline -> SelectLevel -> SelectProduct -> SelectSlot -> EnterContact
//! ```
//!
//! The current step is never stored: it is derived from which selections are
//! present, so it cannot drift out of sync with them.
//!
//! # Invariants
//!
//! - A level is only set when a discipline is set
//! - A product is only set when it belongs to the selected discipline and level
//! - A date is only set when a product is set
//! - A slot is only set when it is offered on the selected date

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{BookingProduct, CatalogSource};
use crate::forms::ContactDetails;
use crate::types::{Discipline, Level};

/// Slots offered on Saturdays and Sundays
pub const WEEKEND_SLOTS: [&str; 6] = ["09:00", "10:30", "12:00", "14:00", "15:30", "17:00"];

/// Slots offered Monday to Friday
pub const WEEKDAY_SLOTS: [&str; 5] = ["10:00", "11:30", "14:00", "15:30", "17:00"];

/// Date format of the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time slots available on a given day
pub fn slots_for(date: NaiveDate) -> &'static [&'static str] {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => &WEEKEND_SLOTS,
        _ => &WEEKDAY_SLOTS,
    }
}

/// Rejected wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("choose a discipline before a level")]
    LevelWithoutDiscipline,

    #[error("choose a level before a session")]
    ProductWithoutLevel,

    #[error("session '{0}' is not offered for this discipline and level")]
    UnknownProduct(String),

    #[error("choose a session before a date")]
    DateWithoutProduct,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("choose a date before a time slot")]
    SlotWithoutDate,

    #[error("slot '{0}' is not offered on this date")]
    UnavailableSlot(String),

    #[error("the reservation is not complete")]
    Incomplete,

    #[error("missing contact details: {}", .0.join(", "))]
    MissingContact(Vec<&'static str>),
}

/// Step of the reservation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    SelectDiscipline,
    SelectLevel,
    SelectProduct,
    /// Date and time slot
    SelectSlot,
    /// Contact details and confirmation
    EnterContact,
}

impl BookingStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectDiscipline => "1. Discipline",
            Self::SelectLevel => "2. Niveau",
            Self::SelectProduct => "3. Formation",
            Self::SelectSlot => "4. Créneau",
            Self::EnterContact => "5. Vos informations",
        }
    }

    pub fn step_number(&self) -> usize {
        match self {
            Self::SelectDiscipline => 1,
            Self::SelectLevel => 2,
            Self::SelectProduct => 3,
            Self::SelectSlot => 4,
            Self::EnterContact => 5,
        }
    }

    pub const TOTAL_STEPS: usize = 5;
}

/// Confirmed selection handed back by [`BookingWizard::confirm`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub product_id: String,
    pub title: String,
    pub duration: String,
    pub date: NaiveDate,
    pub slot: String,
    pub price: u32,
    pub contact: ContactDetails,
}

/// Wizard state: catalog snapshot plus the visitor's selections
#[derive(Debug, Clone)]
pub struct BookingWizard {
    products: Vec<BookingProduct>,
    discipline: Option<Discipline>,
    level: Option<Level>,
    product_id: Option<String>,
    date: Option<NaiveDate>,
    slot: Option<String>,
    /// Draft contact fields, edited directly by the form
    pub contact: ContactDetails,
}

impl BookingWizard {
    /// Empty wizard over the catalog's booking products
    pub fn new(catalog: &dyn CatalogSource) -> Self {
        Self {
            products: catalog.products().to_vec(),
            discipline: None,
            level: None,
            product_id: None,
            date: None,
            slot: None,
            contact: ContactDetails::default(),
        }
    }

    /// Wizard opened through `/reserver?product=<id>`.
    ///
    /// A known id pre-selects its discipline, level and product. Anything
    /// else leaves the wizard in its initial state.
    pub fn from_product_query(catalog: &dyn CatalogSource, product: Option<&str>) -> Self {
        let mut wizard = Self::new(catalog);
        let Some(id) = product else {
            return wizard;
        };

        match catalog.find_product(id) {
            Some(found) => {
                wizard.discipline = Some(found.discipline);
                wizard.level = Some(found.level);
                wizard.product_id = Some(found.id.clone());
                info!(product = %found.id, "Reservation pre-selected from link");
            }
            None => debug!(product = %id, "Ignoring unknown product in reservation link"),
        }
        wizard
    }

    pub fn step(&self) -> BookingStep {
        if self.discipline.is_none() {
            BookingStep::SelectDiscipline
        } else if self.level.is_none() {
            BookingStep::SelectLevel
        } else if self.product_id.is_none() {
            BookingStep::SelectProduct
        } else if self.date.is_none() || self.slot.is_none() {
            BookingStep::SelectSlot
        } else {
            BookingStep::EnterContact
        }
    }

    pub fn discipline(&self) -> Option<Discipline> {
        self.discipline
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn selected_product(&self) -> Option<&BookingProduct> {
        let id = self.product_id.as_deref()?;
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching the selected discipline and level. Absent
    /// selections do not constrain.
    pub fn visible_products(&self) -> Vec<&BookingProduct> {
        self.products
            .iter()
            .filter(|p| p.matches(self.discipline, self.level))
            .collect()
    }

    /// Slots for the selected date, empty when no date is chosen
    pub fn available_slots(&self) -> &'static [&'static str] {
        self.date.map(slots_for).unwrap_or(&[])
    }

    /// Choose a discipline. Always clears level, product, date and slot.
    pub fn select_discipline(&mut self, discipline: Discipline) {
        self.discipline = Some(discipline);
        self.level = None;
        self.clear_product();
    }

    /// Choose a level. Clears product, date and slot.
    pub fn select_level(&mut self, level: Level) -> Result<(), WizardError> {
        if self.discipline.is_none() {
            return Err(WizardError::LevelWithoutDiscipline);
        }
        self.level = Some(level);
        self.clear_product();
        Ok(())
    }

    /// Choose a product among the visible ones. Switching to a different
    /// product clears date and slot.
    pub fn select_product(&mut self, id: &str) -> Result<(), WizardError> {
        if self.level.is_none() {
            return Err(WizardError::ProductWithoutLevel);
        }
        if !self.visible_products().iter().any(|p| p.id == id) {
            return Err(WizardError::UnknownProduct(id.to_string()));
        }
        if self.product_id.as_deref() != Some(id) {
            self.product_id = Some(id.to_string());
            self.date = None;
            self.slot = None;
        }
        Ok(())
    }

    /// Set the date from the date input. Empty text clears it; a changed
    /// date clears the slot.
    pub fn set_date(&mut self, text: &str) -> Result<(), WizardError> {
        if self.product_id.is_none() {
            return Err(WizardError::DateWithoutProduct);
        }

        let text = text.trim();
        let date = if text.is_empty() {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map_err(|_| WizardError::InvalidDate(text.to_string()))?;
            Some(parsed)
        };

        if date != self.date {
            self.date = date;
            self.slot = None;
        }
        Ok(())
    }

    /// Choose one of the slots offered on the selected date
    pub fn select_slot(&mut self, slot: &str) -> Result<(), WizardError> {
        if self.date.is_none() {
            return Err(WizardError::SlotWithoutDate);
        }
        if !self.available_slots().contains(&slot) {
            return Err(WizardError::UnavailableSlot(slot.to_string()));
        }
        self.slot = Some(slot.to_string());
        Ok(())
    }

    /// "Confirmer & payer". There is no booking backend: a complete
    /// reservation is returned as a request summary and nothing is reserved.
    pub fn confirm(&self) -> Result<BookingRequest, WizardError> {
        let (Some(product), Some(date), Some(slot)) =
            (self.selected_product(), self.date, self.slot.as_ref())
        else {
            return Err(WizardError::Incomplete);
        };

        let missing = self.contact.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError::MissingContact(missing));
        }

        info!(product = %product.id, %date, slot = %slot, "Reservation request prepared");
        Ok(BookingRequest {
            product_id: product.id.clone(),
            title: product.title.clone(),
            duration: product.duration.clone(),
            date,
            slot: slot.clone(),
            price: product.price,
            contact: self.contact.clone(),
        })
    }

    fn clear_product(&mut self) {
        self.product_id = None;
        self.date = None;
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn wizard_at_slot_step() -> BookingWizard {
        let mut wizard = BookingWizard::new(&StaticCatalog::demo());
        wizard.select_discipline(Discipline::Automobile);
        wizard.select_level(Level::Intermediate).unwrap();
        wizard.select_product("auto-performance-45").unwrap();
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = BookingWizard::new(&StaticCatalog::demo());
        assert_eq!(wizard.step(), BookingStep::SelectDiscipline);
        assert_eq!(wizard.visible_products().len(), 8);
        assert!(wizard.available_slots().is_empty());
    }

    #[test]
    fn test_level_requires_discipline() {
        let mut wizard = BookingWizard::new(&StaticCatalog::demo());
        assert_eq!(
            wizard.select_level(Level::Beginner),
            Err(WizardError::LevelWithoutDiscipline)
        );
        assert!(wizard.level().is_none());
    }

    #[test]
    fn test_product_must_be_visible() {
        let mut wizard = BookingWizard::new(&StaticCatalog::demo());
        wizard.select_discipline(Discipline::Karting);
        wizard.select_level(Level::Beginner).unwrap();
        assert_eq!(
            wizard.select_product("auto-decouverte-20"),
            Err(WizardError::UnknownProduct("auto-decouverte-20".to_string()))
        );
        assert!(wizard.selected_product().is_none());
    }

    #[test]
    fn test_invalid_date_keeps_state() {
        let mut wizard = wizard_at_slot_step();
        wizard.set_date("2026-03-14").unwrap();
        wizard.select_slot("09:00").unwrap();

        assert!(matches!(
            wizard.set_date("14/03/2026"),
            Err(WizardError::InvalidDate(_))
        ));
        assert_eq!(wizard.slot(), Some("09:00"));
    }

    #[test]
    fn test_empty_date_clears_date_and_slot() {
        let mut wizard = wizard_at_slot_step();
        wizard.set_date("2026-03-14").unwrap();
        wizard.select_slot("12:00").unwrap();
        wizard.set_date("").unwrap();
        assert!(wizard.date().is_none());
        assert!(wizard.slot().is_none());
    }

    #[test]
    fn test_same_date_keeps_slot() {
        let mut wizard = wizard_at_slot_step();
        wizard.set_date("2026-03-14").unwrap();
        wizard.select_slot("12:00").unwrap();
        wizard.set_date(" 2026-03-14 ").unwrap();
        assert_eq!(wizard.slot(), Some("12:00"));
    }

    #[test]
    fn test_weekday_slot_rejected_on_weekend() {
        let mut wizard = wizard_at_slot_step();
        // 2026-03-14 is a Saturday
        wizard.set_date("2026-03-14").unwrap();
        assert_eq!(
            wizard.select_slot("11:30"),
            Err(WizardError::UnavailableSlot("11:30".to_string()))
        );
    }

    #[test]
    fn test_confirm_requires_contact() {
        let mut wizard = wizard_at_slot_step();
        assert_eq!(wizard.confirm(), Err(WizardError::Incomplete));

        wizard.set_date("2026-03-17").unwrap();
        wizard.select_slot("10:00").unwrap();
        assert_eq!(wizard.step(), BookingStep::EnterContact);
        assert!(matches!(
            wizard.confirm(),
            Err(WizardError::MissingContact(fields)) if fields.len() == 4
        ));

        wizard.contact = ContactDetails {
            first_name: "Aïssatou".to_string(),
            last_name: "Ndiaye".to_string(),
            email: "a.ndiaye@example.com".to_string(),
            phone: "+221 77 123 45 67".to_string(),
        };
        let request = wizard.confirm().unwrap();
        assert_eq!(request.price, 290);
        assert_eq!(request.slot, "10:00");
        assert_eq!(request.date.to_string(), "2026-03-17");
    }
}
