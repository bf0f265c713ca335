//! Lead-capture forms
//!
//! Forms only check that required fields are present. Submitting builds a
//! summary value that the application logs and shows back to the visitor;
//! nothing leaves the process.
//!
//! - `garage` - Four-step workshop intake
//! - `inquiry` - Single-step investor and contact forms

pub mod garage;
pub mod inquiry;

pub use garage::{GarageIntake, GarageRequest, GarageStep, VehicleDetails};
pub use inquiry::{Inquiry, InquiryForm, InquiryKind};

use serde::Serialize;
use thiserror::Error;

/// Form submission failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Labels of the `(label, value)` pairs whose value is blank
pub(crate) fn missing<'a>(fields: impl IntoIterator<Item = (&'static str, &'a str)>) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Contact block shared by the reservation wizard and the garage intake
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// Labels of the fields shown on screen, in order
    pub const LABELS: [&'static str; 4] = ["Prénom", "Nom", "Email", "Téléphone"];

    /// Labels of empty fields
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing([
            (Self::LABELS[0], self.first_name.as_str()),
            (Self::LABELS[1], self.last_name.as_str()),
            (Self::LABELS[2], self.email.as_str()),
            (Self::LABELS[3], self.phone.as_str()),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Mutable access by on-screen position
    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.phone),
            _ => None,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.phone),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}
