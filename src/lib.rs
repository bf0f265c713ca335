//! SL Automotive Library
//!
//! Storefront for SL Automotive and the Stanley Racing Academy: marketing
//! pages, the vehicle marketplace, the reservation wizard and lead forms,
//! rendered in the terminal.

pub mod app;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod content;
pub mod error;
pub mod forms;
pub mod routes;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use booking::{BookingRequest, BookingStep, BookingWizard, WizardError, slots_for};
pub use carousel::Carousel;
pub use catalog::{
    BookingProduct, CatalogSource, StaticCatalog, Vehicle, VehicleFilter, filter_and_sort,
};
pub use config_file::SiteConfig;
pub use error::SiteError;
pub use forms::{ContactDetails, FormError, GarageIntake, InquiryForm};
pub use routes::{Location, Route, whatsapp_link};
pub use types::{Discipline, Intervention, Level, SortMode, Symptom};
