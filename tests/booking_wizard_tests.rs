//! Tests for the reservation wizard
//!
//! These tests verify:
//! - Product visibility per discipline and level
//! - Slots per weekday
//! - Clearing of dependent selections
//! - Deep links from offer pages
//! - Confirmation

use chrono::NaiveDate;
use sl_automotive::booking::{BookingStep, BookingWizard, WizardError, slots_for};
use sl_automotive::catalog::StaticCatalog;
use sl_automotive::types::{Discipline, Level};

fn wizard() -> BookingWizard {
    BookingWizard::new(&StaticCatalog::demo())
}

fn visible_ids(wizard: &BookingWizard) -> Vec<String> {
    wizard
        .visible_products()
        .iter()
        .map(|p| p.id.clone())
        .collect()
}

// =============================================================================
// Product visibility
// =============================================================================

#[test]
fn test_all_products_visible_before_any_choice() {
    let wizard = wizard();
    assert_eq!(wizard.step(), BookingStep::SelectDiscipline);
    assert_eq!(wizard.visible_products().len(), 8);
}

#[test]
fn test_karting_beginner_is_karting_loisir_only() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Karting);
    wizard.select_level(Level::Beginner).unwrap();
    assert_eq!(visible_ids(&wizard), vec!["karting-loisir-20"]);
}

#[test]
fn test_auto_intermediate_products() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Automobile);
    wizard.select_level(Level::Intermediate).unwrap();
    assert_eq!(
        visible_ids(&wizard),
        vec!["auto-performance-45", "auto-attaque-60"]
    );
}

#[test]
fn test_product_of_other_discipline_rejected() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Automobile);
    wizard.select_level(Level::Beginner).unwrap();
    assert_eq!(
        wizard.select_product("karting-loisir-20"),
        Err(WizardError::UnknownProduct("karting-loisir-20".to_string()))
    );
    assert!(wizard.selected_product().is_none());
}

// =============================================================================
// Slots
// =============================================================================

#[test]
fn test_saturday_has_six_slots() {
    let saturday = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    assert_eq!(
        slots_for(saturday),
        &["09:00", "10:30", "12:00", "14:00", "15:30", "17:00"]
    );
}

#[test]
fn test_sunday_has_weekend_slots() {
    let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    assert_eq!(slots_for(sunday).len(), 6);
}

#[test]
fn test_tuesday_has_five_slots() {
    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
    assert_eq!(
        slots_for(tuesday),
        &["10:00", "11:30", "14:00", "15:30", "17:00"]
    );
}

// =============================================================================
// Dependent selections
// =============================================================================

#[test]
fn test_switching_discipline_clears_product() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Automobile);
    wizard.select_level(Level::Intermediate).unwrap();
    wizard.select_product("auto-performance-45").unwrap();
    assert_eq!(wizard.step(), BookingStep::SelectSlot);

    wizard.select_discipline(Discipline::Karting);
    assert_eq!(wizard.discipline(), Some(Discipline::Karting));
    assert_eq!(wizard.level(), None);
    assert!(wizard.selected_product().is_none());
    assert_eq!(wizard.step(), BookingStep::SelectLevel);
}

#[test]
fn test_changing_product_clears_date_and_slot() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Automobile);
    wizard.select_level(Level::Intermediate).unwrap();
    wizard.select_product("auto-performance-45").unwrap();
    wizard.set_date("2026-03-14").unwrap();
    wizard.select_slot("09:00").unwrap();
    assert_eq!(wizard.step(), BookingStep::EnterContact);

    wizard.select_product("auto-attaque-60").unwrap();
    assert_eq!(wizard.date(), None);
    assert_eq!(wizard.slot(), None);
}

#[test]
fn test_reselecting_same_product_keeps_date() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Karting);
    wizard.select_level(Level::Advanced).unwrap();
    wizard.select_product("karting-coaching-60").unwrap();
    wizard.set_date("2026-03-17").unwrap();

    wizard.select_product("karting-coaching-60").unwrap();
    assert_eq!(wizard.date(), NaiveDate::from_ymd_opt(2026, 3, 17));
}

#[test]
fn test_changing_date_drops_slot_missing_from_new_day() {
    let mut wizard = wizard();
    wizard.select_discipline(Discipline::Karting);
    wizard.select_level(Level::Beginner).unwrap();
    wizard.select_product("karting-loisir-20").unwrap();
    wizard.set_date("2026-03-14").unwrap();
    wizard.select_slot("09:00").unwrap();

    wizard.set_date("2026-03-17").unwrap();
    assert_eq!(wizard.slot(), None);
    assert_eq!(
        wizard.select_slot("09:00"),
        Err(WizardError::UnavailableSlot("09:00".to_string()))
    );
}

// =============================================================================
// Deep links
// =============================================================================

#[test]
fn test_known_product_link_preselects_everything() {
    let catalog = StaticCatalog::demo();
    let wizard = BookingWizard::from_product_query(&catalog, Some("auto-performance-45"));
    assert_eq!(wizard.discipline(), Some(Discipline::Automobile));
    assert_eq!(wizard.level(), Some(Level::Intermediate));
    assert_eq!(
        wizard.selected_product().map(|p| p.id.as_str()),
        Some("auto-performance-45")
    );
    assert_eq!(wizard.step(), BookingStep::SelectSlot);
}

#[test]
fn test_unknown_product_link_gives_initial_state() {
    let catalog = StaticCatalog::demo();
    let wizard = BookingWizard::from_product_query(&catalog, Some("auto-drift-15"));
    assert_eq!(wizard.discipline(), None);
    assert_eq!(wizard.level(), None);
    assert!(wizard.selected_product().is_none());
    assert_eq!(wizard.step(), BookingStep::SelectDiscipline);
}

// =============================================================================
// Confirmation
// =============================================================================

#[test]
fn test_confirm_incomplete_reservation() {
    let wizard = wizard();
    assert_eq!(wizard.confirm(), Err(WizardError::Incomplete));
}

#[test]
fn test_confirm_complete_reservation() {
    let catalog = StaticCatalog::demo();
    let mut wizard = BookingWizard::from_product_query(&catalog, Some("karting-loisir-20"));
    wizard.set_date("2026-03-14").unwrap();
    wizard.select_slot("12:00").unwrap();

    assert!(matches!(
        wizard.confirm(),
        Err(WizardError::MissingContact(missing)) if missing.len() == 4
    ));

    wizard.contact.first_name = "Lou".to_string();
    wizard.contact.last_name = "Stanley".to_string();
    wizard.contact.email = "lou@example.com".to_string();
    wizard.contact.phone = "+352 600 000".to_string();

    let request = wizard.confirm().unwrap();
    assert_eq!(request.product_id, "karting-loisir-20");
    assert_eq!(request.price, 60);
    assert_eq!(request.slot, "12:00");
    assert_eq!(request.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
}
