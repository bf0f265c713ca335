//! Marketplace listing, filters and vehicle sheet

use ratatui::text::{Line, Span};
use strum::IntoEnumIterator;

use super::view::PageView;
use crate::app::{MarketField, MarketplacePage};
use crate::catalog::{CatalogSource, Vehicle, format_mileage, format_price};
use crate::components::text_field;
use crate::config_file::SiteConfig;
use crate::routes::{messages, whatsapp_link};
use crate::theme::Styles;

pub fn render(view: &mut PageView, page: &MarketplacePage, catalog: &dyn CatalogSource) {
    view.kicker("Nos véhicules");
    view.title("Stock disponible");
    view.muted("Véhicules de moins de 5 ans, importés d’Allemagne et du Luxembourg.");

    view.section("Filtres");
    for field in MarketField::iter() {
        let focused = page.focus == field;
        let editing = focused && page.editing;
        if editing {
            view.focus_next();
        }
        let value = page.value(field);
        if field.is_text() {
            view.push(text_field::field_line(field.label(), &value, focused, editing));
        } else {
            let label_style = if focused { Styles::focused() } else { Styles::text_secondary() };
            view.push(Line::from(vec![
                Span::styled(format!("{:<18}", field.label()), label_style),
                Span::styled(format!("‹ {value} ›"), Styles::text()),
            ]));
        }
    }

    let results = page.results(catalog.vehicles());
    view.section(&format!("{} véhicule(s)", results.len()));
    if results.is_empty() {
        view.muted("Aucun véhicule ne correspond à ces critères.");
        view.action("X", "Réinitialiser les filtres");
        return;
    }

    for (i, vehicle) in results.iter().enumerate() {
        let selected = i == page.selected;
        if selected && !page.editing {
            view.focus_next();
        }
        listing_row(view, vehicle, selected);
    }
}

fn listing_row(view: &mut PageView, vehicle: &Vehicle, selected: bool) {
    let marker = if selected { "›" } else { " " };
    let name_style = if selected { Styles::focused() } else { Styles::text_bold() };
    let trim = vehicle.trim.as_deref().unwrap_or("");
    view.push(Line::from(vec![
        Span::styled(format!("{marker} {}", vehicle.display_name()), name_style),
        Span::styled(format!(" {trim}"), Styles::text_secondary()),
        Span::styled(format!("  {}", format_price(vehicle.price)), Styles::price()),
    ]));
    view.push(Line::styled(
        format!(
            "    {} · {} · {} · {} · {}",
            vehicle.stock_id,
            vehicle.year,
            format_mileage(vehicle.mileage_km),
            vehicle.fuel,
            vehicle.gearbox
        ),
        Styles::text_muted(),
    ));
}

/// Body of the vehicle detail modal
pub fn vehicle_sheet(vehicle: &Vehicle, config: &SiteConfig) -> Vec<Line<'static>> {
    let mut view = PageView::new();
    let title = match &vehicle.trim {
        Some(trim) => format!("{} {trim}", vehicle.display_name()),
        None => vehicle.display_name(),
    };
    view.title(&title);
    view.push(Line::styled(format_price(vehicle.price), Styles::price()));
    view.blank();

    view.field("Stock", &vehicle.stock_id);
    view.field("Année", &vehicle.year.to_string());
    view.field("Kilométrage", &format_mileage(vehicle.mileage_km));
    view.field("Boîte", &vehicle.gearbox);
    view.field("Carburant", &vehicle.fuel);
    view.field("Puissance", &vehicle.power);
    view.field("Transmission", &vehicle.drivetrain);
    view.field("Provenance", &vehicle.provenance_label());
    view.field("Entretien", &vehicle.maintenance);
    view.field("VIN", &vehicle.vin_masked);
    if let Some(colour) = &vehicle.colour {
        view.field("Couleur", colour);
    }

    if !vehicle.options.is_empty() {
        view.section("Options");
        for option in &vehicle.options {
            view.bullet(option);
        }
    }

    view.blank();
    view.text(&vehicle.description);
    view.blank();

    let link = whatsapp_link(
        &config.whatsapp_number,
        &messages::vehicle(&vehicle.display_name(), &vehicle.stock_id),
    );
    view.push(Line::from(vec![
        Span::styled("[W] ", Styles::title()),
        Span::styled("Contacter sur WhatsApp", Styles::whatsapp()),
    ]));
    view.muted(&format!("    {link}"));
    view.action("D", "Demander le dossier");
    view.lines
}
