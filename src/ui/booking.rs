//! Reservation page
//!
//! Sections are stacked and revealed as selections are made: discipline,
//! level, product, date and slot, then contact details and the recap.

use ratatui::text::{Line, Span};
use strum::IntoEnumIterator;

use super::view::{PageView, action_line, choice_row};
use crate::app::{ReserverFocus, ReserverPage};
use crate::booking::BookingStep;
use crate::components::text_field;
use crate::forms::ContactDetails;
use crate::theme::Styles;
use crate::types::{Discipline, Level};

fn cursor_for(page: &ReserverPage, focus: ReserverFocus) -> Option<usize> {
    (page.focus == focus && !page.editing).then_some(page.cursor)
}

fn heading(view: &mut PageView, page: &ReserverPage, focus: ReserverFocus, title: &str) {
    view.blank();
    if page.focus == focus {
        view.focus_next();
    }
    let style = if page.focus == focus {
        Styles::title()
    } else {
        Styles::text_bold()
    };
    view.push(Line::styled(title.to_string(), style));
}

pub fn render(view: &mut PageView, page: &ReserverPage) {
    let wizard = &page.wizard;
    let step = wizard.step();

    view.push(Line::from(vec![
        Span::styled("Réserver une session", Styles::title()),
        Span::styled("    [Esc] ×", Styles::text_muted()),
    ]));
    view.muted(&format!(
        "Étape {}/{} · {}",
        step.step_number(),
        BookingStep::TOTAL_STEPS,
        step.title()
    ));

    heading(view, page, ReserverFocus::Discipline, BookingStep::SelectDiscipline.title());
    let disciplines: Vec<&str> = Discipline::iter().map(|d| d.label()).collect();
    let selected = wizard
        .discipline()
        .and_then(|d| Discipline::iter().position(|x| x == d));
    view.push(choice_row(&disciplines, selected, cursor_for(page, ReserverFocus::Discipline)));

    if wizard.discipline().is_some() {
        heading(view, page, ReserverFocus::Level, BookingStep::SelectLevel.title());
        let levels: Vec<&str> = Level::iter().map(|l| l.label()).collect();
        let selected = wizard.level().and_then(|l| Level::iter().position(|x| x == l));
        view.push(choice_row(&levels, selected, cursor_for(page, ReserverFocus::Level)));
    }

    if wizard.level().is_some() {
        heading(view, page, ReserverFocus::Product, BookingStep::SelectProduct.title());
        let cursor = cursor_for(page, ReserverFocus::Product);
        let chosen = wizard.selected_product().map(|p| p.id.as_str());
        let products = wizard.visible_products();
        if products.is_empty() {
            view.muted("Aucune formation pour ce niveau.");
        }
        for (i, product) in products.iter().enumerate() {
            let style = if chosen == Some(product.id.as_str()) {
                Styles::selected()
            } else if cursor == Some(i) {
                Styles::focused()
            } else {
                Styles::text_bold()
            };
            let marker = if cursor == Some(i) { "›" } else { " " };
            view.push(Line::from(vec![
                Span::styled(format!("{marker}{}", product.title), style),
                Span::styled(format!("  {}", product.duration), Styles::text_secondary()),
                Span::styled(format!("  {} €", product.price), Styles::price()),
            ]));
            view.muted(&format!("   {}", product.blurb));
        }
    }

    if wizard.selected_product().is_some() {
        heading(view, page, ReserverFocus::Date, BookingStep::SelectSlot.title());
        let focused = page.focus == ReserverFocus::Date;
        view.push(text_field::field_line(
            "Date (AAAA-MM-JJ)",
            &page.date_input,
            focused,
            focused && page.editing,
        ));
        if focused && !page.editing {
            view.muted("Enter pour saisir · ←/→ jour précédent/suivant");
        }
    }

    if wizard.date().is_some() {
        if page.focus == ReserverFocus::Slot {
            view.focus_next();
        }
        let slots = wizard.available_slots();
        let selected = wizard.slot().and_then(|s| slots.iter().position(|x| *x == s));
        view.push(choice_row(slots, selected, cursor_for(page, ReserverFocus::Slot)));
    }

    if wizard.slot().is_some() {
        heading(view, page, ReserverFocus::Contact(0), BookingStep::EnterContact.title());
        for (i, label) in ContactDetails::LABELS.iter().enumerate() {
            let focused = page.focus == ReserverFocus::Contact(i);
            if focused && i > 0 {
                view.focus_next();
            }
            let value = wizard.contact.field(i).unwrap_or("");
            view.push(text_field::field_line(label, value, focused, focused && page.editing));
        }
        view.blank();
        if page.focus == ReserverFocus::Confirm {
            view.focus_next();
        }
        view.push(action_line(
            "Enter",
            "Confirmer & payer",
            page.focus == ReserverFocus::Confirm,
        ));
    }

    if let Some(error) = &page.error {
        view.blank();
        view.error(error);
    }

    recap(view, page);
}

fn recap(view: &mut PageView, page: &ReserverPage) {
    let wizard = &page.wizard;
    view.section("Récapitulatif");
    match wizard.selected_product() {
        Some(product) => {
            view.field("Formation", &product.title);
            view.field("Durée", &product.duration);
            view.field("Prix", &format!("{} €", product.price));
        }
        None => view.muted("Choisissez une formation."),
    }
    if let Some(date) = wizard.date() {
        view.field("Date", &date.format("%d/%m/%Y").to_string());
    }
    if let Some(slot) = wizard.slot() {
        view.field("Créneau", slot);
    }
    if let Some(request) = &page.confirmed {
        view.blank();
        view.success(&format!(
            "Demande enregistrée pour {} le {} à {}",
            request.title,
            request.date.format("%d/%m/%Y"),
            request.slot
        ));
    }
}
