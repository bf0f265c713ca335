//! Garage assistant and inquiry forms

use ratatui::text::{Line, Span};
use strum::IntoEnumIterator;

use super::view::{PageView, action_line};
use crate::app::{GarageFocus, GaragePage, InquiryPage};
use crate::components::text_field;
use crate::content::garage;
use crate::forms::ContactDetails;
use crate::forms::garage::{GarageStep, VehicleDetails};
use crate::theme::Styles;
use crate::types::{Intervention, Symptom};

pub fn garage(view: &mut PageView, page: &GaragePage) {
    view.kicker("Garage");
    view.title("Entretien & réparation");
    view.blank();
    view.text(garage::INTRO);
    view.action("D", "Diagnostiquer mon véhicule");

    view.section("Nos services");
    view.cards(&garage::SERVICES);

    view.section("Notre méthode");
    view.push(Line::from(
        garage::METHOD
            .iter()
            .enumerate()
            .flat_map(|(i, step)| {
                let sep = if i == 0 { "" } else { " → " };
                [
                    Span::styled(sep, Styles::text_muted()),
                    Span::styled(step.to_string(), Styles::text_bold()),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    view.muted(garage::METHOD_NOTE);

    assistant(view, page);
}

fn assistant(view: &mut PageView, page: &GaragePage) {
    let intake = &page.intake;
    let step = intake.step();

    view.section("Assistant diagnostic");
    view.text(garage::ASSISTANT_LEAD);
    view.muted(&format!(
        "Étape {}/{} · {}",
        step.step_number(),
        GarageStep::TOTAL_STEPS,
        step.title()
    ));
    view.blank();

    let focused = page.focused();
    let cursor = |i: usize| focused == GarageFocus::Choice(i);

    match step {
        GarageStep::VehicleInfo => {
            for (i, label) in VehicleDetails::LABELS.iter().enumerate() {
                let on = focused == GarageFocus::Field(i);
                if on {
                    view.focus_next();
                }
                let value = intake.vehicle.field(i).unwrap_or("");
                view.push(text_field::field_line(label, value, on, on && page.editing));
            }
        }
        GarageStep::Intervention => {
            for (i, intervention) in Intervention::iter().enumerate() {
                if cursor(i) {
                    view.focus_next();
                }
                let chosen = intake.intervention() == Some(intervention);
                view.push(option_line(&intervention.to_string(), chosen, cursor(i), "(•)", "( )"));
            }
        }
        GarageStep::Symptoms => {
            for (i, symptom) in Symptom::iter().enumerate() {
                if cursor(i) {
                    view.focus_next();
                }
                let checked = intake.has_symptom(symptom);
                view.push(option_line(&symptom.to_string(), checked, cursor(i), "[x]", "[ ]"));
            }
        }
        GarageStep::Contact => {
            view.muted(garage::CONTACT_LEAD);
            for (i, label) in ContactDetails::LABELS.iter().enumerate() {
                let on = focused == GarageFocus::Field(i);
                if on {
                    view.focus_next();
                }
                let value = intake.contact.field(i).unwrap_or("");
                view.push(text_field::field_line(label, value, on, on && page.editing));
            }
        }
    }

    view.blank();
    let mut buttons = Vec::new();
    if step != GarageStep::VehicleInfo {
        buttons.extend(action_line("Enter", "Précédent", focused == GarageFocus::Previous).spans);
        buttons.push(Span::raw("   "));
    }
    let next_label = if step == GarageStep::Contact {
        "Envoyer la demande"
    } else {
        "Continuer"
    };
    if matches!(focused, GarageFocus::Previous | GarageFocus::Next) {
        view.focus_next();
    }
    buttons.extend(action_line("Enter", next_label, focused == GarageFocus::Next).spans);
    view.push(Line::from(buttons));

    if let Some(error) = &page.error {
        view.error(error);
    }
    if page.submitted.is_some() {
        view.success("Demande envoyée. Nous vous recontactons rapidement.");
    }
}

fn option_line(label: &str, chosen: bool, cursor: bool, on: &str, off: &str) -> Line<'static> {
    let marker = if chosen { on } else { off };
    let style = if cursor {
        Styles::focused()
    } else if chosen {
        Styles::text_bold()
    } else {
        Styles::unselected()
    };
    Line::from(vec![
        Span::styled(format!("{} ", if cursor { "›" } else { " " }), Styles::title()),
        Span::styled(format!("{marker} {label}"), style),
    ])
}

/// Investor or contact form
pub fn inquiry(view: &mut PageView, page: &InquiryPage) {
    let form = &page.form;
    view.section(form.kind().title());
    if let Some(stock) = form.stock_id() {
        view.muted(&format!("Véhicule concerné : {stock}"));
    }

    for (i, label) in form.kind().labels().iter().enumerate() {
        let on = page.focus == i;
        if on {
            view.focus_next();
        }
        let value = form.field(i).unwrap_or("");
        view.push(text_field::field_line(label, value, on, on && page.editing));
    }

    view.blank();
    if page.focus == InquiryPage::SUBMIT {
        view.focus_next();
    }
    view.push(action_line(
        "Enter",
        "Envoyer la demande",
        page.focus == InquiryPage::SUBMIT,
    ));

    if let Some(error) = &page.error {
        view.error(error);
    }
    if page.submitted.is_some() {
        view.success("Message transmis. Merci !");
    }
}

/// Contact page: heading, WhatsApp hint and the form
pub fn contact(view: &mut PageView, page: &InquiryPage) {
    view.kicker("Contact");
    view.title("Parlons de votre projet");
    view.blank();
    view.text("Formation, véhicule, garage ou partenariat : laissez-nous un message, nous répondons rapidement.");
    inquiry(view, page);
}
