//! Modal windows: programme preview, vehicle sheet, confirmations and links

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

use super::marketplace;
use super::view::PageView;
use crate::app::{HomePage, Popup};
use crate::catalog::Vehicle;
use crate::components::popup::render_window;
use crate::config_file::SiteConfig;
use crate::content::home;
use crate::theme::Styles;

/// Informational popup (WhatsApp link, submission summary)
pub fn render_popup(f: &mut Frame, area: Rect, popup: &Popup) {
    let lines: Vec<Line> = popup
        .lines
        .iter()
        .map(|l| Line::styled(l.clone(), Styles::text()))
        .collect();
    render_window(f, area, &popup.title, lines, Some("Enter / Esc pour fermer"));
}

/// Home "Programmes de formation" modal
pub fn render_programme_modal(f: &mut Frame, area: Rect, page: &HomePage) {
    let Some(index) = page.modal else {
        return;
    };
    let programme = &home::PROGRAMMES[index];

    let mut view = PageView::new();
    view.kicker(programme.level);
    view.text(programme.card.text);
    view.blank();
    for detail in programme.details {
        view.bullet(detail);
    }
    view.blank();

    let arrow = |enabled: bool, label: &'static str| {
        let style = if enabled {
            Styles::button_inactive()
        } else {
            Styles::button_disabled()
        };
        Span::styled(label, style)
    };
    view.push(Line::from(vec![
        arrow(page.modal_has_previous(), "← Précédent"),
        Span::raw("   "),
        Span::styled("[R] Réserver", Styles::button_active()),
        Span::raw("   "),
        arrow(page.modal_has_next(), "Suivant →"),
    ]));

    render_window(
        f,
        area,
        programme.card.title,
        view.lines,
        Some("Esc pour fermer"),
    );
}

/// Vehicle detail sheet
pub fn render_vehicle_detail(f: &mut Frame, area: Rect, vehicle: &Vehicle, config: &SiteConfig) {
    render_window(
        f,
        area,
        &vehicle.stock_id,
        marketplace::vehicle_sheet(vehicle, config),
        Some("W WhatsApp · D Dossier · Esc Fermer"),
    );
}
