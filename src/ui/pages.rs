//! Content pages: home, academy, formations, dealer, process, investor,
//! infrastructure

use ratatui::text::{Line, Span};

use super::view::{PageView, action_line, choice_row};
use crate::app::{DealerPage, FormationsPage, HomePage, InfrastructurePage};
use crate::catalog::{CatalogSource, format_mileage, format_price};
use crate::content::{self, academy, dealer, formations, home, infrastructure, investor, process};
use crate::theme::Styles;

/// `● ○ ○` position indicator
fn dots(index: usize, len: usize) -> String {
    (0..len)
        .map(|i| if i == index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn home(view: &mut PageView, page: &HomePage) {
    view.kicker(home::KICKER);
    view.title(home::TITLE);
    view.blank();
    view.text(home::LEAD);
    view.push(Line::from(
        home::BADGES
            .iter()
            .flat_map(|b| [Span::styled(format!("[{b}]"), Styles::kicker()), Span::raw(" ")])
            .collect::<Vec<_>>(),
    ));

    let slide = &home::HERO_SLIDES[page.hero.index()];
    view.blank();
    let mut hero = vec![
        Span::styled(format!("🖼  {}", slide.caption), Styles::text()),
        Span::styled(format!("  {}", slide.image), Styles::text_muted()),
    ];
    if page.hero.is_paused() {
        hero.push(Span::styled("  (pause)", Styles::warning()));
    }
    view.push(Line::from(hero));
    view.muted(&dots(page.hero.index(), page.hero.len()));
    view.action("R", "Réserver une session");

    view.section("L'Académie");
    for paragraph in home::ACADEMY {
        view.text(paragraph);
    }

    view.section("Le fondateur");
    for paragraph in home::FOUNDER {
        view.text(paragraph);
    }

    view.section("Infrastructure");
    for paragraph in home::INFRASTRUCTURE {
        view.text(paragraph);
    }

    view.section("Programmes de formation");
    let levels: Vec<&str> = home::PROGRAMMES.iter().map(|p| p.level).collect();
    view.focus_next();
    view.push(choice_row(&levels, None, Some(page.programme)));
    let programme = &home::PROGRAMMES[page.programme];
    view.card(&programme.card);
    view.action("Enter", "En savoir plus");
}

pub fn academy(view: &mut PageView) {
    view.kicker("L'Académie");
    view.title("Stanley Racing Academy");
    view.blank();
    view.text(academy::INTRO);

    view.section("Vision");
    view.text(academy::VISION);
    view.section("Mission");
    view.text(academy::MISSION);

    view.section("Nos valeurs");
    view.cards(&academy::VALUES);

    view.section("Un modèle structuré");
    view.steps(&academy::MODEL);

    view.section("Pour qui ?");
    view.cards(&academy::AUDIENCES);

    view.section("Sécurité");
    view.text(academy::SAFETY);
    view.section("Vision long terme");
    view.text(academy::LONG_TERM);

    view.blank();
    view.action("Enter", "Voir les formations");
}

pub fn formations(view: &mut PageView, page: &FormationsPage) {
    view.kicker("Formations");
    view.title("Des parcours progressifs, du premier tour à la compétition");
    view.blank();
    view.text(formations::INTRO);
    view.muted(&formations::TAGS.join(" • "));

    view.section("Niveaux");
    for (i, level) in formations::LEVELS.iter().enumerate() {
        let active = i == page.level;
        if active {
            view.focus_next();
        }
        let style = if active { Styles::selected() } else { Styles::unselected() };
        view.push(Line::from(vec![
            Span::styled(format!(" {} ", level.badge), style),
            Span::styled(format!("  {}", level.title), Styles::text_bold()),
        ]));
    }

    let level = &formations::LEVELS[page.level];
    view.blank();
    view.text(level.promise);
    view.field("Tarif", level.price_from);
    view.field("Véhicules", level.vehicles);
    for offer in level.offers {
        view.blank();
        view.push(Line::from(vec![
            Span::styled(format!("▸ {}", offer.title), Styles::text_bold()),
            Span::styled(format!("  {}", offer.price), Styles::price()),
        ]));
        view.text(&format!("  {}", offer.tagline));
        view.muted(&format!("  {} · {}", offer.vehicles, offer.includes));
    }
    view.blank();
    view.push(action_line("Enter", "Réserver", true));

    view.section(formations::MECHANIC_TITLE);
    view.kicker(formations::MECHANIC_BADGE);
    view.text(formations::MECHANIC_PROMISE);
    view.field("Tarif", formations::MECHANIC_PRICE);
    view.field("Véhicules", formations::MECHANIC_VEHICLES);
    for bullet in formations::MECHANIC_BULLETS {
        view.bullet(bullet);
    }
    view.action("C", "Nous contacter");

    view.section("Sécurité & encadrement");
    view.cards(&formations::SAFETY);
}

pub fn dealer(view: &mut PageView, page: &DealerPage, catalog: &dyn CatalogSource) {
    view.kicker("SL Automotive");
    view.title(dealer::TITLE);
    view.blank();
    view.text(dealer::SUBTITLE);

    view.section("Pourquoi SL Automotive");
    view.cards(&dealer::WHY);

    view.blank();
    view.push(Line::from(
        dealer::FIGURES
            .iter()
            .flat_map(|(figure, label)| {
                [
                    Span::styled(figure.to_string(), Styles::price()),
                    Span::styled(format!(" {label}    "), Styles::text_secondary()),
                ]
            })
            .collect::<Vec<_>>(),
    ));

    view.section("Sélection du moment");
    for (i, vehicle) in catalog.vehicles().iter().enumerate() {
        let selected = i == page.selected;
        if selected {
            view.focus_next();
        }
        let marker = if selected { "›" } else { " " };
        let name_style = if selected { Styles::focused() } else { Styles::text_bold() };
        view.push(Line::from(vec![
            Span::styled(format!("{marker} {}", vehicle.display_name()), name_style),
            Span::styled(
                format!("  {} · {}  ", vehicle.year, format_mileage(vehicle.mileage_km)),
                Styles::text_secondary(),
            ),
            Span::styled(format_price(vehicle.price), Styles::price()),
        ]));
    }
    view.action("S", "Voir le stock");

    view.section(dealer::CTA);
    view.push(Line::from(vec![
        Span::styled("[W] ", Styles::title()),
        Span::styled("Contacter sur WhatsApp", Styles::whatsapp()),
    ]));
}

pub fn process(view: &mut PageView) {
    view.kicker("Processus");
    view.title(process::TITLE);
    view.blank();
    view.text(process::LEAD);

    view.section("Étapes");
    view.steps(&process::STEPS);

    view.section("Transparence");
    view.cards(&process::TRANSPARENCY);

    view.section("Questions fréquentes");
    view.cards(&process::FAQ);

    view.section(process::CTA);
    view.action("S", "Voir le stock");
    view.push(Line::from(vec![
        Span::styled("[W] ", Styles::title()),
        Span::styled("Parler à un conseiller", Styles::whatsapp()),
    ]));
    view.blank();
    view.muted(process::TAGLINE);
}

/// Informational part of the investor page; the form follows it
pub fn investor(view: &mut PageView) {
    view.kicker("Investisseurs");
    view.title(investor::TITLE);
    view.blank();
    view.text(investor::LEAD);

    view.section("Les piliers du projet");
    view.cards(&investor::PILLARS);

    view.section("Pour quels investisseurs ?");
    view.cards(&investor::FIT);

    view.blank();
    view.muted(investor::DOSSIER_NOTE);
}

pub fn infrastructure(view: &mut PageView, page: &InfrastructurePage) {
    view.kicker("Infrastructure");
    view.title(infrastructure::TITLE);
    view.blank();
    view.text(infrastructure::LEAD);

    view.section(infrastructure::LOCATION_TITLE);
    for paragraph in infrastructure::LOCATION {
        view.text(paragraph);
    }

    view.section("Les composantes du complexe");
    let component = &infrastructure::COMPONENTS[page.components.index()];
    view.focus_next();
    view.card(component);
    let mut indicator = vec![Span::styled(
        dots(page.components.index(), page.components.len()),
        Styles::text_muted(),
    )];
    if page.components.is_paused() {
        indicator.push(Span::styled("  (pause)", Styles::warning()));
    }
    view.push(Line::from(indicator));

    view.section("Sécurité");
    view.text(infrastructure::SAFETY);

    view.section("Développement par phases");
    view.cards(&infrastructure::PHASES);
}

/// Footer shared by every page
pub fn footer(view: &mut PageView) {
    view.blank();
    view.muted(content::FOOTER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots() {
        assert_eq!(dots(1, 3), "○ ● ○");
    }
}
