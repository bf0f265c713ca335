//! Keybinding system for context-aware keyboard shortcuts
//!
//! Bindings depend on the interaction mode (browsing a page, typing in a
//! field, burger menu open, popup shown) and, while browsing, on the page.
//! They drive the bottom navigation bar and the help overlay.

use crate::app::AppMode;
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PreviousOption,
    NextOption,
    NextField,
    PreviousField,
    PageUp,
    PageDown,
    Select,
    Toggle,
    Edit,
    Search,
    Sort,
    Reserve,
    WhatsApp,
    Dossier,
    OpenStock,
    Restart,
    Confirm,
    Dismiss,
    Back,
    Menu,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Bindings for menu, popup and editing modes
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Page-specific bindings while browsing
    page_bindings: HashMap<Route, Vec<Keybinding>>,
    /// Bindings shared by every page while browsing
    browse_bindings: Vec<Keybinding>,
    /// Available everywhere except while typing
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            page_bindings: HashMap::new(),
            browse_bindings: Vec::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Aide"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quitter"),
        ];

        self.browse_bindings = vec![
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Remonter"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Descendre"),
            Keybinding::new(KeyCode::Char('m'), KeyAction::Menu, "M", "Menu"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Retour"),
        ];

        let scroll_only = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Défiler"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Défiler"),
        ];

        let form_fields = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Champ suivant"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Champ précédent"),
            Keybinding::new(KeyCode::Enter, KeyAction::Edit, "Enter", "Saisir / valider"),
        ];

        self.page_bindings.insert(
            Route::Home,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Formation précédente"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Formation suivante"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Détails"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Reserve, "R", "Réserver"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Pause diaporama"),
            ],
        );

        let mut academy = scroll_only.clone();
        academy.push(Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Voir les formations"));
        self.page_bindings.insert(Route::Academy, academy);

        self.page_bindings.insert(
            Route::Formations,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Niveau précédent"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Niveau suivant"),
                Keybinding::new(KeyCode::Enter, KeyAction::Reserve, "Enter", "Réserver l'offre"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::Select, "C", "Nous contacter"),
            ],
        );

        let mut garage = form_fields.clone();
        garage.push(Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Cocher"));
        garage.push(Keybinding::new(KeyCode::Char('d'), KeyAction::Restart, "D", "Diagnostiquer"));
        self.page_bindings.insert(Route::Garage, garage);

        self.page_bindings.insert(
            Route::Dealer,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Véhicule précédent"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Véhicule suivant"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Fiche"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::OpenStock, "S", "Voir le stock"),
                Keybinding::new(KeyCode::Char('w'), KeyAction::WhatsApp, "W", "WhatsApp"),
            ],
        );

        self.page_bindings.insert(Route::Investor, form_fields.clone());
        self.page_bindings.insert(Route::Contact, form_fields.clone());

        self.page_bindings.insert(
            Route::Infrastructure,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Composant précédent"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Composant suivant"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Pause diaporama"),
            ],
        );

        self.page_bindings.insert(
            Route::Marketplace,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Filtre suivant"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Filtre précédent"),
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Véhicule précédent"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Véhicule suivant"),
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Option précédente"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Option suivante"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Fiche / saisir"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Rechercher"),
                Keybinding::new(KeyCode::Char('o'), KeyAction::Sort, "O", "Trier"),
                Keybinding::new(KeyCode::Char('x'), KeyAction::Restart, "X", "Réinitialiser"),
                Keybinding::new(KeyCode::Char('w'), KeyAction::WhatsApp, "W", "WhatsApp"),
            ],
        );

        let mut process = scroll_only;
        process.push(Keybinding::new(KeyCode::Char('s'), KeyAction::OpenStock, "S", "Voir le stock"));
        process.push(Keybinding::new(KeyCode::Char('w'), KeyAction::WhatsApp, "W", "WhatsApp"));
        self.page_bindings.insert(Route::Process, process);

        let mut reserver = form_fields;
        reserver.push(Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Option précédente"));
        reserver.push(Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Option suivante"));
        self.page_bindings.insert(Route::Reserver, reserver);

        self.mode_bindings.insert(
            AppMode::Editing,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Valider"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Champ suivant"),
                Keybinding::with_modifiers(
                    KeyCode::Char('u'),
                    KeyModifiers::CONTROL,
                    KeyAction::Restart,
                    "Ctrl+U",
                    "Effacer",
                ),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Terminer"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Menu,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Entrée précédente"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Entrée suivante"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Ouvrir"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Fermer"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Popup,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Précédent"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Suivant"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Reserve, "R", "Réserver"),
                Keybinding::new(KeyCode::Char('w'), KeyAction::WhatsApp, "W", "WhatsApp"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Dossier, "D", "Demander le dossier"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Fermer"),
            ],
        );
    }

    /// Keybindings for a mode and page (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode, route: Route) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        match mode {
            AppMode::Browsing => {
                if let Some(page) = self.page_bindings.get(&route) {
                    bindings.extend(page.iter());
                }
                bindings.extend(self.browse_bindings.iter());
            }
            other => {
                if let Some(mode_bindings) = self.mode_bindings.get(other) {
                    bindings.extend(mode_bindings.iter());
                }
            }
        }

        // Typing must not trigger q or ?
        if *mode != AppMode::Editing {
            bindings.extend(self.global_bindings.iter());
        }

        bindings
    }

    /// Navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode, route: Route) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode, route);

        let priority_actions = match mode {
            AppMode::Editing => vec![KeyAction::Confirm, KeyAction::NextField, KeyAction::Dismiss],
            AppMode::Menu => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Dismiss,
            ],
            AppMode::Popup => vec![KeyAction::Dismiss, KeyAction::Help],
            AppMode::Browsing => match route {
                Route::Home => vec![
                    KeyAction::NextOption,
                    KeyAction::Select,
                    KeyAction::Reserve,
                    KeyAction::Menu,
                    KeyAction::Help,
                    KeyAction::Quit,
                ],
                Route::Marketplace => vec![
                    KeyAction::NextField,
                    KeyAction::NavigateDown,
                    KeyAction::Select,
                    KeyAction::Sort,
                    KeyAction::Menu,
                    KeyAction::Quit,
                ],
                Route::Garage | Route::Investor | Route::Contact | Route::Reserver => vec![
                    KeyAction::NextField,
                    KeyAction::Edit,
                    KeyAction::Back,
                    KeyAction::Menu,
                    KeyAction::Help,
                ],
                Route::Dealer => vec![
                    KeyAction::NavigateDown,
                    KeyAction::Select,
                    KeyAction::OpenStock,
                    KeyAction::Menu,
                    KeyAction::Quit,
                ],
                _ => vec![
                    KeyAction::NavigateDown,
                    KeyAction::PageDown,
                    KeyAction::Menu,
                    KeyAction::Help,
                    KeyAction::Quit,
                ],
            },
        };

        // Combine Up/Down into a single item
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_vertical = false;

        for action in priority_actions {
            let vertical = matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown);
            if vertical && has_vertical {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if vertical {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: binding.description.clone(),
                    });
                    has_vertical = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Full help content for the help overlay
    pub fn get_help_content(&self, mode: &AppMode, route: Route) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousOption
                        | KeyAction::NextOption
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                )
            }),
            ("Actions", |a| {
                !matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousOption
                        | KeyAction::NextOption
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Back
                        | KeyAction::Menu
                        | KeyAction::Help
                        | KeyAction::Quit
                )
            }),
            ("Général", |a| {
                matches!(
                    a,
                    KeyAction::Back | KeyAction::Menu | KeyAction::Help | KeyAction::Quit
                )
            }),
        ];

        let bindings = self.get_bindings(mode, route);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
