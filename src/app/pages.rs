//! Per-page interactive state
//!
//! Each page owns what it needs while displayed: carousel positions, focus,
//! form drafts, open modals. Navigating away drops the page state, so a
//! carousel never outlives its page.

use std::time::Instant;

use chrono::{Days, Local};
use crossterm::event::{KeyCode, KeyEvent};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::booking::{BookingRequest, BookingWizard, DATE_FORMAT};
use crate::carousel::Carousel;
use crate::catalog::{CatalogSource, Facets, Vehicle, VehicleFilter, filter_and_sort, parse_bound};
use crate::components::text_field::{self, EditOutcome};
use crate::config_file::SiteConfig;
use crate::content;
use crate::forms::garage::{GarageIntake, GarageRequest, GarageStep};
use crate::forms::inquiry::{Inquiry, InquiryForm};
use crate::routes::{Location, Route, messages, whatsapp_link};
use crate::types::{Discipline, Intervention, Level, SortMode, Symptom};

/// What a page handler needs from the application
pub struct PageContext<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub config: &'a SiteConfig,
    pub now: Instant,
}

/// Informational window shown over the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub lines: Vec<String>,
}

impl Popup {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Outbound WhatsApp link. The terminal cannot open it, so it is shown.
    pub fn whatsapp(config: &SiteConfig, text: &str) -> Self {
        let link = whatsapp_link(&config.whatsapp_number, text);
        info!(%link, "WhatsApp link requested");
        Self::new(
            "WhatsApp",
            vec![
                "Ouvrez ce lien pour écrire à SL Automotive :".to_string(),
                String::new(),
                link,
                String::new(),
                format!("Message : {text}"),
            ],
        )
    }
}

/// Outcome of a key press handled by a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// The page did not use the key
    Ignored,
    Handled,
    Navigate(Location),
    /// Close the page and return to the previous one
    Back,
    Popup(Popup),
}

fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Cycle through `None` followed by each value of `options`
fn cycle_option(current: &Option<String>, options: &[String], forward: bool) -> Option<String> {
    let position = match current {
        None => 0,
        Some(value) => options.iter().position(|o| o == value).map_or(0, |i| i + 1),
    };
    match step_index(position, options.len() + 1, forward) {
        0 => None,
        i => Some(options[i - 1].clone()),
    }
}

/// Keys for the vehicle detail modal shared by the dealer and marketplace
/// pages
fn vehicle_detail_key(detail: &mut Option<String>, key: KeyEvent, ctx: &PageContext) -> PageAction {
    let Some(stock_id) = detail.clone() else {
        return PageAction::Ignored;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            *detail = None;
            PageAction::Handled
        }
        KeyCode::Char('w') => match ctx.catalog.find_vehicle(&stock_id) {
            Some(vehicle) => PageAction::Popup(Popup::whatsapp(
                ctx.config,
                &messages::vehicle(&vehicle.display_name(), &vehicle.stock_id),
            )),
            None => PageAction::Handled,
        },
        KeyCode::Char('d') => {
            PageAction::Navigate(Location::new(Route::Contact).with_param("stock", &stock_id))
        }
        _ => PageAction::Handled,
    }
}

// =============================================================================
// Academy pages
// =============================================================================

#[derive(Debug, Clone)]
pub struct HomePage {
    pub hero: Carousel,
    /// Programme card under the cursor
    pub programme: usize,
    /// Programme shown in the modal
    pub modal: Option<usize>,
}

impl HomePage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            hero: Carousel::new(
                content::home::HERO_SLIDES.len(),
                ctx.config.hero_interval(),
                ctx.now,
            ),
            programme: 0,
            modal: None,
        }
    }

    pub fn modal_has_previous(&self) -> bool {
        self.modal.is_some_and(|i| i > 0)
    }

    pub fn modal_has_next(&self) -> bool {
        self.modal
            .is_some_and(|i| i + 1 < content::home::PROGRAMMES.len())
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> PageAction {
        let last = content::home::PROGRAMMES.len() - 1;

        if let Some(open) = self.modal {
            match key.code {
                KeyCode::Left if self.modal_has_previous() => self.modal = Some(open - 1),
                KeyCode::Right if self.modal_has_next() => self.modal = Some(open + 1),
                KeyCode::Char('r') => {
                    self.modal = None;
                    return PageAction::Navigate(Route::Reserver.into());
                }
                KeyCode::Esc | KeyCode::Enter => self.modal = None,
                _ => {}
            }
            return PageAction::Handled;
        }

        match key.code {
            KeyCode::Left => self.programme = self.programme.saturating_sub(1),
            KeyCode::Right => self.programme = (self.programme + 1).min(last),
            KeyCode::Enter => self.modal = Some(self.programme),
            KeyCode::Char('r') => return PageAction::Navigate(Route::Reserver.into()),
            KeyCode::Char(' ') => self.hero.toggle_pause(ctx.now),
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormationsPage {
    /// Index into the level tabs
    pub level: usize,
}

impl FormationsPage {
    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        let count = content::formations::LEVELS.len();
        match key.code {
            KeyCode::Up => self.level = self.level.saturating_sub(1),
            KeyCode::Down => self.level = (self.level + 1).min(count - 1),
            KeyCode::Enter => {
                return PageAction::Navigate(Location::parse(content::formations::OFFER_LINK));
            }
            KeyCode::Char('c') => return PageAction::Navigate(Route::Contact.into()),
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

#[derive(Debug, Clone)]
pub struct InfrastructurePage {
    pub components: Carousel,
}

impl InfrastructurePage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            components: Carousel::new(
                content::infrastructure::COMPONENTS.len(),
                ctx.config.components_interval(),
                ctx.now,
            ),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> PageAction {
        match key.code {
            KeyCode::Left => self.components.previous(ctx.now),
            KeyCode::Right => self.components.next(ctx.now),
            KeyCode::Char(' ') => self.components.toggle_pause(ctx.now),
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Focusable element of the garage assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarageFocus {
    Field(usize),
    Choice(usize),
    Previous,
    Next,
}

#[derive(Debug, Clone, Default)]
pub struct GaragePage {
    pub intake: GarageIntake,
    pub focus: usize,
    pub editing: bool,
    pub error: Option<String>,
    pub submitted: Option<GarageRequest>,
}

impl GaragePage {
    /// Focusable elements of the current step, in order
    pub fn focus_order(&self) -> Vec<GarageFocus> {
        let step = self.intake.step();
        let mut order: Vec<GarageFocus> = match step {
            GarageStep::VehicleInfo => (0..4).map(GarageFocus::Field).collect(),
            GarageStep::Intervention => (0..Intervention::iter().count())
                .map(GarageFocus::Choice)
                .collect(),
            GarageStep::Symptoms => (0..Symptom::iter().count()).map(GarageFocus::Choice).collect(),
            GarageStep::Contact => (0..4).map(GarageFocus::Field).collect(),
        };
        if step != GarageStep::VehicleInfo {
            order.push(GarageFocus::Previous);
        }
        order.push(GarageFocus::Next);
        order
    }

    pub fn focused(&self) -> GarageFocus {
        let order = self.focus_order();
        order[self.focus.min(order.len() - 1)]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match self.intake.step() {
            GarageStep::VehicleInfo => self.intake.vehicle.field_mut(index),
            GarageStep::Contact => self.intake.contact.field_mut(index),
            _ => None,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = step_index(self.focus, self.focus_order().len(), forward);
    }

    fn activate(&mut self) -> PageAction {
        match self.focused() {
            GarageFocus::Field(_) => self.editing = true,
            GarageFocus::Choice(i) => match self.intake.step() {
                GarageStep::Intervention => {
                    if let Some(choice) = Intervention::iter().nth(i) {
                        self.intake.select_intervention(choice);
                    }
                }
                GarageStep::Symptoms => {
                    if let Some(symptom) = Symptom::iter().nth(i) {
                        self.intake.toggle_symptom(symptom);
                    }
                }
                _ => {}
            },
            GarageFocus::Previous => {
                self.intake.previous();
                self.focus = 0;
            }
            GarageFocus::Next => {
                if self.intake.step() == GarageStep::Contact {
                    return self.submit();
                }
                self.intake.next();
                self.focus = 0;
            }
        }
        PageAction::Handled
    }

    fn submit(&mut self) -> PageAction {
        match self.intake.submit() {
            Ok(request) => {
                self.error = None;
                let mut lines = vec![
                    format!("Merci {}, votre demande est enregistrée.", request.contact.full_name()),
                    String::new(),
                ];
                let vehicle = &request.vehicle;
                lines.push(format!(
                    "Véhicule : {} {} {} {}",
                    vehicle.make, vehicle.model, vehicle.year, vehicle.mileage
                ));
                if let Some(intervention) = request.intervention {
                    lines.push(format!("Intervention : {intervention}"));
                }
                if !request.symptoms.is_empty() {
                    let symptoms: Vec<String> =
                        request.symptoms.iter().map(ToString::to_string).collect();
                    lines.push(format!("Symptômes : {}", symptoms.join(", ")));
                }
                lines.push(String::new());
                lines.push("Un conseiller vous recontacte rapidement.".to_string());
                self.submitted = Some(request);
                PageAction::Popup(Popup::new("Demande envoyée", lines))
            }
            Err(e) => {
                debug!("Garage intake rejected: {}", e);
                self.error = Some(e.to_string());
                PageAction::Handled
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.editing {
            let GarageFocus::Field(index) = self.focused() else {
                self.editing = false;
                return PageAction::Handled;
            };
            let Some(value) = self.field_mut(index) else {
                self.editing = false;
                return PageAction::Handled;
            };
            match text_field::edit(value, key) {
                EditOutcome::Submit | EditOutcome::Cancel => self.editing = false,
                EditOutcome::Next => {
                    self.editing = false;
                    self.move_focus(true);
                }
                EditOutcome::Previous => {
                    self.editing = false;
                    self.move_focus(false);
                }
                EditOutcome::Changed | EditOutcome::Unchanged => {}
            }
            return PageAction::Handled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => return self.activate(),
            KeyCode::Char(' ') if matches!(self.focused(), GarageFocus::Choice(_)) => {
                return self.activate();
            }
            KeyCode::Char('d') => {
                self.intake.restart();
                self.focus = 0;
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

/// Investor and contact pages
#[derive(Debug, Clone)]
pub struct InquiryPage {
    pub form: InquiryForm,
    /// 0..3 are the fields, 3 is the submit button
    pub focus: usize,
    pub editing: bool,
    pub error: Option<String>,
    pub submitted: Option<Inquiry>,
}

impl InquiryPage {
    pub const SUBMIT: usize = 3;

    pub fn new(form: InquiryForm) -> Self {
        Self {
            form,
            focus: 0,
            editing: false,
            error: None,
            submitted: None,
        }
    }

    fn submit(&mut self) -> PageAction {
        match self.form.submit() {
            Ok(inquiry) => {
                self.error = None;
                let mut lines = vec![
                    format!("Merci {}, votre message a bien été transmis.", inquiry.name),
                    format!("Réponse à : {}", inquiry.email),
                ];
                if let Some(stock) = &inquiry.stock_id {
                    lines.push(format!("Véhicule : {stock}"));
                }
                self.submitted = Some(inquiry);
                PageAction::Popup(Popup::new(self.form.kind().title(), lines))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                PageAction::Handled
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        let count = Self::SUBMIT + 1;

        if self.editing {
            let Some(value) = self.form.field_mut(self.focus) else {
                self.editing = false;
                return PageAction::Handled;
            };
            match text_field::edit(value, key) {
                EditOutcome::Submit | EditOutcome::Cancel => self.editing = false,
                EditOutcome::Next => {
                    self.editing = false;
                    self.focus = step_index(self.focus, count, true);
                }
                EditOutcome::Previous => {
                    self.editing = false;
                    self.focus = step_index(self.focus, count, false);
                }
                EditOutcome::Changed | EditOutcome::Unchanged => {}
            }
            return PageAction::Handled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = step_index(self.focus, count, true),
            KeyCode::BackTab | KeyCode::Up => self.focus = step_index(self.focus, count, false),
            KeyCode::Enter if self.focus == Self::SUBMIT => return self.submit(),
            KeyCode::Enter => self.editing = true,
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

// =============================================================================
// Dealer pages
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct DealerPage {
    /// Featured vehicle under the cursor
    pub selected: usize,
    /// Stock id shown in the detail modal
    pub detail: Option<String>,
}

impl DealerPage {
    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> PageAction {
        if self.detail.is_some() {
            return vehicle_detail_key(&mut self.detail, key, ctx);
        }

        let vehicles = ctx.catalog.vehicles();
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(vehicles.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                self.detail = vehicles.get(self.selected).map(|v| v.stock_id.clone());
            }
            KeyCode::Char('s') => return PageAction::Navigate(Route::Marketplace.into()),
            KeyCode::Char('w') => {
                return PageAction::Popup(Popup::whatsapp(ctx.config, messages::BUY));
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

/// Marketplace controls, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter)]
pub enum MarketField {
    #[default]
    Search,
    Brand,
    Fuel,
    Gearbox,
    MinYear,
    MaxYear,
    MinPrice,
    MaxPrice,
    Sort,
}

impl MarketField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "Recherche",
            Self::Brand => "Marque",
            Self::Fuel => "Carburant",
            Self::Gearbox => "Boîte",
            Self::MinYear => "Année min",
            Self::MaxYear => "Année max",
            Self::MinPrice => "Prix min",
            Self::MaxPrice => "Prix max",
            Self::Sort => "Tri",
        }
    }

    /// Typed in rather than picked from a list
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Brand | Self::Fuel | Self::Gearbox | Self::Sort)
    }

    fn step(&self, forward: bool) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|f| f == self).unwrap_or(0);
        all[step_index(index, all.len(), forward)]
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarketplacePage {
    pub search: String,
    pub brand: Option<String>,
    pub fuel: Option<String>,
    pub gearbox: Option<String>,
    pub min_year: String,
    pub max_year: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: SortMode,
    pub facets: Facets,
    pub focus: MarketField,
    pub editing: bool,
    /// Row of the listing under the cursor
    pub selected: usize,
    pub detail: Option<String>,
}

impl MarketplacePage {
    pub fn new(catalog: &dyn CatalogSource) -> Self {
        Self {
            facets: Facets::from_vehicles(catalog.vehicles()),
            ..Self::default()
        }
    }

    /// Filter built from the current inputs
    pub fn filter(&self) -> VehicleFilter {
        VehicleFilter {
            query: self.search.clone(),
            brand: self.brand.clone(),
            fuel: self.fuel.clone(),
            gearbox: self.gearbox.clone(),
            min_year: parse_bound(&self.min_year),
            max_year: parse_bound(&self.max_year),
            min_price: parse_bound(&self.min_price),
            max_price: parse_bound(&self.max_price),
        }
    }

    pub fn results<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        filter_and_sort(vehicles, &self.filter(), self.sort)
    }

    /// "Réinitialiser": every control back to "any"
    pub fn reset(&mut self) {
        let facets = std::mem::take(&mut self.facets);
        *self = Self {
            facets,
            ..Self::default()
        };
    }

    pub fn value(&self, field: MarketField) -> String {
        let any = |v: &Option<String>, label: &str| v.clone().unwrap_or_else(|| label.to_string());
        match field {
            MarketField::Search => self.search.clone(),
            MarketField::Brand => any(&self.brand, "Toutes"),
            MarketField::Fuel => any(&self.fuel, "Tous"),
            MarketField::Gearbox => any(&self.gearbox, "Toutes"),
            MarketField::MinYear => self.min_year.clone(),
            MarketField::MaxYear => self.max_year.clone(),
            MarketField::MinPrice => self.min_price.clone(),
            MarketField::MaxPrice => self.max_price.clone(),
            MarketField::Sort => self.sort.label().to_string(),
        }
    }

    fn text_mut(&mut self, field: MarketField) -> Option<&mut String> {
        match field {
            MarketField::Search => Some(&mut self.search),
            MarketField::MinYear => Some(&mut self.min_year),
            MarketField::MaxYear => Some(&mut self.max_year),
            MarketField::MinPrice => Some(&mut self.min_price),
            MarketField::MaxPrice => Some(&mut self.max_price),
            _ => None,
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        match self.focus {
            MarketField::Brand => {
                self.brand = cycle_option(&self.brand, &self.facets.brands, forward);
            }
            MarketField::Fuel => self.fuel = cycle_option(&self.fuel, &self.facets.fuels, forward),
            MarketField::Gearbox => {
                self.gearbox = cycle_option(&self.gearbox, &self.facets.gearboxes, forward);
            }
            MarketField::Sort => {
                self.sort = if forward {
                    self.sort.cycle()
                } else {
                    self.sort.cycle_back()
                };
            }
            _ => {}
        }
    }

    fn clamp_selection(&mut self, ctx: &PageContext) {
        let count = self.results(ctx.catalog.vehicles()).len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> PageAction {
        if self.detail.is_some() {
            return vehicle_detail_key(&mut self.detail, key, ctx);
        }

        if self.editing {
            let focus = self.focus;
            if let Some(value) = self.text_mut(focus) {
                match text_field::edit(value, key) {
                    EditOutcome::Submit | EditOutcome::Cancel => self.editing = false,
                    EditOutcome::Next => {
                        self.editing = false;
                        self.focus = focus.step(true);
                    }
                    EditOutcome::Previous => {
                        self.editing = false;
                        self.focus = focus.step(false);
                    }
                    EditOutcome::Changed | EditOutcome::Unchanged => {}
                }
            } else {
                self.editing = false;
            }
            self.clamp_selection(ctx);
            return PageAction::Handled;
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.step(true),
            KeyCode::BackTab => self.focus = self.focus.step(false),
            KeyCode::Char('/') => {
                self.focus = MarketField::Search;
                self.editing = true;
            }
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Char('o') => self.sort = self.sort.cycle(),
            KeyCode::Char('x') => self.reset(),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected += 1,
            KeyCode::Enter if self.focus.is_text() => self.editing = true,
            KeyCode::Enter => {
                let results = self.results(ctx.catalog.vehicles());
                self.detail = results.get(self.selected).map(|v| v.stock_id.clone());
            }
            KeyCode::Char('w') => {
                return PageAction::Popup(Popup::whatsapp(ctx.config, messages::DOSSIER));
            }
            _ => return PageAction::Ignored,
        }
        self.clamp_selection(ctx);
        PageAction::Handled
    }
}

fn process_key(key: KeyEvent, ctx: &PageContext) -> PageAction {
    match key.code {
        KeyCode::Char('s') => PageAction::Navigate(Route::Marketplace.into()),
        KeyCode::Char('w') => PageAction::Popup(Popup::whatsapp(ctx.config, messages::PROCESS)),
        _ => PageAction::Ignored,
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// Section of the reservation page holding the focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserverFocus {
    Discipline,
    Level,
    Product,
    Date,
    Slot,
    Contact(usize),
    Confirm,
}

#[derive(Debug, Clone)]
pub struct ReserverPage {
    pub wizard: BookingWizard,
    pub focus: ReserverFocus,
    /// Option under the cursor within the focused section
    pub cursor: usize,
    /// Text of the date input, applied on Enter
    pub date_input: String,
    pub editing: bool,
    pub error: Option<String>,
    pub confirmed: Option<BookingRequest>,
}

impl ReserverPage {
    /// Open from `/reserver?product=<id>[&step=slots]`
    pub fn new(location: &Location, ctx: &PageContext) -> Self {
        let wizard = BookingWizard::from_product_query(ctx.catalog, location.param("product"));
        let focus = if wizard.selected_product().is_some() {
            ReserverFocus::Date
        } else {
            ReserverFocus::Discipline
        };
        let mut page = Self {
            wizard,
            focus,
            cursor: 0,
            date_input: String::new(),
            editing: false,
            error: None,
            confirmed: None,
        };
        page.reset_cursor();
        page
    }

    /// Sections revealed so far, in focus order
    pub fn focus_order(&self) -> Vec<ReserverFocus> {
        let mut order = vec![ReserverFocus::Discipline];
        if self.wizard.discipline().is_some() {
            order.push(ReserverFocus::Level);
        }
        if self.wizard.level().is_some() {
            order.push(ReserverFocus::Product);
        }
        if self.wizard.selected_product().is_some() {
            order.push(ReserverFocus::Date);
        }
        if self.wizard.date().is_some() {
            order.push(ReserverFocus::Slot);
        }
        if self.wizard.slot().is_some() {
            order.extend((0..4).map(ReserverFocus::Contact));
            order.push(ReserverFocus::Confirm);
        }
        order
    }

    /// Number of options in a choice section
    pub fn option_count(&self, focus: ReserverFocus) -> usize {
        match focus {
            ReserverFocus::Discipline => Discipline::iter().count(),
            ReserverFocus::Level => Level::iter().count(),
            ReserverFocus::Product => self.wizard.visible_products().len(),
            ReserverFocus::Slot => self.wizard.available_slots().len(),
            _ => 0,
        }
    }

    /// Put the cursor on the current selection of the focused section
    fn reset_cursor(&mut self) {
        let selected = match self.focus {
            ReserverFocus::Discipline => self
                .wizard
                .discipline()
                .and_then(|d| Discipline::iter().position(|x| x == d)),
            ReserverFocus::Level => self
                .wizard
                .level()
                .and_then(|l| Level::iter().position(|x| x == l)),
            ReserverFocus::Product => self.wizard.selected_product().and_then(|p| {
                self.wizard
                    .visible_products()
                    .iter()
                    .position(|v| v.id == p.id)
            }),
            ReserverFocus::Slot => self
                .wizard
                .slot()
                .and_then(|s| self.wizard.available_slots().iter().position(|x| *x == s)),
            _ => None,
        };
        self.cursor = selected.unwrap_or(0);
    }

    fn set_focus(&mut self, focus: ReserverFocus) {
        self.focus = focus;
        self.reset_cursor();
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[step_index(index, order.len(), forward)]);
    }

    /// Keep the focus on a revealed section and the date text in sync
    fn settle(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            let last = *self.focus_order().last().unwrap_or(&ReserverFocus::Discipline);
            self.set_focus(last);
        }
        if !self.editing {
            self.date_input = self
                .wizard
                .date()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default();
        }
    }

    fn apply_date(&mut self, text: &str) {
        match self.wizard.set_date(text) {
            Ok(()) => {
                self.error = None;
                if self.wizard.date().is_some() {
                    self.set_focus(ReserverFocus::Slot);
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Left/Right on the date input move one day; the first press picks
    /// today
    fn shift_date(&mut self, forward: bool) {
        let date = match self.wizard.date() {
            None => Local::now().date_naive(),
            Some(current) if forward => current.checked_add_days(Days::new(1)).unwrap_or(current),
            Some(current) => current.checked_sub_days(Days::new(1)).unwrap_or(current),
        };
        let text = date.format(DATE_FORMAT).to_string();
        if let Err(e) = self.wizard.set_date(&text) {
            self.error = Some(e.to_string());
        } else {
            self.error = None;
        }
    }

    /// Select the option under the cursor and reveal the next section
    fn choose(&mut self) -> PageAction {
        let result = match self.focus {
            ReserverFocus::Discipline => {
                if let Some(discipline) = Discipline::iter().nth(self.cursor) {
                    self.wizard.select_discipline(discipline);
                }
                Ok(ReserverFocus::Level)
            }
            ReserverFocus::Level => match Level::iter().nth(self.cursor) {
                Some(level) => self.wizard.select_level(level).map(|_| ReserverFocus::Product),
                None => Ok(ReserverFocus::Level),
            },
            ReserverFocus::Product => {
                let id = self
                    .wizard
                    .visible_products()
                    .get(self.cursor)
                    .map(|p| p.id.clone());
                match id {
                    Some(id) => self.wizard.select_product(&id).map(|_| ReserverFocus::Date),
                    None => Ok(ReserverFocus::Product),
                }
            }
            ReserverFocus::Slot => match self.wizard.available_slots().get(self.cursor) {
                Some(slot) => self
                    .wizard
                    .select_slot(slot)
                    .map(|_| ReserverFocus::Contact(0)),
                None => Ok(ReserverFocus::Slot),
            },
            ReserverFocus::Date | ReserverFocus::Contact(_) => {
                self.editing = true;
                return PageAction::Handled;
            }
            ReserverFocus::Confirm => return self.confirm(),
        };

        match result {
            Ok(next) => {
                self.error = None;
                self.settle();
                self.set_focus(next);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        PageAction::Handled
    }

    fn confirm(&mut self) -> PageAction {
        match self.wizard.confirm() {
            Ok(request) => {
                self.error = None;
                let lines = vec![
                    format!("{} · {}", request.title, request.duration),
                    format!("Le {} à {}", request.date.format("%d/%m/%Y"), request.slot),
                    format!("Montant : {} €", request.price),
                    format!(
                        "Au nom de {} ({})",
                        request.contact.full_name(),
                        request.contact.email
                    ),
                    String::new(),
                    "Aucun paiement n’est prélevé depuis le terminal.".to_string(),
                    "Nous vous recontactons pour finaliser la réservation.".to_string(),
                ];
                self.confirmed = Some(request);
                PageAction::Popup(Popup::new("Réservation enregistrée", lines))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                PageAction::Handled
            }
        }
    }

    fn handle_editing(&mut self, key: KeyEvent) -> PageAction {
        let outcome = match self.focus {
            ReserverFocus::Date => text_field::edit(&mut self.date_input, key),
            ReserverFocus::Contact(index) => match self.wizard.contact.field_mut(index) {
                Some(value) => text_field::edit(value, key),
                None => EditOutcome::Cancel,
            },
            _ => EditOutcome::Cancel,
        };

        if matches!(outcome, EditOutcome::Changed | EditOutcome::Unchanged) {
            return PageAction::Handled;
        }

        self.editing = false;
        if self.focus == ReserverFocus::Date {
            if outcome == EditOutcome::Cancel {
                self.settle();
                return PageAction::Handled;
            }
            let text = self.date_input.clone();
            self.apply_date(&text);
            self.settle();
            if self.error.is_some() || outcome == EditOutcome::Submit {
                return PageAction::Handled;
            }
        }
        match outcome {
            EditOutcome::Next => self.move_focus(true),
            EditOutcome::Previous => self.move_focus(false),
            _ => {}
        }
        PageAction::Handled
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.editing {
            return self.handle_editing(key);
        }

        let options = self.option_count(self.focus);
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Left if self.focus == ReserverFocus::Date => {
                self.shift_date(false);
                self.settle();
            }
            KeyCode::Right if self.focus == ReserverFocus::Date => {
                self.shift_date(true);
                self.settle();
            }
            KeyCode::Left if options > 0 => self.cursor = step_index(self.cursor, options, false),
            KeyCode::Right if options > 0 => self.cursor = step_index(self.cursor, options, true),
            KeyCode::Enter => return self.choose(),
            KeyCode::Char(' ') if options > 0 => return self.choose(),
            // "×" closes the page
            KeyCode::Esc => return PageAction::Back,
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// State of the page being displayed
#[derive(Debug, Clone)]
pub enum PageState {
    Home(HomePage),
    Academy,
    Formations(FormationsPage),
    Garage(GaragePage),
    Dealer(DealerPage),
    Investor(InquiryPage),
    Infrastructure(InfrastructurePage),
    Marketplace(MarketplacePage),
    Process,
    Reserver(ReserverPage),
    Contact(InquiryPage),
}

impl PageState {
    /// Fresh state for the page at `location`
    pub fn enter(location: &Location, ctx: &PageContext) -> Self {
        match location.route {
            Route::Home => Self::Home(HomePage::new(ctx)),
            Route::Academy => Self::Academy,
            Route::Formations => Self::Formations(FormationsPage::default()),
            Route::Garage => Self::Garage(GaragePage::default()),
            Route::Dealer => Self::Dealer(DealerPage::default()),
            Route::Investor => Self::Investor(InquiryPage::new(InquiryForm::investor())),
            Route::Infrastructure => Self::Infrastructure(InfrastructurePage::new(ctx)),
            Route::Marketplace => Self::Marketplace(MarketplacePage::new(ctx.catalog)),
            Route::Process => Self::Process,
            Route::Reserver => Self::Reserver(ReserverPage::new(location, ctx)),
            Route::Contact => {
                Self::Contact(InquiryPage::new(InquiryForm::contact(location.param("stock"))))
            }
        }
    }

    /// Advance the page's carousels. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Self::Home(page) => page.hero.tick(now),
            Self::Infrastructure(page) => page.components.tick(now),
            _ => false,
        }
    }

    /// A text field is receiving keystrokes
    pub fn is_editing(&self) -> bool {
        match self {
            Self::Garage(page) => page.editing,
            Self::Investor(page) | Self::Contact(page) => page.editing,
            Self::Marketplace(page) => page.editing,
            Self::Reserver(page) => page.editing,
            _ => false,
        }
    }

    /// A page-level modal is open
    pub fn has_modal(&self) -> bool {
        match self {
            Self::Home(page) => page.modal.is_some(),
            Self::Dealer(page) => page.detail.is_some(),
            Self::Marketplace(page) => page.detail.is_some(),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> PageAction {
        match self {
            Self::Home(page) => page.handle_key(key, ctx),
            Self::Academy => match key.code {
                KeyCode::Enter => PageAction::Navigate(Route::Formations.into()),
                _ => PageAction::Ignored,
            },
            Self::Formations(page) => page.handle_key(key),
            Self::Garage(page) => page.handle_key(key),
            Self::Dealer(page) => page.handle_key(key, ctx),
            Self::Investor(page) | Self::Contact(page) => page.handle_key(key),
            Self::Infrastructure(page) => page.handle_key(key, ctx),
            Self::Marketplace(page) => page.handle_key(key, ctx),
            Self::Process => process_key(key, ctx),
            Self::Reserver(page) => page.handle_key(key),
        }
    }
}
