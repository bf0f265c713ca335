//! Garage intake: vehicle, intervention, symptoms, contact

use serde::Serialize;
use tracing::debug;

use super::{ContactDetails, FormError};
use crate::types::{Intervention, Symptom};

/// Step of the garage intake.
///
/// ```text
/// VehicleInfo -> Intervention -> Symptoms -> Contact
/// ```
///
/// Steps are free to move in both directions; nothing is validated until
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarageStep {
    #[default]
    VehicleInfo,
    Intervention,
    Symptoms,
    Contact,
}

impl GarageStep {
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::VehicleInfo => Some(Self::Intervention),
            Self::Intervention => Some(Self::Symptoms),
            Self::Symptoms => Some(Self::Contact),
            Self::Contact => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::VehicleInfo => None,
            Self::Intervention => Some(Self::VehicleInfo),
            Self::Symptoms => Some(Self::Intervention),
            Self::Contact => Some(Self::Symptoms),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::VehicleInfo => "Votre véhicule",
            Self::Intervention => "Type d’intervention",
            Self::Symptoms => "Symptômes observés",
            Self::Contact => "Vos coordonnées",
        }
    }

    /// 1-indexed for display
    pub fn step_number(&self) -> usize {
        match self {
            Self::VehicleInfo => 1,
            Self::Intervention => 2,
            Self::Symptoms => 3,
            Self::Contact => 4,
        }
    }

    pub const TOTAL_STEPS: usize = 4;
}

/// Vehicle block of the intake, kept as typed text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
}

impl VehicleDetails {
    pub const LABELS: [&'static str; 4] = ["Marque", "Modèle", "Année", "Kilométrage"];

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.make),
            1 => Some(&mut self.model),
            2 => Some(&mut self.year),
            3 => Some(&mut self.mileage),
            _ => None,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.make),
            1 => Some(&self.model),
            2 => Some(&self.year),
            3 => Some(&self.mileage),
            _ => None,
        }
    }
}

/// Summary produced by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GarageRequest {
    pub vehicle: VehicleDetails,
    pub intervention: Option<Intervention>,
    pub symptoms: Vec<Symptom>,
    pub contact: ContactDetails,
}

/// Garage intake form state
#[derive(Debug, Clone, Default)]
pub struct GarageIntake {
    step: GarageStep,
    pub vehicle: VehicleDetails,
    intervention: Option<Intervention>,
    symptoms: Vec<Symptom>,
    pub contact: ContactDetails,
}

impl GarageIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> GarageStep {
        self.step
    }

    /// Advance one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Jump back to the first step ("Diagnostiquer mon véhicule"), keeping
    /// what was already typed
    pub fn restart(&mut self) {
        self.step = GarageStep::VehicleInfo;
    }

    pub fn intervention(&self) -> Option<Intervention> {
        self.intervention
    }

    pub fn select_intervention(&mut self, intervention: Intervention) {
        self.intervention = Some(intervention);
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    /// Check or uncheck a symptom. Returns whether it is now checked.
    pub fn toggle_symptom(&mut self, symptom: Symptom) -> bool {
        if let Some(pos) = self.symptoms.iter().position(|s| *s == symptom) {
            self.symptoms.remove(pos);
            false
        } else {
            self.symptoms.push(symptom);
            true
        }
    }

    /// "Envoyer la demande": only the contact block is required
    pub fn submit(&self) -> Result<GarageRequest, FormError> {
        let missing_fields = self.contact.missing_fields();
        if !missing_fields.is_empty() {
            return Err(FormError::MissingFields(missing_fields));
        }

        debug!(symptoms = self.symptoms.len(), "Garage intake submitted");
        Ok(GarageRequest {
            vehicle: self.vehicle.clone(),
            intervention: self.intervention,
            symptoms: self.symptoms.clone(),
            contact: self.contact.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactDetails {
        ContactDetails {
            first_name: "Moussa".to_string(),
            last_name: "Diop".to_string(),
            email: "moussa@example.com".to_string(),
            phone: "+221770000000".to_string(),
        }
    }

    #[test]
    fn test_steps_move_freely() {
        let mut intake = GarageIntake::new();
        assert!(!intake.previous());
        assert!(intake.next());
        assert!(intake.next());
        assert!(intake.next());
        assert_eq!(intake.step(), GarageStep::Contact);
        assert!(!intake.next());
        assert!(intake.previous());
        assert_eq!(intake.step(), GarageStep::Symptoms);
    }

    #[test]
    fn test_restart_keeps_answers() {
        let mut intake = GarageIntake::new();
        intake.vehicle.make.push_str("Peugeot");
        intake.next();
        intake.select_intervention(Intervention::Brakes);
        intake.restart();
        assert_eq!(intake.step(), GarageStep::VehicleInfo);
        assert_eq!(intake.vehicle.make, "Peugeot");
        assert_eq!(intake.intervention(), Some(Intervention::Brakes));
    }

    #[test]
    fn test_toggle_symptom() {
        let mut intake = GarageIntake::new();
        assert!(intake.toggle_symptom(Symptom::Smoke));
        assert!(intake.toggle_symptom(Symptom::Vibrations));
        assert_eq!(intake.symptoms(), &[Symptom::Smoke, Symptom::Vibrations]);
        assert!(!intake.toggle_symptom(Symptom::Smoke));
        assert!(!intake.has_symptom(Symptom::Smoke));
    }

    #[test]
    fn test_submit_requires_contact() {
        let mut intake = GarageIntake::new();
        let err = intake.submit().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec!["Prénom", "Nom", "Email", "Téléphone"])
        );

        intake.contact = filled_contact();
        let request = intake.submit().unwrap();
        assert_eq!(request.contact.last_name, "Diop");
        assert!(request.intervention.is_none());
    }

    #[test]
    fn test_step_metadata() {
        assert_eq!(GarageStep::Symptoms.step_number(), 3);
        assert_eq!(GarageStep::Contact.step_number(), GarageStep::TOTAL_STEPS);
        assert_eq!(GarageStep::VehicleInfo.title(), "Votre véhicule");
    }
}
