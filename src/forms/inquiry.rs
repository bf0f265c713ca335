//! Single-step inquiry forms (investor dossier, general contact)

use serde::Serialize;
use tracing::debug;

use super::{FormError, missing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    /// "Accéder au dossier investisseur"
    Investor,
    /// Contact page, optionally about a vehicle in stock
    Contact,
}

impl InquiryKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Investor => "Accéder au dossier investisseur",
            Self::Contact => "Nous contacter",
        }
    }

    /// Field labels in display order
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            Self::Investor => ["Nom", "Email", "Profil / message"],
            Self::Contact => ["Nom", "Email", "Message"],
        }
    }
}

/// Summary produced by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryForm {
    kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub message: String,
    stock_id: Option<String>,
}

impl InquiryForm {
    pub fn investor() -> Self {
        Self {
            kind: InquiryKind::Investor,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            stock_id: None,
        }
    }

    /// Contact form. A stock id (from "Demander le dossier") pre-fills the
    /// message.
    pub fn contact(stock_id: Option<&str>) -> Self {
        let stock_id = stock_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let message = match &stock_id {
            Some(id) => format!("Bonjour, je souhaite recevoir le dossier du véhicule {id}."),
            None => String::new(),
        };

        Self {
            kind: InquiryKind::Contact,
            name: String::new(),
            email: String::new(),
            message,
            stock_id,
        }
    }

    pub fn kind(&self) -> InquiryKind {
        self.kind
    }

    pub fn stock_id(&self) -> Option<&str> {
        self.stock_id.as_deref()
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            _ => None,
        }
    }

    /// "Envoyer la demande"
    pub fn submit(&self) -> Result<Inquiry, FormError> {
        let labels = self.kind.labels();
        let missing_fields = missing([
            (labels[0], self.name.as_str()),
            (labels[1], self.email.as_str()),
            (labels[2], self.message.as_str()),
        ]);
        if !missing_fields.is_empty() {
            return Err(FormError::MissingFields(missing_fields));
        }

        debug!(kind = ?self.kind, "Inquiry submitted");
        Ok(Inquiry {
            kind: self.kind,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            stock_id: self.stock_id.clone(),
        })
    }
}
