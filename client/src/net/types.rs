//! Wire types for lead submission, shared by the UI and the server.
//!
//! DESIGN
//! ======
//! Validation lives next to the wire type so the form and the `/api/leads`
//! handler reject exactly the same inputs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const MAX_NAME_CHARS: usize = 120;
pub const MAX_PHONE_CHARS: usize = 32;
pub const MAX_NOTE_CHARS: usize = 1000;
pub const MAX_LABEL_CHARS: usize = 200;

/// Error codes carried in [`LeadResponse::error`].
pub const ERR_INVALID_LEAD: &str = "invalid_lead";
pub const ERR_NOT_CONFIGURED: &str = "not_configured";
pub const ERR_RATE_LIMITED: &str = "rate_limited";
pub const ERR_DELIVERY_FAILED: &str = "delivery_failed";

/// Body of `POST /api/leads`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub full_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_label: Option<String>,
}

/// A lead that passed validation. Fields are trimmed; blank optionals are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub full_name: String,
    pub phone: String,
    pub note: Option<String>,
    pub product_label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Phone,
    Note,
    ProductLabel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadError {
    /// Name or phone is blank.
    MissingContact,
    TooLong(LeadField),
}

impl LeadError {
    /// User-facing message shown under the form.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingContact => "Iltimos, ism familiya va telefon raqamingizni kiriting.",
            Self::TooLong(_) => "Kiritilgan matn juda uzun. Iltimos, qisqartiring.",
        }
    }
}

fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

fn check_len(value: &str, max: usize, field: LeadField) -> Result<(), LeadError> {
    if value.chars().count() > max {
        return Err(LeadError::TooLong(field));
    }
    Ok(())
}

impl LeadRequest {
    /// Trim and validate.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingContact`] when name or phone is blank, or
    /// [`LeadError::TooLong`] when a field exceeds its limit.
    pub fn validate(&self) -> Result<Lead, LeadError> {
        let full_name = self.full_name.trim();
        let phone = self.phone.trim();
        if full_name.is_empty() || phone.is_empty() {
            return Err(LeadError::MissingContact);
        }
        let note = trimmed_optional(self.note.as_deref());
        let product_label = trimmed_optional(self.product_label.as_deref());

        check_len(full_name, MAX_NAME_CHARS, LeadField::FullName)?;
        check_len(phone, MAX_PHONE_CHARS, LeadField::Phone)?;
        if let Some(note) = note.as_deref() {
            check_len(note, MAX_NOTE_CHARS, LeadField::Note)?;
        }
        if let Some(label) = product_label.as_deref() {
            check_len(label, MAX_LABEL_CHARS, LeadField::ProductLabel)?;
        }

        Ok(Lead { full_name: full_name.to_owned(), phone: phone.to_owned(), note, product_label })
    }
}

/// Response body of `POST /api/leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeadResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, error: None }
    }

    #[must_use]
    pub fn rejected(code: &str) -> Self {
        Self { ok: false, error: Some(code.to_owned()) }
    }
}
