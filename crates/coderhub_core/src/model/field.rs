//! Contact form field model.
//!
//! # Responsibility
//! - Name the five contact form fields and hold their raw input values.
//! - Carry per-field validation outcomes for one submission attempt.
//!
//! # Invariants
//! - A `FieldSet` always carries exactly the five contact form fields.
//! - A `ValidationResult` holds one entry per field; `all_valid` is derived
//!   from the entries and never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
    /// Privacy-policy consent checkbox.
    Consent,
}

impl FieldName {
    /// Every field, in form order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
        FieldName::Consent,
    ];

    /// Stable lowercase label used in logs and serialized results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Consent => "consent",
        }
    }

    /// Element id of the input bound to this field in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Email => "email",
            Self::Subject => "asunto",
            Self::Message => "mensaje",
            Self::Consent => "privacidad",
        }
    }
}

/// Raw values read from the contact form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub consent: bool,
}

/// Per-field outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    fields: BTreeMap<FieldName, bool>,
}

impl ValidationResult {
    /// Builds a result from `(field, is_valid)` checks.
    ///
    /// Fields missing from `checks` are recorded as invalid so the
    /// one-entry-per-field invariant always holds.
    pub fn from_checks(checks: impl IntoIterator<Item = (FieldName, bool)>) -> Self {
        let mut fields = FieldName::ALL
            .iter()
            .map(|field| (*field, false))
            .collect::<BTreeMap<_, _>>();
        for (field, valid) in checks {
            fields.insert(field, valid);
        }
        Self { fields }
    }

    pub fn is_valid(&self, field: FieldName) -> bool {
        self.fields.get(&field).copied().unwrap_or(false)
    }

    /// Logical AND of every field entry.
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(|valid| *valid)
    }

    /// Invalid fields in form order.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.fields
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, bool)> + '_ {
        self.fields.iter().map(|(field, valid)| (*field, *valid))
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldName, ValidationResult};

    #[test]
    fn missing_checks_default_to_invalid() {
        let result = ValidationResult::from_checks([(FieldName::Name, true)]);
        assert!(result.is_valid(FieldName::Name));
        assert_eq!(
            result.invalid_fields(),
            vec![
                FieldName::Email,
                FieldName::Subject,
                FieldName::Message,
                FieldName::Consent
            ]
        );
        assert!(!result.all_valid());
    }

    #[test]
    fn element_ids_match_contact_form_markup() {
        let ids = FieldName::ALL
            .iter()
            .map(|field| field.element_id())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["nombre", "email", "asunto", "mensaje", "privacidad"]);
    }
}
