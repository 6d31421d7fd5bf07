use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Nom requis";
pub const PHONE_REQUIRED: &str = "Téléphone requis";
pub const EMAIL_INVALID: &str = "Email invalide";

// Deliberately loose: accepts things like "a@b..c".
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    /// The `name` attribute of the matching form control.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

/// Values typed into the quote form for one validate/submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionAttempt {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Enforced by the `required` checkbox, not by [`validate`].
    pub consent: bool,
}

impl SubmissionAttempt {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Per-field failures of one attempt. Empty means the attempt can be sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.0
            .iter()
            .map(|(field, message)| FieldValidationError { field: *field, message: *message })
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Raw shape check, without trimming.
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn validate(attempt: &SubmissionAttempt) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if attempt.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if attempt.phone.trim().is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    }
    let email = attempt.email.trim();
    if !email.is_empty() && !is_well_formed_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(name: &str, phone: &str, email: &str) -> SubmissionAttempt {
        SubmissionAttempt {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_attempt_without_email_is_valid() {
        let errors = validate(&attempt("Jean Dupont", "0659610285", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn well_shaped_email_is_valid() {
        for email in ["jean@humitek.fr", "a.b+c@sous.domaine.fr", "x@y.z"] {
            assert!(validate(&attempt("Jean", "06", email)).is_empty(), "{email}");
        }
    }

    #[test]
    fn missing_name_is_reported() {
        let errors = validate(&attempt("", "0659610285", ""));
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn whitespace_name_is_reported_whatever_the_other_fields() {
        for other in [attempt("   ", "", "bad"), attempt("\t\n", "06", "jean@humitek.fr")] {
            assert!(validate(&other).get(Field::Name).is_some());
        }
    }

    #[test]
    fn missing_phone_is_reported() {
        let errors = validate(&attempt("Jean", "  ", ""));
        assert_eq!(errors.get(Field::Phone), Some(PHONE_REQUIRED));
    }

    #[test]
    fn phone_has_no_format_constraint() {
        assert!(validate(&attempt("Jean", "appelez-moi le soir", "")).is_empty());
    }

    #[test]
    fn malformed_email_is_reported() {
        for email in ["not-an-email", "jean@humitek", "jean.humitek.fr", "@humitek.fr", "jean@@humitek.fr", "je an@humitek.fr"] {
            let errors = validate(&attempt("Jean", "0659610285", email));
            assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "{email}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn loose_email_pattern_is_kept() {
        assert!(validate(&attempt("Jean", "06", "jean@humitek..fr")).is_empty());
    }

    #[test]
    fn message_is_never_validated() {
        let mut a = attempt("Jean", "06", "");
        a.message = " ".repeat(10_000);
        assert!(validate(&a).is_empty());
    }

    #[test]
    fn all_failures_are_collected_together() {
        let errors = validate(&attempt(" ", "", "nope"));
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Email]);
    }

    #[test]
    fn validate_is_idempotent() {
        let a = attempt("", "06", "x@");
        assert_eq!(validate(&a), validate(&a));
    }

    #[test]
    fn padded_email_passes_once_trimmed() {
        let padded = "  jean@humitek.fr \t";
        assert!(validate(&attempt("Jean", "06", padded)).is_empty());
    }

    #[test]
    fn raw_pattern_rejects_padding() {
        assert!(!is_well_formed_email("  jean@humitek.fr \t"));
        assert!(is_well_formed_email("jean@humitek.fr"));
    }

    #[test]
    fn whitespace_only_email_counts_as_absent() {
        assert!(validate(&attempt("Jean", "06", "   ")).is_empty());
    }

    #[test]
    fn error_display_names_the_field() {
        let errors = validate(&attempt("", "06", ""));
        let first = errors.iter().next().map(|e| e.to_string());
        assert_eq!(first.as_deref(), Some("name: Nom requis"));
    }
}
