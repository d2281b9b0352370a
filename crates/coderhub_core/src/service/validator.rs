//! Contact form field validation.
//!
//! # Responsibility
//! - Map a `FieldSet` to per-field pass/fail outcomes.
//!
//! # Invariants
//! - Every rule runs on every pass; one failure never hides another.
//! - The email shape check is deliberately lenient (`local@domain.tld`),
//!   matching what the page has always accepted.
//! - Whitespace is the browser's notion of it: Unicode `White_Space` minus
//!   U+0085, plus the U+FEFF byte order mark.

use crate::model::field::{FieldName, FieldSet, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = r"[^@[\s\x{FEFF}--\x{85}]]+";
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
});

/// Validates all five contact form fields.
pub fn validate(fields: &FieldSet) -> ValidationResult {
    ValidationResult::from_checks([
        (FieldName::Name, !is_blank(&fields.name)),
        (FieldName::Email, is_valid_email(&fields.email)),
        (FieldName::Subject, !is_blank(&fields.subject)),
        (FieldName::Message, !is_blank(&fields.message)),
        (FieldName::Consent, fields.consent),
    ])
}

/// Email rule: non-blank after trim, and the raw value has the minimal
/// `local@domain.tld` shape.
///
/// The shape test runs on the untrimmed value, so surrounding whitespace
/// fails it.
pub fn is_valid_email(value: &str) -> bool {
    !is_blank(value) && EMAIL_RE.is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_whitespace).is_empty()
}

fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::{is_blank, is_valid_email};

    #[test]
    fn email_shape_is_lenient() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.example"));
        assert!(is_valid_email("weird!#$@x.y"));
    }

    #[test]
    fn email_shape_rejects_missing_parts() {
        for value in ["", "   ", "a@b", "@b.c", "a@.c", "a@b.", "a b@c.d", "a@b@c.d"] {
            assert!(!is_valid_email(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn email_with_surrounding_whitespace_is_rejected() {
        assert!(!is_valid_email(" a@b.c"));
        assert!(!is_valid_email("a@b.c\n"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{3000}\u{A0} "));
        assert!(!is_valid_email("a\u{FEFF}@b.c"));
        assert!(!is_valid_email("\u{FEFF}a@b.c"));
    }

    #[test]
    fn next_line_control_is_not_whitespace() {
        assert!(!is_blank("\u{85}"));
        assert!(is_valid_email("a\u{85}@b.c"));
    }
}
