#![forbid(unsafe_code)]

//! Contact form validation.
//!
//! Pure functions over field values; the controller maps a [`FormReport`]
//! onto error labels and border colours.

/// Border colour for a field that failed validation.
pub const ERROR_BORDER: &str = "#ef4444";

/// Border colour for a field that passed.
pub const NEUTRAL_BORDER: &str = "var(--border-color)";

/// Class that reveals an inline error label.
pub const ERROR_VISIBLE_CLASS: &str = "show";

/// Required contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The control's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    /// Inline text shown under the field.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required(Field::Name) => "Name is required",
            Self::Required(Field::Email) => "Email is required",
            Self::Required(Field::Message) => "Message is required",
            Self::InvalidEmail => "Please enter a valid email",
        }
    }
}

/// Raw values of the three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Outcome for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: Field,
    pub error: Option<FieldError>,
}

impl FieldCheck {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of one validation pass, in [`Field::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormReport {
    pub checks: [FieldCheck; 3],
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(FieldCheck::is_valid)
    }

    #[must_use]
    pub fn check(&self, field: Field) -> FieldCheck {
        self.checks
            .into_iter()
            .find(|check| check.field == field)
            .unwrap_or(FieldCheck { field, error: None })
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
///
/// One `@`, a non-empty local part, and a domain with at least one dot that
/// has characters on both sides. No whitespace anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have a non-empty label before and after it.
    domain
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

/// Check a single field value.
#[must_use]
pub fn check_field(field: Field, value: &str) -> FieldCheck {
    let error = if value.trim().is_empty() {
        Some(FieldError::Required(field))
    } else if field == Field::Email && !is_valid_email(value) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    };
    FieldCheck { field, error }
}

/// Validate every field.
#[must_use]
pub fn validate(input: &FormInput) -> FormReport {
    FormReport {
        checks: Field::ALL.map(|field| check_field(field, input.value(field))),
    }
}

/// Whether a live edit clears a shown error: any non-blank value does.
#[must_use]
pub fn clears_error(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: &str, email: &str, message: &str) -> FormInput {
        FormInput {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let report = validate(&input("Ada", "a@b.co", "Hello"));
        assert!(report.is_valid());
    }

    #[test]
    fn each_empty_field_is_flagged() {
        let report = validate(&input("", "a@b.co", "Hi"));
        assert_eq!(
            report.check(Field::Name).error,
            Some(FieldError::Required(Field::Name))
        );
        assert!(!report.is_valid());

        let report = validate(&input("Ada", "   ", "Hi"));
        assert_eq!(
            report.check(Field::Email).error,
            Some(FieldError::Required(Field::Email))
        );

        let report = validate(&input("Ada", "a@b.co", "\n\t"));
        assert_eq!(
            report.check(Field::Message).error.map(FieldError::message),
            Some("Message is required")
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in [
            "ab.co",
            "a@bco",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@b@c.co",
            "a b@c.co",
            " a@b.co",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
            let report = validate(&input("Ada", bad, "Hi"));
            assert_eq!(report.check(Field::Email).error, Some(FieldError::InvalidEmail));
        }
    }

    #[test]
    fn multi_label_domains_are_accepted() {
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x@a..b"));
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn live_edit_clears_only_on_content() {
        assert!(clears_error("x"));
        assert!(!clears_error("  "));
    }

    proptest! {
        #[test]
        fn well_formed_addresses_validate(
            local in "[a-z0-9._+-]{1,12}",
            host in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{host}.{tld}");
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn addresses_without_at_are_rejected(value in "[^@\\s]{0,24}") {
            prop_assert!(!is_valid_email(&value));
        }
    }
}
