//! Account draft validation.
//!
//! Every field is optional: an absent value is always valid, a present value
//! must satisfy the rule for its field.

use super::model::AccountState;
use crate::form::{AccountDraft, Field};

/// Allowed length range for first and last names, in characters.
pub const NAME_LENGTH: (usize, usize) = (3, 25);

/// Allowed length range for passwords, in characters.
pub const PASSWORD_LENGTH: (usize, usize) = (8, 30);

/// Validation error for an account draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// First name is shorter or longer than allowed.
    NameLength,
    /// Last name is shorter or longer than allowed.
    LastnameLength,
    /// Email address format is invalid.
    InvalidEmail,
    /// Password is shorter or longer than allowed.
    PasswordLength,
    /// State is not one of the known states.
    UnknownState,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NameLength => "Name must be between 3 and 25 characters",
            Self::LastnameLength => "Last name must be between 3 and 25 characters",
            Self::InvalidEmail => "Email must be a valid email address",
            Self::PasswordLength => "Password must be between 8 and 30 characters",
            Self::UnknownState => "State must be one of: ACTIVE, BLOCKED, INACTIVE",
        }
    }

    /// Get the field this error relates to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::NameLength => Field::Name,
            Self::LastnameLength => Field::Lastname,
            Self::InvalidEmail => Field::Email,
            Self::PasswordLength => Field::Password,
            Self::UnknownState => Field::State,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a draft.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate an account draft.
///
/// Returns `Ok(())` if valid, or `Err(Vec<ValidationError>)` with all errors
/// in field order.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any present field is invalid.
pub fn validate_draft(draft: &AccountDraft) -> ValidationResult {
    let errors: Vec<ValidationError> = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, draft.get(field)).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single field value.
///
/// # Errors
///
/// Returns the `ValidationError` for the field if the value is present and
/// breaks the field's rule.
pub fn validate_field(field: Field, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    match field {
        Field::Name if !within(value, NAME_LENGTH) => Err(ValidationError::NameLength),
        Field::Lastname if !within(value, NAME_LENGTH) => Err(ValidationError::LastnameLength),
        Field::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        Field::Password if !within(value, PASSWORD_LENGTH) => {
            Err(ValidationError::PasswordLength)
        }
        Field::State if AccountState::parse(value).is_none() => Err(ValidationError::UnknownState),
        _ => Ok(()),
    }
}

fn within(value: &str, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    // Must contain exactly one @
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part must not be empty
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }

    // Domain must contain at least one dot and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Domain labels must not be empty and may not start or end with a hyphen
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
