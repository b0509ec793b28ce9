//! Form controller.
//!
//! Holds the draft bound to the inputs and the per-field errors produced by
//! the validation schema.

use std::collections::BTreeMap;

use super::draft::AccountDraft;
use super::field::Field;
use crate::account::{ValidationError, validate_draft, validate_field};

/// Read-only view of one input: its value and its error, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding<'a> {
    /// Field this binding belongs to.
    pub field: Field,
    /// Current value, empty when absent.
    pub value: &'a str,
    /// Error to show next to the input.
    pub error: Option<ValidationError>,
}

impl FieldBinding<'_> {
    /// Whether the input should be marked invalid.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Controller for the account form.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: AccountDraft,
    errors: BTreeMap<Field, ValidationError>,
    submit_failed: bool,
}

impl FormController {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an input to its field.
    #[must_use]
    pub fn register(&self, field: Field) -> FieldBinding<'_> {
        FieldBinding {
            field,
            value: self.draft.get(field).unwrap_or_default(),
            error: self.errors.get(&field).copied(),
        }
    }

    /// Set a field programmatically. Does not validate.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Apply an operator edit to a field.
    ///
    /// After a failed submit the edited field is validated again so its error
    /// clears as soon as the value becomes acceptable.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.submit_failed {
            match validate_field(field, self.draft.get(field)) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(error) => {
                    self.errors.insert(field, error);
                }
            }
        }
    }

    /// Validate the draft and hand it to `on_valid` if it passes.
    ///
    /// # Errors
    ///
    /// Returns every validation error when the draft is invalid. The errors
    /// are also kept on the form and `on_valid` is not called.
    pub fn handle_submit<T>(
        &mut self,
        on_valid: impl FnOnce(AccountDraft) -> T,
    ) -> Result<T, Vec<ValidationError>> {
        match validate_draft(&self.draft) {
            Ok(()) => {
                self.errors.clear();
                self.submit_failed = false;
                Ok(on_valid(self.draft.clone()))
            }
            Err(errors) => {
                self.errors = errors.iter().map(|e| (e.field(), *e)).collect();
                self.submit_failed = true;
                Err(errors)
            }
        }
    }

    /// Clear every value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the values with `draft` and clear every error.
    pub fn reset_to(&mut self, draft: AccountDraft) {
        *self = Self {
            draft,
            ..Self::default()
        };
    }

    /// Error for a field.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// All current errors, in field order.
    pub fn errors(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.errors.values().copied()
    }

    /// The current draft.
    #[must_use]
    pub const fn draft(&self) -> &AccountDraft {
        &self.draft
    }

    /// Whether any value has been entered.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.draft.is_empty()
    }
}
