//! Account module.
//!
//! Provides the account model and the field validation schema.

mod model;
mod validation;

pub use model::{Account, AccountId, AccountState};
pub use validation::{ValidationError, ValidationResult, validate_draft, validate_field};
