//! Account form: the editable draft and the controller bound to it.

mod controller;
mod draft;
mod field;

pub use controller::{FieldBinding, FormController};
pub use draft::AccountDraft;
pub use field::Field;
