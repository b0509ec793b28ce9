//! View components for the application.

mod account_form;
mod account_list;
mod header;

pub use account_form::view_account_form;
pub use account_list::view_account_list;
pub use header::view_header;
