//! # accountdesk-core
//!
//! Core logic for the `AccountDesk` administration client.
//!
//! This crate provides:
//! - Account model and the field validation schema
//! - Form controller holding the editable draft and per-field errors
//! - Account service trait and its HTTP client
//! - Account list view contract (table rows with edit/delete actions)
//! - Page state machine and the async page controller driving it
//! - Base URL configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod client;
pub mod config;
mod error;
pub mod form;
pub mod listing;
pub mod page;

pub use account::{
    Account, AccountId, AccountState, ValidationError, ValidationResult, validate_draft,
    validate_field,
};
pub use client::{AccountClient, AccountService, FetchError, FetchResult};
pub use config::Config;
pub use error::{Error, Result};
pub use form::{AccountDraft, Field, FieldBinding, FormController};
pub use listing::{AccountRow, COLUMNS, NO_ACCOUNTS, account_rows};
pub use page::{Effect, Outcome, PageController, PageMode, PageState, execute};
