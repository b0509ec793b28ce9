//! Account service access.
//!
//! [`AccountService`] is the seam between the page workflow and the remote
//! account API; [`AccountClient`] implements it over HTTP.

mod error;
mod http;

use std::future::Future;

pub use error::{FetchError, FetchResult};
pub use http::{AccountClient, AccountList};

use crate::account::{Account, AccountId};
use crate::form::AccountDraft;

/// Remote operations on accounts.
///
/// Each call is a single request: no retries, no backoff, no timeout.
pub trait AccountService {
    /// Fetch the full collection of accounts.
    fn list_accounts(&self) -> impl Future<Output = FetchResult<Vec<Account>>> + Send;

    /// Persist the draft's fields onto the account `id`.
    fn update_account(
        &self,
        id: &AccountId,
        draft: &AccountDraft,
    ) -> impl Future<Output = FetchResult<()>> + Send;

    /// Remove the account `id`.
    fn delete_account(&self, id: &AccountId) -> impl Future<Output = FetchResult<()>> + Send;
}
