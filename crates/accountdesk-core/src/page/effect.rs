//! Network work requested by page transitions, and its results.

use tracing::debug;

use crate::account::{Account, AccountId};
use crate::client::{AccountService, FetchResult};
use crate::form::AccountDraft;

/// A request the page needs sent to the account service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the account list. Only the response to the latest generation is
    /// applied.
    Reload {
        /// Generation this request belongs to.
        generation: u64,
    },
    /// Persist a draft onto an account.
    Update {
        /// Account to update.
        id: AccountId,
        /// Values to send.
        draft: AccountDraft,
    },
    /// Remove an account.
    Delete {
        /// Account to remove.
        id: AccountId,
    },
}

/// Result of running an [`Effect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Account list response.
    Listed {
        /// Generation of the request.
        generation: u64,
        /// Accounts, or why they could not be fetched.
        result: FetchResult<Vec<Account>>,
    },
    /// Update response.
    Updated {
        /// Account that was updated.
        id: AccountId,
        /// Whether it worked.
        result: FetchResult<()>,
    },
    /// Delete response.
    Deleted {
        /// Account that was removed.
        id: AccountId,
        /// Whether it worked.
        result: FetchResult<()>,
    },
}

/// Run one effect against the account service.
pub async fn execute<S: AccountService>(service: &S, effect: Effect) -> Outcome {
    debug!(?effect, "Running effect");
    match effect {
        Effect::Reload { generation } => Outcome::Listed {
            generation,
            result: service.list_accounts().await,
        },
        Effect::Update { id, draft } => {
            let result = service.update_account(&id, &draft).await;
            Outcome::Updated { id, result }
        }
        Effect::Delete { id } => {
            let result = service.delete_account(&id).await;
            Outcome::Deleted { id, result }
        }
    }
}
