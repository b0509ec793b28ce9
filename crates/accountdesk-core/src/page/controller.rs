//! Async driver for the page workflow.

use super::effect::{Effect, execute};
use super::state::PageState;
use crate::account::{Account, AccountId, ValidationError};
use crate::client::AccountService;
use crate::form::Field;

/// Owns the page state and an account service, and runs every transition's
/// network work to completion before returning.
///
/// Service failures never escape: they are logged and the page keeps its
/// previous contents.
#[derive(Debug)]
pub struct PageController<S> {
    state: PageState,
    service: S,
}

impl<S: AccountService> PageController<S> {
    /// Create a controller with an empty page.
    pub fn new(service: S) -> Self {
        Self {
            state: PageState::new(),
            service,
        }
    }

    /// Current page state.
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// The account service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Load the account list.
    pub async fn mount(&mut self) {
        let effect = self.state.mount();
        self.run(effect).await;
    }

    /// Reload the account list.
    pub async fn refresh(&mut self) {
        let effect = self.state.refresh();
        self.run(effect).await;
    }

    /// Select an account for editing.
    pub fn edit(&mut self, account: &Account) {
        self.state.edit(account);
    }

    /// Apply an operator edit to a form field.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.state.input(field, value);
    }

    /// Submit the form and wait for the update and the list reload.
    ///
    /// # Errors
    ///
    /// Returns the validation errors if the form is invalid. Service
    /// failures are not errors here.
    pub async fn submit(&mut self) -> Result<(), Vec<ValidationError>> {
        let effect = self.state.submit()?;
        self.run(effect).await;
        Ok(())
    }

    /// Leave editing without saving.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Delete an account and wait for the list reload.
    pub async fn delete(&mut self, id: &AccountId) {
        let effect = self.state.delete(id);
        self.run(effect).await;
    }

    async fn run(&mut self, effect: Effect) {
        let mut next = Some(effect);
        while let Some(effect) = next {
            let outcome = execute(&self.service, effect).await;
            next = self.state.apply(outcome);
        }
    }
}
