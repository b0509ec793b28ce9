//! Page state and its transitions.

use tracing::{debug, error, info, warn};

use super::effect::{Effect, Outcome};
use crate::account::{Account, AccountId, ValidationError};
use crate::form::{AccountDraft, Field, FormController};

/// What the page is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageMode {
    /// Listing accounts; nothing selected.
    #[default]
    Idle,
    /// Editing the selected account in the form.
    Editing {
        /// Account whose fields were copied into the form.
        selection: Account,
    },
}

/// Everything the account page holds in memory.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    accounts: Vec<Account>,
    mode: PageMode,
    form: FormController,
    /// Generation of the most recent list request.
    list_generation: u64,
}

impl PageState {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts currently displayed.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> &PageMode {
        &self.mode
    }

    /// The account selected for editing, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&Account> {
        match &self.mode {
            PageMode::Idle => None,
            PageMode::Editing { selection } => Some(selection),
        }
    }

    /// Whether an account is selected for editing.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, PageMode::Editing { .. })
    }

    /// The form bound to the draft.
    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    fn selection_id(&self) -> Option<&AccountId> {
        self.selection().and_then(|account| account.id.as_ref())
    }

    /// Initial load.
    pub fn mount(&mut self) -> Effect {
        info!("Loading account page");
        self.reload()
    }

    /// Reload the list on operator request.
    pub fn refresh(&mut self) -> Effect {
        self.reload()
    }

    fn reload(&mut self) -> Effect {
        self.list_generation += 1;
        Effect::Reload {
            generation: self.list_generation,
        }
    }

    fn back_to_idle(&mut self) {
        self.mode = PageMode::Idle;
        self.form.reset();
    }

    /// Select `account` and copy its fields into the form.
    ///
    /// The password input is left blank.
    pub fn edit(&mut self, account: &Account) {
        debug!(id = ?account.id, "Editing {}", account.display_name());
        self.form.reset_to(AccountDraft::from_account(account));
        self.mode = PageMode::Editing {
            selection: account.clone(),
        };
    }

    /// Apply an operator edit to a form field.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.input(field, value);
    }

    /// Submit the form.
    ///
    /// While editing, the selection's id is attached to the draft and an
    /// update is requested. Without a selection there is nothing to update:
    /// the form is cleared and the list reloaded.
    ///
    /// # Errors
    ///
    /// Returns the validation errors if the draft is invalid; they are also
    /// shown on the form and no request is made.
    pub fn submit(&mut self) -> Result<Effect, Vec<ValidationError>> {
        let target = self.selection_id().cloned();
        let update = self
            .form
            .handle_submit(|mut draft| {
                target.map(|id| {
                    draft.attach_id(&id);
                    Effect::Update { id, draft }
                })
            })
            .inspect_err(|errors| debug!(count = errors.len(), "Submit blocked by validation"))?;

        if let Some(effect) = update {
            return Ok(effect);
        }
        if self.is_editing() {
            warn!("Selected account has no id, nothing to update");
        }
        self.back_to_idle();
        Ok(self.reload())
    }

    /// Leave editing without saving. No-op when idle.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            debug!("Edit cancelled");
            self.back_to_idle();
        }
    }

    /// Request deletion of `id`. The page itself is unchanged until the
    /// service answers.
    #[must_use]
    pub fn delete(&self, id: &AccountId) -> Effect {
        let selected = self.selection_id() == Some(id);
        info!(%id, selected, "Deleting account");
        Effect::Delete { id: id.clone() }
    }

    /// Fold a service response into the page.
    ///
    /// Failures are logged and otherwise leave the page as it was. Returns
    /// the follow-up request, if any.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Effect> {
        match outcome {
            Outcome::Listed { generation, result } => {
                if generation != self.list_generation {
                    debug!(
                        generation,
                        latest = self.list_generation,
                        "Dropping stale account list"
                    );
                    return None;
                }
                match result {
                    Ok(accounts) => {
                        info!(count = accounts.len(), "Account list loaded");
                        self.accounts = accounts;
                    }
                    Err(e) => {
                        error!(status = ?e.status(), error = %e, "Failed to fetch accounts");
                    }
                }
                None
            }
            Outcome::Updated { id, result } => {
                match result {
                    Ok(()) => {
                        info!(%id, "Account updated");
                        if self.selection_id() == Some(&id) {
                            self.back_to_idle();
                        }
                    }
                    Err(e) => {
                        error!(%id, status = ?e.status(), error = %e, "Failed to save account");
                    }
                }
                Some(self.reload())
            }
            Outcome::Deleted { id, result } => {
                match result {
                    Ok(()) => {
                        info!(%id, "Account deleted");
                        if self.selection_id() == Some(&id) {
                            self.back_to_idle();
                        }
                    }
                    Err(e) if e.is_not_found() => warn!(%id, "Account already gone"),
                    Err(e) => {
                        error!(%id, status = ?e.status(), error = %e, "Failed to delete account");
                    }
                }
                Some(self.reload())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::account::AccountState;
    use crate::client::FetchError;

    fn account(id: &str, name: &str) -> Account {
        Account {
            id: Some(AccountId::new(id)),
            name: name.to_string(),
            lastname: "Hopper".to_string(),
            email: format!("{id}@example.com"),
            role: "operator".to_string(),
            state: Some(AccountState::Active),
        }
    }

    fn loaded(accounts: Vec<Account>) -> PageState {
        let mut page = PageState::new();
        let Effect::Reload { generation } = page.mount() else {
            panic!("mount must reload");
        };
        page.apply(Outcome::Listed {
            generation,
            result: Ok(accounts),
        });
        page
    }

    fn failure() -> FetchError {
        FetchError::Status {
            status: 500,
            body: String::new(),
        }
    }

    #[test]
    fn test_mount_loads_list() {
        let page = loaded(vec![account("1", "Grace")]);
        assert_eq!(page.accounts().len(), 1);
        assert_eq!(page.mode(), &PageMode::Idle);
    }

    #[test]
    fn test_edit_seeds_form_without_password() {
        let mut page = loaded(vec![account("1", "Grace")]);
        page.input(Field::Password, "leftover-secret");
        let selected = page.accounts()[0].clone();
        page.edit(&selected);

        let form = page.form();
        assert_eq!(form.register(Field::Id).value, "1");
        assert_eq!(form.register(Field::Name).value, "Grace");
        assert_eq!(form.register(Field::Lastname).value, "Hopper");
        assert_eq!(form.register(Field::Email).value, "1@example.com");
        assert_eq!(form.register(Field::Role).value, "operator");
        assert_eq!(form.register(Field::State).value, "ACTIVE");
        assert_eq!(form.register(Field::Password).value, "");
        assert_eq!(page.selection(), Some(&selected));
    }

    #[test]
    fn test_edit_does_not_touch_list() {
        let mut page = loaded(vec![account("1", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        page.input(Field::Name, "Changed");
        assert_eq!(page.accounts()[0].name, "Grace");
    }

    #[test]
    fn test_submit_while_editing_requests_update() {
        let mut page = loaded(vec![account("7", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        page.input(Field::Role, "admin");

        let effect = page.submit().unwrap();
        let Effect::Update { id, draft } = effect else {
            panic!("expected an update");
        };
        assert_eq!(id, AccountId::new("7"));
        assert_eq!(draft.id.as_deref(), Some("7"));
        assert_eq!(draft.role.as_deref(), Some("admin"));
        // Still editing until the service answers.
        assert!(page.is_editing());
    }

    #[test]
    fn test_invalid_submit_requests_nothing() {
        let mut page = loaded(vec![account("7", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        page.input(Field::Name, "ab");

        let errors = page.submit().unwrap_err();
        assert_eq!(errors, vec![ValidationError::NameLength]);
        assert_eq!(page.form().error(Field::Name), Some(ValidationError::NameLength));
        assert!(page.is_editing());
    }

    #[test]
    fn test_submit_while_idle_only_reloads() {
        let mut page = loaded(vec![]);
        page.input(Field::Name, "Nobody");
        let effect = page.submit().unwrap();
        assert!(matches!(effect, Effect::Reload { .. }));
        assert!(!page.form().is_dirty());
    }

    #[test]
    fn test_successful_update_returns_to_idle() {
        let mut page = loaded(vec![account("7", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        let next = page.apply(Outcome::Updated {
            id: AccountId::new("7"),
            result: Ok(()),
        });
        assert!(matches!(next, Some(Effect::Reload { .. })));
        assert_eq!(page.mode(), &PageMode::Idle);
        assert!(!page.form().is_dirty());
    }

    #[test]
    fn test_failed_update_keeps_form_for_retry() {
        let mut page = loaded(vec![account("7", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        page.input(Field::Lastname, "Murray");
        let next = page.apply(Outcome::Updated {
            id: AccountId::new("7"),
            result: Err(failure()),
        });
        assert!(matches!(next, Some(Effect::Reload { .. })));
        assert!(page.is_editing());
        assert_eq!(page.form().register(Field::Lastname).value, "Murray");
    }

    #[test]
    fn test_cancel() {
        let mut page = loaded(vec![account("7", "Grace")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);
        page.cancel();
        assert_eq!(page.mode(), &PageMode::Idle);
        assert!(!page.form().is_dirty());
    }

    #[test]
    fn test_deleting_selection_returns_to_idle() {
        let mut page = loaded(vec![account("7", "Grace"), account("8", "Ada")]);
        let selected = page.accounts()[0].clone();
        page.edit(&selected);

        let effect = page.delete(&AccountId::new("8"));
        assert_eq!(
            effect,
            Effect::Delete {
                id: AccountId::new("8")
            }
        );
        page.apply(Outcome::Deleted {
            id: AccountId::new("8"),
            result: Ok(()),
        });
        assert!(page.is_editing());

        page.apply(Outcome::Deleted {
            id: AccountId::new("7"),
            result: Ok(()),
        });
        assert!(!page.is_editing());
    }

    #[test]
    fn test_failed_list_keeps_accounts() {
        let mut page = loaded(vec![account("1", "Grace")]);
        let Effect::Reload { generation } = page.refresh() else {
            panic!("refresh must reload");
        };
        page.apply(Outcome::Listed {
            generation,
            result: Err(FetchError::Transport("connection reset".to_string())),
        });
        assert_eq!(page.accounts().len(), 1);
    }

    #[test]
    fn test_stale_list_is_dropped() {
        let mut page = loaded(vec![]);
        let Effect::Reload { generation: older } = page.refresh() else {
            panic!("refresh must reload");
        };
        let Effect::Reload { generation: newer } = page.refresh() else {
            panic!("refresh must reload");
        };

        page.apply(Outcome::Listed {
            generation: newer,
            result: Ok(vec![account("2", "Newest")]),
        });
        page.apply(Outcome::Listed {
            generation: older,
            result: Ok(vec![account("1", "Older")]),
        });

        assert_eq!(page.accounts().len(), 1);
        assert_eq!(page.accounts()[0].name, "Newest");
    }
}
