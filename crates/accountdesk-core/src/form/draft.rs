//! Editable copy of an account's fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::Field;
use crate::account::{Account, AccountId};

/// Field values currently bound to the form.
///
/// A field the operator never touched is `None`; a cleared input is kept as
/// an empty string so the update can send it. Reads through [`get`] treat
/// both as absent.
///
/// [`get`]: AccountDraft::get
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    /// Identifier of the account being edited.
    pub id: Option<String>,
    /// First name.
    pub name: Option<String>,
    /// Last name.
    pub lastname: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// New password.
    pub password: Option<String>,
    /// Free-text role.
    pub role: Option<String>,
    /// Lifecycle state, as entered.
    pub state: Option<String>,
}

impl AccountDraft {
    /// Copy the editable fields of an account. The password stays empty.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        let mut draft = Self::default();
        if let Some(id) = &account.id {
            draft.attach_id(id);
        }
        draft.set(Field::Name, &account.name);
        draft.set(Field::Lastname, &account.lastname);
        draft.set(Field::Email, &account.email);
        draft.set(Field::Role, &account.role);
        if let Some(state) = account.state {
            draft.set(Field::State, state.as_str());
        }
        draft
    }

    /// Read a field. Empty values read as absent.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref().filter(|value| !value.is_empty())
    }

    /// Write a field, keeping empty values.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Attach the identifier of the account this draft will update.
    pub fn attach_id(&mut self, id: &AccountId) {
        self.id = Some(id.as_str().to_string());
    }

    /// Whether every field is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_none())
    }

    const fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Lastname => &self.lastname,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Role => &self.role,
            Field::State => &self.state,
        }
    }

    const fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Lastname => &mut self.lastname,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Role => &mut self.role,
            Field::State => &mut self.state,
        }
    }
}

/// Update payload keyed by [`Field::key`]. Untouched fields and a blank
/// password are left out; other cleared fields are sent as `""`.
impl Serialize for AccountDraft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = Field::ALL.into_iter().filter_map(|field| {
            let value = self.slot(field).as_deref()?;
            (field != Field::Password || !value.is_empty()).then_some((field.key(), value))
        });

        let mut map = serializer.serialize_map(None)?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// Drafts end up in log lines; the password never does.
impl std::fmt::Debug for AccountDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDraft")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .field("state", &self.state)
            .finish()
    }
}
