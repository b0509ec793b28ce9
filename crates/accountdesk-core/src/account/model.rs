//! Account model types.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Services backed by SQL tables hand out integer keys, document stores hand
// out strings. Both are kept as the same opaque text.
impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Lifecycle state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountState {
    /// The account can sign in.
    Active,
    /// The account was locked by an operator.
    Blocked,
    /// The account is dormant.
    Inactive,
}

impl AccountState {
    /// All states, in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Blocked, Self::Inactive];

    /// Wire value of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Blocked => "BLOCKED",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Parse a wire value. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == value)
    }
}

impl std::fmt::Display for AccountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by the account service.
///
/// The password is write-only and never part of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier (None for unsaved accounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    /// First name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Last name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lastname: String,
    /// Email address.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Free-text role.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    /// Lifecycle state.
    #[serde(default)]
    pub state: Option<AccountState>,
}

impl Account {
    /// Create a new empty account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full name for display, `name lastname`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.name.is_empty(), self.lastname.is_empty()) {
            (false, false) => format!("{} {}", self.name, self.lastname),
            (false, true) => self.name.clone(),
            (true, false) => self.lastname.clone(),
            (true, true) => self.email.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
