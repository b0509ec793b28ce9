//! Form field names.

/// A field of the account form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Hidden identifier of the account being edited.
    Id,
    /// First name.
    Name,
    /// Last name.
    Lastname,
    /// Email address.
    Email,
    /// New password (write-only).
    Password,
    /// Free-text role.
    Role,
    /// Lifecycle state.
    State,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::Lastname,
        Self::Email,
        Self::Password,
        Self::Role,
        Self::State,
    ];

    /// JSON key used by the account service.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Lastname => "lastname",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
            Self::State => "state",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Lastname => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Role => "Role",
            Self::State => "State",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
