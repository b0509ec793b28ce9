//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use accountdesk_core::{Account, AccountId, Field, Outcome};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Account list
    /// Select an account for editing.
    Edit(Account),
    /// Delete an account.
    Delete(AccountId),
    /// Reload the account list.
    Refresh,

    // Form
    /// Account form messages.
    Form(FormMessage),

    // Account service
    /// A request to the account service finished.
    ServiceReplied(Outcome),

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Toggle between light and dark theme.
    ToggleTheme,

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Keyboard event without a shortcut.
    KeyIgnored,
}

/// Messages for the account form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// A field was edited.
    FieldChanged(Field, String),
    /// Submit the form.
    Submit,
    /// Leave editing without saving.
    Cancel,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Reload the account list (F5).
    Refresh,
    /// Cancel editing (Escape).
    Cancel,
    /// Submit the form (Ctrl+Enter).
    Submit,
}
