//! `AccountDesk` - Desktop admin page for user accounts
//!
//! Lists the accounts of a remote account service and edits or deletes them.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use accountdesk_core::{AccountClient, Config, Effect, PageState, execute};
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{FormMessage, KeyboardAction, Message};
use model::AppSettings;
use style::widgets::palette::ThemeMode;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accountdesk=debug,accountdesk_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AccountDesk");

    iced::application(AccountDesk::new, AccountDesk::update, AccountDesk::view)
        .title("AccountDesk")
        .subscription(AccountDesk::subscription)
        .run()
}

/// Main application state.
#[derive(Default)]
struct AccountDesk {
    /// Accounts, selection and form.
    page: PageState,
    /// Account service client, available once settings are loaded.
    client: Option<AccountClient>,
    /// Settings as last loaded or saved.
    settings: AppSettings,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl AccountDesk {
    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Run `effect` against the account service and feed the outcome back.
    fn perform(&self, effect: Effect) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            warn!("Account service not configured, dropping {:?}", effect);
            return Task::none();
        };

        Task::perform(
            async move { execute(&client, effect).await },
            Message::ServiceReplied,
        )
    }

    /// Build the client from settings and load the first page of accounts.
    fn connect(&mut self, settings: AppSettings) -> Task<Message> {
        self.theme_mode = settings.theme_mode;
        self.apply_theme();

        let client = Config::from_env(settings.api_url.as_deref())
            .and_then(|config| AccountClient::new(&config));
        self.settings = settings;

        match client {
            Ok(client) => {
                info!("Using account service at {}", client.base_url());
                self.client = Some(client);
                let effect = self.page.mount();
                self.perform(effect)
            }
            Err(e) => {
                error!("Cannot configure account service: {}", e);
                Task::none()
            }
        }
    }
}

impl AccountDesk {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, settings_task)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Edit(account) => {
                self.page.edit(&account);
            }
            Message::Delete(id) => {
                let effect = self.page.delete(&id);
                return self.perform(effect);
            }
            Message::Refresh => {
                let effect = self.page.refresh();
                return self.perform(effect);
            }
            Message::Form(msg) => return self.handle_form(msg),
            Message::ServiceReplied(outcome) => {
                if let Some(next) = self.page.apply(outcome) {
                    return self.perform(next);
                }
            }
            Message::SettingsLoaded(result) => {
                let settings = result.unwrap_or_else(|e| {
                    warn!("Failed to load settings, using defaults: {}", e);
                    AppSettings::default()
                });
                info!("Settings loaded: theme={:?}", settings.theme_mode);
                return self.connect(settings);
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                info!("Theme changed to {:?}", self.theme_mode);

                self.settings.theme_mode = self.theme_mode;
                return Task::perform(
                    save_settings(self.settings.clone()),
                    Message::SettingsSaved,
                );
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::KeyIgnored => {}
        }
        Task::none()
    }

    /// Handle account form messages.
    fn handle_form(&mut self, msg: FormMessage) -> Task<Message> {
        match msg {
            FormMessage::FieldChanged(field, value) => {
                self.page.input(field, value);
            }
            FormMessage::Submit => match self.page.submit() {
                Ok(effect) => return self.perform(effect),
                Err(errors) => debug!("Form rejected with {} error(s)", errors.len()),
            },
            FormMessage::Cancel => self.page.cancel(),
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Refresh => self.update(Message::Refresh),
            KeyboardAction::Cancel => self.handle_form(FormMessage::Cancel),
            KeyboardAction::Submit if self.page.is_editing() => {
                self.handle_form(FormMessage::Submit)
            }
            KeyboardAction::Submit => Task::none(),
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(self.theme_mode, self.page.accounts().len());

        let body = column![
            view::view_account_form(&self.page),
            view::view_account_list(self.page.accounts()),
        ]
        .spacing(20)
        .padding(24)
        .max_width(960);

        container(column![
            header,
            scrollable(container(body).center_x(Length::Fill)).height(Length::Fill)
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::widgets::page_style)
        .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::KeyIgnored)
            } else {
                Message::KeyIgnored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Submit))
        }
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        _ => None,
    }
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    AppSettings::load(&AppSettings::path())
        .await
        .map_err(|e| format!("{e:#}"))
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    settings
        .save(&AppSettings::path())
        .await
        .map_err(|e| format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(message: Option<Message>) -> Option<KeyboardAction> {
        match message {
            Some(Message::KeyPressed(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_shortcuts() {
        use keyboard::key::Named;

        assert_eq!(
            action(handle_key_press(&Key::Named(Named::F5), Modifiers::empty())),
            Some(KeyboardAction::Refresh)
        );
        assert_eq!(
            action(handle_key_press(&Key::Named(Named::Escape), Modifiers::empty())),
            Some(KeyboardAction::Cancel)
        );
        assert_eq!(
            action(handle_key_press(&Key::Named(Named::Enter), Modifiers::COMMAND)),
            Some(KeyboardAction::Submit)
        );
    }

    #[test]
    fn test_plain_enter_is_ignored() {
        use keyboard::key::Named;

        assert!(handle_key_press(&Key::Named(Named::Enter), Modifiers::empty()).is_none());
        assert!(handle_key_press(&Key::Character("r".into()), Modifiers::COMMAND).is_none());
    }

    #[test]
    fn test_cancel_without_selection_keeps_page_idle() {
        let mut app = AccountDesk::default();
        let _ = app.update(Message::KeyPressed(KeyboardAction::Cancel));
        let _ = app.update(Message::KeyPressed(KeyboardAction::Cancel));
        assert!(!app.page.is_editing());
        assert!(app.page.accounts().is_empty());
    }
}
