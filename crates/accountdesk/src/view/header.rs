//! Header/toolbar view component.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{header_style, secondary_button_style, toolbar_button_style};

/// Renders the page title with the refresh and theme buttons.
pub fn view_header(theme_mode: ThemeMode, account_count: usize) -> Element<'static, Message> {
    let title = text("Accounts")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let count = text(format!("{account_count} total"))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    let refresh = button(text("\u{21BB} Refresh").size(14))
        .padding([8, 14])
        .style(toolbar_button_style)
        .on_press(Message::Refresh);

    let theme_label = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_toggle = button(text(theme_label).size(18))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    container(
        row![
            title,
            count,
            Space::new().width(Length::Fill),
            refresh,
            theme_toggle
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12, 24])
    .style(header_style)
    .into()
}
