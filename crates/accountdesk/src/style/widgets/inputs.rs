//! Text input style functions.

use iced::widget::text_input;
use iced::{Background, Border};

use super::palette;
use super::shadows::radius;

/// Form input style.
pub fn form_input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.selected,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            background: Background::Color(p.surface),
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: Background::Color(p.surface),
            border: Border {
                color: p.primary,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Background::Color(p.background_secondary),
            value: p.text_muted,
            ..base
        },
    }
}

/// Input marked invalid: the form style with a red border in every state.
pub fn invalid_input_style(theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();
    let base = form_input_style(theme, status);

    text_input::Style {
        border: Border {
            color: p.accent_red,
            width: 1.5,
            ..base.border
        },
        ..base
    }
}
