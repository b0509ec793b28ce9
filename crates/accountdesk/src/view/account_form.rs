//! Account edit form.
//!
//! Every input is bound through `FormController::register`, so values and
//! inline errors always come from the controller.

use accountdesk_core::{AccountState, Field, FieldBinding, PageState};
use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{FormMessage, Message};
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the account form.
pub fn view_account_form(page: &PageState) -> Element<'_, Message> {
    let p = palette::current();
    let form = page.form();

    let title = page.selection().map_or_else(
        || text("Select an account to edit").size(16).color(p.text_secondary),
        |account| {
            text(format!("Editing {}", account.display_name()))
                .size(16)
                .color(p.text_primary)
        },
    );

    let names = row![
        labeled_input(form.register(Field::Name), "John"),
        labeled_input(form.register(Field::Lastname), "Doe"),
    ]
    .spacing(12);

    let contact = row![
        labeled_input(form.register(Field::Email), "user@example.com"),
        labeled_password(form.register(Field::Password)),
    ]
    .spacing(12);

    let access = row![
        labeled_input(form.register(Field::Role), "admin"),
        state_picker(form.register(Field::State)),
    ]
    .spacing(12);

    container(
        column![
            title,
            Space::new().height(4),
            names,
            contact,
            access,
            action_buttons(page.is_editing()),
        ]
        .spacing(12),
    )
    .padding(20)
    .style(widgets::card_style)
    .into()
}

/// Update is always enabled; Cancel only while editing.
fn action_buttons(is_editing: bool) -> Element<'static, Message> {
    let mut buttons = row![
        button(text("Update").size(14))
            .on_press(Message::Form(FormMessage::Submit))
            .padding([10, 20])
            .style(widgets::primary_button_style),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    if is_editing {
        buttons = buttons.push(
            button(text("Cancel").size(14))
                .on_press(Message::Form(FormMessage::Cancel))
                .padding([10, 20])
                .style(widgets::secondary_button_style),
        );
    }

    buttons.into()
}

fn on_change(field: Field) -> impl Fn(String) -> Message {
    move |value| Message::Form(FormMessage::FieldChanged(field, value))
}

/// Create a labeled text input.
fn labeled_input<'a>(binding: FieldBinding<'a>, placeholder: &'a str) -> Element<'a, Message> {
    let input = text_input(placeholder, binding.value)
        .on_input(on_change(binding.field))
        .padding(10);

    with_label(binding, input)
}

/// Create a labeled password input.
fn labeled_password(binding: FieldBinding<'_>) -> Element<'_, Message> {
    let input = text_input("Leave blank to keep", binding.value)
        .on_input(on_change(binding.field))
        .padding(10)
        .secure(true);

    with_label(binding, input)
}

fn with_label<'a>(
    binding: FieldBinding<'a>,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message> {
    let p = palette::current();
    let input = if binding.is_invalid() {
        input.style(widgets::invalid_input_style)
    } else {
        input.style(widgets::form_input_style)
    };

    let mut col = column![text(binding.field.label()).size(12).color(p.text_secondary), input]
        .spacing(4)
        .width(Length::FillPortion(1));

    if let Some(err) = binding.error {
        col = col.push(text(err.message()).size(11).color(p.accent_red));
    }

    col.into()
}

/// State selector. Unknown wire values show as the placeholder.
fn state_picker(binding: FieldBinding<'_>) -> Element<'_, Message> {
    let p = palette::current();
    let field = binding.field;

    let mut col = column![
        text(field.label()).size(12).color(p.text_secondary),
        pick_list(
            AccountState::ALL,
            AccountState::parse(binding.value),
            move |state: AccountState| {
                Message::Form(FormMessage::FieldChanged(field, state.as_str().to_string()))
            },
        )
        .placeholder("Select a state")
        .padding(10)
        .width(Length::Fill),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    if let Some(err) = binding.error {
        col = col.push(text(err.message()).size(11).color(p.accent_red));
    }

    col.into()
}
