//! Account table.

use accountdesk_core::{Account, AccountRow, COLUMNS, account_rows};
use iced::widget::{Row, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the account table: a header row followed by one row per account,
/// or a single placeholder row.
pub fn view_account_list(accounts: &[Account]) -> Element<'_, Message> {
    let p = palette::current();

    let header = COLUMNS
        .iter()
        .fold(Row::<Message>::new(), |header, title| {
            header.push(
                text(*title)
                    .size(13)
                    .color(p.text_secondary)
                    .width(Length::FillPortion(1)),
            )
        })
        .spacing(12)
        .padding([10, 16]);

    let rows = account_rows(
        accounts,
        |account| Message::Edit(account.clone()),
        |id| Message::Delete(id.clone()),
    )
    .into_iter()
    .map(view_row);

    let body = rows.fold(
        column![
            container(header)
                .width(Length::Fill)
                .style(widgets::table_header_style)
        ],
        |body, row| body.push(row),
    );

    container(body)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
}

fn view_row(row_data: AccountRow<'_, Message>) -> Element<'_, Message> {
    let p = palette::current();

    let content: Element<'_, Message> = match row_data {
        AccountRow::Account {
            account,
            edit,
            delete,
        } => {
            let cell = |value: &str| {
                text(value.to_owned())
                    .size(14)
                    .color(p.text_primary)
                    .width(Length::FillPortion(1))
            };

            let actions = row![
                button(text("Edit").size(13))
                    .on_press(edit)
                    .padding([6, 12])
                    .style(widgets::warning_button_style),
                button(text("Delete").size(13))
                    .on_press_maybe(delete)
                    .padding([6, 12])
                    .style(widgets::danger_button_style),
            ]
            .spacing(8)
            .width(Length::FillPortion(1));

            row![
                cell(&account.name),
                cell(&account.lastname),
                cell(&account.email),
                actions
            ]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
        }
        AccountRow::Placeholder(message) => text(message)
            .size(14)
            .color(p.text_muted)
            .width(Length::Fill)
            .center()
            .into(),
    };

    container(content)
        .width(Length::Fill)
        .padding([10, 16])
        .style(widgets::table_row_style)
        .into()
}
