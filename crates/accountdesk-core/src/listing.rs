//! Account list view contract.
//!
//! Turns the account collection into table rows. Actions are produced by
//! caller-supplied callbacks so any UI can attach its own message type.

use crate::account::{Account, AccountId};

/// Column headers of the account table.
pub const COLUMNS: [&str; 4] = ["Name", "Last name", "Email", "Actions"];

/// Text of the single row shown when there are no accounts.
pub const NO_ACCOUNTS: &str = "No accounts available";

/// One row of the account table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRow<'a, M> {
    /// An account with its edit and delete actions.
    Account {
        /// The account shown in this row.
        account: &'a Account,
        /// Action fired by the Edit button.
        edit: M,
        /// Action fired by the Delete button; `None` when the account has no id.
        delete: Option<M>,
    },
    /// Placeholder spanning every column.
    Placeholder(&'static str),
}

/// Build the table rows for `accounts`, preserving order.
pub fn account_rows<'a, M>(
    accounts: &'a [Account],
    on_edit: impl Fn(&Account) -> M,
    on_delete: impl Fn(&AccountId) -> M,
) -> Vec<AccountRow<'a, M>> {
    if accounts.is_empty() {
        return vec![AccountRow::Placeholder(NO_ACCOUNTS)];
    }

    accounts
        .iter()
        .map(|account| AccountRow::Account {
            account,
            edit: on_edit(account),
            delete: account.id.as_ref().map(&on_delete),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Action {
        Edit(String),
        Delete(AccountId),
    }

    fn account(id: Option<&str>, name: &str) -> Account {
        Account {
            id: id.map(AccountId::new),
            name: name.to_string(),
            lastname: "Smith".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Account::default()
        }
    }

    fn rows(accounts: &[Account]) -> Vec<AccountRow<'_, Action>> {
        account_rows(
            accounts,
            |a| Action::Edit(a.name.clone()),
            |id| Action::Delete(id.clone()),
        )
    }

    #[test]
    fn test_empty_list_has_placeholder() {
        assert_eq!(rows(&[]), vec![AccountRow::Placeholder(NO_ACCOUNTS)]);
    }

    #[test]
    fn test_one_row_per_account_in_order() {
        let accounts = vec![account(Some("1"), "Jane"), account(Some("2"), "John")];
        let rows = rows(&accounts);
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            AccountRow::Account {
                account,
                edit,
                delete,
            } => {
                assert_eq!(account.name, "John");
                assert_eq!(*edit, Action::Edit("John".to_string()));
                assert_eq!(*delete, Some(Action::Delete(AccountId::new("2"))));
            }
            AccountRow::Placeholder(_) => panic!("expected an account row"),
        }
    }

    #[test]
    fn test_account_without_id_cannot_be_deleted() {
        let accounts = vec![account(None, "Draft")];
        assert!(matches!(
            rows(&accounts)[0],
            AccountRow::Account { delete: None, .. }
        ));
    }
}
