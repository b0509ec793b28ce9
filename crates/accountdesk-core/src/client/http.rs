//! HTTP implementation of the account service.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::AccountService;
use super::error::{FetchError, FetchResult};
use crate::account::{Account, AccountId};
use crate::config::Config;
use crate::form::AccountDraft;

/// Body of `GET {base}/account`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountList {
    /// Every account known to the service.
    pub all_accounts: Vec<Account>,
}

impl AccountList {
    /// Decode a list response body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Decode` if the body is not a valid list payload.
    pub fn from_slice(body: &[u8]) -> FetchResult<Vec<Account>> {
        let list: Self = serde_json::from_slice(body)?;
        Ok(list.all_accounts)
    }
}

/// Account service client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base: Url,
}

impl AccountClient {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("accountdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, config))
    }

    /// Creates a client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base: config.base_url().clone(),
        }
    }

    /// Base URL requests are built from.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/account`, or `{base}/account/{id}` when an id is given.
    ///
    /// The id is pushed as a single percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the base URL cannot carry a path.
    pub fn endpoint(&self, id: Option<&AccountId>) -> FetchResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FetchError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty().push("account");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Turns a non-success response into `FetchError::Status`.
    async fn check(response: reqwest::Response) -> FetchResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl AccountService for AccountClient {
    async fn list_accounts(&self) -> FetchResult<Vec<Account>> {
        let url = self.endpoint(None)?;
        debug!(%url, "GET accounts");

        let response = Self::check(self.http.get(url).send().await?).await?;
        let body = response.bytes().await?;
        let accounts = AccountList::from_slice(&body)?;

        debug!(count = accounts.len(), "Accounts received");
        Ok(accounts)
    }

    async fn update_account(&self, id: &AccountId, draft: &AccountDraft) -> FetchResult<()> {
        let url = self.endpoint(Some(id))?;
        debug!(%url, "PUT account");

        Self::check(self.http.put(url).json(draft).send().await?).await?;
        Ok(())
    }

    async fn delete_account(&self, id: &AccountId) -> FetchResult<()> {
        let url = self.endpoint(Some(id))?;
        debug!(%url, "DELETE account");

        Self::check(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> AccountClient {
        let config = Config::resolve(Some(base.to_string()), None).unwrap();
        AccountClient::with_http_client(reqwest::Client::new(), &config)
    }

    #[test]
    fn test_collection_endpoint() {
        let client = client("http://localhost:3000/api");
        let url = client.endpoint(None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/account");
    }

    #[test]
    fn test_trailing_slash_is_collapsed() {
        let client = client("https://accounts.example.com/v1/");
        let url = client.endpoint(Some(&AccountId::new("42"))).unwrap();
        assert_eq!(url.as_str(), "https://accounts.example.com/v1/account/42");
    }

    #[test]
    fn test_id_is_one_encoded_segment() {
        let client = client("http://localhost:3000");
        let url = client.endpoint(Some(&AccountId::new("a/b c"))).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/account/a%2Fb%20c");
    }

    #[test]
    fn test_decode_list_payload() {
        let body = br#"{"allAccounts": [
            {"id": "1", "name": "Ada", "lastname": "Lovelace", "email": "ada@example.com", "role": "admin", "state": "ACTIVE"},
            {"id": 2, "name": "Alan", "lastname": "Turing", "email": "alan@example.com", "role": "", "state": "INACTIVE"}
        ]}"#;
        let accounts = AccountList::from_slice(body).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].id, Some(AccountId::new("2")));
    }

    #[test]
    fn test_decode_rejects_bare_array() {
        let error = AccountList::from_slice(b"[]").unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
    }
}
