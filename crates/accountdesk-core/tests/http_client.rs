//! HTTP tests for `AccountClient`.
//!
//! Each test runs a one-shot server on a local TCP port that records the
//! request and replies with a canned response.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use accountdesk_core::{
    Account, AccountClient, AccountDraft, AccountId, AccountService, AccountState, Config,
    FetchError, Field,
};

/// Request as received by the mock server.
#[derive(Debug)]
struct Recorded {
    /// Request line, e.g. `GET /api/account HTTP/1.1`.
    line: String,
    body: String,
}

/// Serve exactly one request with `status` and `body`.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (SocketAddr, JoinHandle<Recorded>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let recorded = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        recorded
    });

    (addr, handle)
}

/// Read headers, then as many body bytes as `Content-Length` announces.
async fn read_request(stream: &mut tokio::net::TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, value)| value.trim().parse::<usize>().unwrap());

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending the body");
        buf.extend_from_slice(&chunk[..n]);
    }

    Recorded {
        line: head.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned(),
    }
}

fn client_for(addr: SocketAddr) -> AccountClient {
    let config = Config::resolve(Some(format!("http://{addr}/api")), None).unwrap();
    AccountClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_decodes_accounts() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"allAccounts":[{"id":1,"name":"Ada","lastname":"Lovelace",
            "email":"ada@example.com","role":null,"state":"ACTIVE"}]}"#,
    )
    .await;

    let accounts = client_for(addr).list_accounts().await.unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, Some(AccountId::new("1")));
    assert_eq!(accounts[0].name, "Ada");
    assert_eq!(accounts[0].role, "");
    assert_eq!(accounts[0].state, Some(AccountState::Active));

    let request = server.await.unwrap();
    assert!(request.line.starts_with("GET /api/account "), "{}", request.line);
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let (addr, server) = serve_once("404 Not Found", "gone").await;

    let error = client_for(addr)
        .delete_account(&AccountId::new("9"))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        FetchError::Status {
            status: 404,
            body: "gone".to_string(),
        }
    );
    assert!(error.is_not_found());

    let request = server.await.unwrap();
    assert!(request.line.starts_with("DELETE /api/account/9 "), "{}", request.line);
}

#[tokio::test]
async fn test_update_sends_cleared_role() {
    let (addr, server) = serve_once("200 OK", "{}").await;

    let account = Account {
        id: Some(AccountId::new("7")),
        name: "Grace".to_string(),
        lastname: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role: "admin".to_string(),
        state: Some(AccountState::Active),
    };
    let mut draft = AccountDraft::from_account(&account);
    draft.set(Field::Role, "");

    client_for(addr)
        .update_account(&AccountId::new("7"), &draft)
        .await
        .unwrap();

    let request = server.await.unwrap();
    assert!(request.line.starts_with("PUT /api/account/7 "), "{}", request.line);
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["role"], "");
    assert_eq!(body["name"], "Grace");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_malformed_list_is_decode_error() {
    let (addr, server) = serve_once("200 OK", r#"{"accounts":[]}"#).await;

    let error = client_for(addr).list_accounts().await.unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)), "{error:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let error = client_for(addr).list_accounts().await.unwrap_err();

    assert!(matches!(error, FetchError::Transport(_)), "{error:?}");
    assert_eq!(error.status(), None);
}
