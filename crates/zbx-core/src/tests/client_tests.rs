//! Tests for client construction and login

use std::time::Duration;

use serde_json::{Value, json};

use super::fixtures::{MockServer, Recorded, Reply};
use crate::types::HostGet;
use crate::{Error, Readable, ZabbixClient};

fn login_then_echo(token: &'static str) -> impl Fn(&Recorded) -> Reply + Send + Sync + 'static {
    move |req: &Recorded| match req.method() {
        "user.login" => Reply::result(req, json!(token)),
        _ => Reply::result(req, json!([])),
    }
}

#[tokio::test]
async fn test_missing_credentials_send_nothing() {
    let server = MockServer::replying(json!("unused")).await;

    let result = ZabbixClient::builder(server.url()).build().await;
    assert!(matches!(result, Err(Error::CredentialMissing)));

    let result = ZabbixClient::builder(server.url())
        .credentials("Admin", "")
        .build()
        .await;
    assert!(matches!(result, Err(Error::CredentialMissing)));

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_login_flow() {
    let server = MockServer::start(login_then_echo("session-123")).await;

    let client = ZabbixClient::builder(server.url())
        .credentials("Admin", "zabbix")
        .build()
        .await
        .unwrap();
    assert!(client.connection().has_token());

    client.host().get(&HostGet::default()).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);

    let login = &requests[0];
    assert_eq!(login.method(), "user.login");
    assert_eq!(login.id(), 1);
    assert_eq!(
        login.params(),
        &json!({"username": "Admin", "password": "zabbix"})
    );
    assert!(login.header("authorization").is_none());

    let get = &requests[1];
    assert_eq!(get.method(), "host.get");
    assert_eq!(get.id(), 2);
    assert_eq!(get.params(), &json!({}));
    assert_eq!(get.header("authorization"), Some("Bearer session-123"));
}

#[tokio::test]
async fn test_token_skips_login() {
    let server = MockServer::start(login_then_echo("unused")).await;

    let client = ZabbixClient::builder(server.url())
        .token("api-token")
        .credentials("Admin", "zabbix")
        .build()
        .await
        .unwrap();
    assert!(server.requests().is_empty());

    client.host().get(&HostGet::default()).await.unwrap();
    let req = server.last();
    assert_eq!(req.method(), "host.get");
    assert_eq!(req.header("authorization"), Some("Bearer api-token"));
}

#[tokio::test]
async fn test_login_non_string_result() {
    let server = MockServer::replying(json!({"sessionid": "abc"})).await;

    let result = ZabbixClient::builder(server.url())
        .credentials("Admin", "zabbix")
        .build()
        .await;
    assert!(matches!(result, Err(Error::UnexpectedResponse(_))));
}

#[tokio::test]
async fn test_login_api_error() {
    let server = MockServer::start(|req| {
        Reply::error(
            req,
            -32602,
            "Invalid params.",
            json!("Incorrect user name or password or account is temporarily blocked."),
        )
    })
    .await;

    let result = ZabbixClient::builder(server.url())
        .credentials("Admin", "wrong")
        .build()
        .await;
    match result {
        Err(Error::Api { code, message, .. }) => {
            assert_eq!(code, -32602);
            assert_eq!(message, "Invalid params.");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_url_with_and_without_trailing_slash() {
    let server = MockServer::replying(json!([])).await;

    for url in [server.url(), format!("{}/", server.url())] {
        let client = ZabbixClient::builder(url).token("t").build().await.unwrap();
        client.host().get(&HostGet::default()).await.unwrap();
        assert_eq!(server.last().path, "/api_jsonrpc.php");
    }
}

#[tokio::test]
async fn test_external_http_client_and_timeout() {
    let server = MockServer::replying(json!("7.0.0")).await;

    let client = ZabbixClient::builder(server.url())
        .token("t")
        .timeout(Duration::from_secs(2))
        .http_client(reqwest::Client::new())
        .build()
        .await
        .unwrap();
    assert_eq!(client.connection().timeout(), Duration::from_secs(2));

    let version = client.api_info().version().await.unwrap();
    assert_eq!(version, json!("7.0.0"));
}

#[tokio::test]
async fn test_session_closes_connection() {
    let server = MockServer::replying(json!([])).await;
    let client = server.client();

    {
        let session = client.session();
        session.host().get(&HostGet::default()).await.unwrap();
    }
    assert!(client.is_closed());

    let result = client.host().get(&HostGet::default()).await;
    assert!(matches!(result, Err(Error::ConnectionClosed)));
    assert_eq!(server.requests().len(), 1);

    assert!(!client.close());
}

#[tokio::test]
async fn test_clones_share_connection() {
    let server = MockServer::replying(Value::Bool(true)).await;
    let client = server.client();
    let clone = client.clone();

    client.close();
    assert!(clone.is_closed());
}
