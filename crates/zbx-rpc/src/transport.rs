//! The transport function behind every remote call.
//!
//! [`send`] wraps `params` in a JSON-RPC envelope, POSTs it over the shared
//! connection and unwraps the reply. Failures map onto the flat [`Error`]
//! enum; nothing is retried.

use serde_json::Value;

use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::protocol::{Request, Response};

/// Send one JSON-RPC call and return the raw `result` value.
///
/// # Errors
///
/// - `Error::ConnectionClosed` if the connection was closed
/// - `Error::Transport` on any HTTP failure, including non-2xx statuses
/// - `Error::EmptyResponse` if the body is blank or decodes to a falsy value
///   (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// - `Error::Json` if the body is not JSON
/// - `Error::Api` if the body carries an `error` object
/// - `Error::UnexpectedResponse` if the body is not a response envelope
pub async fn send(connection: &Connection, method: &str, params: Value, id: u64) -> Result<Value> {
    execute(connection, method, params, id, true).await
}

/// Like [`send`], but never attaches the bearer token.
///
/// The server rejects `apiinfo.version` when an `Authorization` header is
/// present, even a valid one.
///
/// # Errors
///
/// Same as [`send`].
pub async fn send_unauthenticated(
    connection: &Connection,
    method: &str,
    params: Value,
    id: u64,
) -> Result<Value> {
    execute(connection, method, params, id, false).await
}

async fn execute(
    connection: &Connection,
    method: &str,
    params: Value,
    id: u64,
    authenticated: bool,
) -> Result<Value> {
    if connection.is_closed() {
        return Err(Error::ConnectionClosed);
    }

    let request = Request::new(method, params, id);
    let body = serde_json::to_vec(&request)?;

    tracing::debug!("-> {} (id={})", method, id);
    tracing::trace!("request params: {}", request.params);

    let response = connection
        .post(body, authenticated)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .inspect_err(|e| tracing::warn!("{} (id={}) failed in transport: {}", method, id, e))?;
    let text = response.text().await?;

    tracing::trace!("response body: {}", text);

    decode_body(&text)
        .and_then(unwrap_envelope)
        .inspect_err(|e| tracing::warn!("{} (id={}) failed: {}", method, id, e))
}

/// Decode a response body, rejecting empty ones.
///
/// # Errors
///
/// Returns `Error::EmptyResponse` for blank or empty-valued bodies and
/// `Error::Json` for bodies that are not JSON.
pub fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let body: Value = serde_json::from_str(text)?;
    if is_empty_value(&body) {
        return Err(Error::EmptyResponse);
    }
    Ok(body)
}

/// Extract `result` from a decoded response envelope.
///
/// # Errors
///
/// Returns `Error::Api` when the envelope carries a non-null `error`,
/// `Error::EmptyResponse` for empty bodies and `Error::UnexpectedResponse`
/// when neither `result` nor `error` is present.
pub fn unwrap_envelope(body: Value) -> Result<Value> {
    if is_empty_value(&body) {
        return Err(Error::EmptyResponse);
    }

    if !body.is_object() {
        return Err(Error::UnexpectedResponse(format!(
            "expected a JSON object, got {body}"
        )));
    }

    match serde_json::from_value::<Response>(body)? {
        Response {
            error: Some(error), ..
        } => Err(error.into()),
        Response {
            result: Some(result),
            ..
        } => Ok(result),
        Response { .. } => Err(Error::UnexpectedResponse(
            "response carries neither result nor error".to_string(),
        )),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DEFAULT_TIMEOUT;
    use serde_json::json;

    #[test]
    fn test_decode_blank_body_is_empty_response() {
        assert!(matches!(decode_body(""), Err(Error::EmptyResponse)));
        assert!(matches!(decode_body("  \n"), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_decode_empty_values_are_empty_response() {
        for body in ["{}", "null", "\"\"", "[]", "false", "0", "0.0"] {
            assert!(
                matches!(decode_body(body), Err(Error::EmptyResponse)),
                "body {body} should be an empty response"
            );
        }
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(matches!(decode_body("<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn test_unwrap_result() {
        let body = json!({"jsonrpc": "2.0", "result": {"hostids": ["10084"]}, "id": 2});
        assert_eq!(
            unwrap_envelope(body).unwrap(),
            json!({"hostids": ["10084"]})
        );
    }

    #[test]
    fn test_unwrap_falsy_result_is_returned() {
        let body = json!({"jsonrpc": "2.0", "result": [], "id": 2});
        assert_eq!(unwrap_envelope(body).unwrap(), json!([]));

        let body = json!({"jsonrpc": "2.0", "result": "0", "id": 2});
        assert_eq!(unwrap_envelope(body).unwrap(), json!("0"));
    }

    #[test]
    fn test_unwrap_error_copies_fields() {
        let body = json!({
            "jsonrpc": "2.0",
            "error": {"code": -32602, "message": "Invalid params.", "data": "Incorrect method."},
            "id": 2
        });

        match unwrap_envelope(body) {
            Err(Error::Api {
                code,
                message,
                data,
            }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid params.");
                assert_eq!(data, json!("Incorrect method."));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_error_with_null_data() {
        let body = json!({"error": {"code": 1, "message": "m", "data": null}});
        match unwrap_envelope(body) {
            Err(Error::Api { data, .. }) => assert_eq!(data, Value::Null),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_null_result_is_returned() {
        let body = json!({"jsonrpc": "2.0", "result": null, "id": 2});
        assert_eq!(unwrap_envelope(body).unwrap(), Value::Null);
    }

    #[test]
    fn test_unwrap_null_error_falls_back_to_result() {
        let body = json!({"jsonrpc": "2.0", "result": true, "error": null, "id": 2});
        assert_eq!(unwrap_envelope(body).unwrap(), json!(true));
    }

    #[test]
    fn test_unwrap_error_wins_over_result() {
        let body = json!({"result": 1, "error": {"code": 2, "message": "m"}});
        assert!(matches!(unwrap_envelope(body), Err(Error::Api { code: 2, .. })));
    }

    #[test]
    fn test_unwrap_missing_result() {
        let body = json!({"jsonrpc": "2.0", "id": 1});
        assert!(matches!(
            unwrap_envelope(body),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_unwrap_non_object() {
        assert!(matches!(
            unwrap_envelope(json!(42)),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_send_on_closed_connection() {
        let conn =
            Connection::with_http_client(reqwest::Client::new(), "http://127.0.0.1:9", DEFAULT_TIMEOUT);
        conn.close();

        let result = send(&conn, "host.get", json!({}), 1).await;
        assert!(matches!(result, Err(Error::ConnectionClosed)));
    }

    #[tokio::test]
    async fn test_send_unreachable_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let conn = Connection::new(&format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();
        let result = send(&conn, "host.get", json!({}), 1).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
