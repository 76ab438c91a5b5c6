//! JSON-RPC 2.0 plumbing for the Zabbix management API.
//!
//! This crate provides the envelope types, the error taxonomy and the single
//! transport function every remote call goes through.
//!
//! # Architecture
//!
//! - [`protocol`]: JSON-RPC 2.0 request/response envelopes
//! - [`connection`]: the shared HTTP connection handle (endpoint, token, timeout)
//! - [`transport`]: builds an envelope, POSTs it and unwraps the reply
//! - [`error`]: the flat error enum and `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use zbx_rpc::{Connection, transport};
//!
//! # async fn example() -> zbx_rpc::Result<()> {
//! let connection = Connection::new("https://zabbix.example.com", Duration::from_secs(5))?
//!     .with_token("8f1d...");
//!
//! let version = transport::send(&connection, "apiinfo.version", serde_json::json!([]), 1).await?;
//! println!("server runs {version}");
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod protocol;
pub mod transport;

pub use connection::{API_PATH, Connection, DEFAULT_TIMEOUT, endpoint_url};
pub use error::{Error, Result};
pub use protocol::{
    APPLICATION_ERROR, CONTENT_TYPE, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, Request, Response, RpcError,
};
pub use transport::{send, send_unauthenticated};
