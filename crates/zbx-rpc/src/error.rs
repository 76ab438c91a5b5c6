//! Error types for the zbx-rpc crate.
//!
//! Every remote call either returns the decoded `result` or fails with one of
//! these variants. Nothing is retried.

use serde_json::Value;

use crate::protocol::RpcError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither a token nor a complete username/password pair was supplied.
    #[error("Username and password are required if token is not provided")]
    CredentialMissing,

    /// The HTTP layer failed or answered with a non-2xx status.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an empty body.
    #[error("Received empty response from Zabbix server")]
    EmptyResponse,

    /// The server answered with a JSON-RPC `error` object.
    #[error("API error: code: {code}, message: {message}, data: {data}")]
    Api {
        code: i64,
        message: String,
        data: Value,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body decoded, but it is not a JSON-RPC response envelope.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Connection closed")]
    ConnectionClosed,
}

impl Error {
    pub fn api(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self::Api {
            code,
            message: message.into(),
            data,
        }
    }

    /// The server-side error object, if this is an API fault.
    #[must_use]
    pub fn as_rpc_error(&self) -> Option<RpcError> {
        match self {
            Self::Api {
                code,
                message,
                data,
            } => Some(RpcError::with_data(*code, message.clone(), data.clone())),
            _ => None,
        }
    }
}

impl From<RpcError> for Error {
    fn from(e: RpcError) -> Self {
        Self::Api {
            code: e.code,
            message: e.message,
            data: e.data,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
