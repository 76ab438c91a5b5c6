//! The per-kind accessor every typed API struct wraps.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use zbx_rpc::{Connection, Result, transport};

use crate::kind::ObjectKind;

/// The generic operations shared by object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
    MassAdd,
    MassRemove,
    MassUpdate,
}

impl Operation {
    /// Method-name suffix as the API spells it.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::MassAdd => "massadd",
            Operation::MassRemove => "massremove",
            Operation::MassUpdate => "massupdate",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Ids passed to `delete`. Always serializes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ids(Vec<u64>);

impl Ids {
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<u64> for Ids {
    fn from(id: u64) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<u64>> for Ids {
    fn from(ids: Vec<u64>) -> Self {
        Self(ids)
    }
}

impl From<&[u64]> for Ids {
    fn from(ids: &[u64]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for Ids {
    fn from(ids: [u64; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl FromIterator<u64> for Ids {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Binds one object kind to the shared connection and owns the request-id
/// counter for calls made through it.
pub struct Accessor {
    connection: Arc<Connection>,
    kind: ObjectKind,
    next_id: AtomicU64,
}

impl Accessor {
    #[must_use]
    pub fn new(connection: Arc<Connection>, kind: ObjectKind) -> Self {
        Self {
            connection,
            kind,
            next_id: AtomicU64::new(1),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    #[must_use]
    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    /// The id carried by the most recent request, or 1 before any call.
    #[must_use]
    pub fn last_id(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Send `<kind>.<operation>` with already-encoded params.
    ///
    /// # Errors
    ///
    /// Propagates every transport and API error unchanged.
    pub async fn dispatch(&self, operation: &str, params: Value) -> Result<Value> {
        let method = self.kind.method(operation);
        let id = self.next_request_id();
        transport::send(&self.connection, &method, params, id).await
    }

    /// Like [`Accessor::dispatch`], without the bearer token.
    ///
    /// # Errors
    ///
    /// Propagates every transport and API error unchanged.
    pub async fn dispatch_unauthenticated(&self, operation: &str, params: Value) -> Result<Value> {
        let method = self.kind.method(operation);
        let id = self.next_request_id();
        transport::send_unauthenticated(&self.connection, &method, params, id).await
    }

    /// Serialize `params` and dispatch `operation`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if `params` cannot be serialized, otherwise the
    /// same errors as [`Accessor::dispatch`].
    pub async fn call<P>(&self, operation: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized + Sync,
    {
        let params = serde_json::to_value(params)?;
        self.dispatch(operation, params).await
    }

    /// Like [`Accessor::call`] but decodes the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` when the result does not match `T`.
    pub async fn call_as<P, T>(&self, operation: &str, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let value = self.call(operation, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessor")
            .field("kind", &self.kind)
            .field("endpoint", &self.connection.endpoint())
            .field("last_id", &self.last_id())
            .finish()
    }
}
