//! Per-client cache of accessors.
//!
//! Each [`ZabbixClient`](crate::ZabbixClient) owns one registry. Memoized kinds
//! get a single accessor for the lifetime of the client; items and item
//! prototypes get a fresh accessor on every lookup. Nothing is shared between
//! clients.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;
use zbx_rpc::Connection;

use crate::accessor::Accessor;
use crate::kind::ObjectKind;

#[derive(Debug)]
pub struct Registry {
    connection: Arc<Connection>,
    accessors: Mutex<HashMap<ObjectKind, Arc<Accessor>>>,
}

impl Registry {
    #[must_use]
    pub fn new(connection: Arc<Connection>) -> Self {
        Self {
            connection,
            accessors: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    /// Accessor for `kind`, created on first use for memoized kinds.
    #[must_use]
    pub fn accessor(&self, kind: ObjectKind) -> Arc<Accessor> {
        if !kind.memoized() {
            return Arc::new(Accessor::new(Arc::clone(&self.connection), kind));
        }

        // A panic while holding the lock cannot leave the map half-written.
        let mut accessors = self
            .accessors
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let accessor = accessors.entry(kind).or_insert_with(|| {
            debug!("Creating accessor for {}", kind);
            Arc::new(Accessor::new(Arc::clone(&self.connection), kind))
        });
        Arc::clone(accessor)
    }

    /// Number of cached accessors.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.accessors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_cached(&self, kind: ObjectKind) -> bool {
        self.accessors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&kind)
    }
}
