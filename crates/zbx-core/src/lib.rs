//! Typed client for the Zabbix JSON-RPC management API.
//!
//! Every remote object kind (host, item, trigger, ...) is reached through a
//! typed accessor obtained from [`ZabbixClient`]. Accessors implement the
//! capability traits that match what the remote API supports for that kind:
//!
//! - [`Readable`]: `get`
//! - [`Updatable`]: `update`
//! - [`Writable`]: `create`, `delete` (and everything above)
//! - [`BatchMutable`]: `mass_add`, `mass_remove`, `mass_update`
//!
//! Results come back as raw [`serde_json::Value`]s; use [`Readable::get_as`]
//! to decode a `get` result into a concrete type.
//!
//! # Example
//!
//! ```no_run
//! use zbx_core::{Readable, ZabbixClient};
//! use zbx_core::types::{CommonGet, HostGroupGet, Output};
//!
//! # async fn example() -> zbx_core::Result<()> {
//! let client = ZabbixClient::builder("https://zabbix.example.com")
//!     .token("8f1d...")
//!     .build()
//!     .await?;
//!
//! let groups = client
//!     .host_group()
//!     .get(&HostGroupGet {
//!         common: CommonGet {
//!             output: Some(Output::Extend),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{groups}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod objects;

mod accessor;
mod capability;
mod client;
mod created;
mod kind;
mod registry;

#[cfg(test)]
mod tests;

pub use accessor::{Accessor, Ids, Operation};
pub use capability::{BatchMutable, ObjectApi, Readable, Updatable, Writable};
pub use client::{ClientBuilder, Session, ZabbixClient};
pub use created::{created_ids, first_created_id};
pub use kind::{ObjectKind, Shape, UnknownObjectKind};
pub use registry::Registry;

pub use zbx_rpc::{Connection, Error, Result};

/// Request and response schema types.
pub use zbx_types as types;
