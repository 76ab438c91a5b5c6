//! Capability traits implemented by typed accessors.
//!
//! Each object kind supports one of four operation shapes. Instead of a class
//! hierarchy the shapes are layered traits: a kind that can be written can
//! also be read and updated, and a kind with mass operations can be written.
//!
//! Every default method serializes its input before the returned future is
//! first polled, so the future only borrows the accessor.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use zbx_rpc::Result;

use crate::accessor::{Accessor, Ids, Operation};
use crate::kind::ObjectKind;

/// Base trait of every typed accessor.
pub trait ObjectApi: Send + Sync + Sized {
    const KIND: ObjectKind;

    fn from_accessor(accessor: Arc<Accessor>) -> Self;

    fn accessor(&self) -> &Accessor;
}

fn send<'a, A: ObjectApi, P: Serialize + ?Sized>(
    api: &'a A,
    operation: Operation,
    params: &P,
) -> impl Future<Output = Result<Value>> + Send + use<'a, A, P> {
    let params = serde_json::to_value(params);
    async move { api.accessor().dispatch(operation.suffix(), params?).await }
}

pub trait Readable: ObjectApi {
    type Get: Serialize;

    fn get(&self, params: &Self::Get) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::Get, params)
    }

    /// Run `get` and decode the result into `T`.
    fn get_as<T>(&self, params: &Self::Get) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let call = self.get(params);
        async move { Ok(serde_json::from_value(call.await?)?) }
    }
}

pub trait Updatable: ObjectApi {
    type Update: Serialize;

    fn update(&self, params: &Self::Update) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::Update, params)
    }
}

pub trait Writable: Readable + Updatable {
    type Create: Serialize;

    fn create(&self, params: &Self::Create) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::Create, params)
    }

    /// Delete one or more objects. A single id is sent as a one-element array.
    fn delete(&self, ids: impl Into<Ids>) -> impl Future<Output = Result<Value>> + Send {
        let ids: Ids = ids.into();
        send(self, Operation::Delete, &ids)
    }
}

pub trait BatchMutable: Writable {
    type MassAdd: Serialize;
    type MassRemove: Serialize;
    type MassUpdate: Serialize;

    fn mass_add(&self, params: &Self::MassAdd) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::MassAdd, params)
    }

    fn mass_remove(&self, params: &Self::MassRemove) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::MassRemove, params)
    }

    fn mass_update(&self, params: &Self::MassUpdate) -> impl Future<Output = Result<Value>> + Send {
        send(self, Operation::MassUpdate, params)
    }
}
