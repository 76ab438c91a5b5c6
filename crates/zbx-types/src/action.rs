//! Action schemas.

use serde::Serialize;
use serde_json::Value;

use crate::{CommonGet, OneOrMany, Params};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggerids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediatypeids: Option<OneOrMany<u64>>,
    #[serde(rename = "selectFilter", skip_serializing_if = "Option::is_none")]
    pub select_filter: Option<Value>,
    #[serde(rename = "selectOperations", skip_serializing_if = "Option::is_none")]
    pub select_operations: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionCreate {
    pub name: String,
    pub eventsource: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esc_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_operations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_operations: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}

impl ActionCreate {
    #[must_use]
    pub fn new(name: impl Into<String>, eventsource: u8) -> Self {
        Self {
            name: name.into(),
            eventsource,
            status: None,
            esc_period: None,
            filter: None,
            operations: None,
            recovery_operations: None,
            update_operations: None,
            extra: Params::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionUpdate {
    pub actionid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esc_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_operations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_operations: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}
