//! Alert schemas.

use serde::Serialize;
use serde_json::Value;

use crate::{CommonGet, OneOrMany, Params};

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alertids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediatypeids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventobject: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventsource: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<i64>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<Value>,
    #[serde(rename = "selectMediatypes", skip_serializing_if = "Option::is_none")]
    pub select_mediatypes: Option<Value>,
    #[serde(rename = "selectUsers", skip_serializing_if = "Option::is_none")]
    pub select_users: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}
