//! Item schemas.

use serde::Serialize;
use serde_json::Value;

use crate::{CommonGet, OneOrMany, Params, Tag, TagFilter};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaceids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggerids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webitems: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaltype: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagFilter>>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<Value>,
    #[serde(rename = "selectTriggers", skip_serializing_if = "Option::is_none")]
    pub select_triggers: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemCreate {
    pub name: String,
    pub key_: String,
    pub hostid: u64,
    #[serde(rename = "type")]
    pub item_type: u8,
    pub value_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaceid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preprocessing: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemUpdate {
    pub itemid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preprocessing: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Params,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_create_renames_type() {
        let create = ItemCreate {
            name: "Free disk space on /".to_string(),
            key_: "vfs.fs.size[/,free]".to_string(),
            hostid: 30074,
            item_type: 0,
            value_type: 3,
            delay: Some("30s".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(create).unwrap();

        assert_eq!(value["type"], json!(0));
        assert_eq!(value["key_"], json!("vfs.fs.size[/,free]"));
        assert!(value.get("item_type").is_none());
        assert!(value.get("units").is_none());
    }
}
