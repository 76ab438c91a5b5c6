//! Host schemas.

use serde::Serialize;
use serde_json::Value;

use crate::{CommonGet, GroupId, HostId, OneOrMany, Params, Tag, TagFilter, TemplateId};

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxyids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggerids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_hosts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severities: Option<OneOrMany<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaltype: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagFilter>>,
    #[serde(rename = "selectInterfaces", skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<Value>,
    #[serde(rename = "selectHostGroups", skip_serializing_if = "Option::is_none")]
    pub select_host_groups: Option<Value>,
    #[serde(rename = "selectParentTemplates", skip_serializing_if = "Option::is_none")]
    pub select_parent_templates: Option<Value>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostCreate {
    pub host: String,
    pub groups: Vec<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_mode: Option<i8>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostUpdate {
    pub hostid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_clear: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Params,
}

/// Adds groups, templates or macros to all the given hosts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMassAdd {
    pub hosts: Vec<HostId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<Value>>,
}

/// Removes related objects from the given hosts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMassRemove {
    pub hostids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids_clear: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<Value>>,
}

/// Replaces related objects and sets properties on the given hosts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMassUpdate {
    pub hosts: Vec<HostId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_clear: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Params,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_host_create_minimal() {
        let create = HostCreate {
            host: "web-01".to_string(),
            groups: vec![GroupId { groupid: 2 }],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(create).unwrap(),
            json!({"host": "web-01", "groups": [{"groupid": 2}]})
        );
    }

    #[test]
    fn test_host_update_status_zero_is_sent() {
        let update = HostUpdate {
            hostid: 10084,
            status: Some(0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"hostid": 10084, "status": 0})
        );
    }

    #[test]
    fn test_host_mass_remove() {
        let remove = HostMassRemove {
            hostids: vec![1, 2],
            groupids: Some(vec![5]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(remove).unwrap(),
            json!({"hostids": [1, 2], "groupids": [5]})
        );
    }
}
