//! Host group schemas.

use serde::{Deserialize, Serialize};

use crate::{CommonGet, GroupId, HostId, OneOrMany, Params, number_from_any, string_from_any};

/// A host group as returned by `hostgroup.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostGroup {
    #[serde(deserialize_with = "string_from_any")]
    pub groupid: String,
    pub name: String,
    /// 0 for a plain host group, 4 for a discovered one.
    #[serde(deserialize_with = "number_from_any")]
    pub flags: u8,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostGroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl HostGroupCreate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupGet {
    #[serde(flatten)]
    pub common: CommonGet,
    /// Return only host groups with the given ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    /// Return only host groups that contain the given hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    /// Return only host groups affected by the given maintenances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenanceids: Option<OneOrMany<u64>>,
    /// Return only host groups that contain hosts with the given triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggerids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_hosts: Option<bool>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupUpdate {
    pub groupid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Adds hosts to all the given host groups at once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupMassAdd {
    pub groups: Vec<GroupId>,
    pub hosts: Vec<HostId>,
}

/// Removes hosts from the given host groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupMassRemove {
    pub groupids: Vec<u64>,
    pub hostids: Vec<u64>,
}

/// Replaces the hosts of the given host groups.
pub type HostGroupMassUpdate = HostGroupMassAdd;

/// Propagates permissions and tag filters to subgroups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupPropagate {
    pub groups: Vec<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hostgroup_get_partial() {
        let get = HostGroupGet {
            groupids: Some(OneOrMany::One(5)),
            common: CommonGet {
                editable: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(get).unwrap(),
            json!({"groupids": 5, "editable": false})
        );
    }

    #[test]
    fn test_hostgroup_get_extra_fields() {
        let get = HostGroupGet {
            extra: Params::new().set("selectHosts", "count"),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(get).unwrap(),
            json!({"selectHosts": "count"})
        );
    }

    #[test]
    fn test_hostgroup_mass_add() {
        let mass = HostGroupMassAdd {
            groups: vec![GroupId { groupid: 5 }],
            hosts: vec![HostId { hostid: 30050 }, HostId { hostid: 30001 }],
        };
        assert_eq!(
            serde_json::to_value(mass).unwrap(),
            json!({
                "groups": [{"groupid": 5}],
                "hosts": [{"hostid": 30050}, {"hostid": 30001}]
            })
        );
    }

    #[test]
    fn test_hostgroup_response() {
        let group: HostGroup = serde_json::from_value(json!({
            "groupid": "2",
            "name": "Linux servers",
            "flags": "0",
            "uuid": "dc579cd7a1a34222933f24f52a68bcd8"
        }))
        .unwrap();
        assert_eq!(group.groupid, "2");
        assert_eq!(group.flags, 0);
    }
}
