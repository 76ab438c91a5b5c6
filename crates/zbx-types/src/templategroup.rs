//! Template group schemas.

use serde::Serialize;

use crate::{CommonGet, GroupId, OneOrMany, Params, TemplateId};

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGroupGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_templates: Option<bool>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateGroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl TemplateGroupCreate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGroupUpdate {
    pub groupid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGroupMassAdd {
    pub groups: Vec<GroupId>,
    pub templates: Vec<TemplateId>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGroupMassRemove {
    pub groupids: Vec<u64>,
    pub templateids: Vec<u64>,
}

pub type TemplateGroupMassUpdate = TemplateGroupMassAdd;

/// Propagates permissions to subgroups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGroupPropagate {
    pub groups: Vec<GroupId>,
    pub permissions: bool,
}
