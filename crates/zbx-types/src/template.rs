//! Template schemas.

use serde::Serialize;
use serde_json::Value;

use crate::{CommonGet, GroupId, OneOrMany, Params, Tag, TemplateId};

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_templateids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_triggers: Option<bool>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<Value>,
    #[serde(rename = "selectTemplateGroups", skip_serializing_if = "Option::is_none")]
    pub select_template_groups: Option<Value>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateCreate {
    pub host: String,
    pub groups: Vec<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateUpdate {
    pub templateid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_clear: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(flatten)]
    pub extra: Params,
}

/// Links groups, templates or macros to all the given templates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateMassAdd {
    pub templates: Vec<TemplateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_link: Option<Vec<TemplateId>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateMassRemove {
    pub templateids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids_clear: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templateids_link: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateMassUpdate {
    pub templates: Vec<TemplateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_clear: Option<Vec<TemplateId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_link: Option<Vec<TemplateId>>,
}
