//! Schema types for the Zabbix JSON-RPC API.
//!
//! Request types are serialize-only value objects. Every optional field is an
//! `Option` that is skipped when unset, so a request only carries the fields
//! the caller explicitly set. Response types are deserialize-only and tolerate
//! the API's habit of encoding numbers as strings.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub mod action;
pub mod alert;
pub mod configuration;
pub mod event;
pub mod history;
pub mod host;
pub mod hostgroup;
pub mod item;
pub mod template;
pub mod templategroup;
pub mod trigger;
pub mod user;

pub use action::{ActionCreate, ActionGet, ActionUpdate};
pub use alert::AlertGet;
pub use configuration::{
    ConfigurationExport, ConfigurationImport, ExportFormat, ExportOptions, ImportFormat,
    ImportRule, ImportRules,
};
pub use event::{Event, EventAcknowledge, EventGet, acknowledge_action};
pub use history::{History, HistoryGet, HistoryType, LogHistory};
pub use host::{HostCreate, HostGet, HostMassAdd, HostMassRemove, HostMassUpdate, HostUpdate};
pub use hostgroup::{
    HostGroup, HostGroupCreate, HostGroupGet, HostGroupMassAdd, HostGroupMassRemove,
    HostGroupMassUpdate, HostGroupPropagate, HostGroupUpdate,
};
pub use item::{ItemCreate, ItemGet, ItemUpdate};
pub use template::{
    TemplateCreate, TemplateGet, TemplateMassAdd, TemplateMassRemove, TemplateMassUpdate,
    TemplateUpdate,
};
pub use templategroup::{
    TemplateGroupCreate, TemplateGroupGet, TemplateGroupMassAdd, TemplateGroupMassRemove,
    TemplateGroupMassUpdate, TemplateGroupPropagate, TemplateGroupUpdate,
};
pub use trigger::{TriggerCreate, TriggerGet, TriggerUpdate};
pub use user::UserLogin;

/// A field the API accepts either as a single value or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

/// Open JSON object used for kinds without a dedicated schema, and for the
/// extra fields every `get` request accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Params {
    type Error = Value;

    /// Only JSON objects convert; anything else is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// The `output` parameter of `get` requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Return every property (`"extend"`).
    Extend,
    /// Return only the number of records (`"count"`).
    Count,
    /// Return only the named properties.
    Fields(Vec<String>),
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Output::Extend => serializer.serialize_str("extend"),
            Output::Count => serializer.serialize_str("count"),
            Output::Fields(fields) => fields.serialize(serializer),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Output {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Output::Fields(iter.into_iter().map(Into::into).collect())
    }
}

/// Parameters shared by every `get` method.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommonGet {
    #[serde(rename = "countOutput", skip_serializing_if = "Option::is_none")]
    pub count_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(rename = "excludeSearch", skip_serializing_if = "Option::is_none")]
    pub exclude_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    #[serde(rename = "preservekeys", skip_serializing_if = "Option::is_none")]
    pub preserve_keys: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Map<String, Value>>,
    #[serde(rename = "searchByAny", skip_serializing_if = "Option::is_none")]
    pub search_by_any: Option<bool>,
    #[serde(rename = "searchWildcardsEnabled", skip_serializing_if = "Option::is_none")]
    pub search_wildcards_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortfield: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortorder: Option<OneOrMany<String>>,
    #[serde(rename = "startSearch", skip_serializing_if = "Option::is_none")]
    pub start_search: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupId {
    pub groupid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostId {
    pub hostid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateId {
    pub templateid: u64,
}

/// Tag filter used by `get` methods that support `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFilter {
    pub tag: String,
    pub value: String,
    pub operator: u8,
}

/// Tag attached to an object on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

/// Deserialize a number that the API may send as a JSON string.
pub(crate) fn number_from_any<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(T::default()),
        Value::String(s) => s.parse().map_err(de::Error::custom),
        Value::Number(n) => n.to_string().parse().map_err(de::Error::custom),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a number or numeric string",
        )),
    }
}

/// Deserialize a scalar into its string form.
pub(crate) fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
