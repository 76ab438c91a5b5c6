//! History schemas.

use serde::{Deserialize, Serialize, Serializer};

use crate::{CommonGet, OneOrMany, Params, number_from_any, string_from_any};

/// Value type of the history table to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryType {
    NumFloat = 0,
    Character = 1,
    Log = 2,
    NumUnsigned = 3,
    Text = 4,
    Binary = 5,
}

impl Serialize for HistoryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A single history record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct History {
    #[serde(deserialize_with = "number_from_any")]
    pub clock: i64,
    #[serde(deserialize_with = "string_from_any")]
    pub itemid: String,
    #[serde(deserialize_with = "number_from_any")]
    pub ns: i64,
    /// Raw value; numeric types arrive as strings and are kept that way.
    #[serde(deserialize_with = "string_from_any")]
    pub value: String,
}

/// A log history record (`history: 2`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogHistory {
    #[serde(deserialize_with = "string_from_any")]
    pub id: String,
    #[serde(flatten)]
    pub record: History,
    #[serde(deserialize_with = "number_from_any")]
    pub logeventid: i64,
    #[serde(deserialize_with = "number_from_any")]
    pub severity: i32,
    pub source: String,
    #[serde(deserialize_with = "number_from_any")]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<i64>,
    #[serde(flatten)]
    pub extra: Params,
}
