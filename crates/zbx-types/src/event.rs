//! Event schemas.

use serde::{Deserialize, Serialize};

use crate::{CommonGet, OneOrMany, Params, TagFilter, number_from_any, string_from_any};

/// Bit flags for the `action` field of `event.acknowledge`.
pub mod acknowledge_action {
    pub const CLOSE: u32 = 1;
    pub const ACKNOWLEDGE: u32 = 2;
    pub const ADD_MESSAGE: u32 = 4;
    pub const CHANGE_SEVERITY: u32 = 8;
    pub const UNACKNOWLEDGE: u32 = 16;
    pub const SUPPRESS: u32 = 32;
    pub const UNSUPPRESS: u32 = 64;
    pub const CHANGE_TO_CAUSE: u32 = 128;
    pub const CHANGE_TO_SYMPTOM: u32 = 256;
}

/// An event as returned by `event.get` with `output: "extend"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "string_from_any")]
    pub eventid: String,
    #[serde(deserialize_with = "number_from_any")]
    pub source: u8,
    #[serde(deserialize_with = "number_from_any")]
    pub object: u8,
    #[serde(deserialize_with = "string_from_any")]
    pub objectid: String,
    #[serde(deserialize_with = "number_from_any")]
    pub clock: i64,
    #[serde(deserialize_with = "number_from_any")]
    pub ns: i64,
    #[serde(deserialize_with = "string_from_any")]
    pub r_eventid: String,
    #[serde(deserialize_with = "string_from_any")]
    pub c_eventid: String,
    #[serde(deserialize_with = "string_from_any")]
    pub cause_eventid: String,
    #[serde(deserialize_with = "string_from_any")]
    pub correlationid: String,
    #[serde(deserialize_with = "string_from_any")]
    pub userid: String,
    #[serde(deserialize_with = "number_from_any")]
    pub suppressed: u8,
    pub opdata: String,
    #[serde(deserialize_with = "number_from_any")]
    pub severity: u8,
    pub name: String,
    #[serde(deserialize_with = "number_from_any")]
    pub value: u8,
    #[serde(deserialize_with = "number_from_any")]
    pub acknowledged: u8,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventGet {
    #[serde(flatten)]
    pub common: CommonGet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectids: Option<OneOrMany<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severities: Option<OneOrMany<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaltype: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventid_from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventid_till: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_time_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_time_till: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OneOrMany<u8>>,
    #[serde(flatten)]
    pub extra: Params,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventAcknowledge {
    pub eventids: OneOrMany<u64>,
    /// Combination of [`acknowledge_action`] flags.
    pub action: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_until: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_eventid: Option<u64>,
}

impl EventAcknowledge {
    #[must_use]
    pub fn new(eventids: impl Into<OneOrMany<u64>>, action: u32) -> Self {
        Self {
            eventids: eventids.into(),
            action,
            message: None,
            severity: None,
            suppress_until: None,
            cause_eventid: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
