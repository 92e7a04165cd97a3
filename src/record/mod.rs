//! Event records emitted for query lifecycle events
//!
//! A record is a flat mapping from field name to scalar value. The set of
//! recognized field names is fixed per event type (see [`Field`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

pub mod constructor;
pub mod fields;
pub mod value;

pub use constructor::{EventRecordConstructor, VersionInfo};
pub use fields::Field;
pub use value::RecordValue;

/// Lifecycle notification delivered by the query runtime
///
/// Unrecognized names parse as [`HookType::Unknown`] and produce no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookType {
    PreExecHook,
    PostExecHook,
    OnFailureHook,
    PreDriverRun,
    PostDriverRun,
    Unknown(String),
}

impl HookType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "PRE_EXEC_HOOK" => Self::PreExecHook,
            "POST_EXEC_HOOK" => Self::PostExecHook,
            "ON_FAILURE_HOOK" => Self::OnFailureHook,
            "PRE_DRIVER_RUN" => Self::PreDriverRun,
            "POST_DRIVER_RUN" => Self::PostDriverRun,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::PreExecHook => "PRE_EXEC_HOOK",
            Self::PostExecHook => "POST_EXEC_HOOK",
            Self::OnFailureHook => "ON_FAILURE_HOOK",
            Self::PreDriverRun => "PRE_DRIVER_RUN",
            Self::PostDriverRun => "POST_DRIVER_RUN",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HookType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HookType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Kind of record produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    QuerySubmitted,
    QueryCompleted,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuerySubmitted => "QUERY_SUBMITTED",
            Self::QueryCompleted => "QUERY_COMPLETED",
        }
    }

    /// Field names recognized for this event type
    pub fn catalog(self) -> &'static [Field] {
        match self {
            Self::QuerySubmitted => Field::SUBMITTED,
            Self::QueryCompleted => Field::COMPLETED,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome reported on a completion record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Success,
    Fail,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One telemetry record, handed to a sink once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord {
    fields: BTreeMap<String, RecordValue>,
}

impl EventRecord {
    /// Value of a field; `None` when the field was never set
    pub fn get(&self, field: Field) -> Option<&RecordValue> {
        self.fields.get(field.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(field.as_str())
    }

    pub fn get_str(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(RecordValue::as_str)
    }

    pub fn event_type(&self) -> Option<EventType> {
        match self.get_str(Field::EventType)? {
            "QUERY_SUBMITTED" => Some(EventType::QuerySubmitted),
            "QUERY_COMPLETED" => Some(EventType::QueryCompleted),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Accumulates fields for one event type
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    event_type: EventType,
    fields: BTreeMap<String, RecordValue>,
}

impl RecordBuilder {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            fields: BTreeMap::new(),
        }
        .set(Field::EventType, event_type.as_str())
    }

    /// Set a field, replacing any earlier value
    ///
    /// Fields outside the event type's catalog are dropped with a warning.
    pub fn set(mut self, field: Field, value: impl Into<RecordValue>) -> Self {
        if !self.event_type.catalog().contains(&field) {
            warn!(
                "Field {} is not part of the {} record, dropping it",
                field, self.event_type
            );
            return self;
        }
        self.fields.insert(field.as_str().to_string(), value.into());
        self
    }

    pub fn extend(self, values: impl IntoIterator<Item = (Field, RecordValue)>) -> Self {
        values
            .into_iter()
            .fold(self, |builder, (field, value)| builder.set(field, value))
    }

    pub fn build(self) -> EventRecord {
        EventRecord {
            fields: self.fields,
        }
    }
}
