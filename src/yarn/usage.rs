//! Best-effort extraction of resource usage statistics
//!
//! The usage report's shape differs between resource manager releases, so
//! fields are probed by accessor name at runtime. Each catalogued field is
//! extracted independently: a missing or failing accessor drops that field
//! and nothing else.

use crate::error::AccessError;
use crate::record::{Field, RecordValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// An object whose fields are looked up by accessor name
pub trait DynamicObject {
    /// Name used in diagnostics
    fn type_name(&self) -> &str;

    /// Read a scalar accessor
    fn invoke(&self, accessor: &str) -> Result<RecordValue, AccessError>;

    /// Read an accessor returning another dynamic object
    fn nested(&self, accessor: &str) -> Result<Box<dyn DynamicObject + '_>, AccessError>;

    /// Human-readable rendering of the whole object
    fn render(&self) -> String;
}

/// Scalar accessors of the usage report and the field each one fills
pub const USAGE_ACCESSORS: &[(&str, Field)] = &[
    ("numUsedContainers", Field::YarnReportNumUsedContainers),
    ("numReservedContainers", Field::YarnReportNumReservedContainers),
    ("memorySeconds", Field::YarnReportMemorySeconds),
    ("vcoreSeconds", Field::YarnReportVcoreSeconds),
    ("queueUsagePercentage", Field::YarnReportQueueUsagePercentage),
    ("clusterUsagePercentage", Field::YarnReportClusterUsagePercentage),
    ("preemptedMemorySeconds", Field::YarnReportPreemptedMemorySeconds),
    ("preemptedVcoreSeconds", Field::YarnReportPreemptedVcoreSeconds),
];

pub const MEMORY_SIZE: &str = "memorySize";
pub const VIRTUAL_CORES: &str = "virtualCores";

/// A nested resource object and the three fields it fills
#[derive(Debug, Clone, Copy)]
pub struct ResourceFields {
    pub accessor: &'static str,
    pub rendered: Field,
    pub memory: Field,
    pub vcores: Field,
}

pub const RESOURCE_OBJECTS: &[ResourceFields] = &[
    ResourceFields {
        accessor: "usedResources",
        rendered: Field::YarnReportUsedResources,
        memory: Field::YarnReportUsedResourcesMemory,
        vcores: Field::YarnReportUsedResourcesVcore,
    },
    ResourceFields {
        accessor: "reservedResources",
        rendered: Field::YarnReportReservedResources,
        memory: Field::YarnReportReservedResourcesMemory,
        vcores: Field::YarnReportReservedResourcesVcore,
    },
    ResourceFields {
        accessor: "neededResources",
        rendered: Field::YarnReportNeededResources,
        memory: Field::YarnReportNeededResourcesMemory,
        vcores: Field::YarnReportNeededResourcesVcore,
    },
];

fn invoke_into(
    object: &dyn DynamicObject,
    accessor: &str,
    field: Field,
    out: &mut BTreeMap<Field, RecordValue>,
) {
    match object.invoke(accessor) {
        Ok(value) => {
            out.insert(field, value);
        }
        Err(e) => warn!(
            "Failed to invoke accessor '{}' on {}: {}",
            accessor,
            object.type_name(),
            e
        ),
    }
}

/// Flatten a usage report into record fields
pub fn extract(report: &dyn DynamicObject) -> BTreeMap<Field, RecordValue> {
    let mut out = BTreeMap::new();

    for (accessor, field) in USAGE_ACCESSORS {
        invoke_into(report, accessor, *field, &mut out);
    }

    for resource in RESOURCE_OBJECTS {
        match report.nested(resource.accessor) {
            Ok(object) => {
                out.insert(resource.rendered, RecordValue::String(object.render()));
                invoke_into(object.as_ref(), MEMORY_SIZE, resource.memory, &mut out);
                invoke_into(object.as_ref(), VIRTUAL_CORES, resource.vcores, &mut out);
            }
            Err(e) => warn!(
                "Failed to invoke accessor '{}' on {}: {}",
                resource.accessor,
                report.type_name(),
                e
            ),
        }
    }

    out
}

/// Dynamic view over a JSON object
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    type_name: &'a str,
    value: &'a Value,
}

impl<'a> JsonObject<'a> {
    pub fn new(type_name: &'a str, value: &'a Value) -> Self {
        Self { type_name, value }
    }

    fn lookup(&self, accessor: &str) -> Result<&'a Value, AccessError> {
        self.value
            .as_object()
            .and_then(|fields| fields.get(accessor))
            .ok_or_else(|| AccessError::NoSuchAccessor {
                type_name: self.type_name.to_string(),
                accessor: accessor.to_string(),
            })
    }
}

impl DynamicObject for JsonObject<'_> {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn invoke(&self, accessor: &str) -> Result<RecordValue, AccessError> {
        match self.lookup(accessor)? {
            Value::Null => Ok(RecordValue::Null),
            Value::Bool(b) => Ok(RecordValue::String(b.to_string())),
            Value::String(s) => Ok(RecordValue::String(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(RecordValue::Long)
                .or_else(|| n.as_f64().map(RecordValue::Double))
                .ok_or_else(|| AccessError::Invocation {
                    accessor: accessor.to_string(),
                    message: format!("number {} does not fit a long or double", n),
                }),
            Value::Array(_) | Value::Object(_) => Err(AccessError::Inaccessible {
                accessor: accessor.to_string(),
                reason: "value is not a scalar".to_string(),
            }),
        }
    }

    fn nested(&self, accessor: &str) -> Result<Box<dyn DynamicObject + '_>, AccessError> {
        let value = self.lookup(accessor)?;
        if !value.is_object() {
            return Err(AccessError::Inaccessible {
                accessor: accessor.to_string(),
                reason: "value is not an object".to_string(),
            });
        }
        Ok(Box::new(JsonObject::new("Resource", value)))
    }

    fn render(&self) -> String {
        let memory = self.lookup(MEMORY_SIZE).ok().and_then(Value::as_i64);
        let vcores = self.lookup(VIRTUAL_CORES).ok().and_then(Value::as_i64);
        match (memory, vcores) {
            (Some(memory), Some(vcores)) => format!("<memory:{}, vCores:{}>", memory, vcores),
            _ => self.value.to_string(),
        }
    }
}

/// Resource usage report of one application, as delivered by the resource manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUsageReport(pub Value);

impl ResourceUsageReport {
    pub fn view(&self) -> JsonObject<'_> {
        JsonObject::new("ApplicationResourceUsageReport", &self.0)
    }

    pub fn extract(&self) -> BTreeMap<Field, RecordValue> {
        extract(&self.view())
    }
}
