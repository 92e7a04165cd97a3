//! Resource manager application data

use crate::error::{ErrorCode, HookError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod retriever;
pub mod usage;

pub use retriever::{ApplicationIdResolver, ApplicationReportRetriever, NoApplications};
pub use usage::{extract, DynamicObject, JsonObject, ResourceUsageReport};

/// Identifier of an application run on the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId {
    pub cluster_timestamp: i64,
    pub id: u32,
}

impl ApplicationId {
    pub fn new(cluster_timestamp: i64, id: u32) -> Self {
        Self {
            cluster_timestamp,
            id,
        }
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "application_{}_{:04}", self.cluster_timestamp, self.id)
    }
}

impl FromStr for ApplicationId {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            HookError::snapshot_with_code(
                ErrorCode::SNAPSHOT_INVALID_APPLICATION_ID,
                format!("Invalid application id '{}'", s),
                None,
            )
        };

        let mut parts = s.split('_');
        if parts.next() != Some("application") {
            return Err(invalid());
        }
        let cluster_timestamp = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let id = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(cluster_timestamp, id))
    }
}

impl Serialize for ApplicationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApplicationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YarnApplicationState {
    New,
    NewSaving,
    Submitted,
    Accepted,
    Running,
    Finished,
    Failed,
    Killed,
}

impl fmt::Display for YarnApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "NEW",
            Self::NewSaving => "NEW_SAVING",
            Self::Submitted => "SUBMITTED",
            Self::Accepted => "ACCEPTED",
            Self::Running => "RUNNING",
            Self::Finished => "FINISHED",
            Self::Failed => "FAILED",
            Self::Killed => "KILLED",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalApplicationStatus {
    Undefined,
    Succeeded,
    Failed,
    Killed,
    Ended,
}

impl fmt::Display for FinalApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "UNDEFINED",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Killed => "KILLED",
            Self::Ended => "ENDED",
        };
        f.write_str(name)
    }
}

/// Status report of one application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReport {
    pub application_id: ApplicationId,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub queue: Option<String>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub application_type: Option<String>,
    pub state: YarnApplicationState,
    #[serde(default)]
    pub diagnostics: Option<String>,
    #[serde(default)]
    pub current_attempt_id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub finish_time: i64,
    pub final_status: FinalApplicationStatus,
    #[serde(default)]
    pub resource_usage: Option<ResourceUsageReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_id_format() {
        let id = ApplicationId::new(1_672_531_200_000, 42);
        assert_eq!(id.to_string(), "application_1672531200000_0042");
        assert_eq!("application_1672531200000_0042".parse::<ApplicationId>().unwrap(), id);
        assert_eq!(
            "application_1_123456".parse::<ApplicationId>().unwrap(),
            ApplicationId::new(1, 123456)
        );
    }

    #[test]
    fn test_application_id_rejects_garbage() {
        for bad in ["", "application_", "job_1_2", "application_x_1", "application_1_2_3"] {
            let err = bad.parse::<ApplicationId>().unwrap_err();
            assert_eq!(err.code(), ErrorCode::SNAPSHOT_INVALID_APPLICATION_ID, "{bad}");
        }
    }

    #[test]
    fn test_report_deserializes_with_defaults() {
        let report: ApplicationReport = serde_json::from_str(
            r#"{"application_id":"application_1_0001","state":"FINISHED","final_status":"SUCCEEDED"}"#,
        )
        .unwrap();
        assert_eq!(report.state.to_string(), "FINISHED");
        assert_eq!(report.final_status.to_string(), "SUCCEEDED");
        assert!(report.resource_usage.is_none());
    }
}
