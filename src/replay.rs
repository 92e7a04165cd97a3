//! Recorded hook invocations, replayed through the record constructor

use crate::error::{ErrorCode, ErrorExt, HookError, Result};
use crate::mode::ExecutionMode;
use crate::query::{ExecutionContext, SessionConf};
use crate::record::HookType;
use crate::yarn::{
    ApplicationId, ApplicationIdResolver, ApplicationReport, ApplicationReportRetriever,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One hook invocation as captured from the query runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookSnapshot {
    pub hook_type: HookType,
    pub context: ExecutionContext,
    /// Application that ran the query, when one was launched
    #[serde(default)]
    pub application: Option<ReplayedApplication>,
}

impl HookSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            let code = match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::SNAPSHOT_NOT_FOUND,
                _ => ErrorCode::SNAPSHOT_GENERIC,
            };
            HookError::snapshot_with_code(code, "Failed to read snapshot", Some(path.to_path_buf()))
                .with_source(e)
        })?;

        let snapshot: Self = serde_json::from_str(&content).to_snapshot_error(path)?;
        debug!(
            "Loaded {} snapshot for query {}",
            snapshot.hook_type, snapshot.context.plan.query_id
        );
        Ok(snapshot)
    }

    /// Application resolver and retriever backed by this snapshot
    pub fn applications(&self) -> ReplayedApplication {
        self.application.clone().unwrap_or_default()
    }
}

/// Application id and report captured alongside a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayedApplication {
    #[serde(default)]
    pub id: Option<ApplicationId>,
    #[serde(default)]
    pub report: Option<ApplicationReport>,
}

impl ApplicationIdResolver for ReplayedApplication {
    fn resolve(&self, _conf: &SessionConf, mode: ExecutionMode) -> Option<ApplicationId> {
        match mode {
            ExecutionMode::ClientOnly | ExecutionMode::None => None,
            _ => self.id,
        }
    }
}

impl ApplicationReportRetriever for ReplayedApplication {
    fn retrieve(&self, _conf: &SessionConf, id: ApplicationId) -> Option<ApplicationReport> {
        self.report
            .as_ref()
            .filter(|report| report.application_id == id)
            .cloned()
    }
}
