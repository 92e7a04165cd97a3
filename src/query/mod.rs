//! Snapshot of one query execution, as handed to the hook
//!
//! Everything here is plain data. The record constructor reads it and
//! never mutates it.

use serde::{Deserialize, Serialize};

pub mod conf;
pub mod counters;
pub mod entity;
pub mod perf;
pub mod task;

pub use conf::SessionConf;
pub use counters::{
    MapRedCounterGroup, MapRedCounters, MapRedStats, TezCounter, TezCounterGroup, TezCounters,
};
pub use entity::Entity;
pub use perf::PerfLog;
pub use task::{TaskKind, TaskNode};

/// The compiled plan of a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPlan {
    pub query_id: String,
    pub query_str: String,
    /// Millis since the epoch
    pub query_start_time: i64,
    /// `None` when the plan carries no task graph at all
    #[serde(default)]
    pub root_tasks: Option<Vec<TaskNode>>,
    #[serde(default)]
    pub inputs: Vec<Entity>,
    #[serde(default)]
    pub outputs: Vec<Entity>,
}

impl QueryPlan {
    pub fn root_tasks(&self) -> Option<&[TaskNode]> {
        self.root_tasks.as_deref()
    }
}

/// Identity the query runs as
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupInformation {
    pub short_user_name: String,
    pub user_name: String,
}

/// Everything known about one query at a lifecycle event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub plan: QueryPlan,
    #[serde(default)]
    pub query_type: Option<String>,
    pub session_id: String,
    #[serde(default)]
    pub thread_id: String,
    pub ugi: UserGroupInformation,
    /// User that requested the query, when it differs from the session identity
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub hive_instance_address: Option<String>,
    #[serde(default)]
    pub hive_server_query: bool,
    #[serde(default)]
    pub current_database: String,
    #[serde(default)]
    pub conf: SessionConf,
    #[serde(default)]
    pub perf: PerfLog,
    /// MapReduce jobs run by the session for this query
    #[serde(default)]
    pub map_red_stats: Vec<MapRedStats>,
}

impl ExecutionContext {
    pub fn request_user(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.ugi.user_name)
    }

    /// `HS2` for queries served by HiveServer2, `CLI` otherwise
    pub fn hive_instance_type(&self) -> &'static str {
        if self.hive_server_query {
            "HS2"
        } else {
            "CLI"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_user_falls_back_to_ugi() {
        let mut ctx = ExecutionContext {
            ugi: UserGroupInformation {
                short_user_name: "alice".into(),
                user_name: "alice@EXAMPLE.COM".into(),
            },
            ..Default::default()
        };
        assert_eq!(ctx.request_user(), "alice@EXAMPLE.COM");

        ctx.user_name = Some("bob".into());
        assert_eq!(ctx.request_user(), "bob");
    }

    #[test]
    fn test_instance_type() {
        let mut ctx = ExecutionContext::default();
        assert_eq!(ctx.hive_instance_type(), "CLI");
        ctx.hive_server_query = true;
        assert_eq!(ctx.hive_instance_type(), "HS2");
    }

    #[test]
    fn test_minimal_context_deserializes() {
        let ctx: ExecutionContext = serde_json::from_str(
            r#"{
                "plan": {"query_id": "hive_1", "query_str": "SELECT 1", "query_start_time": 5},
                "session_id": "s1",
                "ugi": {"short_user_name": "u", "user_name": "u@R"}
            }"#,
        )
        .unwrap();
        assert_eq!(ctx.plan.root_tasks(), None);
        assert!(ctx.map_red_stats.is_empty());
        assert_eq!(ctx.conf.get("anything"), None);
    }
}
