//! Execution mode classification
//!
//! A plan can contain tasks for several engines at once (a Tez query that
//! also creates a table, say). The mode is picked by a fixed priority so the
//! answer is always a single value.

use crate::query::task::{self, TaskNode};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod queue;

pub use queue::QueueKeys;

/// Engine or path that executed a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionMode {
    /// Answered by the client without launching any task
    ClientOnly,
    Llap,
    Tez,
    Mr,
    Spark,
    Ddl,
    None,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClientOnly => "CLIENT_ONLY",
            Self::Llap => "LLAP",
            Self::Tez => "TEZ",
            Self::Mr => "MR",
            Self::Spark => "SPARK",
            Self::Ddl => "DDL",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a task graph
///
/// Priority: empty graph, Tez (LLAP when any Tez task runs in LLAP mode),
/// MapReduce, Spark, DDL, then `None`.
pub fn classify(root_tasks: Option<&[TaskNode]>) -> ExecutionMode {
    if root_tasks.is_some_and(<[TaskNode]>::is_empty) {
        return ExecutionMode::ClientOnly;
    }

    let tez_tasks = task::tez_tasks(root_tasks);
    if !tez_tasks.is_empty() {
        if tez_tasks.iter().any(|t| t.is_llap()) {
            return ExecutionMode::Llap;
        }
        return ExecutionMode::Tez;
    }

    if !task::map_red_tasks(root_tasks).is_empty() {
        return ExecutionMode::Mr;
    }

    if !task::spark_tasks(root_tasks).is_empty() {
        return ExecutionMode::Spark;
    }

    if root_tasks.is_some_and(task::has_ddl_task) {
        return ExecutionMode::Ddl;
    }

    ExecutionMode::None
}
