//! Scheduling queue configuration keys per execution mode

use super::ExecutionMode;
use serde::{Deserialize, Serialize};

pub const LLAP_DAEMON_QUEUE_NAME: &str = "hive.llap.daemon.queue.name";
pub const MR_QUEUE_NAME: &str = "mapreduce.job.queuename";
pub const SPARK_QUEUE_NAME: &str = "spark.yarn.queue";

/// Configuration keys holding the queue name of each engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueKeys {
    pub llap_daemon: String,
    pub batch: String,
    pub alt_engine: String,
}

impl Default for QueueKeys {
    fn default() -> Self {
        Self {
            llap_daemon: LLAP_DAEMON_QUEUE_NAME.to_string(),
            batch: MR_QUEUE_NAME.to_string(),
            alt_engine: SPARK_QUEUE_NAME.to_string(),
        }
    }
}

impl QueueKeys {
    /// Key to look up for `mode`; `None` where no queue applies
    pub fn resolve(&self, mode: ExecutionMode) -> Option<&str> {
        match mode {
            ExecutionMode::Llap | ExecutionMode::Tez => Some(&self.llap_daemon),
            ExecutionMode::Mr => Some(&self.batch),
            ExecutionMode::Spark => Some(&self.alt_engine),
            ExecutionMode::ClientOnly | ExecutionMode::Ddl | ExecutionMode::None => None,
        }
    }
}
