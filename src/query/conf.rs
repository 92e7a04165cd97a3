//! Session configuration as seen by the hook

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const EXECUTION_ENGINE: &str = "hive.execution.engine";
pub const LOG_TRACE_ID: &str = "hive.log.trace.id";

/// Longest invoker id kept on a record
const LOG_PREFIX_LENGTH: usize = 64;

/// Named string configuration of one query session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionConf {
    values: BTreeMap<String, String>,
}

impl SessionConf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Identifier used to correlate the invoker's logs
    ///
    /// The configured trace id wins over `default`; the result is cut to 64 characters.
    pub fn log_id_var(&self, default: &str) -> String {
        let mut id = match self.get(LOG_TRACE_ID) {
            Some(trace_id) if !trace_id.is_empty() => trace_id.to_string(),
            _ => {
                debug!("Using the default value passed in for log id: {}", default);
                default.to_string()
            }
        };
        if id.chars().count() > LOG_PREFIX_LENGTH {
            let truncated: String = id.chars().take(LOG_PREFIX_LENGTH).collect();
            warn!("Log id {} is too long, truncated to {}", id, truncated);
            id = truncated;
        }
        id
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionConf {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
