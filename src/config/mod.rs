//! Hook configuration loaded from TOML

use crate::mode::QueueKeys;
use crate::record::VersionInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::load_config;

/// Settings for record construction and output
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub hook_version: String,
    pub hive_version: String,
    /// Log filter used when no `-v` flag is given
    pub log_level: Option<String>,
    pub queues: QueueKeys,
    pub output: OutputConfig,
}

impl Default for HookConfig {
    fn default() -> Self {
        let versions = VersionInfo::default();
        Self {
            hook_version: versions.hook_version,
            hive_version: versions.hive_version,
            log_level: None,
            queues: QueueKeys::default(),
            output: OutputConfig::default(),
        }
    }
}

impl HookConfig {
    pub fn versions(&self) -> VersionInfo {
        VersionInfo {
            hook_version: self.hook_version.clone(),
            hive_version: self.hive_version.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON-lines file to append to; stdout when unset
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::queue;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: HookConfig = toml::from_str("").unwrap();
        assert_eq!(config, HookConfig::default());
        assert_eq!(config.hive_version, "unknown");
        assert_eq!(config.queues.batch, queue::MR_QUEUE_NAME);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_partial_overrides() {
        let config: HookConfig = toml::from_str(
            r#"
hive_version = "3.1.3"
log_level = "warn"

[queues]
batch = "mapred.job.queue.name"

[output]
path = "/var/log/hive/events.jsonl"
"#,
        )
        .unwrap();

        assert_eq!(config.versions().hive_version, "3.1.3");
        assert_eq!(config.versions().hook_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(config.queues.batch, "mapred.job.queue.name");
        assert_eq!(config.queues.llap_daemon, queue::LLAP_DAEMON_QUEUE_NAME);
        assert_eq!(
            config.output.path,
            Some(PathBuf::from("/var/log/hive/events.jsonl"))
        );
    }
}
