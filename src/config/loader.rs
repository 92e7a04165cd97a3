use super::HookConfig;
use crate::error::{ErrorCode, ErrorExt, HookError, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Load configuration from `path`, or defaults when no path is given
pub async fn load_config(path: Option<&Path>) -> Result<HookConfig> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(HookConfig::default());
    };

    let content = fs::read_to_string(path).await.map_err(|e| {
        let code = match e.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::CONFIG_NOT_FOUND,
            _ => ErrorCode::CONFIG_GENERIC,
        };
        HookError::config_with_code(
            code,
            "Failed to read configuration",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    let config: HookConfig = toml::from_str(&content).to_config_error(path)?;
    if config.hook_version.trim().is_empty() {
        return Err(HookError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            "hook_version must not be empty",
            Some(path.to_path_buf()),
        ));
    }

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
