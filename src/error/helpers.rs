use super::{ErrorCode, HookError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to HookError with specific error type
    fn to_config_error(self, path: &Path) -> Result<T, HookError>;
    fn to_snapshot_error(self, path: &Path) -> Result<T, HookError>;
    fn to_sink_error(self, sink: &str, message: impl Into<String>) -> Result<T, HookError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, path: &Path) -> Result<T, HookError> {
        self.map_err(|e| {
            HookError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                "Failed to parse configuration",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }

    fn to_snapshot_error(self, path: &Path) -> Result<T, HookError> {
        self.map_err(|e| {
            HookError::snapshot_with_code(
                ErrorCode::SNAPSHOT_INVALID_JSON,
                "Failed to parse snapshot",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }

    fn to_sink_error(self, sink: &str, message: impl Into<String>) -> Result<T, HookError> {
        self.map_err(|e| {
            HookError::sink_with_code(ErrorCode::SINK_IO_ERROR, message, Some(sink.to_string()))
                .with_source(e)
        })
    }
}
