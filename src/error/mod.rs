use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

/// The unified error type for the query event hook
#[derive(Error, Debug)]
pub enum HookError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Snapshot error: {message}")]
    Snapshot {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Unsupported event: {hook_type}")]
    UnsupportedEvent { code: u16, hook_type: String },

    #[error("[E{code:04}] Host resolution error: {message}")]
    HostResolution {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Sink error: {message}")]
    Sink {
        code: u16,
        message: String,
        sink: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HookError {
    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a snapshot error with specific code and path
    pub fn snapshot_with_code(
        code: u16,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self::Snapshot {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// An event kind that never produces a record
    pub fn unsupported_event(hook_type: impl Display) -> Self {
        Self::UnsupportedEvent {
            code: ErrorCode::EVENT_UNSUPPORTED,
            hook_type: hook_type.to_string(),
        }
    }

    /// Create a host resolution error with specific code
    pub fn host_resolution(code: u16, message: impl Into<String>) -> Self {
        Self::HostResolution {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a sink error with specific code and sink name
    pub fn sink_with_code(code: u16, message: impl Into<String>, sink: Option<String>) -> Self {
        Self::Sink {
            code,
            message: message.into(),
            sink,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Snapshot { source: src, .. }
            | Self::HostResolution { source: src, .. }
            | Self::Sink { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::UnsupportedEvent { .. } => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Snapshot { .. } => 3,
            Self::UnsupportedEvent { .. } => 0,
            Self::HostResolution { .. } => 4,
            Self::Sink { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Snapshot { code, .. }
            | Self::UnsupportedEvent { code, .. }
            | Self::HostResolution { code, .. }
            | Self::Sink { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Snapshot { message, path, .. } => match path {
                Some(p) => format!("Cannot replay snapshot {}: {}", p.display(), message),
                None => format!("Cannot replay snapshot: {}", message),
            },
            Self::UnsupportedEvent { hook_type, .. } => {
                format!("Ignoring event of type: {}", hook_type)
            }
            Self::HostResolution { message, .. } => {
                format!("Cannot determine local address: {}", message)
            }
            Self::Sink { message, sink, .. } => match sink {
                Some(name) => format!("Sink '{}' failed: {}", name, message),
                None => format!("Sink error: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        format!("{:#}", self)
    }
}

/// Type alias for Results using HookError
pub type Result<T> = std::result::Result<T, HookError>;

/// Failure of a single dynamic accessor on a resource usage report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    #[error("no accessor '{accessor}' on {type_name}")]
    NoSuchAccessor { type_name: String, accessor: String },

    #[error("accessor '{accessor}' failed: {message}")]
    Invocation { accessor: String, message: String },

    #[error("accessor '{accessor}' is not accessible: {reason}")]
    Inaccessible { accessor: String, reason: String },
}

impl From<std::io::Error> for HookError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                HookError::snapshot_with_code(ErrorCode::SNAPSHOT_NOT_FOUND, "File not found", None)
                    .with_source(err)
            }
            _ => HookError::sink_with_code(ErrorCode::SINK_IO_ERROR, "I/O operation failed", None)
                .with_source(err),
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        HookError::snapshot_with_code(ErrorCode::SNAPSHOT_INVALID_JSON, "Invalid JSON syntax", None)
            .with_source(err)
    }
}

impl From<toml::de::Error> for HookError {
    fn from(err: toml::de::Error) -> Self {
        HookError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax", None)
            .with_source(err)
    }
}
