/// Error code registry for the query event hook
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Snapshot (replay input) errors
/// - 3000-3999: Event dispatch errors
/// - 4000-4999: Host environment errors
/// - 5000-5999: Sink errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Snapshot errors (2000-2999)
    pub const SNAPSHOT_GENERIC: u16 = 2000;
    pub const SNAPSHOT_NOT_FOUND: u16 = 2001;
    pub const SNAPSHOT_INVALID_JSON: u16 = 2002;
    pub const SNAPSHOT_INVALID_APPLICATION_ID: u16 = 2003;

    // Event dispatch errors (3000-3999)
    pub const EVENT_UNSUPPORTED: u16 = 3000;

    // Host environment errors (4000-4999)
    pub const HOST_NAME_UNAVAILABLE: u16 = 4001;
    pub const HOST_ADDRESS_UNRESOLVED: u16 = 4002;

    // Sink errors (5000-5999)
    pub const SINK_IO_ERROR: u16 = 5001;
    pub const SINK_SERIALIZATION_ERROR: u16 = 5002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "Generic configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML syntax in configuration",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",

        ErrorCode::SNAPSHOT_GENERIC => "Generic snapshot error",
        ErrorCode::SNAPSHOT_NOT_FOUND => "Snapshot file not found",
        ErrorCode::SNAPSHOT_INVALID_JSON => "Invalid JSON in snapshot",
        ErrorCode::SNAPSHOT_INVALID_APPLICATION_ID => "Malformed application id",

        ErrorCode::EVENT_UNSUPPORTED => "Hook event type produces no record",

        ErrorCode::HOST_NAME_UNAVAILABLE => "Local host name unavailable",
        ErrorCode::HOST_ADDRESS_UNRESOLVED => "Local host address could not be resolved",

        ErrorCode::SINK_IO_ERROR => "Sink I/O failure",
        ErrorCode::SINK_SERIALIZATION_ERROR => "Record serialization failed",
        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(
            describe_error_code(ErrorCode::CONFIG_NOT_FOUND),
            "Configuration file not found"
        );
        assert_eq!(
            describe_error_code(ErrorCode::EVENT_UNSUPPORTED),
            "Hook event type produces no record"
        );
        assert_eq!(describe_error_code(65000), "Unknown error code");
    }
}
