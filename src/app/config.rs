//! Application configuration
//!
//! Settings that come from the command line rather than the hook config file.

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Filter from the hook config, used at verbosity 0
    pub configured_level: Option<String>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            configured_level: None,
        }
    }

    /// Use `level` as the log filter unless `-v` was given
    pub fn with_configured_level(mut self, level: Option<String>) -> Self {
        self.configured_level = level;
        self
    }

    /// Get the log filter based on verbosity
    pub fn log_level(&self) -> &str {
        match self.verbose {
            0 => self.configured_level.as_deref().unwrap_or("info"),
            1 => "debug",
            _ => "trace",
        }
    }
}
