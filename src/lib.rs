//! # query-event-hook
//!
//! Builds structured telemetry records for query lifecycle events: one
//! `QUERY_SUBMITTED` record before execution and one `QUERY_COMPLETED`
//! record on success or failure.
//!
//! ## Modules
//!
//! - `mode` - Execution-mode classification of a task graph and queue key lookup
//! - `counters` - Normalizes engine counter groups into one JSON shape
//! - `yarn` - Application reports and resource-usage extraction
//! - `record` - Field catalog, record values and the event record constructor
//! - `query` - Execution snapshot handed to the hook
//! - `sink` - Destinations for built records
//! - `replay` - Captured hook invocations for the `record` command
//! - `config` - Hook configuration loaded from TOML
//! - `clock` / `host` - Injected time source and local address lookup
pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod counters;
pub mod error;
pub mod host;
pub mod mode;
pub mod query;
pub mod record;
pub mod replay;
pub mod sink;
pub mod yarn;

pub use error::{HookError, Result};
pub use record::{EventRecord, EventRecordConstructor, Field, HookType, RecordValue};
