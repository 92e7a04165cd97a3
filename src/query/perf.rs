//! Per-phase timings of a query

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Start and end timestamps (millis) of named compile/execute phases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfLog {
    #[serde(default)]
    pub start_times: BTreeMap<String, i64>,
    #[serde(default)]
    pub end_times: BTreeMap<String, i64>,
}

impl PerfLog {
    pub fn record(&mut self, timer: impl Into<String>, start: i64, end: i64) {
        let timer = timer.into();
        self.start_times.insert(timer.clone(), start);
        self.end_times.insert(timer, end);
    }

    /// Elapsed millis of a timer, 0 unless both ends were recorded
    ///
    /// Timestamps come from the runtime unchecked, so the difference wraps.
    pub fn duration(&self, timer: &str) -> i64 {
        match (self.start_times.get(timer), self.end_times.get(timer)) {
            (Some(start), Some(end)) => end.wrapping_sub(*start),
            _ => 0,
        }
    }

    /// Flat JSON object mapping every ended timer to its duration
    pub fn to_json(&self) -> String {
        let timings: Map<String, Value> = self
            .end_times
            .keys()
            .map(|timer| (timer.clone(), Value::from(self.duration(timer))))
            .collect();
        Value::Object(timings).to_string()
    }
}
