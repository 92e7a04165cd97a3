//! Counter normalization
//!
//! Engines nest counters as containers (one per sub-job) of groups of named
//! values. Every engine's structure is flattened to the same JSON shape:
//!
//! ```text
//! [ [ {"<group display name>": {"<counter>": <value>, ...}}, ... ], ... ]
//! ```

use crate::query::task::{self, TaskNode};
use crate::query::{MapRedCounterGroup, MapRedStats, TezCounter, TezCounterGroup};
use serde_json::{Map, Value};
use tracing::debug;

/// Serialize counter containers to the canonical JSON shape
///
/// `None` containers are skipped. Returns `None` when no container remains,
/// so callers can leave the field out instead of writing `[]`.
pub fn counters_json<'a, K, G, C, N, V, D>(
    containers: impl IntoIterator<Item = Option<&'a K>>,
    name_of: N,
    value_of: V,
    display_name_of: D,
) -> Option<String>
where
    K: 'a,
    G: 'a,
    &'a K: IntoIterator<Item = &'a G>,
    &'a G: IntoIterator<Item = C>,
    N: Fn(&C) -> String,
    V: Fn(&C) -> i64,
    D: Fn(&G) -> String,
{
    let mut outer = Vec::new();

    for counters in containers.into_iter().flatten() {
        let mut inner = Vec::new();
        for group in counters {
            let values: Map<String, Value> = group
                .into_iter()
                .map(|counter| (name_of(&counter), Value::from(value_of(&counter))))
                .collect();

            let mut group_data = Map::new();
            group_data.insert(display_name_of(group), Value::Object(values));
            inner.push(Value::Object(group_data));
        }
        outer.push(Value::Array(inner));
    }

    if outer.is_empty() {
        None
    } else {
        Some(Value::Array(outer).to_string())
    }
}

/// Counters of every Tez task in the plan
pub fn tez_counters_json(root_tasks: Option<&[TaskNode]>) -> Option<String> {
    let tez_tasks = task::tez_tasks(root_tasks);
    counters_json(
        tez_tasks.iter().map(|t| t.tez_counters()),
        |c: &&TezCounter| c.name.clone(),
        |c: &&TezCounter| c.value,
        |g: &TezCounterGroup| g.display_name.clone(),
    )
}

/// Counters of every MapReduce job the session ran
pub fn map_red_counters_json(stats: &[MapRedStats]) -> Option<String> {
    counters_json(
        stats.iter().map(|s| s.counters.as_ref()),
        |c: &(&String, &i64)| c.0.clone(),
        |c: &(&String, &i64)| *c.1,
        |g: &MapRedCounterGroup| g.display_name.clone(),
    )
}

/// Tez counters when there are any, MapReduce job counters otherwise
pub fn preferred_counters_json(
    root_tasks: Option<&[TaskNode]>,
    map_red_stats: &[MapRedStats],
) -> Option<String> {
    tez_counters_json(root_tasks).or_else(|| {
        debug!("No Tez counters, falling back to MapReduce job counters");
        map_red_counters_json(map_red_stats)
    })
}
