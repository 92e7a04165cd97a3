//! Counter structures reported by the execution engines
//!
//! Tez and MapReduce expose the same information (named groups of named
//! integer counters) through differently shaped structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One Tez counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TezCounter {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub value: i64,
}

/// A named group of Tez counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TezCounterGroup {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub counters: Vec<TezCounter>,
}

/// All counter groups of one Tez DAG
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TezCounters {
    pub groups: Vec<TezCounterGroup>,
}

impl<'a> IntoIterator for &'a TezCounters {
    type Item = &'a TezCounterGroup;
    type IntoIter = std::slice::Iter<'a, TezCounterGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a TezCounterGroup {
    type Item = &'a TezCounter;
    type IntoIter = std::slice::Iter<'a, TezCounter>;

    fn into_iter(self) -> Self::IntoIter {
        self.counters.iter()
    }
}

/// A MapReduce counter group, counters keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRedCounterGroup {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub counters: BTreeMap<String, i64>,
}

/// Counters of one MapReduce job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapRedCounters {
    pub groups: Vec<MapRedCounterGroup>,
}

impl<'a> IntoIterator for &'a MapRedCounters {
    type Item = &'a MapRedCounterGroup;
    type IntoIter = std::slice::Iter<'a, MapRedCounterGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a MapRedCounterGroup {
    type Item = (&'a String, &'a i64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counters.iter()
    }
}

/// Statistics of one MapReduce job run by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRedStats {
    pub job_id: String,
    #[serde(default)]
    pub counters: Option<MapRedCounters>,
}
