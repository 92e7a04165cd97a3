//! Common test utilities and fixtures

#![allow(dead_code)]

use query_event_hook::clock::FixedClock;
use query_event_hook::error::Result;
use query_event_hook::mode::ExecutionMode;
use query_event_hook::query::{
    Entity, ExecutionContext, MapRedCounterGroup, MapRedCounters, MapRedStats, QueryPlan,
    SessionConf, TaskNode, TezCounter, TezCounterGroup, TezCounters, UserGroupInformation,
};
use query_event_hook::yarn::{ApplicationId, ApplicationReport, NoApplications};
use query_event_hook::EventRecordConstructor;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const END_TIME: i64 = 1_700_000_060_000;

/// Builder for execution contexts used across tests
pub struct ContextBuilder {
    ctx: ExecutionContext,
}

impl ContextBuilder {
    pub fn new(query_id: &str) -> Self {
        Self {
            ctx: ExecutionContext {
                plan: QueryPlan {
                    query_id: query_id.to_string(),
                    query_str: "SELECT * FROM sales.orders".to_string(),
                    query_start_time: 1_700_000_000_000,
                    root_tasks: None,
                    inputs: vec![
                        Entity::Database {
                            name: "sales".into(),
                        },
                        Entity::Table {
                            database: "sales".into(),
                            name: "orders".into(),
                        },
                    ],
                    outputs: Vec::new(),
                },
                session_id: "0b5a6f3e-session".into(),
                thread_id: "HiveServer2-Handler-Pool: Thread-77".into(),
                ugi: UserGroupInformation {
                    short_user_name: "analyst".into(),
                    user_name: "analyst@CORP.EXAMPLE.COM".into(),
                },
                hive_server_query: true,
                hive_instance_address: Some("10.1.2.3".into()),
                current_database: "sales".into(),
                ..Default::default()
            },
        }
    }

    pub fn root_tasks(mut self, tasks: Vec<TaskNode>) -> Self {
        self.ctx.plan.root_tasks = Some(tasks);
        self
    }

    pub fn conf(mut self, key: &str, value: &str) -> Self {
        self.ctx.conf.set(key, value);
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.ctx.error_message = Some(message.to_string());
        self
    }

    pub fn map_red_stats(mut self, stats: Vec<MapRedStats>) -> Self {
        self.ctx.map_red_stats = stats;
        self
    }

    pub fn build(self) -> ExecutionContext {
        self.ctx
    }
}

pub fn tez_counters(groups: &[(&str, &[(&str, i64)])]) -> TezCounters {
    TezCounters {
        groups: groups
            .iter()
            .map(|(display, counters)| TezCounterGroup {
                name: display.to_string(),
                display_name: display.to_string(),
                counters: counters
                    .iter()
                    .map(|(name, value)| TezCounter {
                        name: name.to_string(),
                        display_name: None,
                        value: *value,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn map_red_job(job_id: &str, display: &str, counters: &[(&str, i64)]) -> MapRedStats {
    let counters: BTreeMap<String, i64> = counters
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    MapRedStats {
        job_id: job_id.to_string(),
        counters: Some(MapRedCounters {
            groups: vec![MapRedCounterGroup {
                name: display.to_string(),
                display_name: display.to_string(),
                counters,
            }],
        }),
    }
}

/// Constructor with a frozen clock and no applications
pub fn constructor() -> EventRecordConstructor {
    EventRecordConstructor::new(
        Arc::new(FixedClock::at_millis(END_TIME)),
        Arc::new(NoApplications),
        Arc::new(NoApplications),
    )
    .with_host_resolver(Arc::new(|| -> Result<String> { Ok("127.0.0.1".to_string()) }))
}

/// Constructor whose resolver and retriever return `id` and `report`
pub fn constructor_with_application(
    id: ApplicationId,
    report: Option<ApplicationReport>,
) -> EventRecordConstructor {
    EventRecordConstructor::new(
        Arc::new(FixedClock::at_millis(END_TIME)),
        Arc::new(move |_: &SessionConf, _: ExecutionMode| Some(id)),
        Arc::new(move |_: &SessionConf, _: ApplicationId| report.clone()),
    )
    .with_host_resolver(Arc::new(|| -> Result<String> { Ok("127.0.0.1".to_string()) }))
}
