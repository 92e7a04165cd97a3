//! `record` command: replay one snapshot into a sink

use crate::clock::SystemClock;
use crate::config::HookConfig;
use crate::record::EventRecordConstructor;
use crate::replay::HookSnapshot;
use crate::sink::{JsonLinesSink, RecordSink, StdoutSink};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub async fn run_record(
    snapshot: &Path,
    output: Option<PathBuf>,
    config: HookConfig,
) -> Result<()> {
    let snapshot = HookSnapshot::load(snapshot).await?;
    let applications = Arc::new(snapshot.applications());

    let constructor =
        EventRecordConstructor::new(Arc::new(SystemClock), applications.clone(), applications)
            .with_versions(config.versions())
            .with_queue_keys(config.queues.clone());

    let hook_type = snapshot.hook_type.clone();
    let Some(record) = constructor.construct_event(hook_type, &snapshot.context) else {
        return Ok(());
    };

    let sink: Box<dyn RecordSink> = match output.or(config.output.path) {
        Some(path) => Box::new(JsonLinesSink::new(path)),
        None => Box::new(StdoutSink),
    };
    sink.write(&record).await?;
    sink.flush().await?;

    info!(
        "Wrote {} record for {} to {}",
        snapshot.hook_type,
        snapshot.context.plan.query_id,
        sink.name()
    );
    Ok(())
}
