//! Builds one record per query lifecycle event

use super::{EventRecord, EventStatus, EventType, Field, HookType, RecordBuilder};
use crate::clock::Clock;
use crate::counters;
use crate::error::{HookError, Result};
use crate::host::{HostAddressResolver, SystemHostAddress};
use crate::mode::{self, QueueKeys};
use crate::query::{conf, entity, ExecutionContext};
use crate::yarn::{ApplicationIdResolver, ApplicationReport, ApplicationReportRetriever};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Version strings stamped on every record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub hook_version: String,
    pub hive_version: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            hook_version: env!("CARGO_PKG_VERSION").to_string(),
            hive_version: "unknown".to_string(),
        }
    }
}

/// Turns execution snapshots into event records
///
/// Holds no per-query state; one constructor serves concurrent events.
pub struct EventRecordConstructor {
    clock: Arc<dyn Clock>,
    application_ids: Arc<dyn ApplicationIdResolver>,
    applications: Arc<dyn ApplicationReportRetriever>,
    host: Arc<dyn HostAddressResolver>,
    versions: VersionInfo,
    queues: QueueKeys,
}

impl EventRecordConstructor {
    pub fn new(
        clock: Arc<dyn Clock>,
        application_ids: Arc<dyn ApplicationIdResolver>,
        applications: Arc<dyn ApplicationReportRetriever>,
    ) -> Self {
        Self {
            clock,
            application_ids,
            applications,
            host: Arc::new(SystemHostAddress),
            versions: VersionInfo::default(),
            queues: QueueKeys::default(),
        }
    }

    pub fn with_versions(mut self, versions: VersionInfo) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_queue_keys(mut self, queues: QueueKeys) -> Self {
        self.queues = queues;
        self
    }

    pub fn with_host_resolver(mut self, host: Arc<dyn HostAddressResolver>) -> Self {
        self.host = host;
        self
    }

    /// Record for `hook_type`, or `None` for events that produce no record
    pub fn construct_event(
        &self,
        hook_type: HookType,
        ctx: &ExecutionContext,
    ) -> Option<EventRecord> {
        match self.try_construct_event(hook_type, ctx) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("{}", e.user_message());
                None
            }
        }
    }

    fn try_construct_event(
        &self,
        hook_type: HookType,
        ctx: &ExecutionContext,
    ) -> Result<EventRecord> {
        match hook_type {
            HookType::PreExecHook => Ok(self.submission_record(ctx)),
            HookType::PostExecHook => Ok(self.completion_record(ctx, EventStatus::Success)),
            HookType::OnFailureHook => Ok(self.completion_record(ctx, EventStatus::Fail)),
            HookType::PreDriverRun | HookType::PostDriverRun | HookType::Unknown(_) => {
                Err(HookError::unsupported_event(hook_type))
            }
        }
    }

    /// QUERY_SUBMITTED record
    pub fn submission_record(&self, ctx: &ExecutionContext) -> EventRecord {
        let plan = &ctx.plan;
        let mode = mode::classify(plan.root_tasks());
        let queue = self
            .queues
            .resolve(mode)
            .and_then(|key| ctx.conf.get(key));

        RecordBuilder::new(EventType::QuerySubmitted)
            .set(Field::QueryId, &plan.query_id)
            .set(Field::QueryType, ctx.query_type.clone())
            .set(Field::QueryText, &plan.query_str)
            .set(Field::StartTime, plan.query_start_time)
            .set(Field::UserName, &ctx.ugi.short_user_name)
            .set(Field::RequestUser, ctx.request_user())
            .set(Field::ExecutionMode, mode.as_str())
            .set(Field::ExecutionEngine, ctx.conf.get(conf::EXECUTION_ENGINE))
            .set(Field::Queue, queue)
            .set(Field::TablesRead, entity::tables(&plan.inputs))
            .set(Field::TablesWritten, entity::tables(&plan.outputs))
            .set(Field::PartitionsRead, entity::partitions(&plan.inputs))
            .set(Field::PartitionsWritten, entity::partitions(&plan.outputs))
            .set(Field::SessionId, &ctx.session_id)
            .set(Field::InvokerInfo, ctx.conf.log_id_var(&ctx.session_id))
            .set(Field::ThreadName, &ctx.thread_id)
            .set(Field::ClientIpAddress, ctx.ip_address.clone())
            .set(Field::HookVersion, &self.versions.hook_version)
            .set(Field::HiveVersion, &self.versions.hive_version)
            .set(Field::HiveAddress, self.hive_instance_address(ctx))
            .set(Field::HiveInstanceType, ctx.hive_instance_type())
            .set(Field::OperationId, ctx.operation_id.clone())
            .set(Field::DatabasesRead, entity::databases(&plan.inputs))
            .set(Field::DatabasesWritten, entity::databases(&plan.outputs))
            .set(Field::DefaultDatabase, &ctx.current_database)
            .build()
    }

    /// QUERY_COMPLETED record
    pub fn completion_record(&self, ctx: &ExecutionContext, status: EventStatus) -> EventRecord {
        let plan = &ctx.plan;
        info!("Received post-hook notification for: {}", plan.query_id);

        let mut builder = RecordBuilder::new(EventType::QueryCompleted)
            .set(Field::QueryId, &plan.query_id)
            .set(Field::EndTime, self.clock.millis())
            .set(Field::UserName, &ctx.ugi.short_user_name)
            .set(Field::RequestUser, ctx.request_user())
            .set(Field::Status, status.as_str())
            .set(Field::ErrorMessage, ctx.error_message.clone())
            .set(Field::HookVersion, &self.versions.hook_version)
            .set(Field::PerfObject, ctx.perf.to_json())
            .set(Field::OperationId, ctx.operation_id.clone());

        let mode = mode::classify(plan.root_tasks());
        match self.application_ids.resolve(&ctx.conf, mode) {
            Some(application_id) => {
                builder = builder.set(Field::YarnApplicationId, application_id.to_string());
                match self.applications.retrieve(&ctx.conf, application_id) {
                    Some(report) => builder = with_application_report(builder, &report),
                    None => debug!("No application report for {}", application_id),
                }
            }
            None => debug!("No application id for {} in mode {}", plan.query_id, mode),
        }

        if let Some(counters) =
            counters::preferred_counters_json(plan.root_tasks(), &ctx.map_red_stats)
        {
            builder = builder.set(Field::CountersObject, counters);
        }

        builder.build()
    }

    fn hive_instance_address(&self, ctx: &ExecutionContext) -> Option<String> {
        if let Some(address) = &ctx.hive_instance_address {
            return Some(address.clone());
        }
        match self.host.local_address() {
            Ok(address) => Some(address),
            Err(e) => {
                error!("Error trying to get localhost address: {}", e);
                None
            }
        }
    }
}

fn with_application_report(builder: RecordBuilder, report: &ApplicationReport) -> RecordBuilder {
    let builder = builder
        .set(Field::HiveHostName, report.host.clone())
        .set(Field::Queue, report.queue.clone())
        .set(Field::YarnProcess, report.progress)
        .set(Field::YarnApplicationType, report.application_type.clone())
        .set(Field::YarnApplicationState, report.state.to_string())
        .set(Field::YarnDiagnostics, report.diagnostics.clone())
        .set(
            Field::YarnCurrentApplicationAttemptId,
            report.current_attempt_id.clone(),
        )
        .set(Field::YarnUser, report.user.clone())
        .set(Field::YarnStartTime, report.start_time)
        .set(Field::YarnFinishTime, report.finish_time)
        .set(Field::YarnFinalApplicationStatus, report.final_status.to_string());

    match &report.resource_usage {
        Some(usage) => builder.extend(usage.extract()),
        None => {
            debug!(
                "Application {} has no resource usage report",
                report.application_id
            );
            builder
        }
    }
}
