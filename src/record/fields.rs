//! Catalog of recognized record field names

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! fields {
    ($($name:ident),+ $(,)?) => {
        /// Every field name an event record may carry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Field {
            $($name),+
        }

        impl Field {
            pub const ALL: &'static [Field] = &[$(Field::$name),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Field::$name => stringify!($name)),+
                }
            }
        }
    };
}

fields! {
    QueryId,
    QueryType,
    QueryText,
    EventType,
    StartTime,
    EndTime,
    UserName,
    RequestUser,
    ExecutionMode,
    ExecutionEngine,
    Queue,
    TablesRead,
    TablesWritten,
    PartitionsRead,
    PartitionsWritten,
    DatabasesRead,
    DatabasesWritten,
    SessionId,
    InvokerInfo,
    ThreadName,
    ClientIpAddress,
    HookVersion,
    HiveVersion,
    HiveAddress,
    HiveInstanceType,
    OperationId,
    DefaultDatabase,
    Status,
    ErrorMessage,
    PerfObject,
    CountersObject,
    HiveHostName,
    YarnApplicationId,
    YarnProcess,
    YarnApplicationType,
    YarnApplicationState,
    YarnDiagnostics,
    YarnCurrentApplicationAttemptId,
    YarnUser,
    YarnStartTime,
    YarnFinishTime,
    YarnFinalApplicationStatus,
    YarnReportNumUsedContainers,
    YarnReportNumReservedContainers,
    YarnReportMemorySeconds,
    YarnReportVcoreSeconds,
    YarnReportQueueUsagePercentage,
    YarnReportClusterUsagePercentage,
    YarnReportPreemptedMemorySeconds,
    YarnReportPreemptedVcoreSeconds,
    YarnReportUsedResources,
    YarnReportUsedResourcesMemory,
    YarnReportUsedResourcesVcore,
    YarnReportReservedResources,
    YarnReportReservedResourcesMemory,
    YarnReportReservedResourcesVcore,
    YarnReportNeededResources,
    YarnReportNeededResourcesMemory,
    YarnReportNeededResourcesVcore,
}

impl Field {
    /// Fields of a QUERY_SUBMITTED record
    pub const SUBMITTED: &'static [Field] = &[
        Field::QueryId,
        Field::QueryType,
        Field::QueryText,
        Field::EventType,
        Field::StartTime,
        Field::UserName,
        Field::RequestUser,
        Field::ExecutionMode,
        Field::ExecutionEngine,
        Field::Queue,
        Field::TablesRead,
        Field::TablesWritten,
        Field::PartitionsRead,
        Field::PartitionsWritten,
        Field::SessionId,
        Field::InvokerInfo,
        Field::ThreadName,
        Field::ClientIpAddress,
        Field::HookVersion,
        Field::HiveVersion,
        Field::HiveAddress,
        Field::HiveInstanceType,
        Field::OperationId,
        Field::DatabasesRead,
        Field::DatabasesWritten,
        Field::DefaultDatabase,
    ];

    /// Fields of a QUERY_COMPLETED record
    pub const COMPLETED: &'static [Field] = &[
        Field::QueryId,
        Field::EventType,
        Field::EndTime,
        Field::UserName,
        Field::RequestUser,
        Field::Status,
        Field::ErrorMessage,
        Field::HookVersion,
        Field::PerfObject,
        Field::OperationId,
        Field::YarnApplicationId,
        Field::HiveHostName,
        Field::Queue,
        Field::YarnProcess,
        Field::YarnApplicationType,
        Field::YarnApplicationState,
        Field::YarnDiagnostics,
        Field::YarnCurrentApplicationAttemptId,
        Field::YarnUser,
        Field::YarnStartTime,
        Field::YarnFinishTime,
        Field::YarnFinalApplicationStatus,
        Field::YarnReportNumUsedContainers,
        Field::YarnReportNumReservedContainers,
        Field::YarnReportMemorySeconds,
        Field::YarnReportVcoreSeconds,
        Field::YarnReportQueueUsagePercentage,
        Field::YarnReportClusterUsagePercentage,
        Field::YarnReportPreemptedMemorySeconds,
        Field::YarnReportPreemptedVcoreSeconds,
        Field::YarnReportUsedResources,
        Field::YarnReportUsedResourcesMemory,
        Field::YarnReportUsedResourcesVcore,
        Field::YarnReportReservedResources,
        Field::YarnReportReservedResourcesMemory,
        Field::YarnReportReservedResourcesVcore,
        Field::YarnReportNeededResources,
        Field::YarnReportNeededResourcesMemory,
        Field::YarnReportNeededResourcesVcore,
        Field::CountersObject,
    ];

    /// Fields filled from the resource manager's application report
    pub fn is_yarn(self) -> bool {
        self.as_str().starts_with("Yarn")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
