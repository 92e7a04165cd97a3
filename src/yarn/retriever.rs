//! Collaborators that locate and fetch application reports

use super::{ApplicationId, ApplicationReport};
use crate::mode::ExecutionMode;
use crate::query::SessionConf;

/// Finds the application that ran a query, if the mode launched one
pub trait ApplicationIdResolver: Send + Sync {
    fn resolve(&self, conf: &SessionConf, mode: ExecutionMode) -> Option<ApplicationId>;
}

/// Fetches an application's status report from the resource manager
///
/// Not-found and transient failures both surface as `None`.
pub trait ApplicationReportRetriever: Send + Sync {
    fn retrieve(&self, conf: &SessionConf, id: ApplicationId) -> Option<ApplicationReport>;
}

impl<F> ApplicationIdResolver for F
where
    F: Fn(&SessionConf, ExecutionMode) -> Option<ApplicationId> + Send + Sync,
{
    fn resolve(&self, conf: &SessionConf, mode: ExecutionMode) -> Option<ApplicationId> {
        self(conf, mode)
    }
}

impl<F> ApplicationReportRetriever for F
where
    F: Fn(&SessionConf, ApplicationId) -> Option<ApplicationReport> + Send + Sync,
{
    fn retrieve(&self, conf: &SessionConf, id: ApplicationId) -> Option<ApplicationReport> {
        self(conf, id)
    }
}

/// Resolves no application and retrieves no report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoApplications;

impl ApplicationIdResolver for NoApplications {
    fn resolve(&self, _conf: &SessionConf, _mode: ExecutionMode) -> Option<ApplicationId> {
        None
    }
}

impl ApplicationReportRetriever for NoApplications {
    fn retrieve(&self, _conf: &SessionConf, _id: ApplicationId) -> Option<ApplicationReport> {
        None
    }
}
