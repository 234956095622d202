use crate::modules::work_statistics::core::ports::SourceError;
use crate::modules::work_statistics::core::range::RangeError;
use crate::shared::core::primitives::EmployeeId;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    ScanEvents,
    Tasks,
    Directory,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Upstream::ScanEvents => "scan event source",
            Upstream::Tasks => "task source",
            Upstream::Directory => "employee directory",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    #[error("{upstream} timed out after {timeout:?}")]
    UpstreamTimeout { upstream: Upstream, timeout: Duration },

    #[error("{upstream} unavailable: {reason}")]
    UpstreamUnavailable { upstream: Upstream, reason: String },
}

impl StatisticsError {
    pub fn from_source(upstream: Upstream, error: SourceError) -> Self {
        match error {
            SourceError::NotFound(employee_id) => StatisticsError::NotFound(employee_id),
            SourceError::Unavailable(reason) => {
                StatisticsError::UpstreamUnavailable { upstream, reason }
            }
        }
    }

    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StatisticsError::InvalidRange(_) | StatisticsError::NotFound(_)
        )
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StatisticsError::UpstreamTimeout { .. } | StatisticsError::UpstreamUnavailable { .. }
        )
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatisticsError::InvalidRange(RangeError::TooLarge { .. }) => "RangeTooLarge",
            StatisticsError::InvalidRange(_) => "InvalidRange",
            StatisticsError::NotFound(_) => "NotFound",
            StatisticsError::UpstreamTimeout { .. } => "UpstreamTimeout",
            StatisticsError::UpstreamUnavailable { .. } => "UpstreamUnavailable",
        }
    }
}
