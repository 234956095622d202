// Service configuration read from the environment.
//
// Every key is optional; an unset key keeps its default and a malformed one
// fails start-up.

use crate::modules::work_statistics::core::policy::{
    DEFAULT_MAX_RANGE_DAYS, DEFAULT_MIN_SCAN_INTERVAL_SECS, StatisticsPolicy,
};
use crate::modules::work_statistics::use_cases::get_employee_statistics::handler::DEFAULT_FETCH_TIMEOUT;
use crate::modules::work_statistics::use_cases::get_team_statistics::handler::DEFAULT_MAX_CONCURRENCY;
use chrono::{FixedOffset, NaiveTime, TimeDelta};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: `{value}` is not a valid {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub policy: StatisticsPolicy,
    pub fetch_timeout: Duration,
    pub max_batch_concurrency: usize,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            policy: StatisticsPolicy::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_batch_concurrency: DEFAULT_MAX_CONCURRENCY,
            seed_file: None,
        }
    }
}

fn invalid(key: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        expected,
    }
}

fn positive<T: PartialEq + Default>(key: &'static str, value: T) -> Result<T, ConfigError> {
    if value == T::default() {
        return Err(ConfigError::Zero { key });
    }
    Ok(value)
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("WORK_STATS_BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|_| invalid("WORK_STATS_BIND_ADDR", &addr, "socket address"))?;
        }

        if let Some(secs) = lookup("WORK_STATS_MIN_SCAN_INTERVAL_SECS") {
            let secs: u32 = secs.parse().map_err(|_| {
                invalid("WORK_STATS_MIN_SCAN_INTERVAL_SECS", &secs, "number of seconds")
            })?;
            config.policy.min_scan_interval = TimeDelta::seconds(i64::from(secs));
        }

        if let Some(start) = lookup("WORK_STATS_EXPECTED_START") {
            config.policy.expected_start = if start.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    NaiveTime::parse_from_str(start.trim(), "%H:%M")
                        .map_err(|_| invalid("WORK_STATS_EXPECTED_START", &start, "HH:MM time"))?,
                )
            };
        }

        if let Some(minutes) = lookup("WORK_STATS_GRACE_MINUTES") {
            let minutes: u32 = minutes.parse().map_err(|_| {
                invalid("WORK_STATS_GRACE_MINUTES", &minutes, "number of minutes")
            })?;
            config.policy.grace_period = TimeDelta::minutes(i64::from(minutes));
        }

        if let Some(days) = lookup("WORK_STATS_MAX_RANGE_DAYS") {
            let days: u32 = days
                .parse()
                .map_err(|_| invalid("WORK_STATS_MAX_RANGE_DAYS", &days, "number of days"))?;
            config.policy.max_range_days = positive("WORK_STATS_MAX_RANGE_DAYS", days)?;
        }

        if let Some(minutes) = lookup("WORK_STATS_UTC_OFFSET_MINUTES") {
            config.policy.utc_offset = minutes
                .parse::<i32>()
                .ok()
                .and_then(|m| m.checked_mul(60))
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| invalid("WORK_STATS_UTC_OFFSET_MINUTES", &minutes, "UTC offset"))?;
        }

        if let Some(millis) = lookup("WORK_STATS_FETCH_TIMEOUT_MS") {
            let millis: u64 = millis.parse().map_err(|_| {
                invalid("WORK_STATS_FETCH_TIMEOUT_MS", &millis, "number of milliseconds")
            })?;
            config.fetch_timeout =
                Duration::from_millis(positive("WORK_STATS_FETCH_TIMEOUT_MS", millis)?);
        }

        if let Some(limit) = lookup("WORK_STATS_MAX_BATCH_CONCURRENCY") {
            let limit: usize = limit.parse().map_err(|_| {
                invalid("WORK_STATS_MAX_BATCH_CONCURRENCY", &limit, "positive integer")
            })?;
            config.max_batch_concurrency = positive("WORK_STATS_MAX_BATCH_CONCURRENCY", limit)?;
        }

        if let Some(path) = lookup("WORK_STATS_SEED_FILE").filter(|p| !p.trim().is_empty()) {
            config.seed_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}
