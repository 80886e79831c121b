pub mod alias_repository;
pub mod host_repository;
pub mod update_log_repository;

pub use alias_repository::SqliteAliasRepository;
pub use host_repository::SqliteHostRepository;
pub use update_log_repository::SqliteUpdateLogRepository;

use chrono::{TimeDelta, Utc};
use dyndns_domain::DomainError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn days_ago_cutoff(days: u32) -> Result<String, DomainError> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|age| Utc::now().checked_sub_signed(age))
        .map(|cutoff| cutoff.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| {
            DomainError::ConfigError(format!("Retention of {} days is out of range", days))
        })
}
