use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobsConfig {
    /// Update-log entries older than this many days are deleted. 0 disables.
    #[serde(default)]
    pub clear_log_interval_days: u32,

    #[serde(default = "default_retention_check_interval_secs")]
    pub retention_check_interval_secs: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            clear_log_interval_days: 0,
            retention_check_interval_secs: default_retention_check_interval_secs(),
        }
    }
}

fn default_retention_check_interval_secs() -> u64 {
    86_400
}
