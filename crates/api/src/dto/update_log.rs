use dyndns_domain::UpdateLog;
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLogResponse {
    pub id: i64,
    pub host_id: i64,
    pub status: bool,
    pub message: String,
    pub sent_ip: Option<String>,
    pub caller_ip: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: Option<String>,
}

impl UpdateLogResponse {
    pub fn from_log(log: UpdateLog) -> Self {
        Self {
            id: log.id.unwrap_or(0),
            host_id: log.host_id,
            status: log.status,
            message: log.message.to_string(),
            sent_ip: log.sent_ip.as_ref().map(|s| s.to_string()),
            caller_ip: log.caller_ip.as_ref().map(|s| s.to_string()),
            user_agent: log.user_agent.as_ref().map(|s| s.to_string()),
            timestamp: log.timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLogQuery {
    pub limit: Option<u32>,
}

impl UpdateLogQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}
