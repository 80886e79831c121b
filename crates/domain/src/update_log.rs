use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one dyndns update attempt by an authenticated host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLog {
    pub id: Option<i64>,
    pub host_id: i64,
    pub status: bool,
    pub message: Arc<str>,
    pub sent_ip: Option<Arc<str>>,
    pub caller_ip: Option<Arc<str>>,
    pub user_agent: Option<Arc<str>>,
    pub timestamp: Option<String>,
}

impl UpdateLog {
    pub fn new(host_id: i64) -> Self {
        Self {
            id: None,
            host_id,
            status: false,
            message: Arc::from(""),
            sent_ip: None,
            caller_ip: None,
            user_agent: None,
            timestamp: None,
        }
    }

    pub fn succeeded(mut self, message: &str) -> Self {
        self.status = true;
        self.message = Arc::from(message);
        self
    }

    pub fn failed(mut self, message: &str) -> Self {
        self.status = false;
        self.message = Arc::from(message);
        self
    }
}

/// Keeps the product token of a user agent, e.g. `curl/8.5.0` from
/// `curl/8.5.0 (x86_64-pc-linux-gnu)`.
pub fn shrink_user_agent(agent: &str) -> &str {
    agent.split_whitespace().next().unwrap_or("")
}
