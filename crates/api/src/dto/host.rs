use dyndns_domain::Host;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostResponse {
    pub id: i64,
    pub hostname: String,
    pub domain: String,
    pub full_domain: String,
    pub ip: Option<String>,
    pub ttl: u32,
    pub last_update: Option<String>,
    pub username: String,
}

impl HostResponse {
    pub fn from_host(host: Host) -> Self {
        Self {
            id: host.id.unwrap_or(0),
            full_domain: host.full_domain(),
            hostname: host.hostname.to_string(),
            domain: host.domain.to_string(),
            ip: host.ip.as_ref().map(|s| s.to_string()),
            ttl: host.ttl,
            last_update: host.last_update,
            username: host.username.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHostRequest {
    pub hostname: String,
    pub domain: String,
    pub ip: Option<String>,
    pub ttl: Option<u32>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHostRequest {
    pub ip: Option<String>,
    pub ttl: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
}
