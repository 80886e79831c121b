use serde::{Deserialize, Serialize};

use crate::zone::ZoneMatcher;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Zones this server is authoritative for, in match order.
    #[serde(default)]
    pub zones: Vec<String>,

    /// Nameserver published in SOA records.
    #[serde(default)]
    pub parent_ns: String,

    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Address served for zone apexes. Discovered at startup when absent.
    #[serde(default)]
    pub external_ip: Option<String>,

    #[serde(default = "default_external_ip_resolver")]
    pub external_ip_resolver: String,

    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,
}

impl DnsConfig {
    pub fn zone_matcher(&self) -> ZoneMatcher {
        ZoneMatcher::new(&self.zones)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            zones: Vec::new(),
            parent_ns: String::new(),
            default_ttl: default_ttl(),
            external_ip: None,
            external_ip_resolver: default_external_ip_resolver(),
            read_timeout_ms: default_read_timeout_ms(),
            write_timeout_ms: default_write_timeout_ms(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_external_ip_resolver() -> String {
    "http://icanhazip.com".to_string()
}

fn default_read_timeout_ms() -> u64 {
    5000
}

fn default_write_timeout_ms() -> u64 {
    5000
}
