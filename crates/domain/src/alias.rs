use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::host::Host;

/// A CNAME below the zone of its target host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    pub id: Option<i64>,
    pub hostname: Arc<str>,
    pub ttl: u32,
    pub target: Host,
}

impl Alias {
    pub fn new(hostname: Arc<str>, ttl: u32, target: Host) -> Self {
        Self {
            id: None,
            hostname,
            ttl,
            target,
        }
    }

    /// Aliases live in their target's zone.
    pub fn domain(&self) -> &str {
        &self.target.domain
    }

    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.hostname, self.target.domain)
    }
}
