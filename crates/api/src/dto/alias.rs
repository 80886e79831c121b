use dyndns_domain::Alias;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasResponse {
    pub id: i64,
    pub hostname: String,
    pub domain: String,
    pub full_domain: String,
    pub ttl: u32,
    pub target_id: i64,
    pub target: String,
}

impl AliasResponse {
    pub fn from_alias(alias: Alias) -> Self {
        Self {
            id: alias.id.unwrap_or(0),
            domain: alias.domain().to_string(),
            full_domain: alias.full_domain(),
            hostname: alias.hostname.to_string(),
            ttl: alias.ttl,
            target_id: alias.target.id.unwrap_or(0),
            target: alias.target.full_domain(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAliasRequest {
    pub hostname: String,
    pub target_id: i64,
    pub ttl: Option<u32>,
}
