use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dns_record::classify_ip;
use crate::zone::fqdn;

pub const MIN_TTL: u32 = 20;
pub const MAX_TTL: u32 = 86_400;
pub const MIN_CREDENTIAL_LEN: usize = 8;

/// One A/AAAA leaf below a zone, with the credentials used to update it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: Option<i64>,
    pub hostname: Arc<str>,
    pub domain: Arc<str>,
    pub ip: Option<Arc<str>>,
    pub ttl: u32,
    pub last_update: Option<String>,
    pub username: Arc<str>,
    #[serde(skip_serializing)]
    pub password_hash: Arc<str>,
}

impl Host {
    pub fn new(
        hostname: Arc<str>,
        domain: Arc<str>,
        ip: Option<Arc<str>>,
        ttl: u32,
        username: Arc<str>,
        password_hash: Arc<str>,
    ) -> Self {
        Self {
            id: None,
            hostname,
            domain,
            ip,
            ttl,
            last_update: None,
            username,
            password_hash,
        }
    }

    /// `hostname.domain` without the root label.
    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.hostname, self.domain)
    }

    pub fn fqdn(&self) -> String {
        fqdn(&self.full_domain())
    }

    pub fn validate_hostname(hostname: &str) -> Result<(), String> {
        if hostname.is_empty() {
            return Err("Hostname cannot be empty".to_string());
        }
        if hostname.len() > 253 {
            return Err("Hostname cannot exceed 253 characters".to_string());
        }
        for label in hostname.split('.') {
            if label.is_empty() {
                return Err("Hostname contains an empty label".to_string());
            }
            if label.len() > 63 {
                return Err(format!("Label '{}' exceeds 63 characters", label));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(format!("Label '{}' cannot start or end with '-'", label));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(format!(
                    "Label '{}' contains invalid characters (only alphanumeric and hyphens are allowed)",
                    label
                ));
            }
        }
        Ok(())
    }

    pub fn validate_ttl(ttl: u32) -> Result<(), String> {
        if !(MIN_TTL..=MAX_TTL).contains(&ttl) {
            return Err(format!("TTL must be between {} and {}", MIN_TTL, MAX_TTL));
        }
        Ok(())
    }

    pub fn validate_ip(ip: &Option<Arc<str>>) -> Result<(), String> {
        if let Some(ip) = ip {
            if classify_ip(ip).is_none() {
                return Err(format!("'{}' is not a valid IPv4 or IPv6 address", ip));
            }
        }
        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), String> {
        if username.len() < MIN_CREDENTIAL_LEN {
            return Err(format!(
                "Username must be at least {} characters",
                MIN_CREDENTIAL_LEN
            ));
        }
        if username.contains(':') {
            return Err("Username cannot contain ':'".to_string());
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), String> {
        if password.len() < MIN_CREDENTIAL_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_CREDENTIAL_LEN
            ));
        }
        Ok(())
    }
}
