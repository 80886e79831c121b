use async_trait::async_trait;
use dyndns_domain::DomainError;
use std::net::IpAddr;

/// Discovers the public address of this server.
#[async_trait]
pub trait ExternalIpResolver: Send + Sync {
    async fn discover(&self) -> Result<IpAddr, DomainError>;
}
