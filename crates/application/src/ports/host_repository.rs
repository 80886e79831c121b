use async_trait::async_trait;
use dyndns_domain::{DomainError, Host};

#[async_trait]
pub trait HostRepository: Send + Sync {
    async fn create(
        &self,
        hostname: String,
        domain: String,
        ip: Option<String>,
        ttl: u32,
        username: String,
        password_hash: String,
    ) -> Result<Host, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Host>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Host>, DomainError>;

    /// Exact lookup on the lower-cased (hostname, domain) pair.
    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Host>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Host>, DomainError>;

    /// `None` fields are left unchanged; `ip: Some(None)` clears the address.
    async fn update(
        &self,
        id: i64,
        ip: Option<Option<String>>,
        ttl: Option<u32>,
        username: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Host, DomainError>;

    /// Sets the address and stamps `last_update`.
    async fn update_ip(&self, id: i64, ip: &str) -> Result<Host, DomainError>;

    /// Also removes every alias pointing at the host.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
