use async_trait::async_trait;
use dyndns_domain::{Alias, DomainError};

#[async_trait]
pub trait AliasRepository: Send + Sync {
    async fn create(&self, hostname: String, target_id: i64, ttl: u32)
        -> Result<Alias, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Alias>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Alias>, DomainError>;

    /// Alias named `hostname` whose target lives in `domain`, with the
    /// target loaded.
    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Alias>, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
