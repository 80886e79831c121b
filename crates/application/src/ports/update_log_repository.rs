use async_trait::async_trait;
use dyndns_domain::{DomainError, UpdateLog};

#[async_trait]
pub trait UpdateLogRepository: Send + Sync {
    async fn append(&self, entry: &UpdateLog) -> Result<(), DomainError>;

    async fn get_recent(&self, limit: u32) -> Result<Vec<UpdateLog>, DomainError>;

    async fn get_by_host(&self, host_id: i64, limit: u32) -> Result<Vec<UpdateLog>, DomainError>;

    async fn delete_older_than(&self, days: u32) -> Result<u64, DomainError>;
}
