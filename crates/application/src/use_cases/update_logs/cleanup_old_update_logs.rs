use crate::ports::UpdateLogRepository;
use dyndns_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct CleanupOldUpdateLogsUseCase {
    update_log_repo: Arc<dyn UpdateLogRepository>,
}

impl CleanupOldUpdateLogsUseCase {
    pub fn new(update_log_repo: Arc<dyn UpdateLogRepository>) -> Self {
        Self { update_log_repo }
    }

    pub async fn execute(&self, retention_days: u32) -> Result<u64, DomainError> {
        let deleted = self
            .update_log_repo
            .delete_older_than(retention_days)
            .await?;
        info!(deleted, retention_days, "Old update logs cleaned up");
        Ok(deleted)
    }
}
