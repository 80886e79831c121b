use dyndns_domain::{DomainError, UpdateLog};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{HostRepository, UpdateLogRepository};

pub struct GetUpdateLogsUseCase {
    repo: Arc<dyn UpdateLogRepository>,
    host_repo: Arc<dyn HostRepository>,
}

impl GetUpdateLogsUseCase {
    pub fn new(repo: Arc<dyn UpdateLogRepository>, host_repo: Arc<dyn HostRepository>) -> Self {
        Self { repo, host_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_recent(&self, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        self.repo.get_recent(limit).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_host(&self, host_id: i64, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        self.host_repo
            .get_by_id(host_id)
            .await?
            .ok_or(DomainError::HostNotFound(host_id))?;

        self.repo.get_by_host(host_id, limit).await
    }
}
