use dyndns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::HostRepository;

pub struct DeleteHostUseCase {
    repo: Arc<dyn HostRepository>,
}

impl DeleteHostUseCase {
    pub fn new(repo: Arc<dyn HostRepository>) -> Self {
        Self { repo }
    }

    /// Aliases of the host go with it.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        let host = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::HostNotFound(id))?;

        self.repo.delete(id).await?;

        info!(host_id = id, host = %host.full_domain(), "Host deleted successfully");
        Ok(())
    }
}
