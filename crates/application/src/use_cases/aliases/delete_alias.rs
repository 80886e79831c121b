use dyndns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::AliasRepository;

pub struct DeleteAliasUseCase {
    repo: Arc<dyn AliasRepository>,
}

impl DeleteAliasUseCase {
    pub fn new(repo: Arc<dyn AliasRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::AliasNotFound(id))?;

        self.repo.delete(id).await?;

        info!(alias_id = id, "Alias deleted successfully");
        Ok(())
    }
}
