use dyndns_domain::{Alias, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::AliasRepository;

pub struct GetAliasesUseCase {
    repo: Arc<dyn AliasRepository>,
}

impl GetAliasesUseCase {
    pub fn new(repo: Arc<dyn AliasRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Alias>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Alias>, DomainError> {
        self.repo.get_by_id(id).await
    }
}
