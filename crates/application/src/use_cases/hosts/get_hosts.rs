use dyndns_domain::{DomainError, Host};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::HostRepository;

pub struct GetHostsUseCase {
    repo: Arc<dyn HostRepository>,
}

impl GetHostsUseCase {
    pub fn new(repo: Arc<dyn HostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Host>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Host>, DomainError> {
        self.repo.get_by_id(id).await
    }
}
