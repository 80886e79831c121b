use dyndns_domain::{Alias, DomainError, Host};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{AliasRepository, HostRepository};
use crate::use_cases::hosts::ensure_name_available;

pub struct CreateAliasUseCase {
    repo: Arc<dyn AliasRepository>,
    host_repo: Arc<dyn HostRepository>,
}

impl CreateAliasUseCase {
    pub fn new(repo: Arc<dyn AliasRepository>, host_repo: Arc<dyn HostRepository>) -> Self {
        Self { repo, host_repo }
    }

    /// The alias is created in the zone of `target_id`.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        hostname: String,
        target_id: i64,
        ttl: u32,
    ) -> Result<Alias, DomainError> {
        let hostname = hostname.trim().to_ascii_lowercase();
        Host::validate_hostname(&hostname).map_err(DomainError::InvalidAlias)?;
        Host::validate_ttl(ttl).map_err(DomainError::InvalidAlias)?;

        let target = self
            .host_repo
            .get_by_id(target_id)
            .await?
            .ok_or(DomainError::HostNotFound(target_id))?;

        ensure_name_available(
            self.host_repo.as_ref(),
            self.repo.as_ref(),
            &hostname,
            &target.domain,
        )
        .await?;

        let alias = self.repo.create(hostname, target_id, ttl).await?;

        info!(
            alias_id = ?alias.id,
            alias = %alias.full_domain(),
            target = %alias.target.full_domain(),
            "Alias created successfully"
        );

        Ok(alias)
    }
}
