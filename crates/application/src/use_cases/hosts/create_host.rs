use dyndns_domain::zone::unfqdn;
use dyndns_domain::{DomainError, Host, ZoneMatcher};
use std::sync::Arc;
use tracing::{info, instrument};

use super::ensure_name_available;
use crate::ports::{AliasRepository, HostRepository, PasswordHasher};

pub struct CreateHostCommand {
    pub hostname: String,
    pub domain: String,
    pub ip: Option<String>,
    pub ttl: u32,
    pub username: String,
    pub password: String,
}

pub struct CreateHostUseCase {
    repo: Arc<dyn HostRepository>,
    alias_repo: Arc<dyn AliasRepository>,
    hasher: Arc<dyn PasswordHasher>,
    zones: Arc<ZoneMatcher>,
}

impl CreateHostUseCase {
    pub fn new(
        repo: Arc<dyn HostRepository>,
        alias_repo: Arc<dyn AliasRepository>,
        hasher: Arc<dyn PasswordHasher>,
        zones: Arc<ZoneMatcher>,
    ) -> Self {
        Self {
            repo,
            alias_repo,
            hasher,
            zones,
        }
    }

    #[instrument(skip(self, command), fields(hostname = %command.hostname, domain = %command.domain))]
    pub async fn execute(&self, command: CreateHostCommand) -> Result<Host, DomainError> {
        let hostname = command.hostname.trim().to_ascii_lowercase();
        let domain = unfqdn(command.domain.trim()).to_ascii_lowercase();
        let ip = command
            .ip
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty());

        Host::validate_hostname(&hostname).map_err(DomainError::InvalidHost)?;
        Host::validate_ttl(command.ttl).map_err(DomainError::InvalidHost)?;
        Host::validate_ip(&ip.as_deref().map(Arc::from)).map_err(DomainError::InvalidHost)?;
        Host::validate_username(&command.username).map_err(DomainError::InvalidHost)?;
        Host::validate_password(&command.password).map_err(DomainError::InvalidHost)?;

        if !self.zones.zones().iter().any(|z| z.as_ref() == domain) {
            return Err(DomainError::DomainUnsupported(domain));
        }

        ensure_name_available(self.repo.as_ref(), self.alias_repo.as_ref(), &hostname, &domain)
            .await?;

        if self
            .repo
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(DomainError::UsernameTaken(command.username));
        }

        let password_hash = self.hasher.hash(&command.password)?;

        let host = self
            .repo
            .create(
                hostname,
                domain,
                ip,
                command.ttl,
                command.username,
                password_hash,
            )
            .await?;

        info!(
            host_id = ?host.id,
            host = %host.full_domain(),
            ttl = host.ttl,
            "Host created successfully"
        );

        Ok(host)
    }
}
