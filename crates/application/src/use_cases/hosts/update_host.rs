use dyndns_domain::{DomainError, Host};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HostRepository, PasswordHasher};

/// Absent fields are left unchanged. An empty `ip` clears the address.
#[derive(Default)]
pub struct UpdateHostCommand {
    pub ip: Option<String>,
    pub ttl: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateHostUseCase {
    repo: Arc<dyn HostRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateHostUseCase {
    pub fn new(repo: Arc<dyn HostRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    #[instrument(skip(self, command))]
    pub async fn execute(&self, id: i64, command: UpdateHostCommand) -> Result<Host, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::HostNotFound(id))?;

        let ip = command
            .ip
            .map(|ip| Some(ip.trim().to_string()).filter(|ip| !ip.is_empty()));
        if let Some(Some(ref ip)) = ip {
            Host::validate_ip(&Some(Arc::from(ip.as_str()))).map_err(DomainError::InvalidHost)?;
        }

        if let Some(ttl) = command.ttl {
            Host::validate_ttl(ttl).map_err(DomainError::InvalidHost)?;
        }

        if let Some(ref username) = command.username {
            Host::validate_username(username).map_err(DomainError::InvalidHost)?;
            if let Some(owner) = self.repo.find_by_username(username).await? {
                if owner.id != Some(id) {
                    return Err(DomainError::UsernameTaken(username.clone()));
                }
            }
        }

        let password_hash = match command.password {
            Some(ref password) => {
                Host::validate_password(password).map_err(DomainError::InvalidHost)?;
                Some(self.hasher.hash(password)?)
            }
            None => None,
        };

        let updated = self
            .repo
            .update(id, ip, command.ttl, command.username, password_hash)
            .await?;

        info!(
            host_id = id,
            host = %updated.full_domain(),
            ttl = updated.ttl,
            "Host updated successfully"
        );

        Ok(updated)
    }
}
