mod create_host;
mod delete_host;
mod get_hosts;
mod update_host;

pub use create_host::{CreateHostCommand, CreateHostUseCase};
pub use delete_host::DeleteHostUseCase;
pub use get_hosts::GetHostsUseCase;
pub use update_host::{UpdateHostCommand, UpdateHostUseCase};

use dyndns_domain::DomainError;

use crate::ports::{AliasRepository, HostRepository};

/// A name below a zone is either one host or one alias, never both.
pub(crate) async fn ensure_name_available(
    hosts: &dyn HostRepository,
    aliases: &dyn AliasRepository,
    hostname: &str,
    domain: &str,
) -> Result<(), DomainError> {
    if hosts.find(hostname, domain).await?.is_some()
        || aliases.find(hostname, domain).await?.is_some()
    {
        return Err(DomainError::HostAlreadyExists(format!(
            "{}.{}",
            hostname, domain
        )));
    }
    Ok(())
}
