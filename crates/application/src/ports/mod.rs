mod alias_repository;
mod external_ip_resolver;
mod host_repository;
mod password_hasher;
mod update_log_repository;

pub use alias_repository::AliasRepository;
pub use external_ip_resolver::ExternalIpResolver;
pub use host_repository::HostRepository;
pub use password_hasher::PasswordHasher;
pub use update_log_repository::UpdateLogRepository;
