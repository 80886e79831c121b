use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain not supported: {0}")]
    DomainUnsupported(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid address: {0:?} is not a valid ipv4 or ipv6")]
    InvalidAddress(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Host not found: {0}")]
    HostNotFound(i64),

    #[error("Alias not found: {0}")]
    AliasNotFound(i64),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid alias: {0}")]
    InvalidAlias(String),

    #[error("Host already exists: {0}")]
    HostAlreadyExists(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
