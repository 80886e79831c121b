use dyndns_domain::DomainError;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// False for a mismatch or an unparsable hash.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
