use dyndns_infrastructure::auth::Argon2PasswordHasher;
use dyndns_infrastructure::repositories::{
    SqliteAliasRepository, SqliteHostRepository, SqliteUpdateLogRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub host: Arc<SqliteHostRepository>,
    pub alias: Arc<SqliteAliasRepository>,
    pub update_log: Arc<SqliteUpdateLogRepository>,
    pub hasher: Arc<Argon2PasswordHasher>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            host: Arc::new(SqliteHostRepository::new(pool.clone())),
            alias: Arc::new(SqliteAliasRepository::new(pool.clone())),
            update_log: Arc::new(SqliteUpdateLogRepository::new(pool)),
            hasher: Arc::new(Argon2PasswordHasher::new()),
        }
    }
}
