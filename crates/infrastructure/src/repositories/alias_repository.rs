use async_trait::async_trait;
use dyndns_application::ports::AliasRepository;
use dyndns_domain::{Alias, DomainError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::host_repository::SqliteHostRepository;
use super::now_timestamp;

/// Alias columns followed by the joined target host columns.
type AliasRow = (
    i64,
    String,
    i64,
    i64,
    String,
    String,
    Option<String>,
    i64,
    Option<String>,
    String,
    String,
);

const ALIAS_SELECT: &str = "SELECT a.id, a.hostname, a.ttl,
        h.id, h.hostname, h.domain, h.ip, h.ttl, h.last_update, h.username, h.password_hash
     FROM aliases a
     JOIN hosts h ON h.id = a.target_id";

pub struct SqliteAliasRepository {
    pool: SqlitePool,
}

impl SqliteAliasRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_alias(row: AliasRow) -> Alias {
        let (
            id,
            hostname,
            ttl,
            host_id,
            host_name,
            domain,
            ip,
            host_ttl,
            last_update,
            username,
            password_hash,
        ) = row;
        let target = SqliteHostRepository::row_to_host((
            host_id,
            host_name,
            domain,
            ip,
            host_ttl,
            last_update,
            username,
            password_hash,
        ));
        Alias {
            id: Some(id),
            hostname: Arc::from(hostname.as_str()),
            ttl: ttl.clamp(0, u32::MAX as i64) as u32,
            target,
        }
    }
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        hostname: String,
        target_id: i64,
        ttl: u32,
    ) -> Result<Alias, DomainError> {
        let now = now_timestamp();

        let (id,) = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO aliases (hostname, target_id, ttl, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&hostname)
        .bind(target_id)
        .bind(ttl as i64)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("FOREIGN KEY constraint failed") {
                DomainError::HostNotFound(target_id)
            } else {
                error!(error = %e, "Failed to create alias");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        self.get_by_id(id)
            .await?
            .ok_or(DomainError::AliasNotFound(id))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Alias>, DomainError> {
        let row = sqlx::query_as::<_, AliasRow>(&format!("{} WHERE a.id = ?", ALIAS_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query alias by id");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_alias))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Alias>, DomainError> {
        let rows = sqlx::query_as::<_, AliasRow>(&format!(
            "{} ORDER BY h.domain ASC, a.hostname ASC",
            ALIAS_SELECT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all aliases");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_alias).collect())
    }

    #[instrument(skip(self))]
    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Alias>, DomainError> {
        let row = sqlx::query_as::<_, AliasRow>(&format!(
            "{} WHERE a.hostname = ? AND h.domain = ? ORDER BY a.id ASC LIMIT 1",
            ALIAS_SELECT
        ))
        .bind(hostname)
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query alias by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_alias))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM aliases WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete alias");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AliasNotFound(id));
        }

        Ok(())
    }
}
