use async_trait::async_trait;
use dyndns_application::ports::HostRepository;
use dyndns_domain::{DomainError, Host};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::now_timestamp;

type HostRow = (
    i64,
    String,
    String,
    Option<String>,
    i64,
    Option<String>,
    String,
    String,
);

const HOST_COLUMNS: &str = "id, hostname, domain, ip, ttl, last_update, username, password_hash";

pub struct SqliteHostRepository {
    pool: SqlitePool,
}

impl SqliteHostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_host(row: HostRow) -> Host {
        let (id, hostname, domain, ip, ttl, last_update, username, password_hash) = row;
        Host {
            id: Some(id),
            hostname: Arc::from(hostname.as_str()),
            domain: Arc::from(domain.as_str()),
            ip: ip.filter(|ip| !ip.is_empty()).map(|ip| Arc::from(ip.as_str())),
            ttl: ttl.clamp(0, u32::MAX as i64) as u32,
            last_update,
            username: Arc::from(username.as_str()),
            password_hash: Arc::from(password_hash.as_str()),
        }
    }

    fn map_write_error(e: sqlx::Error, hostname: &str, domain: &str, username: &str) -> DomainError {
        let message = e.to_string();
        if message.contains("UNIQUE constraint failed: hosts.username") {
            DomainError::UsernameTaken(username.to_string())
        } else if message.contains("UNIQUE constraint failed") {
            DomainError::HostAlreadyExists(format!("{}.{}", hostname, domain))
        } else {
            error!(error = %e, "Failed to write host");
            DomainError::DatabaseError(message)
        }
    }
}

#[async_trait]
impl HostRepository for SqliteHostRepository {
    #[instrument(skip(self, password_hash))]
    async fn create(
        &self,
        hostname: String,
        domain: String,
        ip: Option<String>,
        ttl: u32,
        username: String,
        password_hash: String,
    ) -> Result<Host, DomainError> {
        let now = now_timestamp();
        let last_update = ip.as_ref().map(|_| now.clone());

        let row = sqlx::query_as::<_, HostRow>(&format!(
            "INSERT INTO hosts (hostname, domain, ip, ttl, last_update, username, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            HOST_COLUMNS
        ))
        .bind(&hostname)
        .bind(&domain)
        .bind(&ip)
        .bind(ttl as i64)
        .bind(&last_update)
        .bind(&username)
        .bind(&password_hash)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &hostname, &domain, &username))?;

        Ok(Self::row_to_host(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Host>, DomainError> {
        let row = sqlx::query_as::<_, HostRow>(&format!(
            "SELECT {} FROM hosts WHERE id = ?",
            HOST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query host by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_host))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Host>, DomainError> {
        let rows = sqlx::query_as::<_, HostRow>(&format!(
            "SELECT {} FROM hosts ORDER BY domain ASC, hostname ASC",
            HOST_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all hosts");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_host).collect())
    }

    #[instrument(skip(self))]
    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Host>, DomainError> {
        let row = sqlx::query_as::<_, HostRow>(&format!(
            "SELECT {} FROM hosts WHERE hostname = ? AND domain = ?",
            HOST_COLUMNS
        ))
        .bind(hostname)
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query host by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_host))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<Host>, DomainError> {
        let row = sqlx::query_as::<_, HostRow>(&format!(
            "SELECT {} FROM hosts WHERE username = ?",
            HOST_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query host by username");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_host))
    }

    #[instrument(skip(self, password_hash))]
    async fn update(
        &self,
        id: i64,
        ip: Option<Option<String>>,
        ttl: Option<u32>,
        username: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Host, DomainError> {
        let now = now_timestamp();

        let current = self
            .get_by_id(id)
            .await?
            .ok_or(DomainError::HostNotFound(id))?;

        let ip_changed = ip
            .as_ref()
            .is_some_and(|ip| ip.as_deref() != current.ip.as_deref());
        let ttl_changed = ttl.is_some_and(|ttl| ttl != current.ttl);

        let final_ip = ip.unwrap_or_else(|| current.ip.as_ref().map(|s| s.to_string()));
        let final_ttl = ttl.unwrap_or(current.ttl);
        let final_username = username.unwrap_or_else(|| current.username.to_string());
        let final_hash = password_hash.unwrap_or_else(|| current.password_hash.to_string());
        let final_last_update = if ip_changed || ttl_changed {
            Some(now.clone())
        } else {
            current.last_update.clone()
        };

        let row = sqlx::query_as::<_, HostRow>(&format!(
            "UPDATE hosts
             SET ip = ?, ttl = ?, username = ?, password_hash = ?, last_update = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            HOST_COLUMNS
        ))
        .bind(&final_ip)
        .bind(final_ttl as i64)
        .bind(&final_username)
        .bind(&final_hash)
        .bind(&final_last_update)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &current.hostname, &current.domain, &final_username))?;

        row.map(Self::row_to_host)
            .ok_or(DomainError::HostNotFound(id))
    }

    #[instrument(skip(self))]
    async fn update_ip(&self, id: i64, ip: &str) -> Result<Host, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, HostRow>(&format!(
            "UPDATE hosts SET ip = ?, last_update = ?, updated_at = ? WHERE id = ? RETURNING {}",
            HOST_COLUMNS
        ))
        .bind(ip)
        .bind(&now)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update host address");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_host)
            .ok_or(DomainError::HostNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM hosts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete host");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HostNotFound(id));
        }

        Ok(())
    }
}
