use async_trait::async_trait;
use dyndns_application::ports::UpdateLogRepository;
use dyndns_domain::{DomainError, UpdateLog};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::{days_ago_cutoff, now_timestamp};

type UpdateLogRow = (
    i64,
    i64,
    i64,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
);

const LOG_COLUMNS: &str = "id, host_id, status, message, sent_ip, caller_ip, user_agent, created_at";

pub struct SqliteUpdateLogRepository {
    pool: SqlitePool,
}

impl SqliteUpdateLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_log(row: UpdateLogRow) -> UpdateLog {
        let (id, host_id, status, message, sent_ip, caller_ip, user_agent, created_at) = row;
        UpdateLog {
            id: Some(id),
            host_id,
            status: status != 0,
            message: Arc::from(message.as_str()),
            sent_ip: sent_ip.map(|s| Arc::from(s.as_str())),
            caller_ip: caller_ip.map(|s| Arc::from(s.as_str())),
            user_agent: user_agent.map(|s| Arc::from(s.as_str())),
            timestamp: Some(created_at),
        }
    }
}

#[async_trait]
impl UpdateLogRepository for SqliteUpdateLogRepository {
    #[instrument(skip(self, entry), fields(host_id = entry.host_id))]
    async fn append(&self, entry: &UpdateLog) -> Result<(), DomainError> {
        let created_at = entry.timestamp.clone().unwrap_or_else(now_timestamp);

        sqlx::query(
            "INSERT INTO update_logs (host_id, status, message, sent_ip, caller_ip, user_agent, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.host_id)
        .bind(if entry.status { 1i64 } else { 0i64 })
        .bind(entry.message.as_ref())
        .bind(entry.sent_ip.as_deref())
        .bind(entry.caller_ip.as_deref())
        .bind(entry.user_agent.as_deref())
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to append update log");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        let rows = sqlx::query_as::<_, UpdateLogRow>(&format!(
            "SELECT {} FROM update_logs ORDER BY created_at DESC, id DESC LIMIT ?",
            LOG_COLUMNS
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query recent update logs");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_log).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_host(&self, host_id: i64, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        let rows = sqlx::query_as::<_, UpdateLogRow>(&format!(
            "SELECT {} FROM update_logs WHERE host_id = ? ORDER BY created_at DESC, id DESC LIMIT ?",
            LOG_COLUMNS
        ))
        .bind(host_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query update logs by host");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_log).collect())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, days: u32) -> Result<u64, DomainError> {
        let cutoff = days_ago_cutoff(days)?;
        let result = sqlx::query("DELETE FROM update_logs WHERE created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete old update logs");
                DomainError::DatabaseError(format!("Failed to delete old update logs: {}", e))
            })?;

        let deleted = result.rows_affected();
        info!(deleted, days, "Old update logs deleted");
        Ok(deleted)
    }
}
