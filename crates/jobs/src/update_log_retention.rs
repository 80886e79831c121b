use dyndns_application::use_cases::CleanupOldUpdateLogsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Deletes update-log entries older than `retention_days`, once per interval.
/// The first pass runs immediately.
pub struct UpdateLogRetentionJob {
    cleanup: Arc<CleanupOldUpdateLogsUseCase>,
    retention_days: u32,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl UpdateLogRetentionJob {
    pub fn new(cleanup: Arc<CleanupOldUpdateLogsUseCase>, retention_days: u32) -> Self {
        Self {
            cleanup,
            retention_days,
            interval_secs: 86400,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            retention_days = self.retention_days,
            interval_secs = self.interval_secs,
            "Starting update log retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("UpdateLogRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.cleanup.execute(self.retention_days).await {
                            Ok(deleted) => {
                                info!(deleted, "Update log retention cleanup completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Update log retention cleanup failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
