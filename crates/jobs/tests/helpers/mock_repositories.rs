use async_trait::async_trait;
use dyndns_application::ports::UpdateLogRepository;
use dyndns_domain::{DomainError, UpdateLog};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Entries carry their age in days instead of a timestamp.
pub struct MockUpdateLogRepository {
    entries: RwLock<Vec<(UpdateLog, u32)>>,
    cleanup_calls: AtomicUsize,
}

impl MockUpdateLogRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            cleanup_calls: AtomicUsize::new(0),
        }
    }

    pub async fn add_log(&self, host_id: i64, age_days: u32) {
        let entry = UpdateLog::new(host_id).succeeded("No errors occurred");
        self.entries.write().await.push((entry, age_days));
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn cleanup_calls(&self) -> usize {
        self.cleanup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateLogRepository for MockUpdateLogRepository {
    async fn append(&self, entry: &UpdateLog) -> Result<(), DomainError> {
        self.entries.write().await.push((entry.clone(), 0));
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .take(limit as usize)
            .map(|(e, _)| e.clone())
            .collect())
    }

    async fn get_by_host(&self, host_id: i64, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|(e, _)| e.host_id == host_id)
            .take(limit as usize)
            .map(|(e, _)| e.clone())
            .collect())
    }

    async fn delete_older_than(&self, days: u32) -> Result<u64, DomainError> {
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|(_, age)| *age <= days);
        Ok((before - entries.len()) as u64)
    }
}
