use async_trait::async_trait;
use dyndns_application::ports::{
    AliasRepository, HostRepository, PasswordHasher, UpdateLogRepository,
};
use dyndns_domain::{Alias, DomainError, Host, UpdateLog};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ── Hosts ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockHostRepository {
    hosts: Arc<RwLock<Vec<Host>>>,
    next_id: Arc<RwLock<i64>>,
    should_fail: Arc<AtomicBool>,
}

impl MockHostRepository {
    pub fn new() -> Self {
        Self {
            hosts: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.hosts.read().await.len()
    }

    /// Seeds a host with a plain-text password usable with [`MockPasswordHasher`].
    pub async fn add_host(&self, hostname: &str, domain: &str, ip: Option<&str>, ttl: u32) -> Host {
        self.create(
            hostname.to_string(),
            domain.to_string(),
            ip.map(str::to_string),
            ttl,
            format!("{}-user", hostname),
            MockPasswordHasher::hash_of("password123"),
        )
        .await
        .unwrap()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockHostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostRepository for MockHostRepository {
    async fn create(
        &self,
        hostname: String,
        domain: String,
        ip: Option<String>,
        ttl: u32,
        username: String,
        password_hash: String,
    ) -> Result<Host, DomainError> {
        self.check()?;
        let mut hosts = self.hosts.write().await;

        if hosts
            .iter()
            .any(|h| h.hostname.as_ref() == hostname && h.domain.as_ref() == domain)
        {
            return Err(DomainError::HostAlreadyExists(format!("{}.{}", hostname, domain)));
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let mut host = Host::new(
            hostname.into(),
            domain.into(),
            ip.map(Arc::from),
            ttl,
            username.into(),
            password_hash.into(),
        );
        host.id = Some(id);
        host.last_update = Some("2026-01-01 00:00:00".to_string());

        hosts.push(host.clone());
        Ok(host)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Host>, DomainError> {
        self.check()?;
        Ok(self.hosts.read().await.iter().find(|h| h.id == Some(id)).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Host>, DomainError> {
        self.check()?;
        Ok(self.hosts.read().await.clone())
    }

    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Host>, DomainError> {
        self.check()?;
        Ok(self
            .hosts
            .read()
            .await
            .iter()
            .find(|h| h.hostname.as_ref() == hostname && h.domain.as_ref() == domain)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Host>, DomainError> {
        self.check()?;
        Ok(self
            .hosts
            .read()
            .await
            .iter()
            .find(|h| h.username.as_ref() == username)
            .cloned())
    }

    async fn update(
        &self,
        id: i64,
        ip: Option<Option<String>>,
        ttl: Option<u32>,
        username: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Host, DomainError> {
        self.check()?;
        let mut hosts = self.hosts.write().await;
        let host = hosts
            .iter_mut()
            .find(|h| h.id == Some(id))
            .ok_or(DomainError::HostNotFound(id))?;

        if let Some(ip) = ip {
            host.ip = ip.map(Into::into);
        }
        if let Some(ttl) = ttl {
            host.ttl = ttl;
        }
        if let Some(username) = username {
            host.username = username.into();
        }
        if let Some(hash) = password_hash {
            host.password_hash = hash.into();
        }
        Ok(host.clone())
    }

    async fn update_ip(&self, id: i64, ip: &str) -> Result<Host, DomainError> {
        self.check()?;
        let mut hosts = self.hosts.write().await;
        let host = hosts
            .iter_mut()
            .find(|h| h.id == Some(id))
            .ok_or(DomainError::HostNotFound(id))?;
        host.ip = Some(ip.into());
        host.last_update = Some("2026-01-02 00:00:00".to_string());
        Ok(host.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check()?;
        let mut hosts = self.hosts.write().await;
        let before = hosts.len();
        hosts.retain(|h| h.id != Some(id));
        if hosts.len() == before {
            return Err(DomainError::HostNotFound(id));
        }
        Ok(())
    }
}

// ── Aliases ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct AliasRow {
    id: i64,
    hostname: String,
    target_id: i64,
    ttl: u32,
}

/// Reads targets from a shared host mock; aliases of deleted hosts vanish.
#[derive(Clone)]
pub struct MockAliasRepository {
    hosts: MockHostRepository,
    rows: Arc<RwLock<Vec<AliasRow>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockAliasRepository {
    pub fn new(hosts: MockHostRepository) -> Self {
        Self {
            hosts,
            rows: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn add_alias(&self, hostname: &str, target_id: i64, ttl: u32) -> Alias {
        self.create(hostname.to_string(), target_id, ttl).await.unwrap()
    }

    async fn load(&self, row: &AliasRow) -> Result<Option<Alias>, DomainError> {
        let target = self.hosts.get_by_id(row.target_id).await?;
        Ok(target.map(|target| {
            let mut alias = Alias::new(row.hostname.as_str().into(), row.ttl, target);
            alias.id = Some(row.id);
            alias
        }))
    }
}

#[async_trait]
impl AliasRepository for MockAliasRepository {
    async fn create(&self, hostname: String, target_id: i64, ttl: u32) -> Result<Alias, DomainError> {
        let mut next_id = self.next_id.write().await;
        let row = AliasRow {
            id: *next_id,
            hostname,
            target_id,
            ttl,
        };
        *next_id += 1;

        let alias = self
            .load(&row)
            .await?
            .ok_or(DomainError::HostNotFound(target_id))?;
        self.rows.write().await.push(row);
        Ok(alias)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Alias>, DomainError> {
        let row = self.rows.read().await.iter().find(|r| r.id == id).cloned();
        match row {
            Some(row) => self.load(&row).await,
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Alias>, DomainError> {
        let rows = self.rows.read().await.clone();
        let mut aliases = Vec::new();
        for row in &rows {
            if let Some(alias) = self.load(row).await? {
                aliases.push(alias);
            }
        }
        Ok(aliases)
    }

    async fn find(&self, hostname: &str, domain: &str) -> Result<Option<Alias>, DomainError> {
        for alias in self.get_all().await? {
            if alias.hostname.as_ref() == hostname && alias.domain() == domain {
                return Ok(Some(alias));
            }
        }
        Ok(None)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(DomainError::AliasNotFound(id));
        }
        Ok(())
    }
}

// ── Update logs ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUpdateLogRepository {
    entries: Arc<RwLock<Vec<UpdateLog>>>,
    deleted_days: Arc<RwLock<Vec<u32>>>,
}

impl MockUpdateLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<UpdateLog> {
        self.entries.read().await.clone()
    }

    pub async fn cleanup_calls(&self) -> Vec<u32> {
        self.deleted_days.read().await.clone()
    }
}

#[async_trait]
impl UpdateLogRepository for MockUpdateLogRepository {
    async fn append(&self, entry: &UpdateLog) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let mut entry = entry.clone();
        entry.id = Some(entries.len() as i64 + 1);
        entries.push(entry);
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_by_host(&self, host_id: i64, limit: u32) -> Result<Vec<UpdateLog>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| e.host_id == host_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete_older_than(&self, days: u32) -> Result<u64, DomainError> {
        self.deleted_days.write().await.push(days);
        let mut entries = self.entries.write().await;
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }
}

// ── Password hashing ─────────────────────────────────────────────────────────

pub struct MockPasswordHasher;

impl MockPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{}", password)
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(Self::hash_of(password))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        Self::hash_of(password) == hash
    }
}
