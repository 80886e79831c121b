use dyndns_domain::dns_record::classify_ip;
use dyndns_domain::update_log::shrink_user_agent;
use dyndns_domain::zone::unfqdn;
use dyndns_domain::{DomainError, Host, UpdateLog};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::{HostRepository, PasswordHasher, UpdateLogRepository};

/// One dyndns update call as received by the web layer.
#[derive(Debug, Clone, Default)]
pub struct IpUpdateRequest {
    pub username: String,
    pub password: String,
    pub hostname: Option<String>,
    pub myip: Option<String>,
    pub caller_ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

/// Result codes of the dyndns update protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpUpdateOutcome {
    Good(IpAddr),
    NoChange(IpAddr),
    BadAuth,
    NotFqdn,
    BadRequest,
    DnsErr,
}

impl IpUpdateOutcome {
    pub fn reply(&self) -> &'static str {
        match self {
            IpUpdateOutcome::Good(_) => "good\n",
            IpUpdateOutcome::NoChange(_) => "nochg\n",
            IpUpdateOutcome::BadAuth => "badauth\n",
            IpUpdateOutcome::NotFqdn => "notfqdn\n",
            IpUpdateOutcome::BadRequest => "badrequest\n",
            IpUpdateOutcome::DnsErr => "dnserr\n",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, IpUpdateOutcome::Good(_) | IpUpdateOutcome::NoChange(_))
    }
}

pub struct UpdateHostIpUseCase {
    host_repo: Arc<dyn HostRepository>,
    log_repo: Arc<dyn UpdateLogRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateHostIpUseCase {
    pub fn new(
        host_repo: Arc<dyn HostRepository>,
        log_repo: Arc<dyn UpdateLogRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            host_repo,
            log_repo,
            hasher,
        }
    }

    /// Authenticates the caller against the host credentials and points the
    /// host at the sent address, or at the caller's address when none (or an
    /// invalid one) was sent. Every attempt by an authenticated host is logged.
    #[instrument(skip(self, request), fields(username = %request.username, hostname = ?request.hostname))]
    pub async fn execute(&self, request: IpUpdateRequest) -> Result<IpUpdateOutcome, DomainError> {
        let Some(host) = self.authenticate(&request.username, &request.password).await? else {
            warn!("Update rejected: bad credentials");
            return Ok(IpUpdateOutcome::BadAuth);
        };
        let Some(host_id) = host.id else {
            return Ok(IpUpdateOutcome::BadAuth);
        };

        let mut entry = UpdateLog::new(host_id);
        entry.user_agent = request
            .user_agent
            .as_deref()
            .map(shrink_user_agent)
            .filter(|agent| !agent.is_empty())
            .map(Arc::from);
        entry.sent_ip = request.myip.as_deref().map(Arc::from);
        entry.caller_ip = request.caller_ip.map(|ip| Arc::from(ip.to_string()));

        let Some(caller_ip) = request.caller_ip else {
            self.record(entry.failed("Bad Request: Unable to get caller IP"))
                .await;
            return Ok(IpUpdateOutcome::BadRequest);
        };

        if !hostname_matches(request.hostname.as_deref(), &host) {
            self.record(entry.failed(
                "Hostname or combination of authenticated user and hostname is invalid",
            ))
            .await;
            return Ok(IpUpdateOutcome::NotFqdn);
        }

        let ip = request
            .myip
            .as_deref()
            .and_then(classify_ip)
            .unwrap_or_else(|| normalize(caller_ip));
        entry.sent_ip = Some(Arc::from(ip.to_string()));

        if host.ip.as_deref().and_then(classify_ip) == Some(ip) {
            self.record(entry.succeeded("IP unchanged")).await;
            info!(host = %host.full_domain(), %ip, "Address unchanged");
            return Ok(IpUpdateOutcome::NoChange(ip));
        }

        if let Err(e) = self.host_repo.update_ip(host_id, &ip.to_string()).await {
            error!(host = %host.full_domain(), error = %e, "Failed to store new address");
            self.record(entry.failed("Failed to store new address")).await;
            return Ok(IpUpdateOutcome::DnsErr);
        }

        self.record(entry.succeeded("No errors occurred")).await;
        info!(host = %host.full_domain(), %ip, "Address updated");
        Ok(IpUpdateOutcome::Good(ip))
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Host>, DomainError> {
        if username.is_empty() {
            return Ok(None);
        }
        Ok(self
            .host_repo
            .find_by_username(username)
            .await?
            .filter(|host| self.hasher.verify(password, &host.password_hash)))
    }

    async fn record(&self, entry: UpdateLog) {
        if let Err(e) = self.log_repo.append(&entry).await {
            error!(host_id = entry.host_id, error = %e, "Failed to write update log");
        }
    }
}

fn hostname_matches(sent: Option<&str>, host: &Host) -> bool {
    match sent {
        Some(name) => unfqdn(name.trim()).eq_ignore_ascii_case(&host.full_domain()),
        None => false,
    }
}

fn normalize(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    }
}
