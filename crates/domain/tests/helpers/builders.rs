use dyndns_domain::Host;
use std::sync::Arc;

pub struct HostBuilder {
    hostname: Arc<str>,
    domain: Arc<str>,
    ip: Option<Arc<str>>,
    ttl: u32,
}

impl HostBuilder {
    pub fn new() -> Self {
        Self {
            hostname: "www".into(),
            domain: "example.com".into(),
            ip: Some("1.2.3.4".into()),
            ttl: 300,
        }
    }

    pub fn hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn ip(mut self, ip: Option<&str>) -> Self {
        self.ip = ip.map(Arc::from);
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Host {
        Host::new(
            self.hostname,
            self.domain,
            self.ip,
            self.ttl,
            "user-name".into(),
            "hash".into(),
        )
    }
}
