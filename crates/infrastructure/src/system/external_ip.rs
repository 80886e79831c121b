use async_trait::async_trait;
use dyndns_application::ports::ExternalIpResolver;
use dyndns_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, instrument};

/// Asks a plain-text "what is my IP" service for the server's public address.
pub struct HttpExternalIpResolver {
    url: String,
    client: reqwest::Client,
}

impl HttpExternalIpResolver {
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("dyndns/0.3 (external-ip)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The body must hold one address, optionally surrounded by whitespace.
pub fn parse_ip_body(body: &str) -> Result<IpAddr, DomainError> {
    let text = body.trim();
    text.parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidAddress(text.to_string()))
}

#[async_trait]
impl ExternalIpResolver for HttpExternalIpResolver {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn discover(&self) -> Result<IpAddr, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::IoError(format!("fetch error for {}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::IoError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::IoError(format!("read error for {}: {}", self.url, e)))?;

        let ip = parse_ip_body(&body)?;
        debug!(ip = %ip, "External address discovered");
        Ok(ip)
    }
}
