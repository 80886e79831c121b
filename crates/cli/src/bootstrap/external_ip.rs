use dyndns_application::ports::ExternalIpResolver;
use dyndns_domain::{ConfigError, DnsConfig};
use dyndns_infrastructure::system::HttpExternalIpResolver;
use std::net::IpAddr;
use tracing::info;

/// Address served at every zone apex: the configured one, otherwise whatever
/// the discovery endpoint reports.
pub async fn resolve_apex_ip(dns: &DnsConfig) -> anyhow::Result<IpAddr> {
    if let Some(ip) = dns.external_ip.as_deref() {
        let ip: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| ConfigError::Validation(format!("invalid external_ip {:?}", ip)))?;
        info!(%ip, "Using configured external IP");
        return Ok(ip);
    }

    let resolver = HttpExternalIpResolver::new(dns.external_ip_resolver.as_str())?;
    let ip = resolver
        .discover()
        .await
        .map_err(|e| ConfigError::ExternalIp(e.to_string()))?;

    info!(%ip, resolver = resolver.url(), "Discovered external IP");
    Ok(ip)
}
