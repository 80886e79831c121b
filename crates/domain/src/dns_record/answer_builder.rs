use super::{DnsAnswer, RecordData, SoaData};
use crate::errors::DomainError;
use crate::zone::fqdn;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const SOA_REFRESH: i32 = 3600;
pub const SOA_RETRY: i32 = 900;
pub const SOA_EXPIRE: i32 = 604_800;
pub const SOA_MINIMUM: u32 = 86_400;

/// Classifies a textual address. IPv4 is tested first, and an IPv4-mapped
/// IPv6 literal (`::ffff:a.b.c.d`) counts as IPv4.
pub fn classify_ip(ip: &str) -> Option<IpAddr> {
    let ip = ip.trim();
    if let Ok(v4) = ip.parse::<Ipv4Addr>() {
        return Some(IpAddr::V4(v4));
    }

    let v6 = ip.parse::<Ipv6Addr>().ok()?;
    match v6.to_ipv4_mapped() {
        Some(v4) => Some(IpAddr::V4(v4)),
        None => Some(IpAddr::V6(v6)),
    }
}

/// Builds resource records from plain facts.
pub struct AnswerBuilder;

impl AnswerBuilder {
    /// A record for IPv4, AAAA for IPv6.
    pub fn ip_answer(name: &str, ip: &str, ttl: u32) -> Result<DnsAnswer, DomainError> {
        let data = match classify_ip(ip) {
            Some(IpAddr::V4(v4)) => RecordData::A(v4),
            Some(IpAddr::V6(v6)) => RecordData::AAAA(v6),
            None => return Err(DomainError::InvalidAddress(ip.to_string())),
        };
        Ok(DnsAnswer::new(name, ttl, data))
    }

    pub fn addr_answer(name: &str, ip: IpAddr, ttl: u32) -> DnsAnswer {
        let data = match ip {
            IpAddr::V4(v4) => RecordData::A(v4),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => RecordData::A(v4),
                None => RecordData::AAAA(v6),
            },
        };
        DnsAnswer::new(name, ttl, data)
    }

    /// `target` must already carry the root label.
    pub fn cname_answer(name: &str, target: &str, ttl: u32) -> DnsAnswer {
        DnsAnswer::new(name, ttl, RecordData::CNAME(target.to_string()))
    }

    /// SOA for `zone` with the fixed timers. `nameserver` and `zone` are
    /// qualified with the root label if they are not already.
    pub fn soa_answer(zone: &str, nameserver: &str, ttl: u32, serial: u32) -> DnsAnswer {
        let zone = fqdn(zone);
        let soa = SoaData {
            nameserver: fqdn(nameserver),
            mbox: format!("root.{}", zone),
            serial,
            refresh: SOA_REFRESH,
            retry: SOA_RETRY,
            expire: SOA_EXPIRE,
            minimum: SOA_MINIMUM,
        };
        DnsAnswer::new(zone, ttl, RecordData::SOA(soa))
    }
}
