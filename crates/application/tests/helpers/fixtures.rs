use dyndns_application::services::SerialClock;
use dyndns_application::use_cases::{RecordResolver, ResolverSettings, ResponseAssembler};
use dyndns_domain::ZoneMatcher;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use super::{MockAliasRepository, MockHostRepository};

pub const APEX_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
pub const DEFAULT_TTL: u32 = 120;
pub const PARENT_NS: &str = "ns1.example.net";

pub struct DnsFixture {
    pub hosts: MockHostRepository,
    pub aliases: MockAliasRepository,
    pub resolver: Arc<RecordResolver>,
    pub assembler: ResponseAssembler,
}

impl DnsFixture {
    pub fn new() -> Self {
        Self::with_zones(&["example.com", "example.org"])
    }

    pub fn with_zones(zones: &[&str]) -> Self {
        let hosts = MockHostRepository::new();
        let aliases = MockAliasRepository::new(hosts.clone());
        let resolver = Arc::new(RecordResolver::new(
            Arc::new(ZoneMatcher::new(zones)),
            Arc::new(hosts.clone()),
            Arc::new(aliases.clone()),
            ResolverSettings {
                apex_ip: APEX_IP,
                parent_ns: PARENT_NS.into(),
                default_ttl: DEFAULT_TTL,
            },
            Arc::new(SerialClock::new()),
        ));
        let assembler = ResponseAssembler::new(Arc::clone(&resolver));

        Self {
            hosts,
            aliases,
            resolver,
            assembler,
        }
    }
}
