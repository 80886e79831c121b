use dyndns_application::ports::{AliasRepository, HostRepository};
use dyndns_application::services::SerialClock;
use dyndns_application::use_cases::{RecordResolver, ResolverSettings, ResponseAssembler};
use dyndns_domain::ZoneMatcher;
use dyndns_infrastructure::dns::DnsMessageHandler;
use dyndns_infrastructure::repositories::{SqliteAliasRepository, SqliteHostRepository};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use sqlx::SqlitePool;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub const APEX_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
pub const DEFAULT_TTL: u32 = 120;
pub const PARENT_NS: &str = "ns1.example.net";

pub fn peer() -> SocketAddr {
    "192.0.2.55:40000".parse().unwrap()
}

/// Handler over real SQLite repositories, serving example.com and example.org.
pub struct DnsHarness {
    pub hosts: Arc<SqliteHostRepository>,
    pub aliases: Arc<SqliteAliasRepository>,
    pub handler: DnsMessageHandler,
}

impl DnsHarness {
    pub fn new(pool: SqlitePool) -> Self {
        let hosts = Arc::new(SqliteHostRepository::new(pool.clone()));
        let aliases = Arc::new(SqliteAliasRepository::new(pool));

        let resolver = RecordResolver::new(
            Arc::new(ZoneMatcher::new(["example.com", "example.org"])),
            hosts.clone() as Arc<dyn HostRepository>,
            aliases.clone() as Arc<dyn AliasRepository>,
            ResolverSettings {
                apex_ip: APEX_IP,
                parent_ns: PARENT_NS.into(),
                default_ttl: DEFAULT_TTL,
            },
            Arc::new(SerialClock::new()),
        );
        let handler = DnsMessageHandler::new(Arc::new(ResponseAssembler::new(Arc::new(resolver))));

        Self {
            hosts,
            aliases,
            handler,
        }
    }

    pub async fn add_host(&self, hostname: &str, domain: &str, ip: Option<&str>, ttl: u32) -> i64 {
        self.hosts
            .create(
                hostname.to_string(),
                domain.to_string(),
                ip.map(str::to_string),
                ttl,
                format!("{}-{}-user", hostname, domain),
                "hash".to_string(),
            )
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn add_alias(&self, hostname: &str, target_id: i64, ttl: u32) {
        self.aliases
            .create(hostname.to_string(), target_id, ttl)
            .await
            .unwrap();
    }

    pub async fn exchange(&self, request: &Message) -> Message {
        let bytes = request.to_bytes().unwrap();
        let response = self.handler.handle(&bytes, peer()).await.unwrap();
        Message::from_vec(&response).unwrap()
    }
}

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}
