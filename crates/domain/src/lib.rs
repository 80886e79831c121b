//! dyndns domain layer
pub mod alias;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;
pub mod host;
pub mod update_log;
pub mod zone;

pub use alias::Alias;
pub use config::{CliOverrides, Config, ConfigError, DnsConfig};
pub use dns_question::DnsQuestion;
pub use dns_record::{AnswerBuilder, DnsAnswer, QueryClass, RecordData, RecordType, SoaData};
pub use dns_reply::{DnsReply, ResponseCode};
pub use errors::DomainError;
pub use host::Host;
pub use update_log::UpdateLog;
pub use zone::{DomainMatch, ZoneMatcher};
