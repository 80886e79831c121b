pub mod alias;
pub mod host;
pub mod update_log;
pub mod zone;

pub use alias::{AliasResponse, CreateAliasRequest};
pub use host::{CreateHostRequest, HostResponse, UpdateHostRequest};
pub use update_log::{UpdateLogQuery, UpdateLogResponse};
pub use zone::ZonesResponse;
