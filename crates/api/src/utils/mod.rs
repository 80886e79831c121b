pub mod basic_auth;
pub mod caller_ip;

pub use basic_auth::basic_credentials;
pub use caller_ip::{forwarded_public_ip, is_public_address};
