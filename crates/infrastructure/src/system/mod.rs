pub mod external_ip;

pub use external_ip::HttpExternalIpResolver;
