//! dyndns application layer: ports, DNS resolution and admin use cases
pub mod ports;
pub mod services;
pub mod use_cases;
