pub mod handler;
pub mod listener;
pub mod wire;

pub use handler::DnsMessageHandler;
pub use listener::{run_tcp_listener, run_udp_listener, ListenerTimeouts, UDP_BUFFER_SIZE};
pub use wire::WireMapper;
