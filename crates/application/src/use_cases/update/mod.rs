mod update_host_ip;

pub use update_host_ip::{IpUpdateOutcome, IpUpdateRequest, UpdateHostIpUseCase};
