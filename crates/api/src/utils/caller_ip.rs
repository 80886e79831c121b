use axum::http::HeaderMap;
use ipnetwork::Ipv4Network;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

const FORWARDING_HEADERS: [&str; 2] = ["x-real-ip", "x-forwarded-for"];

/// Networks never accepted as a caller address.
static NON_PUBLIC_V4: LazyLock<Vec<Ipv4Network>> = LazyLock::new(|| {
    [
        "10.0.0.0/8",
        "100.64.0.0/10",
        "172.16.0.0/12",
        "192.0.0.0/24",
        "192.168.0.0/16",
        "198.18.0.0/15",
    ]
    .iter()
    .filter_map(|cidr| cidr.parse().ok())
    .collect()
});

/// First public address found in the proxy headers. Each header is scanned
/// right to left, so the address closest to our proxy wins.
pub fn forwarded_public_ip(headers: &HeaderMap) -> Option<IpAddr> {
    for name in FORWARDING_HEADERS {
        let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) else {
            continue;
        };

        let found = value
            .rsplit(',')
            .filter_map(|candidate| candidate.trim().parse::<IpAddr>().ok())
            .find(|ip| is_public_address(*ip));
        if found.is_some() {
            return found;
        }
    }
    None
}

pub fn is_public_address(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_public_v4(v4),
            None => is_public_v6(v6),
        },
    }
}

fn is_public_v4(ip: Ipv4Addr) -> bool {
    if ip.is_unspecified()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_multicast()
    {
        return false;
    }

    !NON_PUBLIC_V4.iter().any(|network| network.contains(ip))
}

fn is_public_v6(ip: Ipv6Addr) -> bool {
    let link_local = (ip.segments()[0] & 0xffc0) == 0xfe80;
    !(ip.is_unspecified() || ip.is_loopback() || ip.is_multicast() || link_local)
}
