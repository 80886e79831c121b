use dyndns_infrastructure::dns::{
    run_tcp_listener, run_udp_listener, DnsMessageHandler, ListenerTimeouts,
};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves DNS over UDP and TCP on `bind_addr` until `shutdown` fires. A
/// transport that cannot bind is logged and skipped; the other keeps serving.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsMessageHandler,
    timeouts: ListenerTimeouts,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, "Starting DNS server");

    let mut join_set: JoinSet<()> = JoinSet::new();

    match create_udp_socket(domain, socket_addr) {
        Ok(socket) => {
            join_set.spawn(run_udp_listener(
                socket,
                handler.clone(),
                timeouts,
                shutdown.clone(),
            ));
        }
        Err(e) => error!(protocol = "udp", bind_address = %socket_addr, error = %e, "Failed to bind DNS listener"),
    }

    match create_tcp_listener(domain, socket_addr) {
        Ok(listener) => {
            join_set.spawn(run_tcp_listener(listener, handler, timeouts, shutdown));
        }
        Err(e) => error!(protocol = "tcp", bind_address = %socket_addr, error = %e, "Failed to bind DNS listener"),
    }

    if join_set.is_empty() {
        anyhow::bail!("no DNS listener could bind to {}", socket_addr);
    }

    while join_set.join_next().await.is_some() {}
    info!("DNS server stopped");
    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
