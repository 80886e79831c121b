//! UDP and TCP accept loops. Each inbound datagram and each TCP connection is
//! served on its own task; both loops stop when the token is cancelled.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::handler::DnsMessageHandler;

pub const UDP_BUFFER_SIZE: usize = 65_535;

#[derive(Debug, Clone, Copy)]
pub struct ListenerTimeouts {
    pub read: Duration,
    pub write: Duration,
}

impl ListenerTimeouts {
    pub fn from_millis(read_ms: u64, write_ms: u64) -> Self {
        Self {
            read: Duration::from_millis(read_ms),
            write: Duration::from_millis(write_ms),
        }
    }
}

pub async fn run_udp_listener(
    socket: UdpSocket,
    handler: DnsMessageHandler,
    timeouts: ListenerTimeouts,
    shutdown: CancellationToken,
) {
    let socket = Arc::new(socket);
    let local = socket.local_addr().ok();
    info!(protocol = "udp", address = ?local, "DNS listener started");

    let mut recv_buf = vec![0u8; UDP_BUFFER_SIZE];

    loop {
        let (n, peer) = tokio::select! {
            _ = shutdown.cancelled() => break,
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) if is_transient(&e) => continue,
                Err(e) => {
                    error!(protocol = "udp", error = %e, "UDP receive failed");
                    continue;
                }
            },
        };

        let datagram = recv_buf[..n].to_vec();
        let socket = Arc::clone(&socket);
        let handler = handler.clone();

        tokio::spawn(async move {
            let Some(response) = handler.handle(&datagram, peer).await else {
                return;
            };
            match timeout(timeouts.write, socket.send_to(&response, peer)).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => warn!(protocol = "udp", %peer, error = %e, "Failed to send response"),
                Err(_) => warn!(protocol = "udp", %peer, "Timed out sending response"),
            }
        });
    }

    info!(protocol = "udp", address = ?local, "DNS listener stopped");
}

pub async fn run_tcp_listener(
    listener: TcpListener,
    handler: DnsMessageHandler,
    timeouts: ListenerTimeouts,
    shutdown: CancellationToken,
) {
    let local = listener.local_addr().ok();
    info!(protocol = "tcp", address = ?local, "DNS listener started");

    loop {
        let (stream, peer) = tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(protocol = "tcp", error = %e, "TCP accept failed");
                    continue;
                }
            },
        };

        let handler = handler.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                result = serve_tcp_connection(stream, peer, &handler, timeouts) => {
                    if let Err(e) = result {
                        debug!(protocol = "tcp", %peer, error = %e, "Connection closed");
                    }
                }
            }
        });
    }

    info!(protocol = "tcp", address = ?local, "DNS listener stopped");
}

/// Serves length-prefixed messages until the peer closes the connection,
/// a read or write times out, or a message cannot be decoded.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: &DnsMessageHandler,
    timeouts: ListenerTimeouts,
) -> io::Result<()> {
    loop {
        let mut len_buf = [0u8; 2];
        match timeout(timeouts.read, stream.read_exact(&mut len_buf)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(io::Error::new(io::ErrorKind::TimedOut, "read timed out")),
        }

        let len = u16::from_be_bytes(len_buf) as usize;
        let mut message = vec![0u8; len];
        match timeout(timeouts.read, stream.read_exact(&mut message)).await {
            Ok(result) => {
                result?;
            }
            Err(_) => return Err(io::Error::new(io::ErrorKind::TimedOut, "read timed out")),
        }

        let Some(response) = handler.handle(&message, peer).await else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "undecodable DNS message",
            ));
        };

        let Ok(response_len) = u16::try_from(response.len()) else {
            warn!(protocol = "tcp", %peer, size = response.len(), "Response exceeds TCP frame size");
            return Ok(());
        };

        let mut frame = Vec::with_capacity(response.len() + 2);
        frame.extend_from_slice(&response_len.to_be_bytes());
        frame.extend_from_slice(&response);

        match timeout(timeouts.write, stream.write_all(&frame)).await {
            Ok(result) => result?,
            Err(_) => return Err(io::Error::new(io::ErrorKind::TimedOut, "write timed out")),
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::ConnectionReset
    )
}
