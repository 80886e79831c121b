mod helpers;

use dyndns_infrastructure::dns::{run_tcp_listener, run_udp_listener, ListenerTimeouts};
use helpers::{create_test_pool, query_message, DnsHarness};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RecordType;
use hickory_proto::serialize::binary::BinEncodable;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

const WAIT: Duration = Duration::from_secs(5);

fn timeouts() -> ListenerTimeouts {
    ListenerTimeouts::from_millis(2_000, 2_000)
}

#[tokio::test]
async fn test_udp_round_trip() {
    let dns = DnsHarness::new(create_test_pool().await);
    dns.add_host("www", "example.com", Some("198.51.100.10"), 60)
        .await;

    let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let server_addr = server.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(run_udp_listener(
        server,
        dns.handler.clone(),
        timeouts(),
        shutdown.clone(),
    ));

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let request = query_message(77, "www.example.com.", RecordType::A);
    client
        .send_to(&request.to_bytes().unwrap(), server_addr)
        .await
        .unwrap();

    let mut buf = vec![0u8; 4096];
    let (n, _) = timeout(WAIT, client.recv_from(&mut buf))
        .await
        .unwrap()
        .unwrap();
    let response = Message::from_vec(&buf[..n]).unwrap();

    assert_eq!(response.id(), 77);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);

    shutdown.cancel();
    timeout(WAIT, task).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_tcp_serves_several_messages_per_connection() {
    let dns = DnsHarness::new(create_test_pool().await);
    dns.add_host("www", "example.com", Some("198.51.100.10"), 60)
        .await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server_addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(run_tcp_listener(
        listener,
        dns.handler.clone(),
        timeouts(),
        shutdown.clone(),
    ));

    let mut stream = TcpStream::connect(server_addr).await.unwrap();

    for (id, name, expected) in [
        (1u16, "www.example.com.", ResponseCode::NoError),
        (2u16, "ghost.example.com.", ResponseCode::NXDomain),
        (3u16, "www.example.net.", ResponseCode::Refused),
    ] {
        let request = query_message(id, name, RecordType::A).to_bytes().unwrap();
        let mut frame = (request.len() as u16).to_be_bytes().to_vec();
        frame.extend_from_slice(&request);
        stream.write_all(&frame).await.unwrap();

        let mut len_buf = [0u8; 2];
        timeout(WAIT, stream.read_exact(&mut len_buf))
            .await
            .unwrap()
            .unwrap();
        let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream.read_exact(&mut body).await.unwrap();

        let response = Message::from_vec(&body).unwrap();
        assert_eq!(response.id(), id);
        assert_eq!(response.response_code(), expected);
    }

    shutdown.cancel();
    timeout(WAIT, task).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_tcp_closes_connection_on_garbage() {
    let dns = DnsHarness::new(create_test_pool().await);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server_addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(run_tcp_listener(
        listener,
        dns.handler.clone(),
        timeouts(),
        shutdown.clone(),
    ));

    let mut stream = TcpStream::connect(server_addr).await.unwrap();
    stream.write_all(&[0, 2, 0xde, 0xad]).await.unwrap();

    let mut buf = [0u8; 16];
    let n = timeout(WAIT, stream.read(&mut buf)).await.unwrap().unwrap_or(0);
    assert_eq!(n, 0);

    shutdown.cancel();
    timeout(WAIT, task).await.unwrap().unwrap();
}
