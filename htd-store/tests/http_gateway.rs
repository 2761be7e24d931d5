//! HTTP gateway against a throwaway local server.
#![cfg(feature = "api")]

use htd_core::parser::parse_temperatures;
use htd_store::{GatewayConfig, HttpGateway, RecordStore, SubmissionGateway};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static FIXTURE: &str = include_str!("../../fixtures/temperatures.csv");

/// Serve exactly one request. With `status == 200` the request body is echoed.
async fn serve_once(status: u16) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        // Read headers, then as much body as Content-Length says.
        let (header_end, content_length) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };
        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let (reason, body) = if status == 200 {
            ("OK", buf[header_end..].to_vec())
        } else {
            ("Internal Server Error", b"{}".to_vec())
        };
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            reason,
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn echoes_dataset_through_http() {
    let base_url = serve_once(200).await;
    let gateway = HttpGateway::new(GatewayConfig::new(base_url));
    let dataset = parse_temperatures(FIXTURE).unwrap();

    let committed = gateway.submit(dataset.clone()).await.unwrap();
    assert_eq!(committed, dataset);
}

#[tokio::test]
async fn server_error_becomes_store_error() {
    let base_url = serve_once(500).await;
    let gateway = HttpGateway::new(GatewayConfig::new(base_url));
    let mut store = RecordStore::new();

    let dataset = parse_temperatures(FIXTURE).unwrap();
    let result = store.submit(&gateway, "temperatures.csv", dataset).await;

    assert!(result.is_err());
    assert_eq!(store.view().error, "Request failed with status code 500");
    assert_eq!(store.view().filename, "");
    assert!(!store.has_data());
}

#[tokio::test]
async fn unreachable_server_is_a_submission_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::new(GatewayConfig::new(format!("http://{}", addr)));
    let err = gateway.submit(vec![]).await.unwrap_err();
    assert!(!err.message().is_empty());
}
