//! End-to-end tests over a real TCP connection.
//!
//! Each test binds its own server on an ephemeral port, writes a raw
//! HTTP/1.1 request, and asserts on the status line and body. Requests
//! carry `connection: close` so the response ends when the socket does.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use ekko::{Config, Router, Server, handlers};

async fn start() -> SocketAddr {
    let config = Config::new("127.0.0.1:0".parse().unwrap());
    let server = Server::bind(config).await.expect("bind");
    let addr = server.local_addr();

    let router = Router::new(handlers::deny).on("/sms", handlers::echo);
    tokio::spawn(server.serve(router));

    addr
}

async fn exchange(addr: SocketAddr, raw: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(raw.as_bytes()).await.expect("write");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read");
    let response = String::from_utf8_lossy(&response).into_owned();

    let status = response
        .split_whitespace()
        .nth(1)
        .expect("status line")
        .parse()
        .expect("status code");
    let body = response
        .split_once("\r\n\r\n")
        .map(|(_, body)| body.to_owned())
        .unwrap_or_default();

    (status, body)
}

#[tokio::test]
async fn echo_reports_request_line_and_last_duplicate_param() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "GET /sms?name=Bob&name=Alice HTTP/1.1\r\n\
         host: localhost\r\n\
         connection: close\r\n\r\n",
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("GET /sms?name=Bob&name=Alice HTTP/1.1\n"));
    // parameter lines end in a newline; the request line echo does not
    assert!(body.contains("name=Alice\n"));
    assert!(!body.contains("name=Bob\n"));
}

#[tokio::test]
async fn echo_accepts_any_method() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "DELETE /sms HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("DELETE /sms HTTP/1.1\n"));
}

#[tokio::test]
async fn dump_is_wrapped_in_html_envelope() {
    let addr = start().await;
    let (_, body) = exchange(
        addr,
        "GET /sms HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;

    assert!(body.starts_with("<html><body><b>Request</b><br/><pre>"));
    assert!(body.ends_with("</pre></body></html>"));
}

#[tokio::test]
async fn headers_render_sorted_by_name() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "GET /sms HTTP/1.1\r\n\
         host: localhost\r\n\
         zz-probe: 1\r\n\
         aa-probe: 2\r\n\
         connection: close\r\n\r\n",
    )
    .await;

    assert_eq!(status, 200);
    let aa = body.find("aa-probe: 2").expect("aa-probe line");
    let host = body.find("host: localhost").expect("host line");
    let zz = body.find("zz-probe: 1").expect("zz-probe line");
    assert!(aa < host && host < zz);
}

#[tokio::test]
async fn duplicate_header_values_concatenate_without_separator() {
    let addr = start().await;
    let (_, body) = exchange(
        addr,
        "GET /sms HTTP/1.1\r\n\
         host: localhost\r\n\
         x-tag: left\r\n\
         x-tag: right\r\n\
         connection: close\r\n\r\n",
    )
    .await;

    assert!(body.contains("x-tag: leftright\n"));
}

#[tokio::test]
async fn body_skipped_without_content_type() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "POST /sms HTTP/1.1\r\n\
         host: localhost\r\n\
         content-length: 6\r\n\
         connection: close\r\n\r\n\
         hidden",
    )
    .await;

    assert_eq!(status, 200);
    assert!(!body.contains("hidden"));
}

#[tokio::test]
async fn body_included_with_content_type() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "POST /sms HTTP/1.1\r\n\
         host: localhost\r\n\
         content-type: text/plain\r\n\
         content-length: 3\r\n\
         connection: close\r\n\r\n\
         a=1",
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("a=1\n\n"));
}

#[tokio::test]
async fn content_type_trigger_is_case_insensitive() {
    let addr = start().await;
    let (_, body) = exchange(
        addr,
        "POST /sms HTTP/1.1\r\n\
         host: localhost\r\n\
         Content-Type: text/plain\r\n\
         content-length: 7\r\n\
         connection: close\r\n\r\n\
         visible",
    )
    .await;

    assert!(body.contains("visible\n\n"));
}

#[tokio::test]
async fn catch_all_denies_root() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "GET / HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;

    assert_eq!(status, 403);
    assert_eq!(body, "Not found");
}

#[tokio::test]
async fn catch_all_denies_any_method_and_path() {
    let addr = start().await;
    let (status, body) = exchange(
        addr,
        "PUT /anything-else HTTP/1.1\r\n\
         host: localhost\r\n\
         content-type: text/plain\r\n\
         content-length: 4\r\n\
         connection: close\r\n\r\n\
         data",
    )
    .await;

    assert_eq!(status, 403);
    assert_eq!(body, "Not found");
}
