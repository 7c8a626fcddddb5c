// tests/http_transport.rs
//
// The reqwest-backed transport against a throwaway local HTTP/1.0 server.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use deputes_scrape::config::options::FetchParams;
use deputes_scrape::core::net::{FetchOutcome, Fetcher, HttpTransport, Transport};
use deputes_scrape::error::FetchError;

/// Answers each connection with the next status in `statuses` (last one repeats).
/// Returns the base URL and a connection counter.
fn serve(statuses: Vec<u16>, body: &'static str) -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let count = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&count);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let n = seen.fetch_add(1, Ordering::SeqCst) as usize;
            let status = statuses[n.min(statuses.len() - 1)];

            // read the request head
            let mut buf = [0u8; 4096];
            let mut head = Vec::new();
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(k) => head.extend_from_slice(&buf[..k]),
                }
            }

            let resp = format!(
                "HTTP/1.0 {status} X\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}/dyn/deputes/PA1"), count)
}

fn params(max_attempts: u32) -> FetchParams {
    FetchParams { max_attempts, delay: Duration::ZERO, timeout: Duration::from_secs(5) }
}

#[test]
fn ok_response_returns_body() {
    let (url, _) = serve(vec![200], "<p>Bonjour</p>");
    let transport = HttpTransport::new().unwrap();
    assert_eq!(transport.get(&url, Duration::from_secs(5)).unwrap(), "<p>Bonjour</p>");
}

#[test]
fn server_error_is_a_status_failure() {
    let (url, _) = serve(vec![500], "boom");
    let transport = HttpTransport::new().unwrap();
    match transport.get(&url, Duration::from_secs(5)) {
        Err(FetchError::Status { status }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn fetcher_retries_over_http_until_success() {
    let (url, count) = serve(vec![503, 502, 200], "ok");
    let fetcher = Fetcher::new(HttpTransport::new().unwrap());
    assert_eq!(
        fetcher.fetch(&url, &params(3)),
        FetchOutcome::Success { body: "ok".into(), attempts: 3 }
    );
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn refused_connection_is_a_failed_outcome() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let fetcher = Fetcher::new(HttpTransport::new().unwrap());
    let out = fetcher.fetch(&format!("http://127.0.0.1:{port}/"), &params(2));
    assert_eq!(out, FetchOutcome::Failure { attempts: 2 });
}
