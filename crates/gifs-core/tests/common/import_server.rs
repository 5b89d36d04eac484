//! Minimal HTTP/1.1 server imitating the import endpoint for integration tests.
//!
//! Reads the JSON body of each POST and answers based on its `source`:
//! - `fail*`    → 503 with an `{"errors": {"message": ...}}` envelope
//! - `apperr*`  → 200 with `{"errors": "<source> rejected"}`
//! - `slow-N*`  → success after sleeping N milliseconds
//! - otherwise  → 200 success; `page` echoes the source and `embed` echoes
//!   the `Gifs-Api-Key` header (empty when absent).

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Handle to a running server; counts requests received.
pub struct ImportServer {
    pub url: String,
    requests: Arc<AtomicUsize>,
}

impl ImportServer {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start() -> ImportServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &counter));
        }
    });
    ImportServer {
        url: format!("http://127.0.0.1:{}/media/import", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, counter: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let Some((headers, body)) = read_request(&mut stream) else {
        return;
    };
    counter.fetch_add(1, Ordering::SeqCst);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
    let source = json["source"].as_str().unwrap_or_default().to_string();
    let api_key = header_value(&headers, "gifs-api-key").unwrap_or_default();

    if let Some(rest) = source.strip_prefix("slow-") {
        let ms: u64 = rest
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        thread::sleep(Duration::from_millis(ms));
    }

    let (status, payload) = if source.starts_with("fail") {
        (
            "503 Service Unavailable",
            serde_json::json!({ "errors": { "message": "try again later" } }),
        )
    } else if source.starts_with("apperr") {
        (
            "200 OK",
            serde_json::json!({ "errors": format!("{} rejected", source) }),
        )
    } else {
        (
            "200 OK",
            serde_json::json!({
                "success": {
                    "page": format!("https://gifs.com/gif/{}", source),
                    "embed": api_key,
                    "files": { "mp4": format!("https://j.gifs.com/{}.mp4", source) }
                },
                "errors": null
            }),
        )
    };
    let payload = payload.to_string();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads the request head and a `Content-Length` body. Returns the header
/// lines and the body bytes.
fn read_request(stream: &mut TcpStream) -> Option<(Vec<String>, Vec<u8>)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };
    let head = std::str::from_utf8(&buf[..head_end]).ok()?;
    let headers: Vec<String> = head.lines().skip(1).map(str::to_string).collect();
    let content_length: usize = header_value(&headers, "content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut body = buf[head_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    Some((headers, body))
}

fn header_value(headers: &[String], name: &str) -> Option<String> {
    headers.iter().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim()
            .eq_ignore_ascii_case(name)
            .then(|| v.trim().to_string())
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
