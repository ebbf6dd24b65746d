//! Minimal HTTP/1.1 server that answers POSTs with a canned response for integration tests.
//!
//! Records every request (head plus body) so tests can assert on what the
//! client sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request line and header lines, as sent.
    pub head: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }

    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// Handle to a running server.
pub struct ChatServer {
    /// Base URL to use as `api_base`, e.g. "http://127.0.0.1:12345/v1".
    pub api_base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ChatServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server that answers every request with `status` and `body`.
/// The server runs until the process exits.
pub fn start(status: &'static str, body: String) -> ChatServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, status, &body, &recorded));
        }
    });
    ChatServer {
        api_base: format!("http://127.0.0.1:{}/v1", port),
        requests,
    }
}

/// Starts a server replying 200 with a chat completion whose content is `content`.
pub fn start_completion(content: &str) -> ChatServer {
    let body = serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    });
    start("200 OK", body.to_string())
}

fn handle(
    mut stream: std::net::TcpStream,
    status: &str,
    body: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(5)));

    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    let head_end = loop {
        if let Some(pos) = find_head_end(&data) {
            break pos;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).into_owned();
    let content_length = content_length(&head);
    let mut req_body = data[head_end + 4..].to_vec();
    while req_body.len() < content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => req_body.extend_from_slice(&buf[..n]),
        }
    }

    recorded.lock().unwrap().push(RecordedRequest {
        head,
        body: req_body,
    });

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn find_head_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0)
}
