//! Minimal HTTP/1.1 server that plays a project-generator service for
//! integration tests.
//!
//! Serves a single zip body on `/starter.zip` and 404 for everything else.
//! Counts the generate requests it answered so tests can assert that no
//! fetch happened.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const GENERATE_PATH: &str = "/starter.zip";

#[derive(Debug, Clone, Copy)]
pub struct StarterServerOptions {
    /// Status returned on the generate path; 200 serves the body.
    pub generate_status: u16,
}

impl Default for StarterServerOptions {
    fn default() -> Self {
        Self {
            generate_status: 200,
        }
    }
}

pub struct StarterServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StarterServer {
    /// URL the generator page would issue for `name`, extra parameters
    /// included for realism.
    pub fn generate_url(&self, name: &str) -> String {
        format!(
            "{}{}?type=maven-project&name={}",
            self.base_url, GENERATE_PATH, name
        )
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// Number of requests answered on the generate path.
    pub fn generate_hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` on the generate
/// path. The server runs until the process exits.
pub fn start(body: Vec<u8>) -> StarterServer {
    start_with_options(body, StarterServerOptions::default())
}

/// Like `start` but allows failing the generate path with a custom status.
pub fn start_with_options(body: Vec<u8>, opts: StarterServerOptions) -> StarterServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &body, &hits, opts));
        }
    });
    StarterServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, body: &[u8], hits: &AtomicUsize, opts: StarterServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, target) = parse_request_line(request);
    let path = target.split('?').next().unwrap_or("");

    if !method.eq_ignore_ascii_case("GET") {
        write_status(&mut stream, 405, "Method Not Allowed");
        return;
    }
    if path != GENERATE_PATH {
        write_status(&mut stream, 404, "Not Found");
        return;
    }

    hits.fetch_add(1, Ordering::SeqCst);
    if opts.generate_status != 200 {
        write_status(&mut stream, opts.generate_status, "Error");
        return;
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn write_status(stream: &mut TcpStream, code: u16, reason: &str) {
    let response = format!("HTTP/1.1 {} {}\r\nContent-Length: 0\r\n\r\n", code, reason);
    let _ = stream.write_all(response.as_bytes());
}

/// Returns (method, request-target) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let first = request.lines().next().unwrap_or("");
    let mut parts = first.split_whitespace();
    (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
}
