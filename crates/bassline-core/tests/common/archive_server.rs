//! Minimal HTTP/1.1 server for provisioner tests.
//!
//! GET-only: serves fixed bodies keyed by the request path's file name and
//! answers 404 for anything else. Counts accepted connections so tests can
//! assert that a run made zero network requests.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct ArchiveServer {
    base_url: String,
    requests: Arc<AtomicUsize>,
}

impl ArchiveServer {
    /// Base URL ending in `/`, usable as a manifest url_prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of connections accepted so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `bodies` (archive name ->
/// zip bytes). The server runs until the process exits.
pub fn start(bodies: HashMap<String, Vec<u8>>) -> ArchiveServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let bodies = Arc::new(bodies);
    let requests = Arc::new(AtomicUsize::new(0));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            requests_srv.fetch_add(1, Ordering::SeqCst);
            let bodies = Arc::clone(&bodies);
            thread::spawn(move || handle(stream, &bodies));
        }
    });
    ArchiveServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, bodies: &HashMap<String, Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    // "GET /bass24.zip HTTP/1.1" -> "bass24.zip"
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let name = path.trim_start_matches('/');

    match bodies.get(name) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}
