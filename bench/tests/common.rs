use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Minimal single-purpose json-rpc endpoint: answers every POST with a fixed
/// `result` payload and counts the requests it served.
pub struct RpcFixture {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl RpcFixture {
    pub fn launch(result_hex: String) -> RpcFixture {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        {
            let hits = hits.clone();
            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    let hits = hits.clone();
                    let result_hex = result_hex.clone();
                    thread::spawn(move || handle(stream, hits, result_hex));
                }
            });
        }

        RpcFixture { addr, hits }
    }

    pub fn url(&self) -> url::Url {
        url::Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn handle(mut stream: TcpStream, hits: Arc<AtomicUsize>, result_hex: String) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let line = line.trim_end();
        if line.is_empty() {
            break;
        }

        let lower = line.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("content-length:") {
            content_length = rest.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }

    hits.fetch_add(1, Ordering::SeqCst);

    let body = format!(r#"{{"jsonrpc":"2.0","id":1,"result":"{}"}}"#, result_hex);
    let resp = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body,
    );
    let _ = stream.write_all(resp.as_bytes());
}

/// 160-byte `latestRoundData()` output with the given positive answer.
pub fn round_data_hex(answer: u128) -> String {
    let mut hex = String::with_capacity(2 + 5 * 64);
    hex.push_str("0x");

    for word in [1, answer, 0, 0, 1] {
        hex.push_str(&format!("{:064x}", word));
    }

    hex
}

/// Address of a port nothing listens on.
pub fn unreachable_url() -> url::Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    url::Url::parse(&format!("http://{}/", addr)).unwrap()
}
