#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use epicor_user_sync::config::Config;

/// Basic auth header for `manager:secret`.
pub const BASIC_AUTH: &str = "Basic bWFuYWdlcjpzZWNyZXQ=";

/// A request as seen by the stub ERP.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Scripted answer for one request.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
struct State {
    connections: usize,
    requests: Vec<RecordedRequest>,
    replies: VecDeque<Reply>,
}

/// Minimal HTTP/1.1 server standing in for the ERP. Replies are served in
/// order; once they run out every request gets `200 {}`.
pub struct StubErp {
    address: String,
    state: Arc<Mutex<State>>,
}

impl StubErp {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("stub listener bound");
        let address = format!("http://{}", listener.local_addr().expect("local address"));
        let state = Arc::new(Mutex::new(State {
            replies: replies.into(),
            ..State::default()
        }));

        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                shared.lock().unwrap().connections += 1;
                serve(stream, &shared);
            }
        });

        Self { address, state }
    }

    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.address)
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url(),
            user_id: "manager".into(),
            password: "secret".into(),
            company_domain: "example.com".into(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn connections(&self) -> usize {
        self.state.lock().unwrap().connections
    }
}

fn serve(stream: TcpStream, state: &Arc<Mutex<State>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("stream cloned"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let length = headers
        .get("content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).expect("request body");

    let reply = {
        let mut state = state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method,
            path,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Reply::new(200, "{}"))
    };

    let mut response = format!("HTTP/1.1 {} Stub\r\nConnection: close\r\n", reply.status);
    if reply.status != 204 {
        response.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n",
            reply.body.len()
        ));
    }
    response.push_str("\r\n");
    if reply.status != 204 {
        response.push_str(&reply.body);
    }

    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
