//! Minimal in-process stand-in for the classification service.

use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Mutex},
    thread,
};

pub const API_PATH: &str = "/api/v1/perceptron";

/// One request as seen by the fake service.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves the status, records, query and metadata routes until the test exits.
pub struct FakeService {
    pub port: u16,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeService {
    /// `predicted_class` is returned for every query.
    pub fn start(predicted_class: u8) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake service");
        let port = listener.local_addr().expect("local addr").port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                let request = read_request(&mut stream);
                let response = route(&request, predicted_class);
                recorded
                    .lock()
                    .unwrap_or_else(|err| err.into_inner())
                    .push(request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self { port, requests }
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}

fn route(request: &RecordedRequest, predicted_class: u8) -> String {
    let path = request.path.trim_end_matches('/');
    match (request.method.as_str(), path.strip_prefix(API_PATH)) {
        ("GET", Some("")) => json(200, "OK", r#"{"status":"OK"}"#.to_string()),
        ("GET", Some("/metadata")) => json(
            200,
            "OK",
            r#"{"status":"OK","records":[{"network_id":"breast_cancer_sample_network","saved_data":"a"},{"network_id":"wide_network","saved_data":"b"}]}"#
                .to_string(),
        ),
        ("POST", Some("/records/random")) => {
            let max = serde_json::from_str::<serde_json::Value>(&request.body)
                .ok()
                .and_then(|value| value.get("max").and_then(|max| max.as_u64()))
                .unwrap_or(0);
            json(200, "OK", records_body(max as usize))
        }
        ("POST", Some("/query")) => json(
            200,
            "OK",
            format!(
                r#"{{"status":"OK","identified_class":{predicted_class},"raw_network_output":[[0.21,0.83]]}}"#
            ),
        ),
        _ => json(404, "Not Found", r#"{"status":"404_NOT_FOUND"}"#.to_string()),
    }
}

/// Records alternate benign / malignant; feature `k` of record `i` is `i + k`.
fn records_body(count: usize) -> String {
    let records: Vec<serde_json::Value> = (0..count)
        .map(|index| {
            let mut record = serde_json::Map::new();
            for feature in 0..9 {
                record.insert(
                    feature.to_string(),
                    serde_json::Value::String((index + feature).to_string()),
                );
            }
            record.insert(
                "target_class".into(),
                serde_json::Value::String((index % 2).to_string()),
            );
            record.insert(
                "record_id".into(),
                serde_json::Value::String(format!("BC_Sample_Test_{index}")),
            );
            serde_json::Value::Object(record)
        })
        .collect();
    serde_json::json!({
        "status": "OK",
        "filter": {"training_record": "False"},
        "records": records,
    })
    .to_string()
}

fn json(code: u16, reason: &str, body: String) -> String {
    format!(
        "HTTP/1.1 {code} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut bytes = Vec::new();
    let mut buf = [0u8; 4096];
    let mut header_end = None;
    let mut body_len = 0;
    loop {
        let read = stream.read(&mut buf).unwrap_or(0);
        if read == 0 {
            break;
        }
        bytes.extend_from_slice(&buf[..read]);
        if header_end.is_none() {
            let text = String::from_utf8_lossy(&bytes);
            if let Some(end) = text.find("\r\n\r\n") {
                header_end = Some(end);
                body_len = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
            }
        }
        if let Some(end) = header_end {
            if bytes.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    let text = String::from_utf8_lossy(&bytes).to_string();
    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    RecordedRequest {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: body.to_string(),
    }
}
