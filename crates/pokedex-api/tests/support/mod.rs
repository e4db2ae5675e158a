#![allow(dead_code)]

use pokedex_api::{ApiError, HttpResponse, Transport};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const BASE: &str = "http://api.test/v2";

enum Reply {
    Respond(u16, String),
    Unreachable,
}

struct Route {
    reply: Reply,
    delay: Duration,
}

/// In-memory transport with canned replies, injected latency and a request log
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, Route>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.routes.insert(
            url.into(),
            Route {
                reply: Reply::Respond(status, body.into()),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn unreachable(mut self, url: impl Into<String>) -> Self {
        self.routes.insert(
            url.into(),
            Route {
                reply: Reply::Unreachable,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn delay(mut self, url: &str, delay: Duration) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.delay = delay;
        }
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let result = match self.routes.get(url) {
            Some(route) => {
                std::thread::sleep(route.delay);
                match &route.reply {
                    Reply::Respond(status, body) => Ok(HttpResponse {
                        status: *status,
                        body: body.clone().into_bytes(),
                    }),
                    Reply::Unreachable => Err(ApiError::network(
                        url,
                        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
                    )),
                }
            }
            None => Ok(HttpResponse {
                status: 404,
                body: b"Not Found".to_vec(),
            }),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

pub fn detail_url(id: u32) -> String {
    format!("{BASE}/pokemon/{id}/")
}

pub fn name_url(name: &str) -> String {
    format!("{BASE}/pokemon/{name}")
}

pub fn index_url(limit: usize) -> String {
    format!("{BASE}/pokemon?limit={limit}")
}

pub fn index_body(entries: &[(u32, &str)]) -> String {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, name)| serde_json::json!({ "name": name, "url": detail_url(*id) }))
        .collect();
    serde_json::json!({ "count": entries.len(), "next": null, "results": results }).to_string()
}

pub fn record_body(id: u32, name: &str, types: &[&str]) -> String {
    let types: Vec<serde_json::Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| serde_json::json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!("https://img.test/{id}.png"),
            "back_default": format!("https://img.test/back/{id}.png"),
        },
        "types": types,
        "abilities": [{ "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 }],
    })
    .to_string()
}
