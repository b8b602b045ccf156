//! In-process mock server for API tests. Presents an httpmock-style
//! `mock(|when, then| ...)` surface but answers from inside the client's send
//! path, so no socket is opened and tests stay deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde_json::Value;

use crate::api::client::mock::{register_mock, MockResponse, TestResponder};
use crate::api::types::ApiError;

pub struct MockServer {
    base_url: String,
    routes: Arc<Mutex<Vec<Route>>>,
}

struct Route {
    method: Method,
    path: String,
    status: u16,
    body: Value,
    hits: Arc<AtomicUsize>,
}

#[derive(Default)]
pub struct When {
    method: Option<Method>,
    path: Option<String>,
}

impl When {
    pub fn method(&mut self, method: Method) -> &mut Self {
        self.method = Some(method);
        self
    }

    pub fn path(&mut self, path: &str) -> &mut Self {
        self.path = Some(path.to_string());
        self
    }
}

pub struct Then {
    status: u16,
    body: Value,
}

impl Default for Then {
    fn default() -> Self {
        Self {
            status: 200,
            body: Value::Null,
        }
    }
}

impl Then {
    pub fn status(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    pub fn json_body(&mut self, body: Value) -> &mut Self {
        self.body = body;
        self
    }
}

pub struct MockHandle {
    hits: Arc<AtomicUsize>,
}

impl MockHandle {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn assert_hits(&self, expected: usize) {
        assert_eq!(self.hits(), expected, "unexpected mock hit count");
    }
}

impl MockServer {
    /// Each server gets a unique unroutable base URL, so servers from
    /// concurrent tests never answer each other's requests.
    pub fn start() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let base_url = format!("http://mock-{}.invalid", id);
        let routes: Arc<Mutex<Vec<Route>>> = Arc::new(Mutex::new(Vec::new()));
        register_mock(
            &base_url,
            Arc::new(Router {
                routes: Arc::clone(&routes),
            }),
        );
        Self { base_url, routes }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mock(&self, configure: impl FnOnce(&mut When, &mut Then)) -> MockHandle {
        let mut when = When::default();
        let mut then = Then::default();
        configure(&mut when, &mut then);
        let hits = Arc::new(AtomicUsize::new(0));
        self.routes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Route {
                method: when.method.unwrap_or(Method::GET),
                path: when.path.expect("mock route needs a path"),
                status: then.status,
                body: then.body,
                hits: Arc::clone(&hits),
            });
        MockHandle { hits }
    }
}

struct Router {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl TestResponder for Router {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
        let path = request.url().path();
        let routes = self.routes.lock().unwrap_or_else(|e| e.into_inner());
        for route in routes.iter() {
            if route.method == *request.method() && route.path == path {
                route.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(MockResponse {
                    status: route.status,
                    body: route.body.clone(),
                });
            }
        }
        Err(ApiError::request_failed(format!(
            "no mock registered for {} {}",
            request.method(),
            path
        )))
    }
}
