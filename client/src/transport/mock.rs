//! Timer-delayed mock transport.
//!
//! Stands in for the real HTTP stack: responses come from a registered
//! route table after a configurable latency, modeling fire-and-forget
//! request semantics without real I/O. Unregistered routes resolve to the
//! standard success envelope.

use crate::error::ClientResult;
use crate::transport::client::HttpTransport;
use crate::transport::types::{Method, Request, Response};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

pub struct MockTransport {
    latency: Duration,
    routes: RwLock<HashMap<(Method, String), Response>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            routes: RwLock::new(HashMap::new()),
        }
    }

    /// Register a canned response for a method/path pair.
    pub fn route(&self, method: Method, path: impl Into<String>, response: Response) {
        if let Ok(mut routes) = self.routes.write() {
            routes.insert((method, path.into()), response);
        }
    }

    fn default_response() -> Response {
        Response::ok(json!({"code": 200, "message": "OK", "data": {}}))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: Request) -> ClientResult<Response> {
        log::debug!("mock transport: {} {}", request.method, request.path);
        tokio::time::sleep(self.latency).await;

        let response = match self.routes.read() {
            Ok(routes) => routes
                .get(&(request.method, request.path.clone()))
                .cloned()
                .unwrap_or_else(Self::default_response),
            Err(_) => {
                log::warn!("mock route table lock poisoned, answering with default");
                Self::default_response()
            }
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[tokio::test(start_paused = true)]
    async fn unregistered_route_answers_default_envelope() {
        let transport = MockTransport::new();
        let response = assert_ok!(
            transport
                .execute(Request::new(Method::Get, "/api/anything"))
                .await
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["code"], 200);
    }

    #[tokio::test(start_paused = true)]
    async fn registered_route_wins() {
        let transport = MockTransport::new();
        transport.route(
            Method::Post,
            "/api/login",
            Response::with_status(401, json!({"message": "bad credentials"})),
        );

        let response = assert_ok!(
            transport
                .execute(Request::new(Method::Post, "/api/login"))
                .await
        );
        assert_eq!(response.status, 401);

        // Same path, different method still hits the default.
        let response = assert_ok!(
            transport
                .execute(Request::new(Method::Get, "/api/login"))
                .await
        );
        assert_eq!(response.status, 200);
    }

    #[tokio::test(start_paused = true)]
    async fn completion_is_delayed_by_latency() {
        let transport = MockTransport::with_latency(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        assert_ok!(
            transport
                .execute(Request::new(Method::Get, "/api/slow"))
                .await
        );
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
