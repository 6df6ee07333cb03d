use crate::error::{ClientError, ClientResult};
use crate::transport::interceptor::{RequestInterceptor, ResponseInterceptor};
use crate::transport::types::{Body, Method, Request, Response};
use async_trait::async_trait;
use std::sync::Arc;

/// Upload endpoint consumed by the rich-text component.
pub const UPLOAD_PATH: &str = "/open/upload";

/// Seam between the client and whatever actually moves bytes. The only
/// implementation in this crate is the mock transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> ClientResult<Response>;
}

/// Front door for all backend calls. Runs the request interceptors, hands
/// the request to the transport, runs the response interceptors, then
/// converts failure statuses into [`ClientError::Api`].
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Execute a request through the interceptor chain. Interceptors see
    /// every response, including failures; the caller only sees successes.
    pub async fn execute(&self, mut request: Request) -> ClientResult<Response> {
        for interceptor in &self.request_interceptors {
            interceptor.before_request(&mut request);
        }

        let response = self.transport.execute(request).await?;

        for interceptor in &self.response_interceptors {
            interceptor.after_response(&response);
        }

        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Api {
                status: response.status,
                message: response.error_message(),
            })
        }
    }

    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        self.execute(Request::new(Method::Get, path)).await
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> ClientResult<Response> {
        self.execute(Request::json(Method::Post, path, body)).await
    }

    /// Upload a file to `/open/upload` (multipart field `file`) and return
    /// the URL the backend assigned to it. An envelope code other than 200
    /// is a user-visible failure.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        let request = Request {
            method: Method::Post,
            path: UPLOAD_PATH.to_string(),
            headers: Default::default(),
            body: Body::Multipart {
                field: "file".to_string(),
                file_name: file_name.to_string(),
                bytes,
            },
        };

        let response = self.execute(request).await?;
        let envelope = response.envelope()?;
        if envelope.is_success() {
            envelope
                .data
                .get("url")
                .and_then(|u| u.as_str())
                .map(str::to_string)
                .ok_or_else(|| ClientError::Upload("upload response missing url".to_string()))
        } else {
            let message = if envelope.message.is_empty() {
                "Request failed".to_string()
            } else {
                envelope.message
            };
            Err(ClientError::Upload(message))
        }
    }
}
