use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Multipart form upload with a single file part.
    Multipart {
        field: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// An outgoing request as seen by the interceptor chain.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Body,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: Body::Empty,
        }
    }

    pub fn json(method: Method, path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            body: Body::Json(body),
            ..Self::new(method, path)
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// An inbound response as seen by the interceptor chain and the caller.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: serde_json::Value,
}

impl Response {
    pub fn ok(body: serde_json::Value) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// User-facing message for a failed response: the payload `message`
    /// field when present, a generic fallback otherwise.
    pub fn error_message(&self) -> String {
        self.body
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Request failed".to_string())
    }

    /// Interpret the body as the standard `{code, message, data}` envelope.
    pub fn envelope(&self) -> ClientResult<ApiEnvelope> {
        serde_json::from_value(self.body.clone()).map_err(ClientError::from)
    }
}

/// Standard response envelope used by the backend. A `code` of 200 signals
/// success; any other value carries a user-visible failure message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}
