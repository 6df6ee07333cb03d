//! HTTP transport layer.
//!
//! The console talks to its backend through [`ApiClient`], which runs a
//! chain of request interceptors (token attachment), hands the request to a
//! pluggable [`HttpTransport`], then runs the response interceptors
//! (401/403 handling, failure notices). The only transport shipped here is
//! [`MockTransport`], which resolves from a static route table after a
//! timer delay; real I/O is out of scope by design.
//!
//! Requests run to completion or are ignored by the caller; there is no
//! cancellation and no retry anywhere in this layer.

pub mod client;
pub mod interceptor;
pub mod mock;
pub mod types;

pub use client::{ApiClient, HttpTransport, UPLOAD_PATH};
pub use interceptor::{
    AuthInterceptor, LogNavigator, LogNotifier, Navigator, Notifier, RequestInterceptor,
    ResponseInterceptor, StatusInterceptor,
};
pub use mock::MockTransport;
pub use types::{ApiEnvelope, Body, Method, Request, Response};
