//! # PulseBoard Client Library
//!
//! Client-side plumbing for the PulseBoard data-analysis console. This
//! library owns everything below the presentation layer: the persisted
//! local store, session and role state, a typed event bus with synchronous
//! delivery, and a pluggable HTTP transport with request/response
//! interceptors backed by a timer-delayed mock.
//!
//! ## Modules
//!
//! - [`storage`] - Persisted client-local key-value store
//! - [`session`] - Session token, user profile and role predicates
//! - [`events`] - Typed publish/subscribe bus
//! - [`transport`] - Request/response model, interceptors and mock transport
//! - [`error`] - Error types shared across the client layer

pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use session::{Role, SessionStore, UserProfile};
pub use storage::LocalStore;
