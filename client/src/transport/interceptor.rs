//! Cross-cutting request/response hooks.
//!
//! These are not business logic: the transport invokes every registered
//! hook for every call. The auth interceptor attaches the bearer token
//! synchronously before dispatch; the status interceptor reacts to
//! authorization statuses after completion. Navigation and user notices go
//! through trait seams so the hooks stay decoupled from any UI framework.

use crate::session::SessionStore;
use crate::transport::types::{Request, Response};
use std::sync::Arc;

pub trait RequestInterceptor: Send + Sync {
    fn before_request(&self, request: &mut Request);
}

pub trait ResponseInterceptor: Send + Sync {
    fn after_response(&self, response: &Response);
}

/// Seam for page navigation (the 401 redirect).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Seam for user-visible notices (403 and transport failures).
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Default navigator: records the intent in the log.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        log::info!("navigating to {route}");
    }
}

/// Default notifier: routes notices to the error log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
pub struct AuthInterceptor {
    session: SessionStore,
}

impl AuthInterceptor {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn before_request(&self, request: &mut Request) {
        if let Some(token) = self.session.token() {
            request
                .headers
                .insert("Authorization".to_string(), format!("Bearer {token}"));
        }
    }
}

/// Reacts to authorization statuses:
///
/// - 401 tears the session down and navigates to the login route;
/// - 403 raises an advisory "insufficient permission" notice, no state change;
/// - any other failure status raises a notice derived from the payload.
pub struct StatusInterceptor {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    login_route: String,
}

impl StatusInterceptor {
    pub fn new(
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            login_route: login_route.into(),
        }
    }
}

impl ResponseInterceptor for StatusInterceptor {
    fn after_response(&self, response: &Response) {
        match response.status {
            401 => {
                log::warn!("unauthorized response, clearing session");
                self.session.clear();
                self.navigator.navigate(&self.login_route);
            }
            403 => self.notifier.error("Insufficient permission"),
            _ if !response.is_success() => self.notifier.error(&response.error_message()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::storage::LocalStore;
    use crate::transport::types::Method;
    use serde_json::json;
    use std::sync::Mutex;

    pub(crate) struct Recorder {
        pub routes: Mutex<Vec<String>>,
        pub notices: Mutex<Vec<String>>,
    }

    impl Recorder {
        pub fn new() -> Arc<Self> {
            Arc::new(Self {
                routes: Mutex::new(Vec::new()),
                notices: Mutex::new(Vec::new()),
            })
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, route: &str) {
            self.routes.lock().unwrap().push(route.to_string());
        }
    }

    impl Notifier for Recorder {
        fn error(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn bearer_token_is_attached_only_when_present() {
        let session = SessionStore::new(LocalStore::in_memory());
        let interceptor = AuthInterceptor::new(session.clone());

        let mut request = Request::new(Method::Get, "/api/overview");
        interceptor.before_request(&mut request);
        assert!(!request.headers.contains_key("Authorization"));

        session.set_token("tok-42");
        let mut request = Request::new(Method::Get, "/api/overview");
        interceptor.before_request(&mut request);
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-42")
        );
    }

    #[test]
    fn unauthorized_clears_session_and_redirects() {
        let session = SessionStore::new(LocalStore::in_memory());
        session.set_token("tok-42");
        let recorder = Recorder::new();
        let interceptor = StatusInterceptor::new(
            session.clone(),
            recorder.clone(),
            recorder.clone(),
            "/login",
        );

        interceptor.after_response(&Response::with_status(401, json!({})));

        assert!(!session.is_logged_in());
        assert_eq!(*recorder.routes.lock().unwrap(), vec!["/login".to_string()]);
    }

    #[test]
    fn forbidden_is_advisory_only() {
        let session = SessionStore::new(LocalStore::in_memory());
        session.set_token("tok-42");
        let recorder = Recorder::new();
        let interceptor = StatusInterceptor::new(
            session.clone(),
            recorder.clone(),
            recorder.clone(),
            "/login",
        );

        interceptor.after_response(&Response::with_status(403, json!({})));

        // No teardown, no redirect, just the notice.
        assert!(session.is_logged_in());
        assert!(recorder.routes.lock().unwrap().is_empty());
        assert_eq!(
            *recorder.notices.lock().unwrap(),
            vec!["Insufficient permission".to_string()]
        );
    }

    #[test]
    fn other_failures_surface_payload_message() {
        let session = SessionStore::new(LocalStore::in_memory());
        let recorder = Recorder::new();
        let interceptor = StatusInterceptor::new(
            session,
            recorder.clone(),
            recorder.clone(),
            "/login",
        );

        interceptor.after_response(&Response::with_status(500, json!({"message": "boom"})));
        interceptor.after_response(&Response::with_status(502, json!({})));

        assert_eq!(
            *recorder.notices.lock().unwrap(),
            vec!["boom".to_string(), "Request failed".to_string()]
        );
    }
}
