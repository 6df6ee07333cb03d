//! End-to-end flow across the session store, interceptors and the mock
//! transport: login, authorized call, forced logout on 401.

use client::session::{Role, SessionStore, UserProfile};
use client::storage::LocalStore;
use client::transport::{
    ApiClient, AuthInterceptor, Method, MockTransport, Navigator, Notifier, Request,
    RequestInterceptor, Response, StatusInterceptor,
};
use claims::{assert_err, assert_ok};
use serde_json::json;
use std::sync::{Arc, Mutex};

struct Recorder {
    routes: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
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

struct HeaderProbe {
    auth_headers: Mutex<Vec<Option<String>>>,
}

impl RequestInterceptor for HeaderProbe {
    fn before_request(&self, request: &mut Request) {
        self.auth_headers
            .lock()
            .unwrap()
            .push(request.headers.get("Authorization").cloned());
    }
}

fn console_client(
    session: &SessionStore,
    transport: Arc<MockTransport>,
    recorder: Arc<Recorder>,
    probe: Arc<HeaderProbe>,
) -> ApiClient {
    ApiClient::new(transport)
        .with_request_interceptor(Arc::new(AuthInterceptor::new(session.clone())))
        .with_request_interceptor(probe)
        .with_response_interceptor(Arc::new(StatusInterceptor::new(
            session.clone(),
            recorder.clone(),
            recorder,
            "/login",
        )))
}

#[tokio::test(start_paused = true)]
async fn login_call_and_forced_logout() {
    let session = SessionStore::new(LocalStore::in_memory());
    let transport = Arc::new(MockTransport::new());
    let recorder = Recorder::new();
    let probe = Arc::new(HeaderProbe {
        auth_headers: Mutex::new(Vec::new()),
    });
    let client = console_client(&session, transport.clone(), recorder.clone(), probe.clone());

    // Anonymous call carries no bearer token.
    assert_ok!(client.get("/api/public").await);

    // Log in and call again; the token is attached synchronously.
    session.set_token("tok-99");
    session.set_user_profile(&UserProfile::new("anna", Role::Admin));
    assert_ok!(client.get("/api/overview").await);

    {
        let headers = probe.auth_headers.lock().unwrap();
        assert_eq!(headers[0], None);
        assert_eq!(headers[1].as_deref(), Some("Bearer tok-99"));
    }

    // Backend revokes the session: 401 tears everything down and
    // redirects to the login entry point.
    transport.route(
        Method::Get,
        "/api/overview",
        Response::with_status(401, json!({"message": "token expired"})),
    );
    assert_err!(client.get("/api/overview").await);

    assert!(!session.is_logged_in());
    assert!(session.user_profile().is_none());
    assert_eq!(*recorder.routes.lock().unwrap(), vec!["/login".to_string()]);

    // The call after teardown goes out anonymously again.
    assert_ok!(client.get("/api/public").await);
    let headers = probe.auth_headers.lock().unwrap();
    assert_eq!(headers.last().unwrap(), &None);
}

#[tokio::test(start_paused = true)]
async fn forbidden_keeps_session_but_notifies() {
    let session = SessionStore::new(LocalStore::in_memory());
    session.set_token("tok-7");
    let transport = Arc::new(MockTransport::new());
    transport.route(
        Method::Post,
        "/api/admin/users",
        Response::with_status(403, json!({})),
    );
    let recorder = Recorder::new();
    let probe = Arc::new(HeaderProbe {
        auth_headers: Mutex::new(Vec::new()),
    });
    let client = console_client(&session, transport, recorder.clone(), probe);

    assert_err!(client.post_json("/api/admin/users", json!({"name": "x"})).await);

    assert!(session.is_logged_in());
    assert!(recorder.routes.lock().unwrap().is_empty());
    assert_eq!(
        *recorder.notices.lock().unwrap(),
        vec!["Insufficient permission".to_string()]
    );
}
