//! End-to-end page flows through the router with in-memory adapters.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use permalist::adapters::http::{app_router, AppState, SessionSettings};
use permalist::adapters::memory::{InMemoryItemRepository, InMemoryUserRepository};
use permalist::adapters::password::BcryptPasswordHasher;
use permalist::adapters::session::InMemorySessionStore;
use permalist::config::FeatureFlags;
use permalist::domain::foundation::{SessionToken, UserId};
use permalist::domain::item::ItemTitle;
use permalist::domain::session::SessionRecord;
use permalist::domain::user::NewUser;
use permalist::ports::{ItemRepository, SessionStore, UserRepository};

const SECRET: &[u8] = b"test-secret-test-secret-test-secret-test-secret-test-secret-0001";
const COOKIE_NAME: &str = "permalist.sid";

struct TestApp {
    router: Router,
    items: Arc<InMemoryItemRepository>,
    users: Arc<InMemoryUserRepository>,
    sessions: Arc<InMemorySessionStore>,
    /// `name=value` of the current session cookie.
    cookie: Option<String>,
}

impl TestApp {
    fn new() -> Self {
        Self::build(
            InMemoryItemRepository::new(),
            InMemoryUserRepository::new(),
            InMemorySessionStore::new(),
            FeatureFlags::default(),
        )
    }

    fn with_items(items: InMemoryItemRepository) -> Self {
        Self::build(
            items,
            InMemoryUserRepository::new(),
            InMemorySessionStore::new(),
            FeatureFlags::default(),
        )
    }

    fn with_users(users: InMemoryUserRepository) -> Self {
        Self::build(
            InMemoryItemRepository::new(),
            users,
            InMemorySessionStore::new(),
            FeatureFlags::default(),
        )
    }

    fn with_sessions(sessions: InMemorySessionStore) -> Self {
        Self::build(
            InMemoryItemRepository::new(),
            InMemoryUserRepository::new(),
            sessions,
            FeatureFlags::default(),
        )
    }

    fn with_features(features: FeatureFlags) -> Self {
        Self::build(
            InMemoryItemRepository::new(),
            InMemoryUserRepository::new(),
            InMemorySessionStore::new(),
            features,
        )
    }

    fn build(
        items: InMemoryItemRepository,
        users: InMemoryUserRepository,
        sessions: InMemorySessionStore,
        features: FeatureFlags,
    ) -> Self {
        let items = Arc::new(items);
        let users = Arc::new(users);
        let sessions = Arc::new(sessions);
        let settings =
            SessionSettings::new(COOKIE_NAME, chrono::Duration::hours(24), false, SECRET).unwrap();

        let state = AppState::new(
            items.clone(),
            users.clone(),
            Arc::new(BcryptPasswordHasher::new(4)),
            sessions.clone(),
            settings,
            features,
        );

        Self {
            router: app_router(state),
            items,
            users,
            sessions,
            cookie: None,
        }
    }

    async fn get(&mut self, uri: &str) -> Response {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post(&mut self, uri: &str, form: &str) -> Response {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Response {
        let response = self.router.clone().oneshot(request).await.unwrap();
        if let Some(set) = session_set_cookie(&response) {
            let pair = set.split(';').next().unwrap().to_string();
            self.cookie = if pair == format!("{}=", COOKIE_NAME) {
                None
            } else {
                Some(pair)
            };
        }
        response
    }

    async fn register(&mut self, username: &str, password: &str) -> Response {
        self.post(
            "/register",
            &format!("username={}&password={}", username, password),
        )
        .await
    }

    async fn login(&mut self, username: &str, password: &str) -> Response {
        self.post("/login", &format!("username={}&password={}", username, password))
            .await
    }
}

fn session_set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", COOKIE_NAME)))
        .map(str::to_string)
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn assert_text(response: Response, expected: &str) {
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, expected);
}

#[tokio::test]
async fn register_login_add_and_list() {
    let mut app = TestApp::new();

    let response = app.register("alice", "pw1").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");

    let response = app.login("alice", "pw1").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");

    let response = app.login("alice", "wrong").await;
    assert_text(response, "Invalid username or password.").await;

    let response = app.post("/add", "newItem=Buy+milk").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Today</h1>"));
    assert!(html.contains("Buy milk"));
}

#[tokio::test]
async fn first_request_issues_signed_session_cookie() {
    let mut app = TestApp::new();

    let response = app.get("/login").await;

    let set_cookie = session_set_cookie(&response).expect("session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert_eq!(app.sessions.len().await, 1);

    // The same cookie is reused rather than reissued.
    let response = app.get("/login").await;
    assert!(session_set_cookie(&response).is_none());
    assert_eq!(app.sessions.len().await, 1);
}

#[tokio::test]
async fn tampered_cookie_starts_a_new_session() {
    let mut app = TestApp::new();
    app.register("alice", "pw1").await;
    app.login("alice", "pw1").await;

    let good = app.cookie.clone().unwrap();
    let mut tampered = good.clone();
    tampered.pop();
    tampered.push(if good.ends_with('0') { '1' } else { '0' });
    app.cookie = Some(tampered);

    let response = app.get("/check-session").await;
    assert!(session_set_cookie(&response).is_some());
    assert_text(response, "Session User ID: No User Logged In").await;
}

#[tokio::test]
async fn check_session_follows_login_and_logout() {
    let mut app = TestApp::new();

    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: No User Logged In").await;

    app.register("alice", "pw1").await;
    app.login("alice", "pw1").await;

    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: 1").await;

    let stale_cookie = app.cookie.clone();
    let response = app.post("/logout", "").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");
    assert!(app.cookie.is_none(), "logout clears the cookie");

    // Replaying the old cookie does not resurrect the session.
    app.cookie = stale_cookie;
    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: No User Logged In").await;
}

#[tokio::test]
async fn failed_logout_keeps_cookie_and_session() {
    let mut app = TestApp::new();
    app.register("alice", "pw1").await;
    app.login("alice", "pw1").await;
    app.sessions.set_fail_destroy(true);

    let response = app.post("/logout", "").await;
    assert!(session_set_cookie(&response).is_none());
    assert_text(response, "Error logging out.").await;

    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: 1").await;
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let mut app = TestApp::new();

    app.register("alice", "pw1").await;
    let response = app.register("alice", "pw2").await;

    assert_text(response, "Username already exists. Please choose another.").await;
    assert_eq!(app.users.count_username("alice").await, 1);

    // The stored hash is still the first registration's.
    let response = app.login("alice", "pw2").await;
    assert_text(response, "Invalid username or password.").await;
}

#[tokio::test]
async fn registration_requires_both_fields() {
    let mut app = TestApp::new();

    let response = app.post("/register", "username=bob").await;
    assert_text(response, "Username and password are required.").await;

    let response = app.post("/register", "username=&password=pw").await;
    assert_text(response, "Username and password are required.").await;

    assert_eq!(app.users.count_username("bob").await, 0);
}

#[tokio::test]
async fn login_with_unknown_user() {
    let mut app = TestApp::new();

    let response = app.login("nobody", "pw1").await;

    assert_text(response, "User not found. Please register first.").await;
}

#[tokio::test]
async fn blank_titles_are_not_added() {
    let mut app = TestApp::new();

    for form in ["newItem=", "newItem=%20%20%20", ""] {
        let response = app.post("/add", form).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
    }

    assert!(app.items.is_empty().await);
}

#[tokio::test]
async fn edit_renames_and_ignores_unknown_ids() {
    let mut app = TestApp::new();
    let id = app
        .items
        .insert(&ItemTitle::new("old").unwrap(), None)
        .await
        .unwrap();

    let response = app
        .post("/edit", &format!("updatedItemId={}&updatedItemTitle=new", id))
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = app
        .post("/edit", "updatedItemId=999&updatedItemTitle=ghost")
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = app.post("/edit", "updatedItemId=abc&updatedItemTitle=x").await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let items = app.items.list_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "new");
}

#[tokio::test]
async fn delete_twice_is_silent() {
    let mut app = TestApp::new();
    let id = app
        .items
        .insert(&ItemTitle::new("done").unwrap(), None)
        .await
        .unwrap();
    let form = format!("deleteItemId={}", id);

    let first = app.post("/delete", &form).await;
    let second = app.post("/delete", &form).await;
    let missing = app.post("/delete", "").await;

    for response in [first, second, missing] {
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
    }
    assert!(app.items.is_empty().await);
}

#[tokio::test]
async fn list_is_scoped_to_the_logged_in_user() {
    let mut app = TestApp::new();
    app.items
        .insert(&ItemTitle::new("anonymous chore").unwrap(), None)
        .await
        .unwrap();
    app.items
        .insert(&ItemTitle::new("someone else's").unwrap(), Some(UserId::new(42)))
        .await
        .unwrap();

    let html = body_text(app.get("/").await).await;
    assert!(html.contains("anonymous chore"));
    assert!(html.contains("someone else&#39;s"));

    app.register("alice", "pw1").await;
    app.login("alice", "pw1").await;
    app.post("/add", "newItem=mine").await;

    let html = body_text(app.get("/").await).await;
    assert!(html.contains("mine"));
    assert!(!html.contains("anonymous chore"));
}

#[tokio::test]
async fn gated_list_redirects_anonymous_visitors() {
    let mut app = TestApp::with_features(FeatureFlags {
        require_login_for_list: true,
    });

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");

    app.register("alice", "pw1").await;
    app.login("alice", "pw1").await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn store_failure_on_list_is_500() {
    let mut app = TestApp::with_items(InMemoryItemRepository::failing("connection refused"));

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal Server Error");
}

#[tokio::test]
async fn store_failure_on_add_is_500() {
    let mut app = TestApp::with_items(InMemoryItemRepository::failing("connection refused"));

    let response = app.post("/add", "newItem=milk").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_does_not_create_sessions() {
    let mut app = TestApp::new();

    let response = app.get("/health").await;

    assert!(session_set_cookie(&response).is_none());
    assert_text(response, "OK").await;
    assert!(app.sessions.is_empty().await);
}

#[tokio::test]
async fn pages_render() {
    let mut app = TestApp::new();

    for uri in ["/register", "/login"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(&format!(r#"action="{}""#, uri)));
    }
}

#[tokio::test]
async fn store_failure_on_edit_and_delete_is_500() {
    let mut app = TestApp::with_items(InMemoryItemRepository::failing("connection refused"));

    let response = app.post("/edit", "updatedItemId=1&updatedItemTitle=new").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal Server Error");

    let response = app.post("/delete", "deleteItemId=1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal Server Error");
}

#[tokio::test]
async fn user_store_failure_on_register_reports_generic_error() {
    let mut app = TestApp::with_users(InMemoryUserRepository::failing("connection refused"));

    let response = app.register("alice", "pw1").await;

    assert_text(response, "Error creating user.").await;
}

#[tokio::test]
async fn user_store_failure_on_login_reports_generic_error() {
    let mut app = TestApp::with_users(InMemoryUserRepository::failing("connection refused"));

    let response = app.login("alice", "pw1").await;

    assert_text(response, "Error logging in.").await;
}

#[tokio::test]
async fn malformed_stored_hash_reports_generic_login_error() {
    let mut app = TestApp::new();
    app.users
        .insert(&NewUser {
            username: "alice".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
        })
        .await
        .unwrap();

    let response = app.login("alice", "pw1").await;

    assert_text(response, "Error logging in.").await;
}

#[tokio::test]
async fn session_save_failure_on_login_reports_generic_error() {
    let mut app = TestApp::new();
    app.get("/login").await;
    app.register("alice", "pw1").await;
    app.sessions.set_fail_save(true);

    let response = app.login("alice", "pw1").await;
    assert!(session_set_cookie(&response).is_none());
    assert_text(response, "Error logging in.").await;

    app.sessions.set_fail_save(false);
    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: No User Logged In").await;
}

#[tokio::test]
async fn login_issues_a_fresh_session_token() {
    let mut app = TestApp::new();
    app.get("/login").await;
    app.register("alice", "pw1").await;
    let before_login = app.cookie.clone().unwrap();

    let response = app.login("alice", "pw1").await;
    assert!(session_set_cookie(&response).is_some());
    let after_login = app.cookie.clone().unwrap();
    assert_ne!(before_login, after_login);
    assert_eq!(app.sessions.len().await, 1, "pre-login record is discarded");

    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: 1").await;

    // A token planted before login never becomes authenticated.
    app.cookie = Some(before_login);
    let response = app.get("/check-session").await;
    assert_text(response, "Session User ID: No User Logged In").await;
}

#[tokio::test]
async fn cookieless_traffic_sweeps_expired_sessions() {
    let mut app = TestApp::with_sessions(InMemorySessionStore::with_sweep_threshold(64));
    let long_ago = chrono::Utc::now() - chrono::Duration::hours(48);
    for _ in 0..100 {
        let token = SessionToken::generate();
        app.sessions
            .save(
                &token,
                &SessionRecord::anonymous(chrono::Duration::hours(24), long_ago),
            )
            .await
            .unwrap();
    }

    for _ in 0..200 {
        app.cookie = None;
        app.get("/check-session").await;
    }

    assert_eq!(app.sessions.len().await, 200);
    assert_eq!(app.sessions.purge_expired().await, 0);
}
