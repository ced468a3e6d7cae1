// tests/support/helpers.rs
use super::mocks::{DummyPasswordHasher, TickingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use chrono::Duration;
use nikwetu_core::application::commands::auth::{EnsureAdminCommand, SignInCommand};
use nikwetu_core::application::ports::{
    security::{PasswordHasher, SessionStore},
    time::Clock,
    util::SlugGenerator,
};
use nikwetu_core::application::services::{ApplicationServices, Repositories};
use nikwetu_core::infrastructure::{
    repositories::InMemoryStore, security::session_store::InMemorySessionStore,
    util::DefaultSlugGenerator,
};
use nikwetu_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const ADMIN_EMAIL: &str = "editor@nikwetu.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const SESSION_TTL_HOURS: i64 = 12;

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<TickingClock>,
    pub router: axum::Router,
}

pub fn session_store(clock: Arc<TickingClock>) -> Arc<InMemorySessionStore> {
    Arc::new(InMemorySessionStore::new(Duration::hours(SESSION_TTL_HOURS), clock))
}

/// Services wired to the given repositories with fast test doubles for
/// hashing and a deterministic clock.
pub fn build_services(repositories: Repositories, clock: Arc<TickingClock>) -> ApplicationServices {
    let sessions = session_store(Arc::clone(&clock));
    build_services_with_sessions(repositories, clock, sessions)
}

pub fn build_services_with_sessions(
    repositories: Repositories,
    clock: Arc<TickingClock>,
    sessions: Arc<InMemorySessionStore>,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = clock;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
    let sessions: Arc<dyn SessionStore> = sessions;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(repositories, hasher, sessions, clock, slugger)
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    let state = HttpState {
        services,
        site_title: Arc::from("News Nikwetu"),
    };
    build_router(
        state,
        &RouterOptions {
            allowed_origins: vec!["*".into()],
            rate_limit: false,
        },
    )
}

/// Memory-backed application with the bootstrap admin already seeded.
pub async fn make_test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TickingClock::default());
    let services = Arc::new(build_services(store.repositories(), Arc::clone(&clock)));
    services
        .auth
        .ensure_admin(EnsureAdminCommand {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
            display_name: "Desk Editor".into(),
        })
        .await
        .expect("seed admin");
    let router = router_for(Arc::clone(&services));
    TestApp {
        services,
        store,
        clock,
        router,
    }
}

pub async fn sign_in_token(services: &ApplicationServices) -> String {
    services
        .auth
        .sign_in(SignInCommand {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
        })
        .await
        .expect("sign in")
        .token
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

/// Send one request through a clone of the router.
pub async fn send(router: &axum::Router, request: Request<Body>) -> axum::response::Response {
    router.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an `ErrorResponse` with the expected status and reason.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["error"].as_str(), Some(expected_error));
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field in ErrorResponse"
    );
}
