// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, auth, comments, contact, posts, site},
    middleware::rate_limit::public_write_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Post bodies may carry a 2 MiB inline image, which base64 grows to about
/// 2.7 MiB before the rest of the JSON.
pub const MAX_POST_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Exact origins allowed by CORS; `*` allows any.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Anonymous write endpoints, throttled per client when enabled.
fn public_write_routes(rate_limit: bool) -> Router {
    let router = Router::new()
        .route("/api/v1/posts/{id}/comments", post(comments::add_comment))
        .route(
            "/api/v1/posts/{id}/comments/{comment_id}/votes",
            post(comments::vote_comment),
        )
        .route("/api/v1/contact", post(contact::submit_contact))
        .route("/api/v1/auth/sign-in", post(auth::sign_in));

    match rate_limit.then(public_write_limit).flatten() {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

fn public_read_routes() -> Router {
    Router::new()
        .route("/api/v1/site", get(site::site_info))
        .route("/api/v1/categories", get(site::list_categories))
        .route(
            "/api/v1/categories/{category}/posts",
            get(posts::list_category_posts),
        )
        .route("/api/v1/posts", get(posts::list_posts))
        .route("/api/v1/posts/trending", get(posts::list_trending_posts))
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route(
            "/api/v1/posts/by-slug/{slug}/related",
            get(posts::list_related_posts),
        )
        .route("/api/v1/posts/{id}/comments", get(comments::list_comments))
        .route(
            "/api/v1/posts/{id}/comments/count",
            get(comments::count_comments),
        )
        .route("/api/v1/auth/sign-out", post(auth::sign_out))
        .route("/api/v1/auth/me", get(auth::current_user))
}

fn admin_post_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/admin/posts",
            get(admin::list_all_posts).post(admin::create_post),
        )
        .route(
            "/api/v1/admin/posts/{id}",
            get(admin::get_post)
                .put(admin::update_post)
                .delete(admin::delete_post),
        )
        .layer(DefaultBodyLimit::max(MAX_POST_BODY_BYTES))
}

fn admin_routes() -> Router {
    Router::new()
        .merge(admin_post_routes())
        .route("/api/v1/admin/stats", get(admin::dashboard_stats))
        .route(
            "/api/v1/admin/domain",
            get(admin::get_domain_settings).put(admin::save_domain_settings),
        )
        .route("/api/v1/admin/domain/verify", post(admin::verify_domain))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(public_read_routes())
        .merge(public_write_routes(options.rate_limit))
        .merge(admin_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
