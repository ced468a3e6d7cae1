// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{admin, auth, comments, contact, posts, site};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        site::site_info,
        site::list_categories,
        posts::list_posts,
        posts::list_trending_posts,
        posts::get_post_by_slug,
        posts::list_related_posts,
        posts::list_category_posts,
        comments::list_comments,
        comments::count_comments,
        comments::add_comment,
        comments::vote_comment,
        contact::submit_contact,
        auth::sign_in,
        auth::sign_out,
        auth::current_user,
        admin::list_all_posts,
        admin::create_post,
        admin::get_post,
        admin::update_post,
        admin::delete_post,
        admin::dashboard_stats,
        admin::get_domain_settings,
        admin::save_domain_settings,
        admin::verify_domain
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            site::SiteInfoResponse,
            comments::AddCommentRequest,
            comments::VoteRequest,
            comments::CommentCountResponse,
            contact::ContactRequest,
            auth::SignInRequest,
            admin::CreatePostRequest,
            admin::UpdatePostRequest,
            admin::TagsInput,
            admin::DomainSettingsRequest,
            crate::application::dto::PostDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CommentDto,
            crate::application::dto::DashboardStatsDto,
            crate::application::dto::DomainSettingsDto,
            crate::application::dto::SessionDto,
            crate::application::dto::AdminProfileDto
        )
    ),
    tags(
        (name = "Site", description = "Site metadata"),
        (name = "Posts", description = "Public reading endpoints"),
        (name = "Comments", description = "Reader comments and votes"),
        (name = "Contact", description = "Contact form"),
        (name = "Auth", description = "Admin sessions"),
        (name = "Admin", description = "Content management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "News Nikwetu API",
        description = "News publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
