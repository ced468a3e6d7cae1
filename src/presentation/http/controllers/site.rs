// src/presentation/http/controllers/site.rs
use crate::application::{dto::CategoryDto, queries::posts::PostQueryService};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SiteInfoResponse {
    pub title: String,
    pub categories: Vec<CategoryDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/site",
    responses((status = 200, description = "Site title and navigation categories.", body = SiteInfoResponse)),
    tag = "Site"
)]
pub async fn site_info(Extension(state): Extension<HttpState>) -> Json<SiteInfoResponse> {
    Json(SiteInfoResponse {
        title: state.site_title.to_string(),
        categories: PostQueryService::list_categories(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories.", body = [CategoryDto])),
    tag = "Site"
)]
pub async fn list_categories() -> Json<Vec<CategoryDto>> {
    Json(PostQueryService::list_categories())
}
