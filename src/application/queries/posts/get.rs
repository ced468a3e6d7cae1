use super::PostQueryService;
use crate::{
    application::dto::PostDto,
    domain::post::{PostId, PostSlug},
};

impl PostQueryService {
    /// `None` for unknown or malformed slugs and for store failures.
    pub async fn get_post_by_slug(&self, slug: &str) -> Option<PostDto> {
        let slug = PostSlug::new(slug).ok()?;
        match self.read_repo.find_by_slug(&slug).await {
            Ok(post) => post.map(Into::into),
            Err(err) => {
                tracing::warn!(error = %err, slug = %slug, "post lookup by slug failed");
                None
            }
        }
    }

    pub async fn get_post_by_id(&self, id: &str) -> Option<PostDto> {
        let id = PostId::new(id).ok()?;
        match self.read_repo.find_by_id(&id).await {
            Ok(post) => post.map(Into::into),
            Err(err) => {
                tracing::warn!(error = %err, post_id = %id, "post lookup by id failed");
                None
            }
        }
    }
}
