use std::sync::Arc;

use crate::{
    application::dto::PostDto,
    domain::post::{Post, PostFilter, PostReadRepository},
};

/// Read side of the content layer. Every operation degrades to an empty
/// result and a logged warning when the store is unavailable.
pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) async fn fetch_posts(&self, filter: &PostFilter, operation: &str) -> Vec<Post> {
        match self.read_repo.list(filter).await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!(error = %err, operation, "post listing failed, returning empty result");
                Vec::new()
            }
        }
    }

    pub(super) async fn fetch(&self, filter: &PostFilter, operation: &str) -> Vec<PostDto> {
        self.fetch_posts(filter, operation)
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
