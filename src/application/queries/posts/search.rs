use super::PostQueryService;
use crate::{application::dto::PostDto, domain::post::PostFilter};

impl PostQueryService {
    /// Case-insensitive substring search over published posts. A blank query
    /// matches nothing; callers decide whether to search at all.
    pub async fn search_posts(&self, query: &str) -> Vec<PostDto> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        self.fetch(&PostFilter::published().matching(trimmed), "search_posts")
            .await
    }
}
