use super::PostQueryService;
use crate::{
    application::dto::{CategoryDto, PostDto},
    domain::post::{Category, PostFilter, PostSlug},
};

pub const DEFAULT_TRENDING_LIMIT: u32 = 5;
pub const DEFAULT_RELATED_LIMIT: u32 = 3;
const MAX_TRENDING_LIMIT: u32 = 50;
const MAX_RELATED_LIMIT: u32 = 20;

fn clamp_limit(limit: u32, default: u32, max: u32) -> u32 {
    if limit == 0 { default } else { limit.min(max) }
}

impl PostQueryService {
    /// The fixed category set in navigation order.
    pub fn list_categories() -> Vec<CategoryDto> {
        Category::ALL.into_iter().map(Into::into).collect()
    }

    /// Every post including drafts, newest first.
    pub async fn list_posts(&self) -> Vec<PostDto> {
        self.fetch(&PostFilter::all(), "list_posts").await
    }

    pub async fn list_published_posts(&self) -> Vec<PostDto> {
        self.fetch(&PostFilter::published(), "list_published_posts")
            .await
    }

    pub async fn list_posts_by_category(&self, category: Category) -> Vec<PostDto> {
        self.fetch(
            &PostFilter::published().in_category(category),
            "list_posts_by_category",
        )
        .await
    }

    /// `limit` of zero selects the default.
    pub async fn list_trending_posts(&self, limit: u32) -> Vec<PostDto> {
        let limit = clamp_limit(limit, DEFAULT_TRENDING_LIMIT, MAX_TRENDING_LIMIT);
        self.fetch(
            &PostFilter::published().trending().limit(limit),
            "list_trending_posts",
        )
        .await
    }

    /// Published posts sharing the category of `slug`, excluding that post.
    pub async fn list_related_posts(&self, slug: &str, limit: u32) -> Vec<PostDto> {
        let Ok(slug) = PostSlug::new(slug) else {
            return Vec::new();
        };
        let anchor = match self.read_repo.find_by_slug(&slug).await {
            Ok(Some(post)) => post,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, slug = %slug, "related posts lookup failed");
                return Vec::new();
            }
        };

        let limit = clamp_limit(limit, DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT);
        let filter = PostFilter::published()
            .in_category(anchor.category)
            .excluding(anchor.id)
            .limit(limit);
        self.fetch(&filter, "list_related_posts").await
    }
}
