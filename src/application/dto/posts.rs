use crate::domain::post::{Category, Post, PostStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Wire shape of a post; camelCase to match the reading and admin clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub author: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub is_trending: bool,
    pub tags: Vec<String>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            excerpt: post.excerpt,
            category: post.category.as_str().to_string(),
            featured_image: post.featured_image.map(|image| image.into_inner()),
            author: post.author,
            published_at: post.published_at,
            is_published: post.is_published,
            is_trending: post.is_trending,
            tags: post.tags.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            name: category.as_str().to_string(),
            slug: category.slug().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
    pub trending: u64,
}

impl From<PostStats> for DashboardStatsDto {
    fn from(stats: PostStats) -> Self {
        Self {
            total: stats.total,
            published: stats.published,
            drafts: stats.drafts,
            trending: stats.trending,
        }
    }
}
