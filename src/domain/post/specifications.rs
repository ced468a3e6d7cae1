use std::cmp::Ordering;

use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::{Category, PostId};

/// Selection criteria for post listings. Results are always newest first.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub published_only: bool,
    pub trending_only: bool,
    pub category: Option<Category>,
    /// Case-insensitive substring over title, content and category name.
    pub search: Option<String>,
    pub exclude: Option<PostId>,
    pub limit: Option<u32>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub const fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub const fn trending(mut self) -> Self {
        self.trending_only = true;
        self
    }

    pub fn matching(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn excluding(mut self, id: PostId) -> Self {
        self.exclude = Some(id);
        self
    }

    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.published_only && !post.is_published {
            return false;
        }
        if self.trending_only && !post.is_trending {
            return false;
        }
        if self.category.is_some_and(|category| category != post.category) {
            return false;
        }
        if self.exclude.as_ref().is_some_and(|id| *id == post.id) {
            return false;
        }
        match &self.search {
            Some(query) => {
                let needle = query.to_lowercase();
                post.title.as_str().to_lowercase().contains(&needle)
                    || post.content.as_str().to_lowercase().contains(&needle)
                    || post.category.as_str().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// Listing order: `published_at` descending, undated posts last, ties by id.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| b.id.as_str().cmp(a.id.as_str()))
}
