// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    Category, FeaturedImage, PostContent, PostId, PostSlug, PostTitle, Tags,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: Option<String>,
    pub category: Category,
    pub featured_image: Option<FeaturedImage>,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub is_trending: bool,
    pub tags: Tags,
}

impl Post {
    /// Publishing keeps an existing timestamp; only undated posts are stamped.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }

    pub const fn unpublish(&mut self) {
        self.is_published = false;
    }

    pub fn set_title(&mut self, title: PostTitle, slug: PostSlug) {
        self.title = title;
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: Option<String>,
    pub category: Category,
    pub featured_image: Option<FeaturedImage>,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub is_trending: bool,
    pub tags: Tags,
}

/// Partial update; `None` leaves the stored value untouched.
///
/// `excerpt` and `featured_image` are doubly optional: `Some(None)` clears them.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<Option<String>>,
    pub category: Option<Category>,
    pub featured_image: Option<Option<FeaturedImage>>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
    pub is_trending: Option<bool>,
    pub tags: Option<Tags>,
}

impl PostUpdate {
    pub const fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            category: None,
            featured_image: None,
            author: None,
            published_at: None,
            is_published: None,
            is_trending: None,
            tags: None,
        }
    }

    pub fn with_title(mut self, title: PostTitle, slug: PostSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_featured_image(mut self, image: Option<FeaturedImage>) -> Self {
        self.featured_image = Some(image);
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_publish_state(
        mut self,
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.is_published = Some(is_published);
        self.published_at = published_at;
        self
    }

    pub const fn with_trending(mut self, is_trending: bool) -> Self {
        self.is_trending = Some(is_trending);
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Merge onto a stored post. Used by stores that cannot express the update natively.
    pub fn apply_to(self, post: &mut Post) {
        if let (Some(title), Some(slug)) = (self.title, self.slug) {
            post.set_title(title, slug);
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(image) = self.featured_image {
            post.featured_image = image;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(published_at) = self.published_at {
            post.published_at = Some(published_at);
        }
        if let Some(is_published) = self.is_published {
            post.is_published = is_published;
        }
        if let Some(is_trending) = self.is_trending {
            post.is_trending = is_trending;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
    pub trending: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        Post {
            id: PostId::new("p1").unwrap(),
            title: PostTitle::new("Budget Day").unwrap(),
            slug: PostSlug::new("budget-day").unwrap(),
            content: PostContent::new("Numbers").unwrap(),
            excerpt: Some("summary".into()),
            category: Category::Business,
            featured_image: None,
            author: "Admin".into(),
            published_at: None,
            is_published: false,
            is_trending: false,
            tags: Tags::default(),
        }
    }

    #[test]
    fn publish_stamps_only_undated_posts() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        assert!(post.is_published);
        assert_eq!(post.published_at, Some(now));

        post.unpublish();
        post.publish(now + Duration::hours(1));
        assert_eq!(post.published_at, Some(now));
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut post = sample_post();
        PostUpdate::new(post.id.clone())
            .with_excerpt(None)
            .with_trending(true)
            .apply_to(&mut post);

        assert_eq!(post.excerpt, None);
        assert!(post.is_trending);
        assert_eq!(post.title.as_str(), "Budget Day");
        assert_eq!(post.slug.as_str(), "budget-day");
    }
}
