// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{
        Category, FeaturedImage, NewPost, PostContent, PostTitle, Tags,
        value_objects::{author_or_default, non_blank},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    /// Display name or slug; absent means Local News.
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub is_trending: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    category: Option<String>,
    featured_image: Option<String>,
    author: Option<String>,
    tags: Vec<String>,
    is_published: bool,
    is_trending: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured_image(mut self, image: impl Into<String>) -> Self {
        self.featured_image = Some(image.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub const fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub const fn trending(mut self, is_trending: bool) -> Self {
        self.is_trending = is_trending;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            excerpt: self.excerpt,
            category: self.category,
            featured_image: self.featured_image,
            author: self.author,
            tags: self.tags,
            is_published: self.is_published,
            is_trending: self.is_trending,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = command
            .category
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(str::parse::<Category>)
            .transpose()?
            .unwrap_or_default();
        let featured_image = FeaturedImage::optional(command.featured_image)?;
        let slug = self.slug_service.derive_unique(&title, None).await?;
        let now = self.clock.now();

        let new_post = NewPost {
            title,
            slug,
            content,
            excerpt: non_blank(command.excerpt),
            category,
            featured_image,
            author: author_or_default(command.author),
            published_at: Some(now),
            is_published: command.is_published,
            is_trending: command.is_trending,
            tags: Tags::new(command.tags),
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
