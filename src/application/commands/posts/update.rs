// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        Category, FeaturedImage, Post, PostContent, PostId, PostTitle, PostUpdate, Tags,
        value_objects::{author_or_default, non_blank},
    },
};

/// Partial update. Blank `excerpt`/`featured_image` clear the field.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub is_trending: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, mut command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(std::mem::take(&mut command.id))?;
        let mut post = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post {id} not found")))?;

        let title = command.title.take();
        let publish = command.is_published.take();

        let mut update = PostUpdate::new(id);
        update = self.apply_title(&post, title, update).await?;
        update = Self::apply_fields(command, update)?;

        if let Some(publish) = publish {
            if publish {
                post.publish(self.clock.now());
            } else {
                post.unpublish();
            }
            update = update.with_publish_state(post.is_published, post.published_at);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = %updated.id, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }

    async fn apply_title(
        &self,
        post: &Post,
        title: Option<String>,
        update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        let Some(raw) = title else {
            return Ok(update);
        };
        let title = PostTitle::new(raw)?;
        let slug = self.slug_service.derive_unique(&title, Some(&post.id)).await?;
        Ok(update.with_title(title, slug))
    }

    fn apply_fields(
        command: UpdatePostCommand,
        mut update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(non_blank(Some(excerpt)));
        }
        if let Some(category) = command.category {
            update = update.with_category(category.parse::<Category>()?);
        }
        if let Some(image) = command.featured_image {
            update = update.with_featured_image(FeaturedImage::optional(Some(image))?);
        }
        if let Some(author) = command.author {
            update = update.with_author(author_or_default(Some(author)));
        }
        if let Some(tags) = command.tags {
            update = update.with_tags(Tags::new(tags));
        }
        if let Some(trending) = command.is_trending {
            update = update.with_trending(trending);
        }
        Ok(update)
    }
}
