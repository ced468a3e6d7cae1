// src/domain/post/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Derives the slug for a title and guards its uniqueness.
///
/// The slug is always `slugify(title)`. A slug already owned by another post
/// is a conflict; no suffix is appended.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn derive(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let raw = self.generator.slugify(title.as_str());
        if raw.is_empty() {
            return Err(DomainError::Validation(
                "title must contain at least one letter or digit".into(),
            ));
        }
        PostSlug::new(raw)
    }

    pub async fn derive_unique(
        &self,
        title: &PostTitle,
        owner: Option<&PostId>,
    ) -> DomainResult<PostSlug> {
        let slug = self.derive(title)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if owner != Some(&existing.id) => Err(DomainError::Conflict(format!(
                "a post with slug '{slug}' already exists"
            ))),
            _ => Ok(slug),
        }
    }
}
