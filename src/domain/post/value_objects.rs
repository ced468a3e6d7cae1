use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::{fmt, str::FromStr};

const MAX_INLINE_IMAGE_BYTES: usize = 2 * 1024 * 1024;
const INLINE_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];
pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("post id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier: lowercase ASCII letters, digits and single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--");
        if !well_formed {
            return Err(DomainError::Validation(format!("malformed slug: {value}")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Politics,
    Education,
    Business,
    Sports,
    Entertainment,
    #[default]
    LocalNews,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Politics,
        Self::Education,
        Self::Business,
        Self::Sports,
        Self::Entertainment,
        Self::LocalNews,
    ];

    /// Display name, also the stored representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Politics => "Politics",
            Self::Education => "Education",
            Self::Business => "Business",
            Self::Sports => "Sports",
            Self::Entertainment => "Entertainment",
            Self::LocalNews => "Local News",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Politics => "politics",
            Self::Education => "education",
            Self::Business => "business",
            Self::Sports => "sports",
            Self::Entertainment => "entertainment",
            Self::LocalNews => "local-news",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts the display name or the slug, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(needle)
                    || category.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {needle}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            values
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }

    /// Parses the editor's comma separated form, e.g. `"kenya, schools"`.
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Either a remote `http(s)` URL or an inline base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage(String);

impl FeaturedImage {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        let value = value.trim().to_string();
        if value.starts_with("https://") || value.starts_with("http://") {
            return Ok(Self(value));
        }
        if let Some(rest) = value.strip_prefix("data:") {
            Self::validate_inline(rest)?;
            return Ok(Self(value));
        }
        Err(DomainError::Validation(
            "featured image must be an http(s) URL or an inline image".into(),
        ))
    }

    /// Blank input means no image.
    pub fn optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    fn validate_inline(rest: &str) -> DomainResult<()> {
        let (media_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| DomainError::Validation("inline image must be base64 encoded".into()))?;
        if !INLINE_IMAGE_TYPES.contains(&media_type) {
            return Err(DomainError::Validation(
                "inline image must be JPEG, PNG, WebP or GIF".into(),
            ));
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| DomainError::Validation("inline image is not valid base64".into()))?;
        if bytes.len() > MAX_INLINE_IMAGE_BYTES {
            return Err(DomainError::Validation("inline image exceeds 2 MiB".into()));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

pub fn author_or_default(value: Option<String>) -> String {
    value
        .map(|author| author.trim().to_string())
        .filter(|author| !author.is_empty())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
}

pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
