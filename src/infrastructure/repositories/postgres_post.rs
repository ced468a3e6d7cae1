// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    FeaturedImage, NewPost, Post, PostContent, PostFilter, PostId, PostReadRepository,
    PostSlug, PostTitle, PostUpdate, PostWriteRepository, Tags,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, category, featured_image, author, \
     published_at, is_published, is_trending, tags";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: String,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    category: String,
    featured_image: Option<String>,
    author: String,
    published_at: Option<DateTime<Utc>>,
    is_published: bool,
    is_trending: bool,
    tags: Vec<String>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let id = PostId::new(row.id)?;
        Ok(Self {
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            excerpt: row.excerpt,
            // Rows written before the category set was fixed fall back to the default.
            category: row.category.parse().unwrap_or_default(),
            featured_image: row.featured_image.and_then(|raw| {
                FeaturedImage::new(raw)
                    .map_err(|err| {
                        tracing::warn!(error = %err, post_id = %id, "dropping unreadable featured image");
                    })
                    .ok()
            }),
            author: row.author,
            published_at: row.published_at,
            is_published: row.is_published,
            is_trending: row.is_trending,
            tags: Tags::new(row.tags),
            id,
        })
    }
}

/// Rows that no longer pass validation are logged and left out.
fn posts_from_rows(rows: Vec<PostRow>) -> Vec<Post> {
    rows.into_iter()
        .filter_map(|row| {
            let row_id = row.id.clone();
            Post::try_from(row)
                .map_err(|err| {
                    tracing::warn!(error = %err, post_id = %row_id, "skipping unreadable post row");
                })
                .ok()
        })
        .collect()
}

/// Escapes `LIKE` metacharacters so user input only ever matches literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            category,
            featured_image,
            author,
            published_at,
            is_published,
            is_trending,
            tags,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, excerpt, category, featured_image, author,
                                published_at, is_published, is_trending, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.into_inner())
        .bind(slug.into_inner())
        .bind(content.into_inner())
        .bind(excerpt)
        .bind(category.as_str())
        .bind(featured_image.map(FeaturedImage::into_inner))
        .bind(author)
        .bind(published_at)
        .bind(is_published)
        .bind(is_trending)
        .bind(tags.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            category,
            featured_image,
            author,
            published_at,
            is_published,
            is_trending,
            tags,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET id = id");

        if let (Some(title), Some(slug)) = (title, slug) {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image.map(FeaturedImage::into_inner));
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }
        if let Some(is_published) = is_published {
            builder.push(", is_published = ");
            builder.push_bind(is_published);
        }
        if let Some(is_trending) = is_trending {
            builder.push(", is_trending = ");
            builder.push_bind(is_trending);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(String::from(id.clone()));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("post {id} not found")))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: &PostId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

impl PostgresPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
        builder.push(" WHERE TRUE");
        if filter.published_only {
            builder.push(" AND is_published");
        }
        if filter.trending_only {
            builder.push(" AND is_trending");
        }
        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(id) = &filter.exclude {
            builder.push(" AND id <> ");
            builder.push_bind(id.as_str());
        }
        if let Some(query) = &filter.search {
            let pattern = like_pattern(query);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR category ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts");
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY published_at DESC NULLS LAST, id DESC");
        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(posts_from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::{PostRow, like_pattern, posts_from_rows};

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_pattern("kenya"), "%kenya%");
        assert_eq!(like_pattern("100%_up"), "%100\\%\\_up%");
    }

    fn row(id: &str, slug: &str, content: &str, image: Option<&str>) -> PostRow {
        PostRow {
            id: id.into(),
            title: "Nairobi Transit Update".into(),
            slug: slug.into(),
            content: content.into(),
            excerpt: None,
            category: "Local News".into(),
            featured_image: image.map(str::to_string),
            author: "Desk Editor".into(),
            published_at: None,
            is_published: true,
            is_trending: false,
            tags: vec!["transit".into()],
        }
    }

    #[test]
    fn unreadable_rows_are_skipped_and_bad_images_dropped() {
        let posts = posts_from_rows(vec![
            row("p1", "transit-update", "Buses run late.", Some("https://cdn.nikwetu.test/bus.jpg")),
            row("p2", "empty-body", "   ", None),
            row("p3", "Bad Slug", "Body", None),
            row("p4", "legacy-image", "Old body.", Some("ftp://legacy/img.png")),
        ]);

        let ids: Vec<&str> = posts.iter().map(|post| post.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);
        assert_eq!(
            posts[0].featured_image.as_ref().map(|image| image.as_str()),
            Some("https://cdn.nikwetu.test/bus.jpg")
        );
        assert!(posts[1].featured_image.is_none());
    }
}
