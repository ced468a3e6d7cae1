// tests/support/builders.rs
use nikwetu_core::application::commands::posts::CreatePostCommand;

/// A published post in the given category.
pub fn published_post(title: &str, category: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content(format!("{title}. Full story from the newsroom."))
        .excerpt(format!("Summary of {title}"))
        .category(category)
        .tags(["kenya", "news"])
        .published(true)
        .build()
        .expect("title and content set")
}

pub fn trending_post(title: &str, category: &str) -> CreatePostCommand {
    CreatePostCommand {
        is_trending: true,
        ..published_post(title, category)
    }
}

pub fn draft_post(title: &str, category: &str) -> CreatePostCommand {
    CreatePostCommand {
        is_published: false,
        ..published_post(title, category)
    }
}
