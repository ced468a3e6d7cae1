use chrono::Duration;
use nikwetu_core::application::commands::{
    comments::{AddCommentCommand, VoteCommentCommand},
    contact::SubmitContactCommand,
    posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    settings::SaveDomainSettingsCommand,
};
use nikwetu_core::application::error::ApplicationError;
use nikwetu_core::application::queries::posts::PostQueryService;
use nikwetu_core::domain::comment::VoteKind;
use nikwetu_core::domain::post::Category;
use std::sync::Arc;

mod support;

use support::{draft_post, make_test_app, published_post, trending_post};

#[tokio::test]
async fn create_then_fetch_by_slug_returns_fresh_post() {
    let app = make_test_app().await;
    let before = app.clock.peek();

    let created = app
        .services
        .post_commands
        .create_post(published_post("Kenya's New Education Reform", "Education"))
        .await
        .unwrap();
    assert_eq!(created.slug, "kenyas-new-education-reform");
    assert!(!created.id.is_empty());
    assert!(created.published_at.is_some_and(|at| at >= before));

    let fetched = app
        .services
        .post_queries
        .get_post_by_slug("kenyas-new-education-reform")
        .await
        .expect("post by slug");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.category, "Education");
    assert_eq!(fetched.tags, ["kenya", "news"]);
}

#[tokio::test]
async fn create_requires_title_and_content() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;

    let blank_title = CreatePostCommand {
        title: "   ".into(),
        ..published_post("Placeholder", "Politics")
    };
    assert!(matches!(
        commands.create_post(blank_title).await,
        Err(ApplicationError::Validation(_))
    ));

    let blank_content = CreatePostCommand {
        content: String::new(),
        ..published_post("Placeholder", "Politics")
    };
    assert!(matches!(
        commands.create_post(blank_content).await,
        Err(ApplicationError::Validation(_))
    ));

    let unknown_category = published_post("Placeholder", "Weather");
    assert!(matches!(
        commands.create_post(unknown_category).await,
        Err(ApplicationError::Validation(_))
    ));
    assert!(app.services.post_queries.list_posts().await.is_empty());
}

#[tokio::test]
async fn create_defaults_author_and_category() {
    let app = make_test_app().await;
    let command = CreatePostCommand::builder()
        .title("County roads update")
        .content("Works resume on Monday.")
        .build()
        .unwrap();

    let created = app.services.post_commands.create_post(command).await.unwrap();
    assert_eq!(created.category, Category::LocalNews.as_str());
    assert_eq!(created.author, "Admin");
    assert!(!created.is_published);
    assert!(created.excerpt.is_none());
}

#[tokio::test]
async fn same_title_maps_to_same_slug_and_collides() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;

    let first = commands
        .create_post(published_post("Budget 2025 Highlights", "Business"))
        .await
        .unwrap();
    assert_eq!(first.slug, "budget-2025-highlights");

    let second = commands
        .create_post(published_post("  budget 2025 -- HIGHLIGHTS!  ", "Business"))
        .await;
    assert!(matches!(second, Err(ApplicationError::Conflict(_))));

    // Re-saving the unchanged title keeps the slug.
    let resaved = commands
        .update_post(UpdatePostCommand {
            id: first.id.clone(),
            title: Some("Budget 2025 Highlights".into()),
            ..UpdatePostCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(resaved.slug, first.slug);
}

#[tokio::test]
async fn update_regenerates_slug_only_when_title_changes() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    let created = commands
        .create_post(published_post("Old Headline", "Politics"))
        .await
        .unwrap();

    let content_only = commands
        .update_post(UpdatePostCommand {
            id: created.id.clone(),
            content: Some("x".into()),
            ..UpdatePostCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(content_only.slug, "old-headline");
    assert_eq!(content_only.content, "x");
    assert_eq!(content_only.title, "Old Headline");

    let retitled = commands
        .update_post(UpdatePostCommand {
            id: created.id.clone(),
            title: Some("New Title".into()),
            ..UpdatePostCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(retitled.slug, "new-title");
    assert_eq!(retitled.content, "x");
    assert!(app.services.post_queries.get_post_by_slug("old-headline").await.is_none());
}

#[tokio::test]
async fn update_clears_optional_fields_and_stamps_publication() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    let draft = commands
        .create_post(draft_post("Pending Story", "Sports"))
        .await
        .unwrap();
    assert!(draft.excerpt.is_some());

    let updated = commands
        .update_post(UpdatePostCommand {
            id: draft.id.clone(),
            excerpt: Some(String::new()),
            is_published: Some(true),
            is_trending: Some(true),
            category: Some("entertainment".into()),
            ..UpdatePostCommand::default()
        })
        .await
        .unwrap();
    assert!(updated.excerpt.is_none());
    assert!(updated.is_published);
    assert!(updated.is_trending);
    assert_eq!(updated.category, "Entertainment");
    assert!(updated.published_at.is_some());
}

#[tokio::test]
async fn update_unknown_post_is_not_found() {
    let app = make_test_app().await;
    let result = app
        .services
        .post_commands
        .update_post(UpdatePostCommand {
            id: "missing-id".into(),
            title: Some("Anything".into()),
            ..UpdatePostCommand::default()
        })
        .await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_post_and_is_idempotent() {
    let app = make_test_app().await;
    let created = app
        .services
        .post_commands
        .create_post(published_post("Kenya's New Education Reform", "Education"))
        .await
        .unwrap();
    assert_eq!(created.slug, "kenyas-new-education-reform");

    let delete = || DeletePostCommand {
        id: created.id.clone(),
    };
    app.services.post_commands.delete_post(delete()).await.unwrap();
    app.services.post_commands.delete_post(delete()).await.unwrap();

    assert!(app.services.post_queries.get_post_by_id(&created.id).await.is_none());
    assert!(
        app.services
            .post_queries
            .list_posts()
            .await
            .iter()
            .all(|post| post.id != created.id)
    );
}

#[tokio::test]
async fn published_listing_excludes_drafts_newest_first() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    commands.create_post(published_post("First", "Politics")).await.unwrap();
    commands.create_post(draft_post("Hidden", "Politics")).await.unwrap();
    app.clock.advance(Duration::hours(1));
    commands.create_post(published_post("Second", "Sports")).await.unwrap();

    let published = app.services.post_queries.list_published_posts().await;
    let titles: Vec<_> = published.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);
    assert!(published.windows(2).all(|w| w[0].published_at >= w[1].published_at));

    let all = app.services.post_queries.list_posts().await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "Second");
}

#[tokio::test]
async fn category_listing_is_exact_and_published_only() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    commands.create_post(published_post("Match report", "Sports")).await.unwrap();
    commands.create_post(draft_post("Transfer rumours", "Sports")).await.unwrap();
    commands.create_post(published_post("Markets rally", "Business")).await.unwrap();

    let sports = app
        .services
        .post_queries
        .list_posts_by_category(Category::Sports)
        .await;
    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].title, "Match report");
}

#[tokio::test]
async fn search_matches_published_posts_case_insensitively() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    commands
        .create_post(published_post("KENYA wins gold", "Sports"))
        .await
        .unwrap();
    commands
        .create_post(CreatePostCommand {
            content: "Nairobi and the rest of Kenya brace for rain.".into(),
            ..published_post("Weather watch", "Local News")
        })
        .await
        .unwrap();
    commands
        .create_post(draft_post("Kenya draft", "Politics"))
        .await
        .unwrap();
    commands
        .create_post(published_post("Stock exchange", "Business"))
        .await
        .unwrap();

    let queries = &app.services.post_queries;
    assert!(queries.search_posts("").await.is_empty());
    assert!(queries.search_posts("   ").await.is_empty());

    let hits = queries.search_posts("kenya").await;
    let mut titles: Vec<_> = hits.iter().map(|p| p.title.clone()).collect();
    titles.sort();
    assert_eq!(titles, ["KENYA wins gold", "Weather watch"]);

    let by_category = queries.search_posts("busi").await;
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "Stock exchange");
}

#[tokio::test]
async fn trending_and_related_respect_limits() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    for n in 0..7 {
        commands
            .create_post(trending_post(&format!("Trending {n}"), "Politics"))
            .await
            .unwrap();
    }
    let anchor = commands
        .create_post(published_post("Anchor story", "Politics"))
        .await
        .unwrap();
    commands
        .create_post(published_post("Other desk", "Sports"))
        .await
        .unwrap();

    let queries = &app.services.post_queries;
    let trending = queries.list_trending_posts(0).await;
    assert_eq!(trending.len(), 5);
    assert!(trending.iter().all(|p| p.is_trending));
    assert_eq!(trending[0].title, "Trending 6");
    assert_eq!(queries.list_trending_posts(2).await.len(), 2);

    let related = queries.list_related_posts(&anchor.slug, 0).await;
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p.category == "Politics" && p.id != anchor.id));
    assert!(queries.list_related_posts("no-such-story", 3).await.is_empty());
}

#[tokio::test]
async fn lookups_with_unknown_or_malformed_keys_return_none() {
    let app = make_test_app().await;
    let queries = &app.services.post_queries;
    assert!(queries.get_post_by_slug("missing-story").await.is_none());
    assert!(queries.get_post_by_slug("Not A Slug!").await.is_none());
    assert!(queries.get_post_by_id("").await.is_none());
    assert_eq!(PostQueryService::list_categories().len(), Category::ALL.len());
}

#[tokio::test]
async fn dashboard_stats_count_each_state() {
    let app = make_test_app().await;
    let commands = &app.services.post_commands;
    commands.create_post(trending_post("One", "Politics")).await.unwrap();
    commands.create_post(published_post("Two", "Politics")).await.unwrap();
    commands.create_post(draft_post("Three", "Politics")).await.unwrap();

    let stats = app.services.post_queries.dashboard_stats().await;
    assert_eq!(stats.total, 3);
    assert_eq!(stats.published, 2);
    assert_eq!(stats.drafts, 1);
    assert_eq!(stats.trending, 1);
}

#[tokio::test]
async fn comments_start_at_zero_and_list_oldest_first() {
    let app = make_test_app().await;
    let post = app
        .services
        .post_commands
        .create_post(published_post("Discussion", "Politics"))
        .await
        .unwrap();
    let comments = &app.services.comment_commands;

    let first = comments
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "Wanjiru".into(),
            content: "Great piece.".into(),
        })
        .await
        .unwrap();
    assert_eq!((first.likes, first.dislikes), (0, 0));
    assert_eq!(first.post_id, post.id);

    comments
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "Otieno".into(),
            content: "Disagree with the second point.".into(),
        })
        .await
        .unwrap();

    let listed = app.services.comment_queries.list_comments(&post.id).await;
    let authors: Vec<_> = listed.iter().map(|c| c.author.as_str()).collect();
    assert_eq!(authors, ["Wanjiru", "Otieno"]);
    assert_eq!(app.services.comment_queries.count_comments(&post.id).await, 2);
}

#[tokio::test]
async fn comment_validation_and_missing_post() {
    let app = make_test_app().await;
    let post = app
        .services
        .post_commands
        .create_post(published_post("Discussion", "Politics"))
        .await
        .unwrap();
    let comments = &app.services.comment_commands;

    let missing_post = comments
        .add_comment(AddCommentCommand {
            post_id: "no-such-post".into(),
            author: "Reader".into(),
            content: "Hello".into(),
        })
        .await;
    assert!(matches!(missing_post, Err(ApplicationError::NotFound(_))));

    let blank_author = comments
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "  ".into(),
            content: "Hello".into(),
        })
        .await;
    assert!(matches!(blank_author, Err(ApplicationError::Validation(_))));

    let blank_body = comments
        .add_comment(AddCommentCommand {
            post_id: post.id,
            author: "Reader".into(),
            content: String::new(),
        })
        .await;
    assert!(matches!(blank_body, Err(ApplicationError::Validation(_))));
}

#[tokio::test]
async fn votes_increment_exactly_one_counter() {
    let app = make_test_app().await;
    let post = app
        .services
        .post_commands
        .create_post(published_post("Vote here", "Politics"))
        .await
        .unwrap();
    let comment = app
        .services
        .comment_commands
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "Reader".into(),
            content: "Vote on me".into(),
        })
        .await
        .unwrap();
    let vote = |kind| VoteCommentCommand {
        post_id: post.id.clone(),
        comment_id: comment.id.clone(),
        kind,
    };
    let comments = &app.services.comment_commands;

    let liked = comments.vote_comment(vote(VoteKind::Like)).await.unwrap();
    assert_eq!((liked.likes, liked.dislikes), (1, 0));

    comments.vote_comment(vote(VoteKind::Dislike)).await.unwrap();
    let disliked = comments.vote_comment(vote(VoteKind::Dislike)).await.unwrap();
    assert_eq!((disliked.likes, disliked.dislikes), (1, 2));

    let wrong_post = comments
        .vote_comment(VoteCommentCommand {
            post_id: "another-post".into(),
            comment_id: comment.id.clone(),
            kind: VoteKind::Like,
        })
        .await;
    assert!(matches!(wrong_post, Err(ApplicationError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_votes_are_not_lost() {
    let app = make_test_app().await;
    let post = app
        .services
        .post_commands
        .create_post(published_post("Hot topic", "Politics"))
        .await
        .unwrap();
    let comment = app
        .services
        .comment_commands
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "Reader".into(),
            content: "Popular opinion".into(),
        })
        .await
        .unwrap();

    let voters: Vec<_> = (0..32)
        .map(|_| {
            let comments = Arc::clone(&app.services.comment_commands);
            let command = VoteCommentCommand {
                post_id: post.id.clone(),
                comment_id: comment.id.clone(),
                kind: VoteKind::Like,
            };
            tokio::spawn(async move { comments.vote_comment(command).await })
        })
        .collect();
    for voter in voters {
        voter.await.unwrap().unwrap();
    }

    let listed = app.services.comment_queries.list_comments(&post.id).await;
    assert_eq!(listed[0].likes, 32);
    assert_eq!(listed[0].dislikes, 0);
}

#[tokio::test]
async fn deleting_a_post_removes_its_comments() {
    let app = make_test_app().await;
    let post = app
        .services
        .post_commands
        .create_post(published_post("Short lived", "Politics"))
        .await
        .unwrap();
    app.services
        .comment_commands
        .add_comment(AddCommentCommand {
            post_id: post.id.clone(),
            author: "Reader".into(),
            content: "First!".into(),
        })
        .await
        .unwrap();

    app.services
        .post_commands
        .delete_post(DeletePostCommand { id: post.id.clone() })
        .await
        .unwrap();
    assert_eq!(app.services.comment_queries.count_comments(&post.id).await, 0);
}

#[tokio::test]
async fn domain_settings_are_created_once() {
    let app = make_test_app().await;
    let settings = &app.services.settings;

    let first = settings.get_domain_settings().await;
    assert!(!first.is_configured);
    assert_eq!(first.ssl_status, "pending");

    let second = settings.get_domain_settings().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn domain_settings_save_and_verify() {
    let app = make_test_app().await;
    let settings = &app.services.settings;

    let saved = settings
        .save_domain_settings(SaveDomainSettingsCommand {
            custom_domain: " News.Nikwetu.co.ke ".into(),
            is_configured: true,
            dns_provider: "Cloudflare".into(),
            ssl_status: "pending".into(),
            last_verified: None,
        })
        .await
        .unwrap();
    assert_eq!(saved.custom_domain, "news.nikwetu.co.ke");
    assert_eq!(settings.get_domain_settings().await, saved);

    let verified = settings.verify_domain().await.unwrap();
    assert_eq!(verified.ssl_status, "active");
    assert!(verified.is_configured);
    assert!(verified.last_verified > saved.last_verified);

    let invalid = settings
        .save_domain_settings(SaveDomainSettingsCommand {
            custom_domain: "news.example.com".into(),
            is_configured: false,
            dns_provider: String::new(),
            ssl_status: "revoked".into(),
            last_verified: None,
        })
        .await;
    assert!(matches!(invalid, Err(ApplicationError::Validation(_))));
}

#[tokio::test]
async fn contact_messages_are_validated_and_stored() {
    let app = make_test_app().await;
    let contact = &app.services.contact;

    contact
        .submit_contact(SubmitContactCommand {
            name: "Amina".into(),
            email: "amina@example.com".into(),
            message: "Story tip about the new bypass.".into(),
        })
        .await
        .unwrap();

    let blank = contact
        .submit_contact(SubmitContactCommand {
            name: "Amina".into(),
            email: "amina@example.com".into(),
            message: "  ".into(),
        })
        .await;
    assert!(matches!(blank, Err(ApplicationError::Validation(_))));

    let stored = app.store.contact_messages().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Amina");
}
