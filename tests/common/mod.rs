#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use linkboard::application::ports::{CommentRepository, PostRepository, SubredditRepository};
use linkboard::application::ListingService;
use linkboard::domain::{Comment, Post, Subreddit};
use linkboard::infrastructure::{ConnectionPool, InMemoryCollection, SqliteRepository};
use linkboard::shared::ListingConfig;
use std::sync::Arc;

pub const RUST_ID: &str = "sub-rust";
pub const GO_ID: &str = "sub-go";
pub const ARCHIVED_ID: &str = "sub-old";
pub const DELETED_POST_ID: &str = "post-g";

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Posts A..F in r/rust, created an hour apart (A oldest), plus a newer
/// soft-deleted post G.
pub struct Dataset {
    pub subreddits: Vec<Subreddit>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

pub fn dataset() -> Dataset {
    let subreddits = vec![
        Subreddit::new_with_id(
            RUST_ID.to_string(),
            "rust".to_string(),
            "The Rust Programming Language".to_string(),
            base_time(),
        )
        .with_description("Memory safety without garbage collection")
        .with_members(300),
        Subreddit::new_with_id(
            GO_ID.to_string(),
            "golang".to_string(),
            "Go".to_string(),
            base_time() + TimeDelta::minutes(1),
        )
        .with_members(500),
        {
            let mut archived = Subreddit::new_with_id(
                ARCHIVED_ID.to_string(),
                "archived".to_string(),
                "Archived".to_string(),
                base_time() + TimeDelta::minutes(2),
            );
            archived.soft_delete(base_time() + TimeDelta::days(1));
            archived
        },
    ];

    let hot = [5.0, 1.0, 6.0, 2.0, 4.0, 3.0];
    let mut posts: Vec<Post> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .zip(hot)
        .enumerate()
        .map(|(index, (letter, hot))| {
            Post::new_with_id(
                format!("post-{letter}"),
                RUST_ID.to_string(),
                "alice".to_string(),
                format!("Post {letter}"),
                base_time() + TimeDelta::hours(index as i64 + 1),
            )
            .with_body(format!("Body of post {letter}"))
            .with_votes(index as i64)
            .with_scores(hot, hot, 0.0)
        })
        .collect();

    let mut deleted = Post::new_with_id(
        DELETED_POST_ID.to_string(),
        RUST_ID.to_string(),
        "mallory".to_string(),
        "Post g".to_string(),
        base_time() + TimeDelta::hours(7),
    )
    .with_scores(10.0, 10.0, 0.0);
    deleted.soft_delete(base_time() + TimeDelta::hours(8));
    posts.push(deleted);

    let comments = (1..=6)
        .map(|n| {
            Comment::new_with_id(
                format!("cmt-{n}"),
                "post-a".to_string(),
                "bob".to_string(),
                format!("Comment number {n}"),
                base_time() + TimeDelta::hours(1) + TimeDelta::minutes(n),
            )
        })
        .collect();

    Dataset {
        subreddits,
        posts,
        comments,
    }
}

pub async fn memory_service(data: &Dataset) -> ListingService {
    memory_service_with(data, &ListingConfig::default()).await
}

pub async fn memory_service_with(data: &Dataset, config: &ListingConfig) -> ListingService {
    let posts = InMemoryCollection::with_records(data.posts.clone());
    for subreddit in data.subreddits.iter().filter(|sub| sub.deleted_at.is_none()) {
        posts.add_parent(subreddit.name.clone(), subreddit.id.clone()).await;
    }
    let comments = InMemoryCollection::with_records(data.comments.clone());
    for post in data.posts.iter().filter(|post| post.deleted_at.is_none()) {
        comments.add_parent(post.id.clone(), post.id.clone()).await;
    }
    let subreddits = InMemoryCollection::with_records(data.subreddits.clone());

    ListingService::new(
        Arc::new(posts),
        Arc::new(comments),
        Arc::new(subreddits),
        config,
    )
}

pub async fn seed(repository: &SqliteRepository, data: &Dataset) {
    for subreddit in &data.subreddits {
        repository.create_subreddit(subreddit).await.unwrap();
    }
    for post in &data.posts {
        repository.create_post(post).await.unwrap();
    }
    for comment in &data.comments {
        repository.create_comment(comment).await.unwrap();
    }
}

pub fn sqlite_service(repository: &SqliteRepository) -> ListingService {
    sqlite_service_with(repository, &ListingConfig::default())
}

pub fn sqlite_service_with(repository: &SqliteRepository, config: &ListingConfig) -> ListingService {
    ListingService::new(
        Arc::new(repository.collection::<Post>()),
        Arc::new(repository.collection::<Comment>()),
        Arc::new(repository.collection::<Subreddit>()),
        config,
    )
}

pub async fn sqlite_repository(data: &Dataset) -> SqliteRepository {
    let pool = ConnectionPool::from_memory().await.unwrap();
    let repository = SqliteRepository::new(pool);
    repository.initialize().await.unwrap();
    seed(&repository, data).await;
    repository
}

/// The same dataset behind every adapter.
pub async fn backends() -> Vec<(&'static str, ListingService)> {
    backends_with(&ListingConfig::default()).await
}

pub async fn backends_with(config: &ListingConfig) -> Vec<(&'static str, ListingService)> {
    let data = dataset();
    let repository = sqlite_repository(&data).await;
    vec![
        ("memory", memory_service_with(&data, config).await),
        ("sqlite", sqlite_service_with(&repository, config)),
    ]
}

pub fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

pub fn post_ids(items: &[Post]) -> Vec<String> {
    ids(items, |post| post.id.as_str())
}

pub fn letters(prefix: &str, letters: &str) -> Vec<String> {
    letters.chars().map(|c| format!("{prefix}{c}")).collect()
}
