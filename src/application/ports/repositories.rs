use crate::domain::entities::{Comment, Post, Subreddit};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: &Post) -> Result<(), AppError>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError>;
    /// Sets the tombstone; returns `false` if the post was missing or
    /// already deleted.
    async fn soft_delete_post(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: &Comment) -> Result<(), AppError>;
    async fn get_comment(&self, id: &str) -> Result<Option<Comment>, AppError>;
    async fn soft_delete_comment(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError>;
}

#[async_trait]
pub trait SubredditRepository: Send + Sync {
    async fn create_subreddit(&self, subreddit: &Subreddit) -> Result<(), AppError>;
    async fn get_subreddit(&self, id: &str) -> Result<Option<Subreddit>, AppError>;
    async fn get_subreddit_by_name(&self, name: &str) -> Result<Option<Subreddit>, AppError>;
    async fn soft_delete_subreddit(&self, id: &str, at: DateTime<Utc>)
    -> Result<bool, AppError>;
}
