use super::listing_engine::{ListingEngine, ListingScope};
use crate::application::ports::CollectionAdapter;
use crate::domain::entities::{Comment, Post, Subreddit};
use crate::domain::listing::{PageRequest, PageResult};
use crate::shared::config::ListingConfig;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Every listing variant the backend exposes, one engine per entity kind.
pub struct ListingService {
    posts: ListingEngine<Post>,
    comments: ListingEngine<Comment>,
    subreddits: ListingEngine<Subreddit>,
}

impl ListingService {
    pub fn new(
        posts: Arc<dyn CollectionAdapter<Record = Post>>,
        comments: Arc<dyn CollectionAdapter<Record = Comment>>,
        subreddits: Arc<dyn CollectionAdapter<Record = Subreddit>>,
        config: &ListingConfig,
    ) -> Self {
        Self {
            posts: ListingEngine::new(posts, config),
            comments: ListingEngine::new(comments, config),
            subreddits: ListingEngine::new(subreddits, config),
        }
    }

    /// Front page: live posts from every community.
    pub async fn list_posts(&self, request: &PageRequest) -> Result<PageResult<Post>, AppError> {
        self.posts.page(&ListingScope::all(), request).await
    }

    pub async fn list_subreddit_posts(
        &self,
        subreddit_name: &str,
        request: &PageRequest,
    ) -> Result<PageResult<Post>, AppError> {
        self.posts
            .page(&ListingScope::within(subreddit_name), request)
            .await
    }

    pub async fn list_post_comments(
        &self,
        post_id: &str,
        request: &PageRequest,
    ) -> Result<PageResult<Comment>, AppError> {
        self.comments
            .page(&ListingScope::within(post_id), request)
            .await
    }

    pub async fn list_subreddits(
        &self,
        request: &PageRequest,
    ) -> Result<PageResult<Subreddit>, AppError> {
        self.subreddits.page(&ListingScope::all(), request).await
    }

    pub async fn search_posts(
        &self,
        query: &str,
        subreddit_name: Option<&str>,
        request: &PageRequest,
    ) -> Result<PageResult<Post>, AppError> {
        let query = search_query(query)?;
        let scope = match subreddit_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => ListingScope::within(name),
            None => ListingScope::all(),
        };
        self.posts.page(&scope.matching(query), request).await
    }

    pub async fn search_subreddits(
        &self,
        query: &str,
        request: &PageRequest,
    ) -> Result<PageResult<Subreddit>, AppError> {
        let query = search_query(query)?;
        self.subreddits
            .page(&ListingScope::all().matching(query), request)
            .await
    }

    pub fn posts(&self) -> &ListingEngine<Post> {
        &self.posts
    }

    pub fn comments(&self) -> &ListingEngine<Comment> {
        &self.comments
    }

    pub fn subreddits(&self) -> &ListingEngine<Subreddit> {
        &self.subreddits
    }
}

fn search_query(query: &str) -> Result<&str, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("search query is required".to_string()));
    }
    Ok(query)
}
