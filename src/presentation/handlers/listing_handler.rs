use crate::{
    application::services::ListingService,
    domain::listing::{PageRequest, PageResult},
    presentation::dto::{
        listing_dto::{
            CommentResponse, PostCommentsRequest, PostResponse, SearchPostsRequest,
            SearchSubredditsRequest, SubredditPostsRequest, SubredditResponse,
        },
        ListingResponse, Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Listing API consumed by controllers. A missing container is answered
/// with a 404 envelope; every other failure is returned as an error.
pub struct ListingHandler {
    listing_service: Arc<ListingService>,
}

impl ListingHandler {
    pub fn new(listing_service: Arc<ListingService>) -> Self {
        Self { listing_service }
    }

    pub async fn list_posts(
        &self,
        request: PageRequest,
    ) -> Result<ListingResponse<PostResponse>, AppError> {
        info!(sort = ?request.sort_name, "listing front page");
        let result = self.listing_service.list_posts(&request).await;
        respond(result, PostResponse::from)
    }

    pub async fn list_subreddit_posts(
        &self,
        request: SubredditPostsRequest,
    ) -> Result<ListingResponse<PostResponse>, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        info!(subreddit = %request.subreddit, sort = ?request.page.sort_name, "listing subreddit posts");
        let result = self
            .listing_service
            .list_subreddit_posts(request.subreddit.trim(), &request.page)
            .await;
        respond(result, PostResponse::from)
    }

    pub async fn list_post_comments(
        &self,
        request: PostCommentsRequest,
    ) -> Result<ListingResponse<CommentResponse>, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        info!(post_id = %request.post_id, sort = ?request.page.sort_name, "listing post comments");
        let result = self
            .listing_service
            .list_post_comments(request.post_id.trim(), &request.page)
            .await;
        respond(result, CommentResponse::from)
    }

    pub async fn list_subreddits(
        &self,
        request: PageRequest,
    ) -> Result<ListingResponse<SubredditResponse>, AppError> {
        info!(sort = ?request.sort_name, "listing subreddit directory");
        let result = self.listing_service.list_subreddits(&request).await;
        respond(result, SubredditResponse::from)
    }

    pub async fn search_posts(
        &self,
        request: SearchPostsRequest,
    ) -> Result<ListingResponse<PostResponse>, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        info!(subreddit = ?request.subreddit, "searching posts");
        let result = self
            .listing_service
            .search_posts(&request.query, request.subreddit.as_deref(), &request.page)
            .await;
        respond(result, PostResponse::from)
    }

    pub async fn search_subreddits(
        &self,
        request: SearchSubredditsRequest,
    ) -> Result<ListingResponse<SubredditResponse>, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        info!("searching subreddits");
        let result = self
            .listing_service
            .search_subreddits(&request.query, &request.page)
            .await;
        respond(result, SubredditResponse::from)
    }
}

fn respond<R, T>(
    result: Result<PageResult<R>, AppError>,
    convert: impl FnMut(R) -> T,
) -> Result<ListingResponse<T>, AppError> {
    match result {
        Ok(page) => Ok(ListingResponse::ok(page.map(convert))),
        Err(AppError::ContainerNotFound(key)) => {
            warn!(container = %key, "listing container not found");
            Ok(ListingResponse::container_not_found())
        }
        Err(err) => {
            warn!(code = err.code(), error = %err, "listing failed");
            Err(err)
        }
    }
}
