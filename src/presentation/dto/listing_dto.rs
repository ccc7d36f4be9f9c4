use super::Validate;
use crate::domain::entities::{Comment, Post, Subreddit};
use crate::domain::listing::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubredditPostsRequest {
    pub subreddit: String,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl Validate for SubredditPostsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.subreddit.trim().is_empty() {
            return Err("subreddit name is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsRequest {
    pub post_id: String,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl Validate for PostCommentsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post id is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPostsRequest {
    #[serde(alias = "q")]
    pub query: String,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl Validate for SearchPostsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("search query is required".to_string());
        }
        if self.query.len() > 512 {
            return Err("search query is too long (max 512 bytes)".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSubredditsRequest {
    #[serde(alias = "q")]
    pub query: String,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl Validate for SearchSubredditsRequest {
    fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("search query is required".to_string());
        }
        if self.query.len() > 512 {
            return Err("search query is too long (max 512 bytes)".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub subreddit_id: String,
    pub author: String,
    pub title: String,
    pub url: Option<String>,
    pub body: String,
    pub votes: i64,
    pub comment_count: i64,
    pub created_at: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            subreddit_id: post.subreddit_id,
            author: post.author,
            title: post.title,
            url: post.url,
            body: post.body,
            votes: post.votes,
            comment_count: post.comment_count,
            created_at: post.created_at.timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: i64,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_comment_id: comment.parent_comment_id,
            author: comment.author,
            body: comment.body,
            votes: comment.votes,
            created_at: comment.created_at.timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubredditResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub member_count: i64,
    pub created_at: i64,
}

impl From<Subreddit> for SubredditResponse {
    fn from(subreddit: Subreddit) -> Self {
        Self {
            id: subreddit.id,
            name: subreddit.name,
            title: subreddit.title,
            description: subreddit.description,
            member_count: subreddit.member_count,
            created_at: subreddit.created_at.timestamp(),
        }
    }
}
