use crate::domain::entities::{Comment, Post, Subreddit};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

fn instant(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::Database(format!("timestamp out of range: {millis}")))
}

fn optional_instant(millis: Option<i64>) -> Result<Option<DateTime<Utc>>, AppError> {
    millis.map(instant).transpose()
}

pub(super) fn map_post_row(row: &SqliteRow) -> Result<Post, AppError> {
    Ok(Post {
        id: row.try_get("id")?,
        subreddit_id: row.try_get("subreddit_id")?,
        author: row.try_get("author")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        body: row.try_get("body")?,
        votes: row.try_get("votes")?,
        comment_count: row.try_get("comment_count")?,
        hot_score: row.try_get("hot_score")?,
        best_score: row.try_get("best_score")?,
        controversial_score: row.try_get("controversial_score")?,
        created_at: instant(row.try_get("created_at")?)?,
        deleted_at: optional_instant(row.try_get("deleted_at")?)?,
    })
}

pub(super) fn map_comment_row(row: &SqliteRow) -> Result<Comment, AppError> {
    Ok(Comment {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        parent_comment_id: row.try_get("parent_comment_id")?,
        author: row.try_get("author")?,
        body: row.try_get("body")?,
        votes: row.try_get("votes")?,
        hot_score: row.try_get("hot_score")?,
        best_score: row.try_get("best_score")?,
        controversial_score: row.try_get("controversial_score")?,
        created_at: instant(row.try_get("created_at")?)?,
        deleted_at: optional_instant(row.try_get("deleted_at")?)?,
    })
}

pub(super) fn map_subreddit_row(row: &SqliteRow) -> Result<Subreddit, AppError> {
    Ok(Subreddit {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        member_count: row.try_get("member_count")?,
        created_at: instant(row.try_get("created_at")?)?,
        deleted_at: optional_instant(row.try_get("deleted_at")?)?,
    })
}
