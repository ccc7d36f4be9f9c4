use super::mapper::map_post_row;
use super::queries::{
    INSERT_POST, POST_COLUMNS, SELECT_LIVE_SUBREDDIT_ID_BY_NAME, SELECT_POST_BY_ID,
    SOFT_DELETE_POST,
};
use super::{SqliteRepository, SqliteTable};
use crate::application::ports::PostRepository;
use crate::domain::entities::Post;
use crate::domain::listing::Field;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;

impl SqliteTable for Post {
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static str = POST_COLUMNS;
    const SELECT_BY_ID: &'static str = SELECT_POST_BY_ID;
    const FIELDS: &'static [Field] = &[
        Field::Id,
        Field::CreatedAt,
        Field::HotScore,
        Field::BestScore,
        Field::ControversialScore,
        Field::Votes,
        Field::CommentCount,
    ];
    const PARENT_COLUMN: Option<&'static str> = Some("subreddit_id");
    const SELECT_PARENT_ID: Option<&'static str> = Some(SELECT_LIVE_SUBREDDIT_ID_BY_NAME);
    const TEXT_COLUMNS: &'static [&'static str] = &["title", "body"];

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        map_post_row(row)
    }
}

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn create_post(&self, post: &Post) -> Result<(), AppError> {
        sqlx::query(INSERT_POST)
            .bind(&post.id)
            .bind(&post.subreddit_id)
            .bind(&post.author)
            .bind(&post.title)
            .bind(&post.url)
            .bind(&post.body)
            .bind(post.votes)
            .bind(post.comment_count)
            .bind(post.hot_score)
            .bind(post.best_score)
            .bind(post.controversial_score)
            .bind(post.created_at.timestamp_millis())
            .bind(post.deleted_at.map(|at| at.timestamp_millis()))
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(SELECT_POST_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.as_ref().map(map_post_row).transpose()
    }

    async fn soft_delete_post(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(SOFT_DELETE_POST)
            .bind(id)
            .bind(at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
