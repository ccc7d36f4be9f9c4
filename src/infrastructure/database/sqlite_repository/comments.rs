use super::mapper::map_comment_row;
use super::queries::{
    COMMENT_COLUMNS, INSERT_COMMENT, SELECT_COMMENT_BY_ID, SELECT_LIVE_POST_ID,
    SOFT_DELETE_COMMENT,
};
use super::{SqliteRepository, SqliteTable};
use crate::application::ports::CommentRepository;
use crate::domain::entities::Comment;
use crate::domain::listing::Field;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;

impl SqliteTable for Comment {
    const TABLE: &'static str = "comments";
    const COLUMNS: &'static str = COMMENT_COLUMNS;
    const SELECT_BY_ID: &'static str = SELECT_COMMENT_BY_ID;
    const FIELDS: &'static [Field] = &[
        Field::Id,
        Field::CreatedAt,
        Field::HotScore,
        Field::BestScore,
        Field::ControversialScore,
        Field::Votes,
    ];
    const PARENT_COLUMN: Option<&'static str> = Some("post_id");
    const SELECT_PARENT_ID: Option<&'static str> = Some(SELECT_LIVE_POST_ID);
    const TEXT_COLUMNS: &'static [&'static str] = &["body"];

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        map_comment_row(row)
    }
}

#[async_trait]
impl CommentRepository for SqliteRepository {
    async fn create_comment(&self, comment: &Comment) -> Result<(), AppError> {
        sqlx::query(INSERT_COMMENT)
            .bind(&comment.id)
            .bind(&comment.post_id)
            .bind(&comment.parent_comment_id)
            .bind(&comment.author)
            .bind(&comment.body)
            .bind(comment.votes)
            .bind(comment.hot_score)
            .bind(comment.best_score)
            .bind(comment.controversial_score)
            .bind(comment.created_at.timestamp_millis())
            .bind(comment.deleted_at.map(|at| at.timestamp_millis()))
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn get_comment(&self, id: &str) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query(SELECT_COMMENT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.as_ref().map(map_comment_row).transpose()
    }

    async fn soft_delete_comment(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(SOFT_DELETE_COMMENT)
            .bind(id)
            .bind(at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
