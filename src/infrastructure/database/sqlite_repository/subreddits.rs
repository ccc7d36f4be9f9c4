use super::mapper::map_subreddit_row;
use super::queries::{
    INSERT_SUBREDDIT, SELECT_SUBREDDIT_BY_ID, SELECT_SUBREDDIT_BY_NAME, SOFT_DELETE_SUBREDDIT,
    SUBREDDIT_COLUMNS,
};
use super::{SqliteRepository, SqliteTable};
use crate::application::ports::SubredditRepository;
use crate::domain::entities::Subreddit;
use crate::domain::listing::Field;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;

impl SqliteTable for Subreddit {
    const TABLE: &'static str = "subreddits";
    const COLUMNS: &'static str = SUBREDDIT_COLUMNS;
    const SELECT_BY_ID: &'static str = SELECT_SUBREDDIT_BY_ID;
    const FIELDS: &'static [Field] = &[Field::Id, Field::CreatedAt, Field::MemberCount];
    const TEXT_COLUMNS: &'static [&'static str] = &["name", "title", "description"];

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        map_subreddit_row(row)
    }
}

#[async_trait]
impl SubredditRepository for SqliteRepository {
    async fn create_subreddit(&self, subreddit: &Subreddit) -> Result<(), AppError> {
        sqlx::query(INSERT_SUBREDDIT)
            .bind(&subreddit.id)
            .bind(&subreddit.name)
            .bind(&subreddit.title)
            .bind(&subreddit.description)
            .bind(subreddit.member_count)
            .bind(subreddit.created_at.timestamp_millis())
            .bind(subreddit.deleted_at.map(|at| at.timestamp_millis()))
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn get_subreddit(&self, id: &str) -> Result<Option<Subreddit>, AppError> {
        let row = sqlx::query(SELECT_SUBREDDIT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.as_ref().map(map_subreddit_row).transpose()
    }

    async fn get_subreddit_by_name(&self, name: &str) -> Result<Option<Subreddit>, AppError> {
        let row = sqlx::query(SELECT_SUBREDDIT_BY_NAME)
            .bind(name)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.as_ref().map(map_subreddit_row).transpose()
    }

    async fn soft_delete_subreddit(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(SOFT_DELETE_SUBREDDIT)
            .bind(id)
            .bind(at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
