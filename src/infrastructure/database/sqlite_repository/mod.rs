use super::ConnectionPool;
use crate::application::ports::{CollectionAdapter, ParentRecord};
use crate::domain::listing::{Field, FilterSet, Listable, OrderKey};
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};
use std::marker::PhantomData;

mod comments;
mod directive;
mod mapper;
mod posts;
mod queries;
mod subreddits;

/// Write-side store for posts, comments and communities.
pub struct SqliteRepository {
    pool: ConnectionPool,
}

impl SqliteRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub async fn initialize(&self) -> Result<(), AppError> {
        self.pool.migrate().await?;
        Ok(())
    }

    /// True once every listing table exists. Connection failures are errors.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        let tables: i64 = sqlx::query_scalar(queries::COUNT_LISTING_TABLES)
            .fetch_one(self.pool.get_pool())
            .await?;
        Ok(tables == 3)
    }

    pub fn collection<R: SqliteTable>(&self) -> SqliteCollection<R> {
        SqliteCollection::new(self.pool.clone())
    }
}

/// How a listable record kind is laid out in SQLite.
pub trait SqliteTable: Listable {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    const SELECT_BY_ID: &'static str;
    /// Rank fields with a backing column.
    const FIELDS: &'static [Field];
    /// Column holding the container id, for kinds listed within one.
    const PARENT_COLUMN: Option<&'static str> = None;
    /// Resolves a container key to the live container's id.
    const SELECT_PARENT_ID: Option<&'static str> = None;
    const TEXT_COLUMNS: &'static [&'static str] = &[];

    fn from_row(row: &SqliteRow) -> Result<Self, AppError>;

    fn stores(field: Field) -> bool {
        directive::stores_field(Self::FIELDS, field)
    }
}

/// Collection adapter over one table.
pub struct SqliteCollection<R> {
    pool: ConnectionPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> SqliteCollection<R> {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: SqliteTable> CollectionAdapter for SqliteCollection<R> {
    type Record = R;

    async fn find_by_id(&self, id: &str) -> Result<Option<R>, AppError> {
        let row = sqlx::query(R::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.as_ref().map(R::from_row).transpose()
    }

    async fn find_many(
        &self,
        filter: &FilterSet,
        order: &[OrderKey],
        limit: u32,
    ) -> Result<Vec<R>, AppError> {
        let mut builder = directive::listing_query::<R>(filter, order, limit);
        let rows = builder.build().fetch_all(self.pool.get_pool()).await?;
        rows.iter().map(R::from_row).collect()
    }

    async fn find_parent(&self, parent_key: &str) -> Result<Option<ParentRecord>, AppError> {
        let Some(sql) = R::SELECT_PARENT_ID else {
            return Ok(None);
        };
        let row = sqlx::query(sql)
            .bind(parent_key)
            .fetch_optional(self.pool.get_pool())
            .await?;
        match row {
            Some(row) => Ok(Some(ParentRecord {
                id: row.try_get("id")?,
                key: parent_key.to_string(),
            })),
            None => Ok(None),
        }
    }
}
