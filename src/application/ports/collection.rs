use crate::domain::listing::{FilterSet, Listable, OrderKey};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// The container a scoped listing lives in, as reported by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRecord {
    pub id: String,
    pub key: String,
}

/// Storage seam the listing engine reads through.
///
/// Implementations must return records in `order`, apply every predicate in
/// `filter`, and never exclude anything `filter` does not ask for.
#[async_trait]
pub trait CollectionAdapter: Send + Sync {
    type Record: Listable;

    /// Returns the record even if it is soft-deleted; liveness is the
    /// caller's concern.
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Record>, AppError>;

    async fn find_many(
        &self,
        filter: &FilterSet,
        order: &[OrderKey],
        limit: u32,
    ) -> Result<Vec<Self::Record>, AppError>;

    /// Looks up the live container `parent_key` names. Kinds that are never
    /// listed within a container keep the default.
    async fn find_parent(&self, _parent_key: &str) -> Result<Option<ParentRecord>, AppError> {
        Ok(None)
    }
}
