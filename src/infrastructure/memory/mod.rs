use crate::application::ports::{CollectionAdapter, ParentRecord};
use crate::domain::listing::{FilterSet, ListingDirective, Listable, OrderKey};
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Collection adapter that evaluates directives against records held in
/// process. Containers are registered by key with [`InMemoryCollection::add_parent`].
pub struct InMemoryCollection<R> {
    records: RwLock<Vec<R>>,
    parents: RwLock<HashMap<String, String>>,
}

impl<R: Listable> Default for InMemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Listable> InMemoryCollection<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
            parents: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, record: R) {
        self.records.write().await.push(record);
    }

    /// Applies `update` to the record with `id`; returns whether it exists.
    pub async fn modify(&self, id: &str, update: impl FnOnce(&mut R)) -> bool {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                update(record);
                true
            }
            None => false,
        }
    }

    pub async fn add_parent(&self, key: impl Into<String>, id: impl Into<String>) {
        self.parents.write().await.insert(key.into(), id.into());
    }

    pub async fn remove_parent(&self, key: &str) {
        self.parents.write().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Listable> CollectionAdapter for InMemoryCollection<R> {
    type Record = R;

    async fn find_by_id(&self, id: &str) -> Result<Option<R>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn find_many(
        &self,
        filter: &FilterSet,
        order: &[OrderKey],
        limit: u32,
    ) -> Result<Vec<R>, AppError> {
        let directive = ListingDirective {
            filter: filter.clone(),
            order: order.to_vec(),
            limit,
        };

        let mut matched: Vec<R> = {
            let records = self.records.read().await;
            records
                .iter()
                .filter(|record| directive.filter.matches(*record))
                .cloned()
                .collect()
        };
        // Stable, so ties keep insertion order.
        matched.sort_by(|a, b| directive.compare(a, b));
        matched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(matched)
    }

    async fn find_parent(&self, parent_key: &str) -> Result<Option<ParentRecord>, AppError> {
        let parents = self.parents.read().await;
        Ok(parents.get(parent_key).map(|id| ParentRecord {
            id: id.clone(),
            key: parent_key.to_string(),
        }))
    }
}
