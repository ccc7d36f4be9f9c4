use crate::application::ports::CollectionAdapter;
use crate::domain::listing::{
    anchor_predicate, compose, select_cursor, Composition, CursorToken, FallbackReason,
    LimitPolicy, Listable, PageRequest, PageResult, RangePredicate, Resolution, SortResolver,
    SortSpec, TimeWindowResolver,
};
use crate::shared::config::ListingConfig;
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Where a listing is drawn from: everything, one container, and/or a
/// text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingScope {
    /// Key the adapter resolves to a container (a community name, a post id).
    pub parent_key: Option<String>,
    pub search: Option<String>,
}

impl ListingScope {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn within(parent_key: impl Into<String>) -> Self {
        Self {
            parent_key: Some(parent_key.into()),
            search: None,
        }
    }

    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Pages over one entity kind. Stateless between calls; every request is
/// resolved, composed and executed on its own.
pub struct ListingEngine<R: Listable> {
    collection: Arc<dyn CollectionAdapter<Record = R>>,
    sorts: SortResolver,
    windows: TimeWindowResolver,
    limits: LimitPolicy,
}

impl<R: Listable> ListingEngine<R> {
    pub fn new(collection: Arc<dyn CollectionAdapter<Record = R>>, config: &ListingConfig) -> Self {
        Self::with_parts(
            collection,
            SortResolver::new(Arc::new(config.sorts.clone())),
            TimeWindowResolver::new(&config.time_windows),
            config.limits,
        )
    }

    pub fn with_parts(
        collection: Arc<dyn CollectionAdapter<Record = R>>,
        sorts: SortResolver,
        windows: TimeWindowResolver,
        limits: LimitPolicy,
    ) -> Self {
        Self {
            collection,
            sorts,
            windows,
            limits,
        }
    }

    pub async fn page(
        &self,
        scope: &ListingScope,
        request: &PageRequest,
    ) -> Result<PageResult<R>, AppError> {
        self.page_at(scope, request, Utc::now()).await
    }

    /// Like [`ListingEngine::page`], with time windows measured back from `now`.
    pub async fn page_at(
        &self,
        scope: &ListingScope,
        request: &PageRequest,
        now: DateTime<Utc>,
    ) -> Result<PageResult<R>, AppError> {
        let parent_id = match scope.parent_key.as_deref() {
            Some(key) => {
                let parent = self
                    .collection
                    .find_parent(key)
                    .await?
                    .ok_or_else(|| AppError::ContainerNotFound(key.to_string()))?;
                Some(parent.id)
            }
            None => None,
        };

        let sort = settle(
            "sort",
            self.sorts.resolve(R::KIND, request.sort_name.as_deref()),
        );
        let window = settle(
            "time_window",
            self.windows.resolve_at(
                request.time_window_name.as_deref(),
                sort.requires_time_window,
                now,
            ),
        );
        let limit = settle("limit", self.limits.clamp(request.limit.as_deref()));
        let cursor = settle("cursor", self.resolve_cursor(&sort, request).await?);

        let directive = compose(Composition {
            sort: &sort,
            window: window.as_ref(),
            cursor: cursor.as_ref(),
            parent_id: parent_id.as_deref(),
            search: scope.search.as_deref(),
            limit,
        });

        let records = self
            .collection
            .find_many(&directive.filter, &directive.order, directive.limit)
            .await?;

        let page = PageResult::from_records(records);
        debug!(
            kind = %R::KIND,
            sort = %sort.name,
            items = page.items.len(),
            "listing page served"
        );
        Ok(page)
    }

    /// Resolves the request's cursor against a live anchor record. A token
    /// without a usable anchor leaves the page unconstrained.
    async fn resolve_cursor(
        &self,
        sort: &SortSpec,
        request: &PageRequest,
    ) -> Result<Resolution<Option<RangePredicate>>, AppError> {
        let selected = select_cursor(
            request.before_token.as_deref(),
            request.after_token.as_deref(),
        );
        let cursor: CursorToken = match selected {
            Resolution::Resolved(Some(cursor)) => cursor,
            Resolution::Resolved(None) => return Ok(Resolution::Resolved(None)),
            Resolution::Defaulted(_, reason) => return Ok(Resolution::Defaulted(None, reason)),
        };

        let anchor = self
            .collection
            .find_by_id(&cursor.token)
            .await?
            .filter(|record| record.is_live());

        Ok(
            match anchor.and_then(|anchor| anchor_predicate(sort, &cursor, &anchor)) {
                Some(predicate) => Resolution::Resolved(Some(predicate)),
                None => Resolution::Defaulted(None, FallbackReason::StaleCursor),
            },
        )
    }
}

fn settle<T>(parameter: &'static str, resolution: Resolution<T>) -> T {
    if let Some(reason) = resolution.fallback_reason() {
        debug!(parameter, reason = %reason, "listing parameter degraded to default");
    }
    resolution.into_value()
}
