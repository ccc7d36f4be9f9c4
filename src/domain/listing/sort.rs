use super::field::{Field, SortDirection};
use super::record::EntityKind;
use super::resolution::{FallbackReason, Resolution};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// What a sort name means for a given entity kind.
///
/// `comparison_field == None` means identity paging: records are ordered and
/// bounded by `id`, and `direction` is the kind's identity direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub name: String,
    pub comparison_field: Option<Field>,
    pub direction: SortDirection,
    pub requires_time_window: bool,
}

impl SortSpec {
    pub fn is_identity(&self) -> bool {
        self.comparison_field.is_none()
    }

    /// Field the listing is ordered and bounded by.
    pub fn order_field(&self) -> Field {
        self.comparison_field.unwrap_or(Field::Id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ordered by a rank field.
    Ranked {
        field: Field,
        direction: SortDirection,
    },
    /// Identity paging restricted to a trailing time window (e.g. `top`).
    Windowed,
    /// Identity paging without a window.
    Identity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub name: String,
    pub mode: SortMode,
}

impl SortRule {
    pub fn ranked(name: &str, field: Field, direction: SortDirection) -> Self {
        Self {
            name: name.to_string(),
            mode: SortMode::Ranked { field, direction },
        }
    }

    pub fn windowed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: SortMode::Windowed,
        }
    }

    pub fn identity(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: SortMode::Identity,
        }
    }
}

/// Sort names known for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTable {
    pub default_sort: String,
    pub identity_direction: SortDirection,
    pub rules: Vec<SortRule>,
}

impl SortTable {
    pub fn posts() -> Self {
        Self {
            default_sort: "new".to_string(),
            identity_direction: SortDirection::Asc,
            rules: vec![
                SortRule::ranked("new", Field::CreatedAt, SortDirection::Desc),
                SortRule::ranked("hot", Field::HotScore, SortDirection::Desc),
                SortRule::ranked("best", Field::BestScore, SortDirection::Desc),
                SortRule::ranked(
                    "controversial",
                    Field::ControversialScore,
                    SortDirection::Desc,
                ),
                SortRule::windowed("top"),
            ],
        }
    }

    pub fn comments() -> Self {
        Self {
            default_sort: "new".to_string(),
            identity_direction: SortDirection::Asc,
            rules: vec![
                SortRule::ranked("new", Field::CreatedAt, SortDirection::Desc),
                SortRule::ranked("old", Field::CreatedAt, SortDirection::Asc),
                SortRule::ranked("best", Field::BestScore, SortDirection::Desc),
                SortRule::ranked("hot", Field::HotScore, SortDirection::Desc),
                SortRule::ranked(
                    "controversial",
                    Field::ControversialScore,
                    SortDirection::Desc,
                ),
                SortRule::windowed("top"),
            ],
        }
    }

    pub fn subreddits() -> Self {
        Self {
            default_sort: "directory".to_string(),
            identity_direction: SortDirection::Asc,
            rules: vec![
                SortRule::identity("directory"),
                SortRule::ranked("new", Field::CreatedAt, SortDirection::Desc),
                SortRule::ranked("popular", Field::MemberCount, SortDirection::Desc),
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&SortRule> {
        self.rules
            .iter()
            .find(|rule| rule.name.eq_ignore_ascii_case(name))
    }

    fn spec_for(&self, rule: &SortRule) -> SortSpec {
        let (comparison_field, direction, requires_time_window) = match rule.mode {
            SortMode::Ranked { field, direction } => (Some(field), direction, false),
            SortMode::Windowed => (None, self.identity_direction, true),
            SortMode::Identity => (None, self.identity_direction, false),
        };
        SortSpec {
            name: rule.name.to_lowercase(),
            comparison_field,
            direction,
            requires_time_window,
        }
    }

    /// The table's default sort. A table whose default is not among its rules
    /// fails [`SortTable::validate`]; should one slip through, recency
    /// descending is used.
    pub fn default_spec(&self) -> SortSpec {
        match self.find(&self.default_sort) {
            Some(rule) => self.spec_for(rule),
            None => SortSpec {
                name: self.default_sort.to_lowercase(),
                comparison_field: Some(Field::CreatedAt),
                direction: SortDirection::Desc,
                requires_time_window: false,
            },
        }
    }

    pub fn validate(&self, kind: EntityKind) -> Result<(), AppError> {
        if self.find(&self.default_sort).is_none() {
            return Err(AppError::Configuration(format!(
                "default sort '{}' is not defined for {kind}",
                self.default_sort
            )));
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            let name = rule.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(AppError::Configuration(format!(
                    "empty sort name in {kind} table"
                )));
            }
            if !seen.insert(name) {
                return Err(AppError::Configuration(format!(
                    "duplicate sort '{}' in {kind} table",
                    rule.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCatalog {
    pub posts: SortTable,
    pub comments: SortTable,
    pub subreddits: SortTable,
}

impl Default for SortCatalog {
    fn default() -> Self {
        Self {
            posts: SortTable::posts(),
            comments: SortTable::comments(),
            subreddits: SortTable::subreddits(),
        }
    }
}

impl SortCatalog {
    pub fn table(&self, kind: EntityKind) -> &SortTable {
        match kind {
            EntityKind::Post => &self.posts,
            EntityKind::Comment => &self.comments,
            EntityKind::Subreddit => &self.subreddits,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.posts.validate(EntityKind::Post)?;
        self.comments.validate(EntityKind::Comment)?;
        self.subreddits.validate(EntityKind::Subreddit)
    }
}

/// Maps a requested sort name to a [`SortSpec`]. Never fails: unknown or
/// missing names resolve to the kind's default sort.
#[derive(Debug, Clone)]
pub struct SortResolver {
    catalog: Arc<SortCatalog>,
}

impl SortResolver {
    pub fn new(catalog: Arc<SortCatalog>) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, kind: EntityKind, name: Option<&str>) -> Resolution<SortSpec> {
        let table = self.catalog.table(kind);
        let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Resolution::Defaulted(table.default_spec(), FallbackReason::Missing);
        };

        match table.find(name) {
            Some(rule) => Resolution::Resolved(table.spec_for(rule)),
            None => Resolution::Defaulted(table.default_spec(), FallbackReason::Unrecognized),
        }
    }
}

impl Default for SortResolver {
    fn default() -> Self {
        Self::new(Arc::new(SortCatalog::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_post_sort_defaults_to_recency_descending() {
        let resolver = SortResolver::default();
        let resolution = resolver.resolve(EntityKind::Post, None);
        assert_eq!(resolution.fallback_reason(), Some(FallbackReason::Missing));
        let spec = resolution.into_value();
        assert_eq!(spec.name, "new");
        assert_eq!(spec.comparison_field, Some(Field::CreatedAt));
        assert_eq!(spec.direction, SortDirection::Desc);
        assert!(!spec.requires_time_window);
    }

    #[test]
    fn unknown_comment_sort_defaults_without_error() {
        let resolver = SortResolver::default();
        let resolution = resolver.resolve(EntityKind::Comment, Some("sideways"));
        assert_eq!(
            resolution.fallback_reason(),
            Some(FallbackReason::Unrecognized)
        );
        assert_eq!(resolution.into_value().name, "new");
    }

    #[test]
    fn top_is_windowed_identity_sort() {
        let resolver = SortResolver::default();
        let spec = resolver.resolve(EntityKind::Post, Some("TOP")).into_value();
        assert_eq!(spec.name, "top");
        assert!(spec.is_identity());
        assert!(spec.requires_time_window);
        assert_eq!(spec.direction, SortDirection::Asc);
        assert_eq!(spec.order_field(), Field::Id);
    }

    #[test]
    fn old_comment_sort_is_ascending() {
        let resolver = SortResolver::default();
        let resolution = resolver.resolve(EntityKind::Comment, Some(" old "));
        assert!(!resolution.is_defaulted());
        let spec = resolution.into_value();
        assert_eq!(spec.comparison_field, Some(Field::CreatedAt));
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn posts_have_no_ascending_sort() {
        let table = SortTable::posts();
        for rule in &table.rules {
            if let SortMode::Ranked { direction, .. } = rule.mode {
                assert_eq!(direction, SortDirection::Desc, "{}", rule.name);
            }
        }
    }

    #[test]
    fn subreddit_directory_pages_by_identity() {
        let resolver = SortResolver::default();
        let spec = resolver.resolve(EntityKind::Subreddit, None).into_value();
        assert_eq!(spec.name, "directory");
        assert!(spec.is_identity());
        assert!(!spec.requires_time_window);

        let popular = resolver
            .resolve(EntityKind::Subreddit, Some("popular"))
            .into_value();
        assert_eq!(popular.comparison_field, Some(Field::MemberCount));
    }

    #[test]
    fn validation_rejects_missing_default() {
        let mut table = SortTable::posts();
        table.default_sort = "rising".to_string();
        let err = table.validate(EntityKind::Post).unwrap_err();
        assert!(err.to_string().contains("rising"));
        // Still resolvable at runtime.
        assert_eq!(table.default_spec().comparison_field, Some(Field::CreatedAt));
    }

    #[test]
    fn validation_rejects_duplicate_names() {
        let mut table = SortTable::comments();
        table.rules.push(SortRule::windowed("Top"));
        assert!(table.validate(EntityKind::Comment).is_err());
        assert!(SortCatalog::default().validate().is_ok());
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = SortCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: SortCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
