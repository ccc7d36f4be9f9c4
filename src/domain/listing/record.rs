use super::field::{Field, RankValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Post,
    Comment,
    Subreddit,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
            EntityKind::Subreddit => "subreddit",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record the listing engine can page over.
///
/// The engine only ever reads these; creation and soft deletion belong to
/// other collaborators.
pub trait Listable: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Kind-specific rank fields. `Id` and `CreatedAt` are answered by
    /// [`Listable::field_value`] and need not be handled here.
    fn rank_value(&self, field: Field) -> Option<RankValue>;

    /// Id of the container this record is listed within, if any.
    fn parent_id(&self) -> Option<&str> {
        None
    }

    /// `needle` is already lowercased.
    fn matches_text(&self, _needle: &str) -> bool {
        false
    }

    fn field_value(&self, field: Field) -> Option<RankValue> {
        match field {
            Field::Id => Some(RankValue::Text(self.id().to_string())),
            Field::CreatedAt => Some(RankValue::Instant(self.created_at())),
            other => self.rank_value(other),
        }
    }

    fn is_live(&self) -> bool {
        self.deleted_at().is_none()
    }
}
