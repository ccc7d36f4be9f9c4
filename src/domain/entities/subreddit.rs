use super::new_record_id;
use crate::domain::listing::{EntityKind, Field, Listable, RankValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community posts are submitted to. Looked up by `name` when it scopes
/// a post listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subreddit {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub member_count: i64,
}

impl Subreddit {
    pub fn new(name: String, title: String) -> Self {
        Self::new_with_id(new_record_id(), name, title, Utc::now())
    }

    pub fn new_with_id(id: String, name: String, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            title,
            description: None,
            created_at,
            deleted_at: None,
            member_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_members(mut self, member_count: i64) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }
}

impl Listable for Subreddit {
    const KIND: EntityKind = EntityKind::Subreddit;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn rank_value(&self, field: Field) -> Option<RankValue> {
        match field {
            Field::MemberCount => Some(RankValue::Integer(self.member_count)),
            _ => None,
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }
}
