use super::new_record_id;
use crate::domain::listing::{EntityKind, Field, Listable, RankValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub votes: i64,
    pub hot_score: f64,
    pub best_score: f64,
    pub controversial_score: f64,
}

impl Comment {
    pub fn new(post_id: String, author: String, body: String) -> Self {
        Self::new_with_id(new_record_id(), post_id, author, body, Utc::now())
    }

    pub fn new_with_id(
        id: String,
        post_id: String,
        author: String,
        body: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_id,
            parent_comment_id: None,
            author,
            body,
            created_at,
            deleted_at: None,
            votes: 0,
            hot_score: 0.0,
            best_score: 0.0,
            controversial_score: 0.0,
        }
    }

    pub fn reply_to(mut self, parent_comment_id: impl Into<String>) -> Self {
        self.parent_comment_id = Some(parent_comment_id.into());
        self
    }

    pub fn with_votes(mut self, votes: i64) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_scores(mut self, hot: f64, best: f64, controversial: f64) -> Self {
        self.hot_score = hot;
        self.best_score = best;
        self.controversial_score = controversial;
        self
    }

    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }
}

impl Listable for Comment {
    const KIND: EntityKind = EntityKind::Comment;

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
            Field::HotScore => Some(RankValue::Float(self.hot_score)),
            Field::BestScore => Some(RankValue::Float(self.best_score)),
            Field::ControversialScore => Some(RankValue::Float(self.controversial_score)),
            Field::Votes => Some(RankValue::Integer(self.votes)),
            _ => None,
        }
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.post_id)
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.body.to_lowercase().contains(needle)
    }
}
