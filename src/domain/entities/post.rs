use super::new_record_id;
use crate::domain::listing::{EntityKind, Field, Listable, RankValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub subreddit_id: String,
    pub author: String,
    pub title: String,
    pub url: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub votes: i64,
    pub comment_count: i64,
    pub hot_score: f64,
    pub best_score: f64,
    pub controversial_score: f64,
}

impl Post {
    pub fn new(subreddit_id: String, author: String, title: String) -> Self {
        Self::new_with_id(new_record_id(), subreddit_id, author, title, Utc::now())
    }

    pub fn new_with_id(
        id: String,
        subreddit_id: String,
        author: String,
        title: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subreddit_id,
            author,
            title,
            url: None,
            body: String::new(),
            created_at,
            deleted_at: None,
            votes: 0,
            comment_count: 0,
            hot_score: 0.0,
            best_score: 0.0,
            controversial_score: 0.0,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
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

impl Listable for Post {
    const KIND: EntityKind = EntityKind::Post;

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
            Field::CommentCount => Some(RankValue::Integer(self.comment_count)),
            _ => None,
        }
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.subreddit_id)
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_posts_get_time_ordered_ids() {
        let first = Post::new("s".into(), "alice".into(), "one".into());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = Post::new("s".into(), "alice".into(), "two".into());
        assert!(first.id < second.id);
    }

    #[test]
    fn soft_delete_keeps_first_tombstone() {
        let mut post = Post::new("s".into(), "alice".into(), "title".into());
        let first = Utc::now();
        post.soft_delete(first);
        post.soft_delete(first + chrono::Duration::seconds(5));
        assert_eq!(post.deleted_at, Some(first));
        assert!(!post.is_live());
    }

    #[test]
    fn search_matches_title_or_body() {
        let post = Post::new("s".into(), "alice".into(), "Rust 2024 edition".into())
            .with_body("Async closures are here");
        assert!(post.matches_text("edition"));
        assert!(post.matches_text("async"));
        assert!(!post.matches_text("python"));
    }

    #[test]
    fn rank_fields_expose_scores() {
        let post = Post::new("s".into(), "alice".into(), "t".into())
            .with_votes(7)
            .with_scores(1.5, 2.5, 0.5);
        assert_eq!(post.field_value(Field::Votes), Some(RankValue::Integer(7)));
        assert_eq!(post.field_value(Field::HotScore), Some(RankValue::Float(1.5)));
        assert_eq!(post.field_value(Field::MemberCount), None);
        assert_eq!(
            post.field_value(Field::Id),
            Some(RankValue::Text(post.id.clone()))
        );
    }
}
