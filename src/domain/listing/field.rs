use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sortable attributes a listing can order or bound by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    CreatedAt,
    HotScore,
    BestScore,
    ControversialScore,
    Votes,
    CommentCount,
    MemberCount,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::CreatedAt => "created_at",
            Field::HotScore => "hot_score",
            Field::BestScore => "best_score",
            Field::ControversialScore => "controversial_score",
            Field::Votes => "votes",
            Field::CommentCount => "comment_count",
            Field::MemberCount => "member_count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Value of a rank field, or a raw identifier for identity paging.
#[derive(Debug, Clone, PartialEq)]
pub enum RankValue {
    Integer(i64),
    Float(f64),
    Instant(DateTime<Utc>),
    Text(String),
}

impl RankValue {
    /// Compares two values of compatible kinds. Integers and floats compare
    /// numerically under IEEE 754 total order, so NaN ranks above every
    /// number; any other mix is incomparable.
    pub fn compare(&self, other: &RankValue) -> Option<Ordering> {
        match (self, other) {
            (RankValue::Integer(a), RankValue::Integer(b)) => Some(a.cmp(b)),
            (RankValue::Float(a), RankValue::Float(b)) => Some(a.total_cmp(b)),
            (RankValue::Integer(a), RankValue::Float(b)) => Some((*a as f64).total_cmp(b)),
            (RankValue::Float(a), RankValue::Integer(b)) => Some(a.total_cmp(&(*b as f64))),
            (RankValue::Instant(a), RankValue::Instant(b)) => Some(a.cmp(b)),
            (RankValue::Text(a), RankValue::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<&str> for RankValue {
    fn from(value: &str) -> Self {
        RankValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for RankValue {
    fn from(value: DateTime<Utc>) -> Self {
        RankValue::Instant(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    Gt,
    Le,
    Ge,
}

impl Operator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
        }
    }

    /// `ordering` is the candidate compared against the bound.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Lt => ordering == Ordering::Less,
            Operator::Gt => ordering == Ordering::Greater,
            Operator::Le => ordering != Ordering::Greater,
            Operator::Ge => ordering != Ordering::Less,
        }
    }
}

/// `field <operator> value`
#[derive(Debug, Clone, PartialEq)]
pub struct RangePredicate {
    pub field: Field,
    pub operator: Operator,
    pub value: RankValue,
}

impl RangePredicate {
    pub fn new(field: Field, operator: Operator, value: RankValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    /// Incomparable or missing values never match.
    pub fn matches(&self, candidate: Option<&RankValue>) -> bool {
        candidate
            .and_then(|candidate| candidate.compare(&self.value))
            .is_some_and(|ordering| self.operator.accepts(ordering))
    }
}
