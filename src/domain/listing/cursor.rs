use super::field::{Field, Operator, RangePredicate, RankValue, SortDirection};
use super::record::Listable;
use super::resolution::{FallbackReason, Resolution};
use super::sort::SortSpec;

/// Which side of the anchor the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    /// Toward the start of the list as sorted.
    Before,
    /// Toward the end of the list as sorted.
    After,
}

impl CursorDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorDirection::Before => "before",
            CursorDirection::After => "after",
        }
    }
}

/// An opaque cursor token (a record id) plus the side it was supplied for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorToken {
    pub direction: CursorDirection,
    pub token: String,
}

/// Picks the single cursor a request should honor.
///
/// Empty tokens count as absent. When both are present neither is honored;
/// callers get the unconstrained first page.
pub fn select_cursor(before: Option<&str>, after: Option<&str>) -> Resolution<Option<CursorToken>> {
    let before = before.map(str::trim).filter(|token| !token.is_empty());
    let after = after.map(str::trim).filter(|token| !token.is_empty());

    match (before, after) {
        (None, None) => Resolution::Resolved(None),
        (Some(_), Some(_)) => Resolution::Defaulted(None, FallbackReason::AmbiguousCursor),
        (Some(token), None) => Resolution::Resolved(Some(CursorToken {
            direction: CursorDirection::Before,
            token: token.to_string(),
        })),
        (None, Some(token)) => Resolution::Resolved(Some(CursorToken {
            direction: CursorDirection::After,
            token: token.to_string(),
        })),
    }
}

/// Operator that keeps `before` pointing at the start of the list and
/// `after` at its end, whichever way the field is sorted.
pub fn operator_for(cursor: CursorDirection, sort: SortDirection) -> Operator {
    match (sort, cursor) {
        (SortDirection::Desc, CursorDirection::Before) => Operator::Gt,
        (SortDirection::Desc, CursorDirection::After) => Operator::Lt,
        (SortDirection::Asc, CursorDirection::Before) => Operator::Lt,
        (SortDirection::Asc, CursorDirection::After) => Operator::Gt,
    }
}

/// Range predicate for a cursor whose anchor record has been loaded.
///
/// Identity sorts bound `id` by the raw token. Ranked sorts bound the
/// comparison field by the anchor's value; `None` if the anchor has no value
/// for that field.
pub fn anchor_predicate<R: Listable>(
    sort: &SortSpec,
    cursor: &CursorToken,
    anchor: &R,
) -> Option<RangePredicate> {
    let operator = operator_for(cursor.direction, sort.direction);
    match sort.comparison_field {
        None => Some(RangePredicate::new(
            Field::Id,
            operator,
            RankValue::Text(cursor.token.clone()),
        )),
        Some(field) => anchor
            .field_value(field)
            .map(|value| RangePredicate::new(field, operator, value)),
    }
}
