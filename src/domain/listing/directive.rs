use super::field::{Field, Operator, RangePredicate, RankValue, SortDirection};
use super::record::Listable;
use super::sort::SortSpec;
use super::time_window::TimeWindow;
use std::cmp::Ordering;

/// Conjunction of everything a listed record must satisfy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSet {
    pub exclude_deleted: bool,
    pub parent_id: Option<String>,
    /// Lowercased substring to search for.
    pub text: Option<String>,
    pub ranges: Vec<RangePredicate>,
}

impl FilterSet {
    pub fn live() -> Self {
        Self {
            exclude_deleted: true,
            ..Self::default()
        }
    }

    /// Adds a predicate; predicates on the same field are ANDed.
    pub fn constrain(&mut self, predicate: RangePredicate) {
        self.ranges.push(predicate);
    }

    pub fn predicates_on(&self, field: Field) -> impl Iterator<Item = &RangePredicate> {
        self.ranges.iter().filter(move |p| p.field == field)
    }

    pub fn matches<R: Listable>(&self, record: &R) -> bool {
        if self.exclude_deleted && !record.is_live() {
            return false;
        }
        if let Some(parent_id) = self.parent_id.as_deref() {
            if record.parent_id() != Some(parent_id) {
                return false;
            }
        }
        if let Some(text) = self.text.as_deref() {
            if !record.matches_text(text) {
                return false;
            }
        }
        self.ranges
            .iter()
            .all(|predicate| predicate.matches(record.field_value(predicate.field).as_ref()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey {
    pub field: Field,
    pub direction: SortDirection,
}

/// A filter + order + limit request a collection adapter can execute.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDirective {
    pub filter: FilterSet,
    pub order: Vec<OrderKey>,
    pub limit: u32,
}

impl ListingDirective {
    /// Order of two records under this directive. Records missing a value
    /// sort after those that have one.
    pub fn compare<R: Listable>(&self, a: &R, b: &R) -> Ordering {
        for key in &self.order {
            let ordering = match (a.field_value(key.field), b.field_value(key.field)) {
                (Some(left), Some(right)) => key
                    .direction
                    .apply(left.compare(&right).unwrap_or(Ordering::Equal)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Inputs the composer merges into one directive.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub sort: &'a SortSpec,
    pub window: Option<&'a TimeWindow>,
    pub cursor: Option<&'a RangePredicate>,
    pub parent_id: Option<&'a str>,
    pub search: Option<&'a str>,
    pub limit: u32,
}

/// Listing composer. Pure: performs no I/O.
pub fn compose(input: Composition<'_>) -> ListingDirective {
    let mut filter = FilterSet::live();
    filter.parent_id = input.parent_id.map(str::to_string);
    filter.text = input
        .search
        .map(|text| text.trim().to_lowercase())
        .filter(|text| !text.is_empty());

    if let Some(window) = input.window {
        filter.constrain(RangePredicate::new(
            Field::CreatedAt,
            Operator::Ge,
            RankValue::Instant(window.cutoff),
        ));
    }
    if let Some(cursor) = input.cursor {
        filter.constrain(cursor.clone());
    }

    ListingDirective {
        filter,
        order: vec![OrderKey {
            field: input.sort.order_field(),
            direction: input.sort.direction,
        }],
        limit: input.limit,
    }
}
