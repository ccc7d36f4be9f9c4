//! Pure listing engine: everything that turns a page request into a
//! [`ListingDirective`] without touching storage.

pub mod cursor;
pub mod directive;
pub mod field;
pub mod limit;
pub mod page;
pub mod record;
pub mod resolution;
pub mod sort;
pub mod time_window;

pub use cursor::{anchor_predicate, operator_for, select_cursor, CursorDirection, CursorToken};
pub use directive::{compose, Composition, FilterSet, ListingDirective, OrderKey};
pub use field::{Field, Operator, RangePredicate, RankValue, SortDirection};
pub use limit::LimitPolicy;
pub use page::{PageRequest, PageResult};
pub use record::{EntityKind, Listable};
pub use resolution::{FallbackReason, Resolution};
pub use sort::{SortCatalog, SortMode, SortResolver, SortRule, SortSpec, SortTable};
pub use time_window::{TimeWindow, TimeWindowResolver, TimeWindowRule};
