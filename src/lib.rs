//! Listing and pagination engine for a link-aggregator backend.
//!
//! Posts, comments and communities are paged through one generic engine:
//! a page request is resolved into a sort, an optional time window, an
//! optional cursor predicate and a clamped limit, composed into a
//! [`domain::listing::ListingDirective`] and executed by a
//! [`application::ports::CollectionAdapter`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
