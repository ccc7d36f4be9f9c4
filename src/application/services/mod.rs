pub mod listing_engine;
pub mod listing_service;

pub use listing_engine::{ListingEngine, ListingScope};
pub use listing_service::ListingService;
