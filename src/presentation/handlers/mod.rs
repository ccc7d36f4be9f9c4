pub mod listing_handler;

pub use listing_handler::ListingHandler;
