pub mod ports;
pub mod services;

pub use services::{ListingEngine, ListingScope, ListingService};
