pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, DatabaseConfig, ListingConfig};
pub use error::{AppError, Result};
