pub mod database;
pub mod memory;

pub use database::{ConnectionPool, SqliteCollection, SqliteRepository};
pub use memory::InMemoryCollection;
