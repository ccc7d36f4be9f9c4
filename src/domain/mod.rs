pub mod entities;
pub mod listing;

pub use entities::{Comment, Post, Subreddit};
