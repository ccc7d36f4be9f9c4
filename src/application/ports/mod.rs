pub mod collection;
pub mod repositories;

pub use collection::{CollectionAdapter, ParentRecord};
pub use repositories::{CommentRepository, PostRepository, SubredditRepository};
