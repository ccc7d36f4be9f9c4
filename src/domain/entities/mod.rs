pub mod comment;
pub mod post;
pub mod subreddit;

pub use comment::Comment;
pub use post::Post;
pub use subreddit::Subreddit;

/// Time-ordered identifier for new records, so identity order follows
/// creation order.
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
