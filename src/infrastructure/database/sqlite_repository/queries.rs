pub(super) const POST_COLUMNS: &str = "id, subreddit_id, author, title, url, body, votes, comment_count, \
     hot_score, best_score, controversial_score, created_at, deleted_at";

pub(super) const COMMENT_COLUMNS: &str = "id, post_id, parent_comment_id, author, body, votes, \
     hot_score, best_score, controversial_score, created_at, deleted_at";

pub(super) const SUBREDDIT_COLUMNS: &str =
    "id, name, title, description, member_count, created_at, deleted_at";

pub(super) const INSERT_POST: &str = r#"
    INSERT INTO posts (
        id, subreddit_id, author, title, url, body, votes, comment_count,
        hot_score, best_score, controversial_score, created_at, deleted_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
"#;

pub(super) const SELECT_POST_BY_ID: &str = r#"
    SELECT id, subreddit_id, author, title, url, body, votes, comment_count,
           hot_score, best_score, controversial_score, created_at, deleted_at
    FROM posts
    WHERE id = ?1
"#;

pub(super) const SOFT_DELETE_POST: &str = r#"
    UPDATE posts
    SET deleted_at = ?2
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const SELECT_LIVE_POST_ID: &str = r#"
    SELECT id FROM posts
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const INSERT_COMMENT: &str = r#"
    INSERT INTO comments (
        id, post_id, parent_comment_id, author, body, votes,
        hot_score, best_score, controversial_score, created_at, deleted_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub(super) const SELECT_COMMENT_BY_ID: &str = r#"
    SELECT id, post_id, parent_comment_id, author, body, votes,
           hot_score, best_score, controversial_score, created_at, deleted_at
    FROM comments
    WHERE id = ?1
"#;

pub(super) const SOFT_DELETE_COMMENT: &str = r#"
    UPDATE comments
    SET deleted_at = ?2
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const INSERT_SUBREDDIT: &str = r#"
    INSERT INTO subreddits (id, name, title, description, member_count, created_at, deleted_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub(super) const SELECT_SUBREDDIT_BY_ID: &str = r#"
    SELECT id, name, title, description, member_count, created_at, deleted_at
    FROM subreddits
    WHERE id = ?1
"#;

pub(super) const SELECT_SUBREDDIT_BY_NAME: &str = r#"
    SELECT id, name, title, description, member_count, created_at, deleted_at
    FROM subreddits
    WHERE name = ?1
"#;

pub(super) const SOFT_DELETE_SUBREDDIT: &str = r#"
    UPDATE subreddits
    SET deleted_at = ?2
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const SELECT_LIVE_SUBREDDIT_ID_BY_NAME: &str = r#"
    SELECT id FROM subreddits
    WHERE name = ?1 AND deleted_at IS NULL
"#;

pub(super) const COUNT_LISTING_TABLES: &str = r#"
    SELECT COUNT(*) FROM sqlite_master
    WHERE type = 'table' AND name IN ('subreddits', 'posts', 'comments')
"#;
