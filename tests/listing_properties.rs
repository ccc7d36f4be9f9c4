mod common;

use chrono::TimeDelta;
use common::{backends, backends_with, base_time, letters, post_ids, DELETED_POST_ID};
use linkboard::application::ListingScope;
use linkboard::domain::listing::{LimitPolicy, PageRequest, SortDirection};
use linkboard::shared::{AppError, ListingConfig};

#[test]
fn limit_clamp_stays_in_bounds() {
    let policy = LimitPolicy::default();
    for n in [-1_000_000, -5, 0, 1, 10, 99, 100, 101, 150, i64::MAX] {
        let value = policy.clamp_value(n).into_value();
        assert!((1..=100).contains(&value), "{n} -> {value}");
    }
    assert_eq!(policy.clamp(None).into_value(), 25);
    assert_eq!(policy.clamp(Some("0")).into_value(), 1);
    assert_eq!(policy.clamp(Some("-5")).into_value(), 1);
    assert_eq!(policy.clamp(Some("150")).into_value(), 100);
    assert_eq!(policy.clamp(Some("10")).into_value(), 10);
}

#[tokio::test]
async fn limit_is_applied_by_every_adapter() {
    for (backend, service) in backends().await {
        let one = service
            .list_subreddit_posts("rust", &PageRequest::new().limit(0))
            .await
            .unwrap();
        assert_eq!(post_ids(&one.items), letters("post-", "f"), "{backend}");

        let two = service
            .list_subreddit_posts("rust", &PageRequest::new().limit("2"))
            .await
            .unwrap();
        assert_eq!(post_ids(&two.items), letters("post-", "fe"), "{backend}");

        let garbage = service
            .list_subreddit_posts("rust", &PageRequest::new().limit("lots"))
            .await
            .unwrap();
        assert_eq!(garbage.items.len(), 6, "{backend}");
    }
}

#[tokio::test]
async fn soft_deleted_records_never_appear() {
    for (backend, service) in backends().await {
        let pages = [
            service.list_posts(&PageRequest::new()).await.unwrap(),
            service
                .list_posts(&PageRequest::new().sort("hot"))
                .await
                .unwrap(),
            service
                .list_posts(&PageRequest::new().sort("top").window("all"))
                .await
                .unwrap(),
        ];
        for page in pages {
            assert!(page.items.iter().all(|post| post.deleted_at.is_none()), "{backend}");
            assert!(!post_ids(&page.items).contains(&DELETED_POST_ID.to_string()));
        }

        let directory = service.list_subreddits(&PageRequest::new()).await.unwrap();
        assert!(directory.items.iter().all(|sub| sub.deleted_at.is_none()), "{backend}");
    }
}

#[tokio::test]
async fn descending_default_sort_pages_both_ways() {
    for (backend, service) in backends().await {
        let first = service
            .list_subreddit_posts("rust", &PageRequest::new())
            .await
            .unwrap();
        assert_eq!(post_ids(&first.items), letters("post-", "fedcba"), "{backend}");
        assert_eq!(first.before_token, "post-f");
        assert_eq!(first.after_token, "post-a");

        let after = service
            .list_subreddit_posts("rust", &PageRequest::new().after("post-d"))
            .await
            .unwrap();
        assert_eq!(post_ids(&after.items), letters("post-", "cba"), "{backend}");

        let before = service
            .list_subreddit_posts("rust", &PageRequest::new().before("post-d"))
            .await
            .unwrap();
        assert_eq!(post_ids(&before.items), letters("post-", "fe"), "{backend}");
    }
}

#[tokio::test]
async fn following_after_tokens_walks_the_whole_listing() {
    for (backend, service) in backends().await {
        let mut seen = Vec::new();
        let mut request = PageRequest::new().limit(4);
        loop {
            let page = service.list_posts(&request).await.unwrap();
            if page.is_empty() {
                break;
            }
            seen.extend(post_ids(&page.items));
            request = PageRequest::new().limit(4).after(page.after_token);
        }
        assert_eq!(seen, letters("post-", "fedcba"), "{backend}");
    }
}

#[tokio::test]
async fn rank_sort_uses_anchor_score() {
    for (backend, service) in backends().await {
        let first = service
            .list_posts(&PageRequest::new().sort("hot"))
            .await
            .unwrap();
        assert_eq!(post_ids(&first.items), letters("post-", "caefdb"), "{backend}");

        let after = service
            .list_posts(&PageRequest::new().sort("hot").after("post-e"))
            .await
            .unwrap();
        assert_eq!(post_ids(&after.items), letters("post-", "fdb"), "{backend}");

        let before = service
            .list_posts(&PageRequest::new().sort("hot").before("post-e"))
            .await
            .unwrap();
        assert_eq!(post_ids(&before.items), letters("post-", "ca"), "{backend}");
    }
}

#[tokio::test]
async fn stale_cursor_returns_first_page() {
    for (backend, service) in backends().await {
        let unconstrained = service
            .list_subreddit_posts("rust", &PageRequest::new())
            .await
            .unwrap();

        for token in ["post-zzz", DELETED_POST_ID, "   "] {
            let page = service
                .list_subreddit_posts("rust", &PageRequest::new().after(token))
                .await
                .unwrap();
            assert_eq!(page, unconstrained, "{backend}: {token}");
        }
    }
}

#[tokio::test]
async fn ascending_sort_inverts_operators() {
    for (backend, service) in backends().await {
        let first = service
            .list_post_comments("post-a", &PageRequest::new().sort("old"))
            .await
            .unwrap();
        let ids: Vec<_> = first.items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, letters("cmt-", "123456"), "{backend}");

        let after = service
            .list_post_comments("post-a", &PageRequest::new().sort("old").after("cmt-3"))
            .await
            .unwrap();
        let ids: Vec<_> = after.items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, letters("cmt-", "456"), "{backend}");

        let before = service
            .list_post_comments("post-a", &PageRequest::new().sort("old").before("cmt-3"))
            .await
            .unwrap();
        let ids: Vec<_> = before.items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, letters("cmt-", "12"), "{backend}");

        let newest_first = service
            .list_post_comments("post-a", &PageRequest::new().after("cmt-3"))
            .await
            .unwrap();
        let ids: Vec<_> = newest_first.items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, letters("cmt-", "21"), "{backend}");
    }
}

#[tokio::test]
async fn windowed_sort_without_window_pages_by_identity() {
    for (backend, service) in backends().await {
        let page = service
            .list_posts(&PageRequest::new().sort("top"))
            .await
            .unwrap();
        assert_eq!(post_ids(&page.items), letters("post-", "abcdef"), "{backend}");

        let after = service
            .list_posts(&PageRequest::new().sort("top").after("post-b"))
            .await
            .unwrap();
        assert_eq!(post_ids(&after.items), letters("post-", "cdef"), "{backend}");

        let before = service
            .list_posts(&PageRequest::new().sort("top").before("post-c"))
            .await
            .unwrap();
        assert_eq!(post_ids(&before.items), letters("post-", "ab"), "{backend}");

        let unknown_window = service
            .list_posts(&PageRequest::new().sort("top").window("fortnight"))
            .await
            .unwrap();
        assert_eq!(unknown_window, page, "{backend}");
    }
}

#[tokio::test]
async fn window_cuts_off_older_records() {
    for (backend, service) in backends().await {
        // Posts are created at +1h..+6h; a one-hour window ending at +6h30m
        // keeps only F.
        let now = base_time() + TimeDelta::hours(6) + TimeDelta::minutes(30);
        let page = service
            .posts()
            .page_at(
                &ListingScope::all(),
                &PageRequest::new().sort("top").window("hour"),
                now,
            )
            .await
            .unwrap();
        assert_eq!(post_ids(&page.items), letters("post-", "f"), "{backend}");

        let ignored = service
            .posts()
            .page_at(
                &ListingScope::all(),
                &PageRequest::new().sort("new").window("hour"),
                now,
            )
            .await
            .unwrap();
        assert_eq!(ignored.items.len(), 6, "{backend}");
    }
}

#[tokio::test]
async fn both_cursors_yield_first_page() {
    for (backend, service) in backends().await {
        let unconstrained = service
            .list_subreddit_posts("rust", &PageRequest::new())
            .await
            .unwrap();
        let both = service
            .list_subreddit_posts(
                "rust",
                &PageRequest::new().before("post-e").after("post-b"),
            )
            .await
            .unwrap();
        assert_eq!(both, unconstrained, "{backend}");
    }
}

#[tokio::test]
async fn empty_result_has_empty_tokens() {
    for (backend, service) in backends().await {
        let past_the_end = service
            .list_subreddit_posts("rust", &PageRequest::new().after("post-a"))
            .await
            .unwrap();
        assert!(past_the_end.items.is_empty(), "{backend}");
        assert_eq!(past_the_end.before_token, "");
        assert_eq!(past_the_end.after_token, "");

        let empty_container = service
            .list_subreddit_posts("golang", &PageRequest::new())
            .await
            .unwrap();
        assert!(empty_container.is_empty(), "{backend}");

        let far_future = base_time() + TimeDelta::days(365);
        let windowed = service
            .posts()
            .page_at(
                &ListingScope::all(),
                &PageRequest::new().sort("top").window("week"),
                far_future,
            )
            .await
            .unwrap();
        assert!(windowed.is_empty(), "{backend}");
        assert_eq!(windowed.after_token, "");
    }
}

#[tokio::test]
async fn missing_containers_are_reported() {
    for (backend, service) in backends().await {
        for name in ["nope", "archived"] {
            let err = service
                .list_subreddit_posts(name, &PageRequest::new())
                .await
                .unwrap_err();
            assert!(err.is_container_not_found(), "{backend}: {name}");
        }

        let err = service
            .list_post_comments(DELETED_POST_ID, &PageRequest::new())
            .await
            .unwrap_err();
        assert!(err.is_container_not_found(), "{backend}");
    }
}

#[tokio::test]
async fn search_matches_text_case_insensitively() {
    for (backend, service) in backends().await {
        let posts = service
            .search_posts("POST C", None, &PageRequest::new())
            .await
            .unwrap();
        assert_eq!(post_ids(&posts.items), letters("post-", "c"), "{backend}");

        let in_rust = service
            .search_posts("body of", Some("rust"), &PageRequest::new().limit(2))
            .await
            .unwrap();
        assert_eq!(post_ids(&in_rust.items), letters("post-", "fe"), "{backend}");

        let err = service
            .search_posts("post", Some("nope"), &PageRequest::new())
            .await
            .unwrap_err();
        assert!(err.is_container_not_found(), "{backend}");

        let subs = service
            .search_subreddits("garbage collection", &PageRequest::new())
            .await
            .unwrap();
        let ids: Vec<_> = subs.items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["sub-rust".to_string()], "{backend}");

        let blank = service
            .search_subreddits("  ", &PageRequest::new())
            .await
            .unwrap_err();
        assert!(matches!(blank, AppError::InvalidInput(_)), "{backend}");
    }
}

#[tokio::test]
async fn subreddit_directory_and_popular_sorts() {
    for (backend, service) in backends().await {
        let directory = service.list_subreddits(&PageRequest::new()).await.unwrap();
        let ids: Vec<_> = directory.items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["sub-go".to_string(), "sub-rust".to_string()], "{backend}");

        let after = service
            .list_subreddits(&PageRequest::new().after("sub-go"))
            .await
            .unwrap();
        assert_eq!(after.items.len(), 1, "{backend}");
        assert_eq!(after.items[0].id, "sub-rust");

        let popular = service
            .list_subreddits(&PageRequest::new().sort("popular"))
            .await
            .unwrap();
        let names: Vec<_> = popular.items.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["golang".to_string(), "rust".to_string()], "{backend}");
    }
}

#[tokio::test]
async fn descending_identity_direction_reverses_directory_paging() {
    let mut config = ListingConfig::default();
    config.sorts.subreddits.identity_direction = SortDirection::Desc;

    for (backend, service) in backends_with(&config).await {
        let directory = service.list_subreddits(&PageRequest::new()).await.unwrap();
        let ids: Vec<_> = directory.items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["sub-rust".to_string(), "sub-go".to_string()], "{backend}");
        assert_eq!(directory.before_token, "sub-rust", "{backend}");
        assert_eq!(directory.after_token, "sub-go", "{backend}");

        let after = service
            .list_subreddits(&PageRequest::new().after("sub-rust"))
            .await
            .unwrap();
        let ids: Vec<_> = after.items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["sub-go".to_string()], "{backend}");

        let before = service
            .list_subreddits(&PageRequest::new().before("sub-go"))
            .await
            .unwrap();
        let ids: Vec<_> = before.items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["sub-rust".to_string()], "{backend}");
    }
}
