// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed flows driven through the app surface.

mod common;

use common::{make_food, reference_form, test_app};
use mealtrack::models::{MealCategory, LOCAL_USER_ID};

#[tokio::test]
async fn test_feed_starts_with_sample_posts_newest_first() {
    let app = test_app().await;

    let posts = app.feed().await;

    assert_eq!(posts.len(), 3);
    for pair in posts.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "feed must be sorted newest first"
        );
    }
    assert_eq!(posts[0].author.name, "Jane Doe");
}

#[tokio::test]
async fn test_shared_post_lands_on_top() {
    let app = test_app().await;
    app.complete_onboarding(reference_form()).await.unwrap();
    app.add_food(MealCategory::Lunch, make_food("Quinoa", 222.0, 8.0, 39.0, 3.6))
        .await
        .unwrap();

    let post = app
        .share_progress(Some("Lunch logged!".to_string()))
        .await;

    let posts = app.feed().await;
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].id, post.id);
    assert_eq!(posts[0].daily_summary.calories, 222.0);
    assert!(posts[0].likes.is_empty());
    assert!(posts[0].comments.is_empty());
}

#[tokio::test]
async fn test_like_unlike_roundtrip() {
    let app = test_app().await;

    let liked = app.toggle_like("post2").await.unwrap();
    assert!(liked.liked_by(LOCAL_USER_ID));

    let unliked = app.toggle_like("post2").await.unwrap();
    assert!(!unliked.liked_by(LOCAL_USER_ID));
    assert!(unliked.likes.is_empty());
}

#[tokio::test]
async fn test_seeded_likes_are_preserved_on_toggle() {
    let app = test_app().await;

    // post1 is already liked by user2 and user3.
    let post = app.toggle_like("post1").await.unwrap();

    assert_eq!(post.likes.len(), 3);
    assert!(post.liked_by("user2"));
    assert!(post.liked_by("user3"));
    assert!(post.liked_by(LOCAL_USER_ID));
}

#[tokio::test]
async fn test_comments_append_after_seeded_ones() {
    let app = test_app().await;
    app.complete_onboarding(reference_form()).await.unwrap();

    let post = app.comment_on("post1", "Inspiring!").await.unwrap();

    assert_eq!(post.comments.len(), 3);
    assert_eq!(post.comments[0].text, "Awesome job, keep it up!");
    assert_eq!(post.comments[1].text, "That's the spirit!");
    assert_eq!(post.comments[2].text, "Inspiring!");
    assert_eq!(post.comments[2].author.id, LOCAL_USER_ID);
}

#[tokio::test]
async fn test_delete_own_post() {
    let app = test_app().await;
    let post = app.share_progress(None).await;

    app.delete_post(&post.id).await;

    assert!(app.feed().await.iter().all(|p| p.id != post.id));
}

#[tokio::test]
async fn test_delete_unknown_post_changes_nothing() {
    let app = test_app().await;
    let before = app.feed().await;

    app.delete_post("does-not-exist").await;

    let after = app.feed().await;
    assert_eq!(before.len(), after.len());
}

#[tokio::test]
async fn test_unonboarded_share_still_works() {
    // Sharing before setup produces a post with an empty author name; the
    // store does not enforce onboarding.
    let app = test_app().await;

    let post = app.share_progress(None).await;

    assert_eq!(post.author.id, LOCAL_USER_ID);
    assert_eq!(post.author.name, "");
    assert!(post.author.avatar_url.is_none());
}
