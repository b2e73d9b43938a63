// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory community feed.
//!
//! Posts live for the lifetime of the process only. The store hands out
//! clones so callers never hold references into the shared list.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Comment, DailyTotals, Post, SocialUser};

/// Shared store of community posts.
pub struct FeedStore {
    posts: Mutex<Vec<Post>>,
}

impl FeedStore {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
        }
    }

    /// Create a feed pre-populated with sample posts, so the community
    /// screen has content before anyone shares.
    pub fn with_sample_posts() -> Self {
        Self {
            posts: Mutex::new(sample_posts()),
        }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Vec<Post> {
        let posts = self.posts.lock().await;
        let mut out = posts.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Publish a new post and return it.
    pub async fn create_post(
        &self,
        author: SocialUser,
        message: Option<String>,
        daily_summary: DailyTotals,
    ) -> Post {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            author,
            created_at: Utc::now(),
            message,
            daily_summary,
            likes: Vec::new(),
            comments: Vec::new(),
        };

        let mut posts = self.posts.lock().await;
        posts.insert(0, post.clone());
        tracing::debug!(post_id = %post.id, "Created post");
        post
    }

    /// Add or remove `user_id` from a post's likes.
    ///
    /// Returns the updated post, or `None` if no post has that id.
    pub async fn toggle_like(&self, post_id: &str, user_id: &str) -> Option<Post> {
        let mut posts = self.posts.lock().await;
        let post = posts.iter_mut().find(|p| p.id == post_id)?;

        if let Some(pos) = post.likes.iter().position(|id| id == user_id) {
            post.likes.remove(pos);
        } else {
            post.likes.push(user_id.to_string());
        }
        Some(post.clone())
    }

    /// Append a comment to a post.
    ///
    /// Returns the updated post, or `None` if no post has that id.
    pub async fn add_comment(
        &self,
        post_id: &str,
        author: SocialUser,
        text: String,
    ) -> Option<Post> {
        let mut posts = self.posts.lock().await;
        let post = posts.iter_mut().find(|p| p.id == post_id)?;

        post.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            author,
            created_at: Utc::now(),
            text,
        });
        Some(post.clone())
    }

    /// Remove a post. Unknown ids are ignored.
    pub async fn delete_post(&self, post_id: &str) {
        let mut posts = self.posts.lock().await;
        posts.retain(|p| p.id != post_id);
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_user(id: &str, name: &str) -> SocialUser {
    SocialUser {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/40?u={id}")),
    }
}

fn sample_posts() -> Vec<Post> {
    let jane = sample_user("user1", "Jane Doe");
    let john = sample_user("user2", "John Smith");
    let emily = sample_user("user3", "Emily White");
    let now = Utc::now();

    vec![
        Post {
            id: "post1".to_string(),
            author: jane.clone(),
            created_at: now - Duration::hours(1),
            message: Some(
                "Feeling great after a long walk and a healthy lunch! \
                 Hitting my protein goals today. 💪"
                    .to_string(),
            ),
            daily_summary: DailyTotals {
                calories: 1850.0,
                protein: 120.0,
                carbs: 180.0,
                fat: 70.0,
            },
            likes: vec!["user2".to_string(), "user3".to_string()],
            comments: vec![
                sample_comment("c1", &emily, now - Duration::minutes(59), "Awesome job, keep it up!"),
                sample_comment("c2", &john, now - Duration::minutes(58), "That's the spirit!"),
            ],
        },
        Post {
            id: "post2".to_string(),
            author: john,
            created_at: now - Duration::days(1),
            message: Some(
                "A bit over my calorie goal today, but it was worth it for pizza night. \
                 Back on track tomorrow!"
                    .to_string(),
            ),
            daily_summary: DailyTotals {
                calories: 2500.0,
                protein: 90.0,
                carbs: 300.0,
                fat: 100.0,
            },
            likes: Vec::new(),
            comments: Vec::new(),
        },
        Post {
            id: "post3".to_string(),
            author: emily,
            created_at: now - Duration::days(2),
            message: Some(
                "Check out this amazing salad I made for dinner. So colorful and delicious."
                    .to_string(),
            ),
            daily_summary: DailyTotals {
                calories: 1600.0,
                protein: 80.0,
                carbs: 150.0,
                fat: 80.0,
            },
            likes: vec!["user1".to_string()],
            comments: vec![sample_comment(
                "c3",
                &jane,
                now - Duration::days(2) + Duration::minutes(13),
                "That looks so good! Recipe?",
            )],
        },
    ]
}

fn sample_comment(id: &str, author: &SocialUser, at: DateTime<Utc>, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.clone(),
        created_at: at,
        text: text.to_string(),
    }
}
