// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DailyTotals;

/// Fixed ID that this device's user posts, likes and comments under.
pub const LOCAL_USER_ID: &str = "currentUser";

/// Lightweight author projection shown on posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialUser {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A shared progress post.
///
/// Immutable after creation except for likes toggling, comments appending,
/// and deletion of the whole post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: SocialUser,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Snapshot of the author's totals at posting time
    pub daily_summary: DailyTotals,
    /// IDs of users who liked the post, in the order the likes arrived
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

/// Append-only comment under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: SocialUser,
    pub created_at: DateTime<Utc>,
    pub text: String,
}
