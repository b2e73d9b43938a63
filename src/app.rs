// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application shell wiring stores and services together.
//!
//! This is the composition root a frontend drives. It owns:
//! - Profile and daily-log stores backed by local storage
//! - The Gemini inference client and the built-in food catalog
//! - The in-memory community feed
//! - The pending analysis awaiting user confirmation
//! - Request tokens that let late analyze/search results be discarded
//!
//! Every intent is an independent async operation. Persistence failures are
//! logged and swallowed so the session continues on in-memory state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    AnalyzedFood, DailyLog, DailyTotals, FoodItem, Gender, MealCategory, NewFood, Post,
    ProfileState, SocialUser, UserProfile, LOCAL_USER_ID,
};
use crate::services::{
    calculate_goals, ActivityLevel, FeedStore, FoodCatalog, InferenceClient, InferenceError,
    WeightGoal,
};
use crate::storage::{LocalStorage, LogStore, ProfileStore};

/// Quiet period before a search query is actually issued.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Input collected by the one-time setup flow.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: WeightGoal,
}

/// The client core. One instance per running app.
pub struct App {
    profile_store: ProfileStore,
    log_store: LogStore,
    inference: InferenceClient,
    catalog: FoodCatalog,
    feed: FeedStore,
    profile: Mutex<ProfileState>,
    pending_analysis: Mutex<Option<AnalyzedFood>>,
    analyze_requests: RequestTracker,
    search_requests: RequestTracker,
}

impl App {
    /// Build the app from configuration, loading persisted state.
    ///
    /// Without a data directory everything stays in memory. A data directory
    /// that cannot be created is logged and the app continues in memory;
    /// storage trouble is never fatal.
    pub async fn new(config: Config) -> Self {
        let storage = match config.data_dir.clone() {
            Some(dir) => match LocalStorage::new(dir).await {
                Ok(storage) => storage,
                Err(e) => {
                    tracing::warn!(error = %e, "Storage unavailable, continuing in memory");
                    LocalStorage::new_in_memory()
                }
            },
            None => LocalStorage::new_in_memory(),
        };

        let profile_store = ProfileStore::new(storage.clone());
        let log_store = LogStore::new(storage).await;
        let profile = profile_store.load().await;

        Self {
            inference: InferenceClient::new(&config),
            catalog: FoodCatalog::new(),
            feed: FeedStore::with_sample_posts(),
            profile_store,
            log_store,
            profile: Mutex::new(profile),
            pending_analysis: Mutex::new(None),
            analyze_requests: RequestTracker::default(),
            search_requests: RequestTracker::default(),
        }
    }

    // ─── Profile & Onboarding ────────────────────────────────────

    /// Whether a profile with a name has been saved.
    pub async fn is_onboarded(&self) -> bool {
        self.profile.lock().await.is_onboarded()
    }

    /// Current profile. Defaults (with default goals) when unonboarded.
    pub async fn profile(&self) -> UserProfile {
        self.profile.lock().await.profile()
    }

    /// Finish the setup wizard: compute goals from the collected
    /// demographics and persist the new profile.
    pub async fn complete_onboarding(&self, form: OnboardingForm) -> Result<UserProfile> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Please enter your name.".to_string()));
        }

        let goals = calculate_goals(
            form.age,
            form.weight_kg,
            form.height_cm,
            form.gender,
            form.activity_level,
            form.goal,
        );

        let profile = UserProfile {
            name,
            age: form.age,
            weight_kg: form.weight_kg,
            height_cm: form.height_cm,
            gender: form.gender,
            goals,
            avatar_url: None,
        };

        tracing::info!(name = %profile.name, "Onboarding complete");
        self.store_profile(profile.clone()).await;
        Ok(profile)
    }

    /// Replace the profile with an edited version, goals included.
    ///
    /// The profile editor lets the user override goal numbers directly, so
    /// nothing is recomputed here.
    pub async fn update_profile(&self, profile: UserProfile) -> UserProfile {
        self.store_profile(profile.clone()).await;
        profile
    }

    /// Update session state and persist best-effort.
    async fn store_profile(&self, profile: UserProfile) {
        if let Err(e) = self.profile_store.save(&profile).await {
            tracing::warn!(error = %e, "Failed to persist profile, keeping in-memory copy");
        }
        *self.profile.lock().await = ProfileState::from_profile(profile);
    }

    // ─── Daily Log ───────────────────────────────────────────────

    /// Today's log together with its date.
    pub async fn daily_log(&self) -> (NaiveDate, DailyLog) {
        self.log_store.current().await
    }

    /// Totals summed across all of today's categories.
    pub async fn daily_totals(&self) -> DailyTotals {
        let (_, log) = self.log_store.current().await;
        log.totals()
    }

    /// Add a food to today's log (manual entry, or a picked search result).
    pub async fn add_food(&self, category: MealCategory, food: NewFood) -> Result<FoodItem> {
        if food.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter a name for this food.".to_string(),
            ));
        }
        Ok(self.log_store.add_food(category, food).await)
    }

    /// Remove a logged food by id. Returns whether anything was removed.
    pub async fn remove_food(&self, category: MealCategory, id: &str) -> bool {
        self.log_store.remove_food(category, id).await
    }

    // ─── Meal Analysis ───────────────────────────────────────────

    /// Analyze a free-text meal description.
    ///
    /// `Ok(None)` means a newer analysis was started while this one was in
    /// flight and its result was discarded. On success the result is held as
    /// the pending analysis until confirmed or discarded.
    pub async fn analyze_description(&self, description: &str) -> Result<Option<AnalyzedFood>> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::InvalidInput(
                "Please describe your meal or upload a photo.".to_string(),
            ));
        }

        let token = self.analyze_requests.begin();
        let result = self.inference.analyze_text(description).await;
        self.finish_analysis(token, result).await
    }

    /// Analyze a meal photo.
    pub async fn analyze_photo(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Option<AnalyzedFood>> {
        if image.is_empty() {
            return Err(AppError::InvalidInput(
                "Please describe your meal or upload a photo.".to_string(),
            ));
        }

        let token = self.analyze_requests.begin();
        let result = self.inference.analyze_image(image, mime_type).await;
        self.finish_analysis(token, result).await
    }

    /// Apply an analysis result unless a newer request has superseded it.
    /// Failures clear any pending analysis so the flow resets cleanly.
    async fn finish_analysis(
        &self,
        token: u64,
        result: std::result::Result<AnalyzedFood, InferenceError>,
    ) -> Result<Option<AnalyzedFood>> {
        if !self.analyze_requests.is_current(token) {
            tracing::debug!("Discarding stale analysis result");
            return Ok(None);
        }

        match result {
            Ok(food) => {
                *self.pending_analysis.lock().await = Some(food.clone());
                Ok(Some(food))
            }
            Err(e) => {
                *self.pending_analysis.lock().await = None;
                Err(e.into())
            }
        }
    }

    /// The analysis waiting for confirmation, if any.
    pub async fn pending_analysis(&self) -> Option<AnalyzedFood> {
        self.pending_analysis.lock().await.clone()
    }

    /// Confirm the pending analysis into today's log.
    pub async fn confirm_analysis(&self, category: MealCategory) -> Result<FoodItem> {
        let food = self.pending_analysis.lock().await.take().ok_or_else(|| {
            AppError::InvalidInput("There is no analyzed meal to confirm.".to_string())
        })?;

        Ok(self.log_store.add_food(category, food.into()).await)
    }

    /// Drop the pending analysis (user cancelled or closed the flow).
    pub async fn discard_analysis(&self) {
        *self.pending_analysis.lock().await = None;
    }

    // ─── Catalog Search ──────────────────────────────────────────

    /// Debounced catalog search.
    ///
    /// Waits out the quiet period first; if another search starts in the
    /// meantime this one yields `None` instead of stale results.
    pub async fn search_foods(&self, query: &str) -> Option<Vec<AnalyzedFood>> {
        let token = self.search_requests.begin();
        tokio::time::sleep(SEARCH_DEBOUNCE).await;

        if !self.search_requests.is_current(token) {
            return None;
        }
        Some(self.catalog.search(query))
    }

    // ─── Tips ────────────────────────────────────────────────────

    /// Ask for a coaching tip based on the profile and today's totals.
    pub async fn daily_tip(&self) -> Result<String> {
        let profile = self.profile().await;
        let totals = self.daily_totals().await;
        Ok(self.inference.daily_tip(&profile, &totals).await?)
    }

    // ─── Community Feed ──────────────────────────────────────────

    /// The feed, newest post first.
    pub async fn feed(&self) -> Vec<Post> {
        self.feed.list().await
    }

    /// The local user as seen by the feed, projected from the profile.
    pub async fn local_user(&self) -> SocialUser {
        let profile = self.profile().await;
        SocialUser {
            id: LOCAL_USER_ID.to_string(),
            name: profile.name,
            avatar_url: profile.avatar_url,
        }
    }

    /// Share today's totals to the feed with an optional message.
    pub async fn share_progress(&self, message: Option<String>) -> Post {
        let author = self.local_user().await;
        let totals = self.daily_totals().await;
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        self.feed.create_post(author, message, totals).await
    }

    /// Toggle the local user's like on a post.
    pub async fn toggle_like(&self, post_id: &str) -> Result<Post> {
        self.feed
            .toggle_like(post_id, LOCAL_USER_ID)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))
    }

    /// Comment on a post as the local user.
    pub async fn comment_on(&self, post_id: &str, text: &str) -> Result<Post> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("Please enter a comment.".to_string()));
        }

        let author = self.local_user().await;
        self.feed
            .add_comment(post_id, author, text.to_string())
            .await
            .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))
    }

    /// Delete a post. Unknown ids are ignored.
    pub async fn delete_post(&self, post_id: &str) {
        self.feed.delete_post(post_id).await;
    }
}

/// Monotonic token source for in-flight request tracking.
///
/// A caller takes a token before starting a slow operation and checks it is
/// still the newest before applying the result, so a late response from an
/// abandoned request never overwrites a newer one.
#[derive(Default)]
struct RequestTracker {
    counter: AtomicU64,
}

impl RequestTracker {
    fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn make_app() -> App {
        App::new(Config::default()).await
    }

    fn make_form() -> OnboardingForm {
        OnboardingForm {
            name: "Maria".to_string(),
            age: Some(30),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Gender::Male,
            activity_level: ActivityLevel::Light,
            goal: WeightGoal::Maintain,
        }
    }

    fn make_analyzed() -> AnalyzedFood {
        AnalyzedFood {
            name: "Chicken salad".to_string(),
            calories: 420.0,
            protein: 35.0,
            carbohydrates: 12.0,
            fat: 25.0,
        }
    }

    #[tokio::test]
    async fn test_new_app_is_unonboarded() {
        let app = make_app().await;

        assert!(!app.is_onboarded().await);
        assert_eq!(app.profile().await.goals.calories, 2000.0);
    }

    #[tokio::test]
    async fn test_complete_onboarding_computes_goals() {
        let app = make_app().await;

        let profile = app.complete_onboarding(make_form()).await.unwrap();

        assert!(app.is_onboarded().await);
        assert_eq!(profile.goals.calories, 2267.0);
        assert_eq!(profile.goals.protein, 170.0);
        assert_eq!(profile.goals.carbs, 227.0);
        assert_eq!(profile.goals.fat, 76.0);
    }

    #[tokio::test]
    async fn test_complete_onboarding_requires_name() {
        let app = make_app().await;
        let mut form = make_form();
        form.name = "   ".to_string();

        let result = app.complete_onboarding(form).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(!app.is_onboarded().await);
    }

    #[tokio::test]
    async fn test_update_profile_changes_session() {
        let app = make_app().await;
        app.complete_onboarding(make_form()).await.unwrap();

        let mut profile = app.profile().await;
        profile.goals.calories = 1800.0;
        app.update_profile(profile).await;

        assert_eq!(app.profile().await.goals.calories, 1800.0);
    }

    #[tokio::test]
    async fn test_add_and_remove_food_restores_totals() {
        let app = make_app().await;
        let before = app.daily_totals().await;

        let item = app
            .add_food(
                MealCategory::Lunch,
                NewFood {
                    name: "Rice bowl".to_string(),
                    calories: 500.0,
                    protein: 12.0,
                    carbs: 90.0,
                    fat: 8.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(app.daily_totals().await.calories, before.calories + 500.0);

        assert!(app.remove_food(MealCategory::Lunch, &item.id).await);
        assert_eq!(app.daily_totals().await, before);
    }

    #[tokio::test]
    async fn test_add_food_requires_name() {
        let app = make_app().await;

        let result = app
            .add_food(
                MealCategory::Snacks,
                NewFood {
                    name: "  ".to_string(),
                    calories: 100.0,
                    protein: 0.0,
                    carbs: 0.0,
                    fat: 0.0,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_analyze_description_requires_input() {
        let app = make_app().await;

        let result = app.analyze_description("   ").await;

        match result {
            Err(AppError::InvalidInput(msg)) => {
                assert_eq!(msg, "Please describe your meal or upload a photo.");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze_photo_requires_image() {
        let app = make_app().await;

        let result = app.analyze_photo(&[], "image/png").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_confirm_analysis_without_pending_fails() {
        let app = make_app().await;

        let result = app.confirm_analysis(MealCategory::Breakfast).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_confirm_analysis_adds_to_log() {
        let app = make_app().await;
        *app.pending_analysis.lock().await = Some(make_analyzed());

        let item = app.confirm_analysis(MealCategory::Dinner).await.unwrap();

        assert_eq!(item.name, "Chicken salad");
        assert_eq!(item.carbs, 12.0);
        assert!(app.pending_analysis().await.is_none());
        assert_eq!(app.daily_totals().await.calories, 420.0);
    }

    #[tokio::test]
    async fn test_discard_analysis_clears_pending() {
        let app = make_app().await;
        *app.pending_analysis.lock().await = Some(make_analyzed());

        app.discard_analysis().await;

        assert!(app.pending_analysis().await.is_none());
        assert!(app
            .confirm_analysis(MealCategory::Breakfast)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_stale_analysis_result_is_discarded() {
        let app = make_app().await;
        *app.pending_analysis.lock().await = Some(make_analyzed());

        let stale = app.analyze_requests.begin();
        let _newer = app.analyze_requests.begin();

        let late = AnalyzedFood {
            name: "Late arrival".to_string(),
            calories: 999.0,
            protein: 1.0,
            carbohydrates: 1.0,
            fat: 1.0,
        };
        let result = app.finish_analysis(stale, Ok(late)).await.unwrap();
        assert!(result.is_none());

        let errored = app
            .finish_analysis(stale, Err(InferenceError::Transport("timed out".to_string())))
            .await
            .unwrap();
        assert!(errored.is_none());

        let pending = app.pending_analysis().await.unwrap();
        assert_eq!(pending.name, "Chicken salad");
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let app = make_app().await;

        let results = app.search_foods("sinigang").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pork Sinigang (1 cup)");
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_older() {
        let app = Arc::new(make_app().await);

        let first = {
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.search_foods("chicken").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = app.search_foods("adobo").await;

        assert!(first.await.unwrap().is_none());
        let results = second.unwrap();
        assert!(results.iter().any(|r| r.name.contains("Adobo")));
    }

    #[tokio::test]
    async fn test_share_progress_snapshots_totals() {
        let app = make_app().await;
        app.complete_onboarding(make_form()).await.unwrap();
        *app.pending_analysis.lock().await = Some(make_analyzed());
        app.confirm_analysis(MealCategory::Lunch).await.unwrap();

        let post = app.share_progress(Some("Great day!".to_string())).await;

        assert_eq!(post.author.id, LOCAL_USER_ID);
        assert_eq!(post.author.name, "Maria");
        assert_eq!(post.daily_summary.calories, 420.0);
        assert_eq!(post.message.as_deref(), Some("Great day!"));
        assert_eq!(app.feed().await[0].id, post.id);
    }

    #[tokio::test]
    async fn test_share_progress_blank_message_is_none() {
        let app = make_app().await;

        let post = app.share_progress(Some("   ".to_string())).await;

        assert!(post.message.is_none());
    }

    #[tokio::test]
    async fn test_toggle_like_unknown_post_is_not_found() {
        let app = make_app().await;

        let result = app.toggle_like("no-such-post").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_comment_requires_text() {
        let app = make_app().await;

        let result = app.comment_on("post1", "   ").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_comment_is_attributed_to_local_user() {
        let app = make_app().await;
        app.complete_onboarding(make_form()).await.unwrap();

        let post = app.comment_on("post2", "Nice work!").await.unwrap();

        let comment = post.comments.last().unwrap();
        assert_eq!(comment.author.id, LOCAL_USER_ID);
        assert_eq!(comment.author.name, "Maria");
        assert_eq!(comment.text, "Nice work!");
    }

    #[test]
    fn test_request_tracker_discards_stale_tokens() {
        let tracker = RequestTracker::default();

        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
