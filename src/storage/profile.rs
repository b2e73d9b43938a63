// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile persistence under a single fixed key.

use crate::error::{AppError, Result};
use crate::models::{ProfileState, UserProfile};
use crate::storage::{keys, LocalStorage};

/// Loads and saves the user profile.
#[derive(Clone)]
pub struct ProfileStore {
    storage: LocalStorage,
}

impl ProfileStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Load the stored profile and classify it.
    ///
    /// A missing profile, an unreadable payload, or a storage failure all
    /// resolve to `NotOnboarded`; startup never blocks on stored state.
    pub async fn load(&self) -> ProfileState {
        match self.storage.get(keys::USER_PROFILE).await {
            Ok(Some(json)) => match serde_json::from_str::<UserProfile>(&json) {
                Ok(profile) => ProfileState::from_profile(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored profile unreadable, treating as first run");
                    ProfileState::NotOnboarded
                }
            },
            Ok(None) => ProfileState::NotOnboarded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load profile, treating as first run");
                ProfileState::NotOnboarded
            }
        }
    }

    /// Persist the profile.
    ///
    /// Callers treat failure as non-fatal and keep the in-memory profile.
    pub async fn save(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)
            .map_err(|e| AppError::Storage(format!("Failed to encode profile: {}", e)))?;
        self.storage.set(keys::USER_PROFILE, json).await
    }
}
