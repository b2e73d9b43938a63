//! User profile model for storage and goal tracking.

use serde::{Deserialize, Serialize};

/// Gender options offered during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
    Other,
}

/// Daily macro and calorie targets; same shape as totals but aspirational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Target calories (kcal)
    pub calories: f64,
    /// Target protein (grams)
    pub protein: f64,
    /// Target carbohydrates (grams)
    pub carbs: f64,
    /// Target fat (grams)
    pub fat: f64,
}

impl Default for DailyGoals {
    /// Fallback targets used before onboarding completes or when the
    /// demographic inputs needed for a computed goal are absent.
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 100.0,
            carbs: 250.0,
            fat: 65.0,
        }
    }
}

/// User profile stored under a single fixed key.
///
/// Demographics stay optional: the profile editor lets fields be cleared,
/// and readers must tolerate older payloads that never had them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name; empty until onboarding completes
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub gender: Gender,
    /// Daily targets, computed at onboarding and editable afterwards
    #[serde(default)]
    pub goals: DailyGoals,
    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// An empty name means setup never completed, whatever else is filled in.
    pub fn is_onboarded(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Whether a usable profile exists, made explicit at the type level.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Onboarded(UserProfile),
    NotOnboarded,
}

impl ProfileState {
    /// Classify a loaded profile by the empty-name convention.
    pub fn from_profile(profile: UserProfile) -> Self {
        if profile.is_onboarded() {
            ProfileState::Onboarded(profile)
        } else {
            ProfileState::NotOnboarded
        }
    }

    pub fn is_onboarded(&self) -> bool {
        matches!(self, ProfileState::Onboarded(_))
    }

    /// The profile to work with: the stored one, or a default for setup.
    pub fn profile(&self) -> UserProfile {
        match self {
            ProfileState::Onboarded(profile) => profile.clone(),
            ProfileState::NotOnboarded => UserProfile::default(),
        }
    }
}
