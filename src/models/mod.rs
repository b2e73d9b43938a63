// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod food;
pub mod log;
pub mod profile;
pub mod social;

pub use food::{AnalyzedFood, FoodItem, MealCategory, NewFood};
pub use log::{DailyLog, DailyTotals};
pub use profile::{DailyGoals, Gender, ProfileState, UserProfile};
pub use social::{Comment, Post, SocialUser, LOCAL_USER_ID};
