// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod feed;
pub mod goals;
pub mod inference;

pub use catalog::FoodCatalog;
pub use feed::FeedStore;
pub use goals::{calculate_goals, ActivityLevel, WeightGoal};
pub use inference::{InferenceClient, InferenceError};
