// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! MealTrack: log meals, track macros, share progress
//!
//! This crate provides the application core behind a nutrition-tracking
//! UI: profile onboarding with daily goal calculation, a per-day food
//! log, Gemini-backed meal analysis, catalog search and a small
//! community feed.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

pub use app::{App, OnboardingForm};
pub use config::Config;
pub use error::{AppError, Result};
