// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::Path;

use mealtrack::models::{Gender, NewFood};
use mealtrack::services::{ActivityLevel, WeightGoal};
use mealtrack::{App, Config, OnboardingForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize test logging. Safe to call from every test; only the first
/// call installs the subscriber.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mealtrack=debug".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Create an app with in-memory storage (no files touched).
#[allow(dead_code)]
pub async fn test_app() -> App {
    init_tracing();
    App::new(Config::default()).await
}

/// Create an app persisting under the given directory.
#[allow(dead_code)]
pub async fn file_backed_app(dir: &Path) -> App {
    init_tracing();
    let config = Config {
        data_dir: Some(dir.to_path_buf()),
        ..Config::default()
    };
    App::new(config).await
}

/// Setup input for a 30-year-old male, 70 kg, 175 cm, lightly active.
#[allow(dead_code)]
pub fn reference_form() -> OnboardingForm {
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

/// Shorthand food builder.
#[allow(dead_code)]
pub fn make_food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> NewFood {
    NewFood {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
    }
}
