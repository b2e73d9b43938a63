// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog search through the debounced app surface.

mod common;

use common::test_app;

#[tokio::test]
async fn test_search_finds_filipino_dishes() {
    let app = test_app().await;

    let results = app.search_foods("sisig").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Pork Sisig (1 cup)");
    assert_eq!(results[0].calories, 600.0);
    assert_eq!(results[0].fat, 55.0);
}

#[tokio::test]
async fn test_search_is_substring_and_case_insensitive() {
    let app = test_app().await;

    let results = app.search_foods("JOLLIBEE").await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.name.starts_with("Jollibee")));
}

#[tokio::test]
async fn test_search_handles_apostrophes() {
    let app = test_app().await;

    let results = app.search_foods("mcdonald's").await.unwrap();

    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_blank_query_yields_no_results() {
    let app = test_app().await;

    assert!(app.search_foods("").await.unwrap().is_empty());
    assert!(app.search_foods("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unmatched_query_yields_no_results() {
    let app = test_app().await;

    assert!(app.search_foods("pizza quattro stagioni").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_results_convert_to_loggable_food() {
    use mealtrack::models::NewFood;

    let app = test_app().await;

    let picked = app.search_foods("avocado").await.unwrap().remove(0);
    let food = NewFood::from(picked);

    assert_eq!(food.name, "Avocado (half)");
    assert_eq!(food.carbs, 9.0);
}
