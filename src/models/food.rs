// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Food entry models for logging and analysis.

use serde::{Deserialize, Serialize};

/// Meal category a food entry is logged under.
///
/// Not a stored entity, a partition key within the daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealCategory {
    /// All categories in display order.
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snacks => "Snacks",
        }
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged food entry.
///
/// Immutable once created; belongs to exactly one category of one daily log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique entry ID (UUID v4)
    pub id: String,
    /// Food name/description
    pub name: String,
    /// Calories (kcal)
    #[serde(default, deserialize_with = "f64_null_as_zero")]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default, deserialize_with = "f64_null_as_zero")]
    pub protein: f64,
    /// Carbohydrates (grams)
    #[serde(default, deserialize_with = "f64_null_as_zero")]
    pub carbs: f64,
    /// Fat (grams)
    #[serde(default, deserialize_with = "f64_null_as_zero")]
    pub fat: f64,
}

/// Non-finite numbers serialize as `null`. Stored entries read those (and
/// absent keys) back as zero rather than failing the whole day's log.
fn f64_null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Food entry data before an ID has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Nutrition estimate returned by the inference service or catalog search.
///
/// Numeric fields are untrusted model output: a field the model omitted
/// deserializes as NaN rather than failing the whole response. An estimate
/// becomes a `FoodItem` only when the user confirms it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedFood {
    pub name: String,
    #[serde(default = "f64_nan")]
    pub calories: f64,
    #[serde(default = "f64_nan")]
    pub protein: f64,
    /// Carbohydrates (grams); the wire name differs from `FoodItem::carbs`
    #[serde(default = "f64_nan")]
    pub carbohydrates: f64,
    #[serde(default = "f64_nan")]
    pub fat: f64,
}

fn f64_nan() -> f64 {
    f64::NAN
}

impl From<AnalyzedFood> for NewFood {
    fn from(analyzed: AnalyzedFood) -> Self {
        Self {
            name: analyzed.name,
            calories: analyzed.calories,
            protein: analyzed.protein,
            carbs: analyzed.carbohydrates,
            fat: analyzed.fat,
        }
    }
}
