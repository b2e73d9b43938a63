//! Daily food log and its derived totals.
//!
//! Totals are never stored: they are recomputed from the log on every
//! change, which keeps the persisted state and the displayed numbers from
//! drifting apart.

use serde::{Deserialize, Serialize};

use crate::models::profile::DailyGoals;
use crate::models::{FoodItem, MealCategory};

/// One day's food entries, partitioned by meal category.
///
/// Every category is always present (possibly empty); entries keep insertion
/// order, which is also display order. Stored per calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyLog {
    #[serde(default)]
    pub breakfast: Vec<FoodItem>,
    #[serde(default)]
    pub lunch: Vec<FoodItem>,
    #[serde(default)]
    pub dinner: Vec<FoodItem>,
    #[serde(default)]
    pub snacks: Vec<FoodItem>,
}

impl DailyLog {
    /// Entries for one category.
    pub fn items(&self, category: MealCategory) -> &[FoodItem] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Snacks => &self.snacks,
        }
    }

    /// Mutable entries for one category.
    pub fn items_mut(&mut self, category: MealCategory) -> &mut Vec<FoodItem> {
        match category {
            MealCategory::Breakfast => &mut self.breakfast,
            MealCategory::Lunch => &mut self.lunch,
            MealCategory::Dinner => &mut self.dinner,
            MealCategory::Snacks => &mut self.snacks,
        }
    }

    /// Iterate categories in display order with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (MealCategory, &[FoodItem])> {
        MealCategory::ALL.into_iter().map(|c| (c, self.items(c)))
    }

    /// True when no category has any entries.
    pub fn is_empty(&self) -> bool {
        MealCategory::ALL.iter().all(|&c| self.items(c).is_empty())
    }

    /// Sum all entries across all categories into fresh totals.
    ///
    /// Always a full recomputation, never an incremental patch.
    pub fn totals(&self) -> DailyTotals {
        let mut totals = DailyTotals::default();
        for (_, items) in self.iter() {
            for item in items {
                totals.add_item(item);
            }
        }
        totals
    }

    /// Calorie subtotal for one category (shown on each meal card).
    pub fn category_calories(&self, category: MealCategory) -> f64 {
        self.items(category).iter().map(|item| item.calories).sum()
    }
}

/// Running totals for one day, derived from a [`DailyLog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl DailyTotals {
    /// Fold one entry into the totals.
    pub fn add_item(&mut self, item: &FoodItem) {
        self.calories += item.calories;
        self.protein += item.protein;
        self.carbs += item.carbs;
        self.fat += item.fat;
    }

    /// Calories left before the daily goal; negative means over.
    pub fn remaining_calories(&self, goals: &DailyGoals) -> f64 {
        goals.calories - self.calories
    }
}
