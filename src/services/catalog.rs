// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in food database with substring search.

use crate::models::AnalyzedFood;

/// Curated per-serving nutrition facts. Stands in for a food database API.
const FOOD_TABLE: &[(&str, f64, f64, f64, f64)] = &[
    // (name, calories, protein, carbohydrates, fat)
    ("Apple (medium)", 95.0, 0.5, 25.0, 0.3),
    ("Banana (medium)", 105.0, 1.3, 27.0, 0.4),
    ("Chicken Breast (100g, cooked)", 165.0, 31.0, 0.0, 3.6),
    ("Salmon (100g, cooked)", 206.0, 22.0, 0.0, 12.0),
    ("Broccoli (1 cup)", 55.0, 3.7, 11.2, 0.6),
    ("Brown Rice (1 cup, cooked)", 216.0, 5.0, 45.0, 1.8),
    ("Quinoa (1 cup, cooked)", 222.0, 8.0, 39.0, 3.6),
    ("Avocado (half)", 160.0, 2.0, 9.0, 15.0),
    ("Almonds (28g, ~23 nuts)", 164.0, 6.0, 6.0, 14.0),
    ("Egg (large)", 78.0, 6.0, 0.6, 5.0),
    ("Greek Yogurt (100g, plain, non-fat)", 59.0, 10.0, 3.6, 0.4),
    ("Oatmeal (1 cup, cooked)", 158.0, 6.0, 27.0, 3.2),
    ("Whole Wheat Bread (1 slice)", 81.0, 4.0, 13.8, 1.1),
    ("Peanut Butter (2 tbsp)", 191.0, 7.0, 7.0, 16.0),
    ("Olive Oil (1 tbsp)", 119.0, 0.0, 0.0, 13.5),
    ("Sweet Potato (medium, baked)", 103.0, 2.3, 23.6, 0.2),
    ("Spinach (1 cup, raw)", 7.0, 0.9, 1.1, 0.1),
    ("Lentils (1 cup, cooked)", 230.0, 18.0, 40.0, 0.8),
    ("Tofu (100g)", 76.0, 8.0, 1.9, 4.8),
    ("Milk (1 cup, 2%)", 122.0, 8.0, 12.0, 4.8),
    // Filipino dishes
    ("Chicken Adobo (1 cup)", 350.0, 30.0, 10.0, 20.0),
    ("Pork Sinigang (1 cup)", 280.0, 20.0, 15.0, 15.0),
    ("Lechon Kawali (100g)", 550.0, 25.0, 0.0, 50.0),
    ("Pancit Canton (1 cup)", 400.0, 15.0, 50.0, 15.0),
    ("Lumpia Shanghai (5 pieces)", 300.0, 15.0, 25.0, 15.0),
    ("Kare-Kare (1 cup)", 450.0, 25.0, 20.0, 30.0),
    ("Pork Sisig (1 cup)", 600.0, 20.0, 5.0, 55.0),
    ("Bicol Express (1 cup)", 400.0, 25.0, 10.0, 30.0),
    ("Halo-Halo (1 serving)", 450.0, 5.0, 80.0, 10.0),
    ("White Rice (1 cup, cooked)", 205.0, 4.3, 45.0, 0.4),
    // Filipino fast food
    ("Jollibee Chickenjoy (1pc)", 320.0, 20.0, 15.0, 20.0),
    ("Jollibee Jolly Spaghetti", 300.0, 10.0, 50.0, 8.0),
    ("Jollibee Yumburger", 250.0, 10.0, 28.0, 11.0),
    ("McDonald's Chicken McDo (1pc)", 280.0, 22.0, 13.0, 16.0),
    ("McDonald's McSpaghetti", 310.0, 9.0, 53.0, 7.0),
    ("Chowking Chao Fan (Pork)", 500.0, 15.0, 80.0, 13.0),
];

/// Service for searching the built-in food database.
#[derive(Clone)]
pub struct FoodCatalog {
    records: Vec<AnalyzedFood>,
}

impl FoodCatalog {
    /// Build the catalog from the built-in table.
    pub fn new() -> Self {
        let records = FOOD_TABLE
            .iter()
            .map(|&(name, calories, protein, carbohydrates, fat)| AnalyzedFood {
                name: name.to_string(),
                calories,
                protein,
                carbohydrates,
                fat,
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = records.len(), "Loaded food catalog");
        Self { records }
    }

    /// Case-insensitive substring search over food names.
    ///
    /// A blank query matches nothing rather than everything.
    pub fn search(&self, query: &str) -> Vec<AnalyzedFood> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}
