// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily goal calculation from profile demographics.
//!
//! Mifflin-St Jeor basal metabolic rate, scaled by an activity factor and
//! shifted by the weight goal, then split into macro targets. Pure and
//! cheap enough to recompute on every input change for a live preview.

use serde::{Deserialize, Serialize};

use crate::models::{DailyGoals, Gender};

/// How active the user is day to day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to the basal rate to estimate daily expenditure.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Direction the user wants their weight to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    Maintain,
    Gain,
}

impl WeightGoal {
    /// Daily calorie adjustment relative to maintenance.
    pub fn calorie_offset(self) -> f64 {
        match self {
            WeightGoal::Lose => -500.0,
            WeightGoal::Maintain => 0.0,
            WeightGoal::Gain => 300.0,
        }
    }
}

/// Compute daily targets from demographics.
///
/// Any missing or non-positive age/weight/height short-circuits to the
/// default goal set; the formula never runs on absent input.
pub fn calculate_goals(
    age: Option<u32>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    gender: Gender,
    activity: ActivityLevel,
    goal: WeightGoal,
) -> DailyGoals {
    let (Some(age), Some(weight), Some(height)) = (age, weight_kg, height_cm) else {
        return DailyGoals::default();
    };
    if age == 0 || weight <= 0.0 || height <= 0.0 {
        return DailyGoals::default();
    }

    // Mifflin-St Jeor; "Other" takes the female offset.
    let mut bmr = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    bmr += match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    };

    let tdee = bmr * activity.factor();
    let calories = (tdee + goal.calorie_offset()).round();

    // 40% carbs / 30% protein / 30% fat at 4/4/9 kcal per gram. Each macro
    // rounds on its own from the rounded calorie figure, so the grams need
    // not re-sum to the calorie target exactly.
    DailyGoals {
        calories,
        carbs: (calories * 0.4 / 4.0).round(),
        protein: (calories * 0.3 / 4.0).round(),
        fat: (calories * 0.3 / 9.0).round(),
    }
}
