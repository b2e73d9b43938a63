// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily log persistence, keyed by calendar date.
//!
//! The store also owns the in-memory "current" log and its day-rollover
//! rule: every access checks the held log's date against today and swaps in
//! today's log (empty when nothing is stored) when the date has moved on.
//! Yesterday's entries are never carried forward.

use chrono::NaiveDate;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{DailyLog, FoodItem, MealCategory, NewFood};
use crate::storage::{keys, LocalStorage};
use crate::time_utils;

/// Date-keyed daily log store.
pub struct LogStore {
    storage: LocalStorage,
    /// The log being edited, tagged with the date it belongs to.
    current: Mutex<(NaiveDate, DailyLog)>,
}

impl LogStore {
    /// Create the store and load today's log as the current one.
    pub async fn new(storage: LocalStorage) -> Self {
        let today = time_utils::today_local();
        let log = load_for_date(&storage, today).await;
        Self {
            storage,
            current: Mutex::new((today, log)),
        }
    }

    /// Load the log stored for `date`.
    ///
    /// Missing or unreadable entries come back as the empty log with every
    /// category present; this never fails and never yields a partial log.
    pub async fn load(&self, date: NaiveDate) -> DailyLog {
        load_for_date(&self.storage, date).await
    }

    /// Persist `log` under `date`'s key.
    pub async fn save(&self, date: NaiveDate, log: &DailyLog) -> Result<()> {
        let json = serde_json::to_string(log)
            .map_err(|e| AppError::Storage(format!("Failed to encode daily log: {}", e)))?;
        self.storage.set(&keys::daily_log(date), json).await
    }

    /// Snapshot of today's date and log, after rollover.
    pub async fn current(&self) -> (NaiveDate, DailyLog) {
        let guard = self.rolled().await;
        guard.clone()
    }

    /// Assign a fresh ID, append the entry to `category`, and persist.
    ///
    /// Persistence is best-effort: a failed write is logged and the entry
    /// stays in the in-memory log.
    pub async fn add_food(&self, category: MealCategory, food: NewFood) -> FoodItem {
        let mut guard = self.rolled().await;

        let item = FoodItem {
            id: Uuid::new_v4().to_string(),
            name: food.name,
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
        };
        guard.1.items_mut(category).push(item.clone());

        tracing::debug!(category = %category, name = %item.name, "Added food entry");
        self.persist_current(&guard).await;

        item
    }

    /// Remove the entry with `id` from `category`.
    ///
    /// Only the named category is searched. Returns whether anything was
    /// removed; an absent ID is a no-op.
    pub async fn remove_food(&self, category: MealCategory, id: &str) -> bool {
        let mut guard = self.rolled().await;

        let items = guard.1.items_mut(category);
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;

        if removed {
            tracing::debug!(category = %category, id, "Removed food entry");
            self.persist_current(&guard).await;
        }

        removed
    }

    /// Lock the current log, swapping in today's if the date rolled over.
    async fn rolled(&self) -> MutexGuard<'_, (NaiveDate, DailyLog)> {
        let mut guard = self.current.lock().await;
        let today = time_utils::today_local();
        if guard.0 != today {
            tracing::info!(from = %guard.0, to = %today, "Daily log rolled over to new date");
            guard.1 = load_for_date(&self.storage, today).await;
            guard.0 = today;
        }
        guard
    }

    /// Best-effort write of the current log; failure keeps the session going.
    async fn persist_current(&self, guard: &MutexGuard<'_, (NaiveDate, DailyLog)>) {
        if let Err(e) = self.save(guard.0, &guard.1).await {
            tracing::warn!(error = %e, date = %guard.0, "Failed to persist daily log");
        }
    }
}

async fn load_for_date(storage: &LocalStorage, date: NaiveDate) -> DailyLog {
    match storage.get(&keys::daily_log(date)).await {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(error = %e, date = %date, "Stored daily log unreadable, starting empty");
                DailyLog::default()
            }
        },
        Ok(None) => DailyLog::default(),
        Err(e) => {
            tracing::warn!(error = %e, date = %date, "Failed to load daily log, starting empty");
            DailyLog::default()
        }
    }
}
