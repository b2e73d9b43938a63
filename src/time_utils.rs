// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date handling.

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone.
///
/// Daily logs are keyed by the local calendar date, so "today" follows the
/// user's clock rather than UTC.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
