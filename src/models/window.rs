// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Query window for the trip list endpoint.

use chrono::{DateTime, Duration, Utc};

/// Length of the window used when the caller gives no start.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// `[start, end]` bounds of a trip query, in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    /// Window with both bounds given explicitly.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Fill in missing bounds from the current wall clock.
    ///
    /// Must be called per request; the clock is read every time.
    pub fn resolve(start: Option<i64>, end: Option<i64>) -> Self {
        Self::resolve_at(start, end, Utc::now())
    }

    /// Fill in missing bounds relative to `now`.
    ///
    /// A missing end is `now`; a missing start is `now - 7 days`.
    pub fn resolve_at(start: Option<i64>, end: Option<i64>, now: DateTime<Utc>) -> Self {
        let default_start = now - Duration::days(DEFAULT_WINDOW_DAYS);
        Self {
            start: start.unwrap_or_else(|| default_start.timestamp()),
            end: end.unwrap_or_else(|| now.timestamp()),
        }
    }
}
