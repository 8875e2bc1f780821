// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod trip;
pub mod window;

pub use trip::{TripDetail, TripSummary};
pub use window::{TimeWindow, DEFAULT_WINDOW_DAYS};
