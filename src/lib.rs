// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Toecan-Commute: fetch bike commuting trips from the Toecan API
//!
//! This crate lists commuting trips over a time window, fetches single
//! trip details, and exports trip summaries as a CSV report.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{Result, ToecanError};
pub use models::{TimeWindow, TripDetail, TripSummary};
pub use services::{write_csv, ToecanClient};
