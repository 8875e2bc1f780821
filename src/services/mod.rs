// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API access and report export.

pub mod report;
pub mod toecan;

pub use report::{write_csv, CSV_HEADER};
pub use toecan::ToecanClient;
