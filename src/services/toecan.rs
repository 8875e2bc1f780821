// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Toecan API client for commuting trips.
//!
//! Handles:
//! - Trip listing over a time window (last 7 days by default)
//! - Single trip detail fetching
//!
//! Calls are blocking and never retried.

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Result, ToecanError};
use crate::models::{TimeWindow, TripDetail, TripSummary};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

/// Header carrying the API key.
const TOKEN_HEADER: &str = "token";

/// Toecan API client.
#[derive(Clone)]
pub struct ToecanClient {
    http: Client,
    base_url: String,
}

impl Default for ToecanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ToecanClient {
    /// Create a client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against another API root (e.g. a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Create a client against the configured base URL.
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.base_url.as_str())
    }

    /// API root requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List commuting trips between `window_start` and `window_end`.
    ///
    /// Missing bounds default to the last 7 days, evaluated now.
    pub fn list_trips(
        &self,
        api_key: &str,
        window_start: Option<i64>,
        window_end: Option<i64>,
    ) -> Result<Vec<TripSummary>> {
        let window = TimeWindow::resolve(window_start, window_end);
        let url = format!("{}/commute_trips", self.base_url);

        tracing::debug!(
            ts_start = window.start,
            ts_end = window.end,
            "Listing commute trips"
        );

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, api_key)
            .query(&[("ts_start", window.start), ("ts_end", window.end)])
            .send()?;

        let trips: Vec<TripSummary> = self.check_response_json(response)?;
        tracing::debug!(count = trips.len(), "Commute trips fetched");
        Ok(trips)
    }

    /// Get the detailed record of one trip.
    pub fn get_trip_detail(&self, api_key: &str, trip_id: &str) -> Result<TripDetail> {
        let url = format!("{}/detailed_commute_trips/{}", self.base_url, trip_id);
        tracing::debug!(trip_uuid = %trip_id, "Fetching trip detail");
        self.get_json(&url, api_key)
    }

    /// Generic GET request with JSON response.
    fn get_json<T: DeserializeOwned>(&self, url: &str, api_key: &str) -> Result<T> {
        let response = self.http.get(url).header(TOKEN_HEADER, api_key).send()?;
        self.check_response_json(response)
    }

    /// Check response and parse JSON body.
    fn check_response_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Toecan API request failed");
            return Err(ToecanError::Request {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| ToecanError::Decode(e.to_string()))
    }
}
