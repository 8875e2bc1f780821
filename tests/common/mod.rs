// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use toecan_commute::ToecanClient;

pub const API_KEY: &str = "test_api_key";

/// Two trips as the list endpoint returns them.
#[allow(dead_code)]
pub const TRIPS_JSON: &str = r#"[
    {
        "trip_uuid": "abc",
        "ts_start": 0,
        "ts_end": 3600,
        "trip_distance": 500,
        "duration": 3600
    },
    {
        "trip_uuid": "def",
        "ts_start": 1700000000,
        "ts_end": 1700001800,
        "trip_distance": 4250.5,
        "duration": 1800
    }
]"#;

/// Run blocking client code off the async test runtime.
///
/// The client is built inside the closure: a blocking reqwest client
/// must not be created or dropped on a runtime thread.
#[allow(dead_code)]
pub async fn with_client<T, F>(base_url: String, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(ToecanClient) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(ToecanClient::with_base_url(base_url)))
        .await
        .expect("Blocking client task panicked")
}
