// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Toecan-Commute CLI
//!
//! Fetches the last week of commuting trips, the detail of the first one,
//! and writes the trip report when `TOECAN_CSV_PATH` is set.

use anyhow::Context;
use toecan_commute::{config::Config, services::write_csv, ToecanClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, "Starting Toecan trip fetch");

    let client = ToecanClient::from_config(&config);

    let trips = match &config.csv_path {
        Some(path) => write_csv(&client, &config.api_key, path, None, None)
            .with_context(|| format!("Failed to export trips to {}", path.display()))?,
        None => client
            .list_trips(&config.api_key, None, None)
            .context("Failed to list commute trips")?,
    };
    tracing::info!(count = trips.len(), "Commute trips fetched");

    let Some(first) = trips.first() else {
        tracing::info!("No trips in the last week");
        return Ok(());
    };

    let detail = client
        .get_trip_detail(&config.api_key, &first.trip_uuid)
        .with_context(|| format!("Failed to fetch trip {}", first.trip_uuid))?;
    tracing::info!(
        trip_uuid = %first.trip_uuid,
        fields = detail.fields.len(),
        "Trip detail fetched"
    );

    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("toecan_commute=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
