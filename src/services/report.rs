// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV export of commuting trip summaries.
//!
//! Fields are written verbatim with no quoting, so a comma inside a trip
//! identifier produces a malformed row.

use crate::error::{Result, ToecanError};
use crate::models::TripSummary;
use crate::services::ToecanClient;
use crate::time_utils::format_epoch_rfc3339;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Header row of the trip report.
pub const CSV_HEADER: [&str; 5] = [
    "trip_uuid",
    "Start time",
    "End Time",
    "Distance (m)",
    "duration (s)",
];

/// Fetch trips in the window and write them to `destination`.
///
/// The file is truncated or created only after the fetch succeeds.
/// Returns the fetched trips.
pub fn write_csv(
    client: &ToecanClient,
    api_key: &str,
    destination: impl AsRef<Path>,
    window_start: Option<i64>,
    window_end: Option<i64>,
) -> Result<Vec<TripSummary>> {
    let path = destination.as_ref();
    let trips = client.list_trips(api_key, window_start, window_end)?;

    let file = File::create(path).map_err(|source| ToecanError::File {
        path: path.to_path_buf(),
        source,
    })?;
    write_trips(file, &trips, path)?;

    tracing::info!(
        path = %path.display(),
        count = trips.len(),
        "Trip report written"
    );
    Ok(trips)
}

/// Render trips as CSV rows, header first.
///
/// Rows are written as they are rendered: a trip whose timestamp cannot be
/// converted stops the export with the preceding rows flushed. `path` labels
/// I/O errors.
pub(crate) fn write_trips<W: Write>(
    writer: W,
    trips: &[TripSummary],
    path: &Path,
) -> Result<()> {
    let file_error = |source: io::Error| ToecanError::File {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER).map_err(|e| file_error(e.into()))?;

    for trip in trips {
        let row = match trip_row(trip) {
            Ok(row) => row,
            Err(e) => {
                wtr.flush().map_err(file_error)?;
                return Err(e);
            }
        };
        wtr.write_record(&row).map_err(|e| file_error(e.into()))?;
    }

    wtr.flush().map_err(file_error)
}

/// CSV fields of one trip, in header order.
fn trip_row(trip: &TripSummary) -> Result<[String; 5]> {
    let start = format_epoch_rfc3339(trip.ts_start)
        .ok_or(ToecanError::InvalidTimestamp(trip.ts_start))?;
    let end = format_epoch_rfc3339(trip.ts_end)
        .ok_or(ToecanError::InvalidTimestamp(trip.ts_end))?;

    Ok([
        trip.trip_uuid.clone(),
        start,
        end,
        trip.trip_distance.to_string(),
        trip.duration.to_string(),
    ])
}
