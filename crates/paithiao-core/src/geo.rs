//! Coordinate resolution from loosely-typed records.
//!
//! Upstream data entry is inconsistent: latitude appears under
//! `latitude` or `lat`, longitude under `longitude`, `longtitude`
//! (a long-lived misspelling in the source tables), `lng`, or `lon`,
//! and either may be a number, a string, null, or missing entirely.
//! Resolution either yields a fully finite [`Coordinate`] or nothing;
//! a half-valid pair is never produced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::PlaceRecord;

/// Latitude field names, in priority order.
pub const LAT_KEYS: [&str; 2] = ["latitude", "lat"];

/// Longitude field names, in priority order. `longtitude` is kept
/// because the production tables really do spell it that way.
pub const LON_KEYS: [&str; 4] = ["longitude", "longtitude", "lng", "lon"];

/// A validated geographic coordinate. Both components are finite, but
/// values are deliberately not clamped to ±90/±180: out-of-range
/// numbers from the store pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Extracts and validates a coordinate from a record, if there is one.
///
/// `None` covers every failure mode the screens treat as "no location
/// data": record not loaded yet, no synonym present, first-found value
/// unparsable, or a non-finite result.
#[must_use]
pub fn resolve(record: Option<&PlaceRecord>) -> Option<Coordinate> {
    let record = record?;
    let lat = coerce_number(first_present(record, &LAT_KEYS)?)?;
    let lon = coerce_number(first_present(record, &LON_KEYS)?)?;
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(Coordinate::new(lat, lon))
}

/// Field-fallback policy: the first key that exists on the record wins,
/// even when its value later fails to coerce; there is no second
/// chance for a later synonym. A row with `longtitude: "n/a"` and a
/// valid `lng` therefore resolves to nothing. That matches the shipped
/// behavior and is suspected to be a latent data-entry bug; it is kept
/// in this one function so a confirmed fix lands in exactly one place.
fn first_present<'a>(record: &'a PlaceRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(key))
}

/// Coerces a raw field value to `f64`. Numbers pass through; strings
/// are parsed after trimming. Null, booleans, and containers fail.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
