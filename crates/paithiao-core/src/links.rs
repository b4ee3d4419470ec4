//! Deep links into external apps: Google Maps and the phone dialer.
//!
//! These functions only build strings; opening them is the caller's
//! side effect.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::geo::Coordinate;

/// Label used in the maps link when a record has no name.
pub const DEFAULT_MAP_LABEL: &str = "Location";

/// Google Maps search deep link for a coordinate and display label.
///
/// The query is `lat,lon(label)` with URI-component encoding, so the
/// receiving app shows a labelled pin. Coordinates render the way the
/// store sent them (`13`, not `13.0`; shortest round-trip `f64`
/// formatting matches the original client's number-to-string output).
#[must_use]
pub fn external_map_url(coord: Coordinate, label: &str) -> String {
    let query = format!("{},{}({})", coord.lat, coord.lon, label);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(&query, NON_ALPHANUMERIC)
    )
}

/// `tel:` deep link built from a free-form phone field.
///
/// Strips everything but ASCII digits and `+` (the upstream fields mix
/// dashes, spaces, and country prefixes). Returns `None` when nothing
/// dialable remains.
#[must_use]
pub fn phone_url(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("tel:{digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn map_url_encodes_query_component() {
        let url = external_map_url(Coordinate::new(13.0, 102.0), "Test Place");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=13%2C102%28Test%20Place%29"
        );
    }

    #[test]
    fn map_url_query_decodes_to_plain_text() {
        let url = external_map_url(Coordinate::new(13.0, 102.0), "Test Place");
        let query = url.split("query=").nth(1).unwrap();
        let decoded = percent_decode_str(query).decode_utf8().unwrap();
        assert_eq!(decoded, "13,102(Test Place)");
    }

    #[test]
    fn map_url_keeps_fractional_coordinates() {
        let url = external_map_url(Coordinate::new(15.78, 102.03), "วัดทรงศิลา");
        let query = url.split("query=").nth(1).unwrap();
        let decoded = percent_decode_str(query).decode_utf8().unwrap();
        assert_eq!(decoded, "15.78,102.03(วัดทรงศิลา)");
    }

    #[test]
    fn phone_url_strips_formatting() {
        assert_eq!(phone_url("044-811 574").as_deref(), Some("tel:044811574"));
        assert_eq!(
            phone_url("+66 (0) 44 811 574").as_deref(),
            Some("tel:+66044811574")
        );
    }

    #[test]
    fn phone_url_rejects_empty_results() {
        assert_eq!(phone_url(""), None);
        assert_eq!(phone_url("call us!"), None);
    }
}
