//! Slippy-map (Web Mercator) tile addressing for static previews.
//!
//! Detail screens show a single OpenStreetMap raster tile behind the
//! "open in maps" affordance, always at zoom 15. The projection
//! diverges at the poles, so tile derivation is fallible: anything
//! that would put a non-finite or out-of-range index into a tile URL
//! comes back as `None` and the screen renders its "no preview"
//! placeholder instead.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Fixed preview zoom. Not configurable per call; every screen uses
/// the same scale.
pub const PREVIEW_ZOOM: u8 = 15;

/// A tile index in the standard `z/x/y` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

/// Projects a coordinate to its zoom-15 tile address.
///
/// Returns `None` when the Web Mercator term is undefined (latitude at
/// or beyond ±90°) or when the indices fall outside `[0, 2^zoom)`,
/// which happens for longitudes beyond ±180 that the resolver passes
/// through unclamped.
#[must_use]
pub fn tile_for(coord: Coordinate) -> Option<TileAddress> {
    let n = f64::from(1u32 << PREVIEW_ZOOM);
    let lat_rad = coord.lat.to_radians();

    let x = ((coord.lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();

    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x < 0.0 || x >= n || y < 0.0 || y >= n {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (x, y) = (x as u32, y as u32);
    Some(TileAddress {
        zoom: PREVIEW_ZOOM,
        x,
        y,
    })
}

/// URL of the preview raster for a tile address. No caching, retry, or
/// fallback tiles; a failed image load is the view layer's problem.
#[must_use]
pub fn preview_tile_url(tile: TileAddress) -> String {
    format!(
        "https://tile.openstreetmap.org/{}/{}/{}.png",
        tile.zoom, tile.x, tile.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_formula_for_known_point() {
        // Oracle computed from the standard slippy-map formula at
        // zoom 15 for lat 13.0, lon 102.0.
        let tile = tile_for(Coordinate::new(13.0, 102.0)).unwrap();
        assert_eq!(tile.zoom, 15);
        assert_eq!(tile.x, 25_668);
        assert_eq!(tile.y, 15_190);
    }

    #[test]
    fn indices_stay_in_range_across_the_usable_globe() {
        let n = u32::from(1u16 << PREVIEW_ZOOM);
        for &(lat, lon) in &[
            (85.0, 179.9),
            (-85.0, -179.9),
            (0.0, 0.0),
            (15.78, 102.03),
            (-33.87, 151.21),
        ] {
            let tile = tile_for(Coordinate::new(lat, lon)).unwrap();
            assert!(tile.x < n && tile.y < n, "({lat}, {lon}) -> {tile:?}");
        }
    }

    #[test]
    fn poles_have_no_tile() {
        assert_eq!(tile_for(Coordinate::new(90.0, 102.0)), None);
        assert_eq!(tile_for(Coordinate::new(-90.0, 102.0)), None);
        assert_eq!(tile_for(Coordinate::new(91.5, 102.0)), None);
    }

    #[test]
    fn out_of_range_longitude_has_no_tile() {
        assert_eq!(tile_for(Coordinate::new(13.0, 456.0)), None);
        assert_eq!(tile_for(Coordinate::new(13.0, -200.0)), None);
    }

    #[test]
    fn preview_url_is_deterministic() {
        let coord = Coordinate::new(15.78, 102.03);
        let first = preview_tile_url(tile_for(coord).unwrap());
        let second = preview_tile_url(tile_for(coord).unwrap());
        assert_eq!(first, second);
        assert_eq!(first, "https://tile.openstreetmap.org/15/25670/14929.png");
    }
}
