//! Domain core for the paithiao tourism guide.
//!
//! Holds everything the screens share: the category/table mapping, the
//! loosely-typed place record, coordinate resolution, slippy-map tile
//! math, external deep links, and env-driven configuration. Everything
//! here is pure; the only I/O in the workspace lives in
//! `paithiao-store`.

pub mod app_config;
pub mod category;
pub mod config;
pub mod geo;
pub mod links;
pub mod record;
pub mod tile;

pub use app_config::AppConfig;
pub use category::Category;
pub use config::{load_config, load_config_from_env, ConfigError};
pub use geo::{resolve, Coordinate};
pub use links::{external_map_url, phone_url, DEFAULT_MAP_LABEL};
pub use record::PlaceRecord;
pub use tile::{preview_tile_url, tile_for, TileAddress, PREVIEW_ZOOM};
