//! Terminal renditions of the guide's screens.
//!
//! These are called from `main` after configuration and the store
//! client are established. Each screen owns its own fetch lifecycle and
//! handles its failures locally; nothing is thrown across screens.

mod detail;
mod list;

pub(crate) use detail::run_show;
pub(crate) use list::{run_categories, run_list};

use paithiao_store::StoreError;

/// The store's own message, verbatim, for display. Transport errors
/// have no store message and fall back to the error's rendering.
pub(crate) fn store_message(err: &StoreError) -> String {
    match err {
        StoreError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
