//! List screens: one ordered table per category.

use paithiao_core::{Category, PlaceRecord};
use paithiao_store::StoreClient;

/// Outcome of a list fetch. Store failures stay inside the screen;
/// they are rendered, not propagated.
pub enum ListState {
    Loaded(Vec<PlaceRecord>),
    Errored(String),
}

/// Fetches a category's rows, ordered by name ascending the way every
/// list screen in the guide is. Re-running this is the refresh action.
pub async fn load_list(store: &StoreClient, category: Category) -> ListState {
    match store
        .fetch_all(category.table(), category.order_field(), true)
        .await
    {
        Ok(rows) => ListState::Loaded(rows),
        Err(err) => ListState::Errored(super::store_message(&err)),
    }
}

/// `list <category>`: print the category's directory.
pub(crate) async fn run_list(store: &StoreClient, category: Category) {
    match load_list(store, category).await {
        ListState::Errored(message) => println!("{message}"),
        ListState::Loaded(rows) => {
            println!("{}", category.title());
            if rows.is_empty() {
                println!("no data found");
                return;
            }
            for row in &rows {
                let id = row.id().unwrap_or_else(|| "-".to_string());
                let name = row.name().unwrap_or("(unnamed)");
                match row.district() {
                    Some(district) => println!("{id:>4}  {name}  ({district})"),
                    None => println!("{id:>4}  {name}"),
                }
            }
        }
    }
}

/// `categories`: the home screen's menu, one line per category.
pub(crate) fn run_categories() {
    for category in Category::ALL {
        println!("{category:<12} {}", category.title());
    }
}
