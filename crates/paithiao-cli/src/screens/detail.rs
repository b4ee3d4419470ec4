//! Detail screen: one record, its map preview, and its deep links.
//!
//! The screen is a small state machine, `Loading -> {Loaded, NotFound,
//! Errored}`, terminal until the identifier changes. Every load is
//! tagged with the screen's generation at the moment it starts; bumping
//! the generation (identifier change or teardown) turns the in-flight
//! result into a no-op when it lands. That is the only concurrency rule
//! in the system: results are discarded, requests are never cancelled
//! on the wire.

use paithiao_core::{
    external_map_url, geo, links, phone_url, preview_tile_url, tile_for, Category, Coordinate,
    PlaceRecord, TileAddress,
};
use paithiao_store::{StoreClient, StoreError};

/// Everything a loaded detail screen renders. All map and link fields
/// are derived once from the record; a record without usable
/// coordinates simply has them all `None`.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub record: PlaceRecord,
    pub coordinate: Option<Coordinate>,
    pub tile: Option<TileAddress>,
    pub preview_url: Option<String>,
    pub map_url: Option<String>,
    pub phone_link: Option<String>,
}

impl DetailView {
    fn from_record(record: PlaceRecord) -> Self {
        let coordinate = geo::resolve(Some(&record));
        let tile = coordinate.and_then(tile_for);
        let preview_url = tile.map(preview_tile_url);
        let map_url = coordinate.map(|coord| {
            let label = record.name().unwrap_or(links::DEFAULT_MAP_LABEL);
            external_map_url(coord, label)
        });
        let phone_link = record.phone().and_then(phone_url);
        Self {
            record,
            coordinate,
            tile,
            preview_url,
            map_url,
            phone_link,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Loaded(DetailView),
    NotFound,
    Errored(String),
}

/// Proof that a fetch was started against a particular screen
/// generation. Handed back to [`DetailScreen::apply`] with the result.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    generation: u64,
}

/// Per-screen view state plus the generation counter that implements
/// the stale-result discard rule.
pub struct DetailScreen {
    category: Category,
    state: ViewState,
    generation: u64,
}

impl DetailScreen {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Starts a load for `id`. An empty identifier short-circuits to
    /// `Errored` without issuing any request; otherwise the screen
    /// resets to `Loading` and the returned ticket must accompany the
    /// fetch result.
    pub fn begin(&mut self, id: &str) -> Option<FetchTicket> {
        self.generation += 1;
        if id.trim().is_empty() {
            self.state = ViewState::Errored("Missing id".to_string());
            return None;
        }
        self.state = ViewState::Loading;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Invalidates any outstanding ticket. Called on teardown or when
    /// the identifier changes under an in-flight fetch.
    pub fn supersede(&mut self) {
        self.generation += 1;
    }

    /// Applies a fetch result. A result whose ticket no longer matches
    /// the current generation is dropped without touching state.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Option<PlaceRecord>, StoreError>,
    ) {
        if ticket.generation != self.generation {
            tracing::debug!(
                category = %self.category,
                "discarding superseded fetch result"
            );
            return;
        }
        self.state = match outcome {
            Ok(Some(record)) => ViewState::Loaded(DetailView::from_record(record)),
            Ok(None) => ViewState::NotFound,
            Err(err) => ViewState::Errored(super::store_message(&err)),
        };
    }
}

/// Fetches the record and drives the screen through its transition.
pub async fn load_detail(screen: &mut DetailScreen, store: &StoreClient, id: &str) {
    let Some(ticket) = screen.begin(id) else {
        return;
    };
    let outcome = store.fetch_one(screen.category().table(), id).await;
    screen.apply(ticket, outcome);
}

/// `show <category> <id>`: load one record and print it with its map
/// preview and deep links.
pub(crate) async fn run_show(store: &StoreClient, category: Category, id: &str) {
    let mut screen = DetailScreen::new(category);
    load_detail(&mut screen, store, id).await;
    render(screen.state());
}

fn render(state: &ViewState) {
    match state {
        // One-shot CLI never observes this state after load_detail.
        ViewState::Loading => println!("loading..."),
        ViewState::NotFound => println!("no data found"),
        ViewState::Errored(message) => println!("{message}"),
        ViewState::Loaded(view) => render_loaded(view),
    }
}

fn render_loaded(view: &DetailView) {
    let record = &view.record;
    println!("{}", record.name().unwrap_or("(unnamed)"));
    if let Some(district) = record.district() {
        println!("district:    {district}");
    }
    if let Some(time) = record.event_time() {
        println!("when:        {time}");
    }
    if let Some(phone) = record.phone() {
        match &view.phone_link {
            Some(link) => println!("phone:       {phone}  [{link}]"),
            None => println!("phone:       {phone}"),
        }
    }
    if let Some(image) = record.image_url() {
        println!("image:       {image}");
    }
    if let Some(description) = record.description() {
        println!("\n{description}\n");
    }
    match (view.coordinate, &view.preview_url, &view.map_url) {
        (Some(coord), preview, Some(map_url)) => {
            if let Some(tile) = view.tile {
                tracing::debug!(zoom = tile.zoom, x = tile.x, y = tile.y, "preview tile");
            }
            println!("coordinates: {}, {}", coord.lat, coord.lon);
            match preview {
                Some(url) => println!("preview:     {url}"),
                None => println!("preview:     not available"),
            }
            println!("open in maps: {map_url}");
        }
        _ => println!("no coordinate data"),
    }
}
