//! Game gallery engine: loads game cards from a manifest of JSON sources,
//! de-duplicates and sorts them, and keeps search, badge filters and the
//! page URL in sync while projecting the visible cards into rows for a
//! virtualized list.

pub mod app;
pub mod catalog;
pub mod debounce;
pub mod error;
pub mod featured;
pub mod fetch;
pub mod filter;
pub mod handlers;
pub mod loader;
pub mod registry;
pub mod render;
pub mod settings;
pub mod url_sync;
pub mod virtual_list;

pub use app::{AppState, Event, Gallery, View, update, view};
pub use error::GalleryError;
pub use fetch::{Fetcher, HttpFetcher};
pub use filter::{FilterState, visible_games};
pub use handlers::{HandlerRegistry, SourceHandler};
pub use loader::{LoadedCatalog, load_catalog};
pub use registry::{BadgeRegistry, ControlTarget, FilterControl};

// Re-export the data model so frontends only need this crate.
pub use gamedeck_core::{BadgeDef, Game, GameDraft, HandlerError, ManifestEntry};
