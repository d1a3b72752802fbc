//! Loading the gallery from the manifest and its data sources.
//!
//! The manifest (`data.json`) lists the sources. Every source is fetched
//! concurrently; once all have settled, each successful source's entries are
//! appended to the aggregate in manifest order, which is then de-duplicated
//! and sorted. A failing source is logged and contributes nothing.

use futures::future::join_all;
use serde_json::Value;
use url::Url;

use gamedeck_core::{Game, GameDraft, ManifestEntry};

use crate::catalog::dedup_and_sort;
use crate::error::GalleryError;
use crate::fetch::Fetcher;
use crate::handlers::{HandlerRegistry, SourceHandler};
use crate::registry::BadgeRegistry;

/// Manifest path relative to the site root.
pub const MANIFEST_PATH: &str = "data.json";

/// Directory holding the source documents, relative to the site root.
pub const DATA_DIR: &str = "data/";

/// Outcome of loading one source.
#[derive(Debug)]
pub struct SourceOutcome {
    pub name: String,
    pub location: String,
    /// Number of entries contributed, or the error that dropped the source
    pub result: Result<usize, GalleryError>,
}

/// The loaded, de-duplicated and sorted gallery.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub games: Vec<Game>,
    pub registry: BadgeRegistry,
    pub sources: Vec<SourceOutcome>,
    /// Size of the aggregate before de-duplication
    pub total_loaded: usize,
}

impl LoadedCatalog {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources.iter().filter(|s| s.result.is_err())
    }
}

/// Append-only aggregate assigning each record its insertion index.
#[derive(Debug, Default)]
pub struct Aggregate {
    games: Vec<Game>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, draft: GameDraft, section: &str) {
        let index = self.games.len();
        self.games.push(draft.into_game(section, index));
    }

    pub fn extend(&mut self, drafts: Vec<GameDraft>, section: &str) {
        for draft in drafts {
            self.push(draft, section);
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn into_games(self) -> Vec<Game> {
        self.games
    }
}

/// Resolve `path` against the site root, treating `base` as a directory.
pub fn site_url(base: &Url, path: &str) -> Result<Url, GalleryError> {
    if base.path().ends_with('/') {
        return Ok(base.join(path)?);
    }
    let mut dir = base.clone();
    dir.set_path(&format!("{}/", base.path()));
    Ok(dir.join(path)?)
}

/// Fetch the manifest and every source, then build the catalog.
///
/// Only a manifest failure is returned as an error; source failures are
/// logged and recorded in [`LoadedCatalog::sources`].
pub async fn load_catalog<F: Fetcher>(
    fetcher: &F,
    base: &Url,
    handlers: &HandlerRegistry,
) -> Result<LoadedCatalog, GalleryError> {
    let manifest_url = site_url(base, MANIFEST_PATH)?;
    let manifest: Vec<ManifestEntry> = fetcher.get(&manifest_url).await?;
    log::debug!("Manifest lists {} sources", manifest.len());

    // Badges are registered up front so a failed source still gets filter
    // controls.
    let mut registry = BadgeRegistry::new();
    for entry in &manifest {
        registry.extend(entry.groups.iter().cloned());
    }

    let fetches = manifest
        .iter()
        .map(|entry| load_source(fetcher, base, entry, handlers));
    let results = join_all(fetches).await;

    let mut aggregate = Aggregate::new();
    let mut sources = Vec::with_capacity(manifest.len());
    for (entry, result) in manifest.iter().zip(results) {
        let result = match result {
            Ok(drafts) => {
                let count = drafts.len();
                log::debug!("Loaded {count} games from '{}'", entry.name);
                aggregate.extend(drafts, &entry.name);
                Ok(count)
            }
            Err(e) => {
                log::error!("Error loading games from '{}': {e}", entry.location);
                Err(e)
            }
        };
        sources.push(SourceOutcome {
            name: entry.name.clone(),
            location: entry.location.clone(),
            result,
        });
    }

    let total_loaded = aggregate.len();
    let games = dedup_and_sort(aggregate.into_games());
    log::info!(
        "Loaded {} unique games ({} before de-duplication) from {} sources",
        games.len(),
        total_loaded,
        sources.len()
    );

    Ok(LoadedCatalog {
        games,
        registry,
        sources,
        total_loaded,
    })
}

async fn load_source<F: Fetcher>(
    fetcher: &F,
    base: &Url,
    entry: &ManifestEntry,
    handlers: &HandlerRegistry,
) -> Result<Vec<GameDraft>, GalleryError> {
    let handler = handlers
        .resolve(entry.handler_keys())
        .ok_or_else(|| GalleryError::UnknownHandler(entry.name.clone()))?;
    let url = site_url(base, &format!("{DATA_DIR}{}", entry.location))?;
    let document = fetcher.get_json(&url).await?;
    transform_document(&entry.name, &document, handler)
}

/// Run `handler` over every entry of a source document: an array of groups,
/// each holding a `games` array.
pub fn transform_document(
    source_name: &str,
    document: &Value,
    handler: &dyn SourceHandler,
) -> Result<Vec<GameDraft>, GalleryError> {
    let groups = document
        .as_array()
        .ok_or_else(|| GalleryError::malformed(source_name, "document is not an array of groups"))?;

    let mut drafts = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        let games = group
            .get("games")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                GalleryError::malformed(source_name, format!("group {i} has no games array"))
            })?;
        for (j, game) in games.iter().enumerate() {
            let draft = handler
                .transform(game, group, i, j)
                .map_err(|error| GalleryError::Handler {
                    source_name: source_name.to_string(),
                    group: i,
                    item: j,
                    error,
                })?;
            drafts.push(draft);
        }
    }
    Ok(drafts)
}
