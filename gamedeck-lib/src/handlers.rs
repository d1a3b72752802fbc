//! Source handlers: typed transforms from a data file's raw JSON entries
//! into [`GameDraft`]s.
//!
//! Each data source in the manifest names the handler that understands its
//! layout. Handlers are registered up front in a [`HandlerRegistry`]; the
//! loader looks them up by the manifest's `handler` field, falling back to
//! the source name.

use std::collections::HashMap;

use serde_json::Value;

use gamedeck_core::util::first_str;
use gamedeck_core::{GameDraft, HandlerError};

const TITLE_KEYS: &[&str] = &["title", "name"];
const URL_KEYS: &[&str] = &["url", "link", "href"];
const IMAGE_KEYS: &[&str] = &["img", "image", "imageUrl", "cover"];
const GAME_BADGE_KEYS: &[&str] = &["type", "badge"];
const GROUP_BADGE_KEYS: &[&str] = &["type", "id", "badge"];

/// Transform one entry of a data file.
///
/// Arguments mirror the data layout: the entry itself, the group that holds
/// it, the group's position in the file and the entry's position in the
/// group.
pub trait SourceHandler: Send + Sync {
    fn transform(
        &self,
        game: &Value,
        group: &Value,
        group_index: usize,
        item_index: usize,
    ) -> Result<GameDraft, HandlerError>;
}

impl<F> SourceHandler for F
where
    F: Fn(&Value, &Value, usize, usize) -> Result<GameDraft, HandlerError> + Send + Sync,
{
    fn transform(
        &self,
        game: &Value,
        group: &Value,
        group_index: usize,
        item_index: usize,
    ) -> Result<GameDraft, HandlerError> {
        self(game, group, group_index, item_index)
    }
}

/// Reads the badge from the entry, falling back to the group's `type`.
pub struct FlatHandler;

impl SourceHandler for FlatHandler {
    fn transform(
        &self,
        game: &Value,
        group: &Value,
        _group_index: usize,
        _item_index: usize,
    ) -> Result<GameDraft, HandlerError> {
        let badge = first_str(game, GAME_BADGE_KEYS)
            .or_else(|| first_str(group, GROUP_BADGE_KEYS))
            .ok_or(HandlerError::MissingField("type"))?;
        card_fields(game, badge)
    }
}

/// Files every entry under its group's badge, ignoring any per-entry type.
pub struct GroupedHandler;

impl SourceHandler for GroupedHandler {
    fn transform(
        &self,
        game: &Value,
        group: &Value,
        _group_index: usize,
        _item_index: usize,
    ) -> Result<GameDraft, HandlerError> {
        let badge = first_str(group, GROUP_BADGE_KEYS).ok_or(HandlerError::MissingField("type"))?;
        card_fields(game, badge)
    }
}

fn card_fields(game: &Value, badge: &str) -> Result<GameDraft, HandlerError> {
    if !game.is_object() {
        return Err(HandlerError::invalid_shape(format!(
            "expected an object entry, got {game}"
        )));
    }
    let title = first_str(game, TITLE_KEYS).ok_or(HandlerError::MissingField("title"))?;
    let url = first_str(game, URL_KEYS).ok_or(HandlerError::MissingField("url"))?;
    let image = first_str(game, IMAGE_KEYS).unwrap_or_default();
    Ok(GameDraft::new(title, url, badge).with_image(image))
}

/// Handlers keyed by name.
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn SourceHandler>>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl HandlerRegistry {
    /// Create a registry with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry holding the `flat` and `grouped` handlers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("flat", FlatHandler);
        registry.register("grouped", GroupedHandler);
        registry
    }

    /// Register (or replace) a handler under `name`.
    pub fn register<H: SourceHandler + 'static>(
        &mut self,
        name: impl Into<String>,
        handler: H,
    ) -> &mut Self {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn SourceHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Resolve the first registered handler among `keys`.
    pub fn resolve<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Option<&dyn SourceHandler> {
        keys.into_iter().find_map(|key| self.get(key))
    }

    /// Registered handler names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
#[path = "tests/handlers_tests.rs"]
mod tests;
