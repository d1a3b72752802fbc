//! Application state, pure update, and the view projection.
//!
//! All mutable gallery state lives in [`AppState`]. User interaction is
//! expressed as [`Event`]s folded into the state by [`update`]; [`view`]
//! derives everything the page displays. [`Gallery`] ties the two to a
//! virtual list renderer.

use tokio::sync::mpsc;
use url::Url;

use gamedeck_core::Game;

use crate::debounce::Debouncer;
use crate::filter::{FilterState, visible_games};
use crate::loader::LoadedCatalog;
use crate::registry::{BadgeRegistry, ControlTarget, FilterControl};
use crate::render::render_rows;
use crate::url_sync;
use crate::virtual_list::{ListHost, VirtualListRenderer};

/// Everything the gallery page knows.
#[derive(Debug, Clone)]
pub struct AppState {
    /// De-duplicated, sorted games
    pub games: Vec<Game>,
    pub registry: BadgeRegistry,
    pub filter: FilterState,
    pub search: String,
    pub viewport_width: u32,
    /// Current page URL, kept in sync with the filter
    pub url: Url,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchChanged(String),
    /// A standalone badge or a badge inside a section stack
    BadgeClicked(String),
    /// The main control of a section stack
    SectionClicked(String),
    /// The global "all" control
    AllClicked,
    Resized(u32),
    /// An in-page navigation link was followed
    NavigatedTo(String),
}

impl AppState {
    /// Initial state: filter taken from the URL's `filter` parameter.
    pub fn new(games: Vec<Game>, registry: BadgeRegistry, url: Url, viewport_width: u32) -> Self {
        let filter = url_sync::filter_from_url(&url, &registry);
        Self {
            games,
            registry,
            filter,
            search: String::new(),
            viewport_width,
            url,
        }
    }

    pub fn from_catalog(catalog: LoadedCatalog, url: Url, viewport_width: u32) -> Self {
        Self::new(catalog.games, catalog.registry, url, viewport_width)
    }

    /// Games currently shown, in display order.
    pub fn visible(&self) -> Vec<&Game> {
        visible_games(&self.games, &self.search, &self.filter)
    }

    fn sync_url(&mut self) {
        self.url = url_sync::apply_to_url(&self.url, &self.filter, &self.registry);
    }
}

/// Fold one event into the state.
pub fn update(mut state: AppState, event: Event) -> AppState {
    apply(&mut state, event);
    state
}

/// In-place form of [`update`].
pub fn apply(state: &mut AppState, event: Event) {
    match event {
        Event::SearchChanged(text) => state.search = text,
        Event::BadgeClicked(id) => {
            state.filter.toggle(&state.registry, &ControlTarget::Badge(id));
            state.sync_url();
        }
        Event::SectionClicked(name) => {
            state.filter.toggle(&state.registry, &ControlTarget::Section(name));
            state.sync_url();
        }
        Event::AllClicked => {
            state.filter.toggle_all(&state.registry);
            state.sync_url();
        }
        Event::Resized(width) => state.viewport_width = width,
        Event::NavigatedTo(href) => match url_sync::follow_nav_link(&state.url, &href) {
            Ok(url) => {
                state.filter = url_sync::filter_from_url(&url, &state.registry);
                state.url = url;
            }
            Err(e) => log::warn!("Ignoring navigation to '{href}': {e}"),
        },
    }
}

/// A filter control with its rendered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub control: FilterControl,
    pub disabled: bool,
    /// Disabled flags of a stack's items, in item order
    pub items_disabled: Vec<bool>,
}

/// What the page shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<String>,
    pub controls: Vec<ControlView>,
    pub visible_count: usize,
    pub stylesheet: String,
}

/// Project the state into rows and control states.
pub fn view(state: &AppState) -> View {
    let visible = state.visible();
    let controls = state
        .registry
        .controls()
        .into_iter()
        .map(|control| {
            let disabled = state.filter.is_control_disabled(&state.registry, &control);
            let items_disabled = match &control {
                FilterControl::Stack { items, .. } => items
                    .iter()
                    .map(|item| state.filter.is_disabled(&item.id))
                    .collect(),
                FilterControl::Badge(_) => Vec::new(),
            };
            ControlView {
                control,
                disabled,
                items_disabled,
            }
        })
        .collect();

    View {
        rows: render_rows(&visible, state.viewport_width),
        controls,
        visible_count: visible.len(),
        stylesheet: state.registry.stylesheet(),
    }
}

/// State plus the list renderer it drives.
///
/// Resizes update the state at once but re-render only after
/// [`RESIZE_DEBOUNCE`](crate::debounce::RESIZE_DEBOUNCE) without another
/// resize; the owner picks the re-render up with [`Gallery::next_resize`] or
/// [`Gallery::refresh_if_due`].
pub struct Gallery<R> {
    state: AppState,
    list: ListHost<R>,
    debouncer: Debouncer,
    resize_tx: mpsc::UnboundedSender<()>,
    resize_rx: mpsc::UnboundedReceiver<()>,
}

impl<R: VirtualListRenderer> Gallery<R> {
    /// Take ownership of the initial state and render it.
    pub fn new(state: AppState, renderer: R) -> Self {
        let (resize_tx, resize_rx) = mpsc::unbounded_channel();
        let mut gallery = Self {
            state,
            list: ListHost::new(renderer),
            debouncer: Debouncer::for_resize(),
            resize_tx,
            resize_rx,
        };
        gallery.refresh();
        gallery
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        self.list.renderer()
    }

    /// Apply an event and re-render. Resizes go through [`Gallery::resize`].
    ///
    /// Must be called from within a tokio runtime when `event` is a resize.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Resized(width) => self.resize(width),
            event => {
                apply(&mut self.state, event);
                self.refresh();
            }
        }
    }

    /// Record the new viewport width and schedule a debounced re-render,
    /// cancelling any re-render still pending from an earlier resize.
    pub fn resize(&mut self, width: u32) {
        apply(&mut self.state, Event::Resized(width));
        let tx = self.resize_tx.clone();
        self.debouncer.trigger(async move {
            // The receiver lives as long as the gallery
            let _ = tx.send(());
        });
    }

    /// Re-render if a debounced resize has fired. Returns whether it did.
    pub fn refresh_if_due(&mut self) -> bool {
        let mut due = false;
        while self.resize_rx.try_recv().is_ok() {
            due = true;
        }
        if due {
            self.refresh();
        }
        due
    }

    /// Wait for the next debounced resize, then re-render.
    pub async fn next_resize(&mut self) {
        if self.resize_rx.recv().await.is_some() {
            while self.resize_rx.try_recv().is_ok() {}
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let rows = render_rows(&self.state.visible(), self.state.viewport_width);
        self.list.refresh(rows);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
