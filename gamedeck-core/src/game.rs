use serde::{Deserialize, Serialize};

/// A normalized game card.
///
/// Created by the loader from a [`GameDraft`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub title: String,
    /// Link opened when the card is clicked
    pub url: String,
    /// Cover image shown on the card (may be empty)
    #[serde(default)]
    pub image_url: String,
    /// Badge id this game is filed under
    pub badge_type: String,
    /// Name of the data source that contributed this record
    pub section: String,
    /// Insertion position in the aggregate collection, assigned at load time
    pub index: usize,
}

/// What a source handler produces for one entry of a data file.
///
/// The loader completes it into a [`Game`] by attaching the source section
/// and the global index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub badge_type: String,
}

impl GameDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>, badge: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            image_url: String::new(),
            badge_type: badge.into(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Attach the source section and aggregate index.
    pub fn into_game(self, section: impl Into<String>, index: usize) -> Game {
        Game {
            title: self.title,
            url: self.url,
            image_url: self.image_url,
            badge_type: self.badge_type,
            section: section.into(),
            index,
        }
    }
}

impl Game {
    /// Lower-cased title, the identity used for de-duplication.
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}
