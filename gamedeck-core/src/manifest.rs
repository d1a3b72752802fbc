use serde::{Deserialize, Serialize};

use crate::badge::BadgeDef;

/// One entry of `data.json`, describing a single data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Path of the source document, relative to the site's `data/` directory
    pub location: String,
    /// Name of the registered source handler that normalizes this document
    #[serde(default)]
    pub handler: String,
    /// Badge definitions this source contributes to the filter UI
    #[serde(default)]
    pub groups: Vec<BadgeDef>,
    /// Section tag applied to every game loaded from this source
    pub name: String,
}

impl ManifestEntry {
    /// Handler lookup keys in priority order: the declared handler, then the
    /// source name.
    pub fn handler_keys(&self) -> impl Iterator<Item = &str> {
        [self.handler.as_str(), self.name.as_str()]
            .into_iter()
            .filter(|key| !key.is_empty())
    }
}
