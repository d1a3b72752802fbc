pub(crate) mod config;
pub(crate) mod featured;
pub(crate) mod filters;
pub(crate) mod list;
pub(crate) mod rows;
pub(crate) mod url;

use gamedeck_lib::settings::{self, Settings};
use gamedeck_lib::{HandlerRegistry, HttpFetcher, LoadedCatalog, load_catalog};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use ::url::Url;

use crate::error::CliError;
use crate::spinner;

/// Settings and site URL shared by the gallery commands.
pub(crate) struct Session {
    pub settings: Settings,
    pub base_url: Url,
    pub quiet: bool,
}

impl Session {
    pub(crate) fn new(base_url: Option<&str>, quiet: bool) -> Result<Self, CliError> {
        let settings = settings::load_settings()?;
        let base_url = settings.base_url(base_url)?;
        Ok(Self {
            settings,
            base_url,
            quiet,
        })
    }

    /// Fetch the manifest and every source listed in it.
    pub(crate) fn load(&self) -> Result<LoadedCatalog, CliError> {
        let fetcher = HttpFetcher::new()?;
        let handlers = HandlerRegistry::with_builtins();

        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let pb = spinner::start(format!("Loading {}", self.base_url), self.quiet);
        let result = rt.block_on(load_catalog(&fetcher, &self.base_url, &handlers));
        pb.finish_and_clear();
        let catalog = result?;

        for source in catalog.failed_sources() {
            if let Err(e) = &source.result {
                log::warn!(
                    "{} Skipped source '{}' ({}): {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    source.name,
                    source.location,
                    e,
                );
            }
        }
        Ok(catalog)
    }

    /// The gallery page URL with `filter` set to `value`.
    pub(crate) fn page_url(&self, filter: Option<&str>) -> Url {
        gamedeck_lib::url_sync::with_filter_param(&self.base_url, filter)
    }
}
