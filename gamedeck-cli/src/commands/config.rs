use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedeck_lib::featured::DEFAULT_DEV_ORIGIN;
use gamedeck_lib::settings::{
    self, DEFAULT_BASE_URL, DEFAULT_VIEWPORT_WIDTH, load_settings_from, save_settings_to,
    settings_path,
};

use crate::error::CliError;

fn source_label(from_cli: bool, from_file: bool) -> String {
    let label = if from_cli {
        "(command line)"
    } else if from_file {
        "(settings.toml)"
    } else {
        "(default)"
    };
    format!("{}", label.if_supports_color(Stdout, |t| t.dimmed()))
}

/// Show the effective settings and where each value comes from.
pub(crate) fn run_config_show(base_url: Option<&str>) -> Result<(), CliError> {
    let path = settings_path();
    let settings = settings::load_settings()?;

    log::info!(
        "{}",
        "Gallery Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let effective_url = settings.base_url(base_url)?;
    log::info!(
        "  {:<16}{} {}",
        "base_url",
        effective_url,
        source_label(base_url.is_some(), settings.base_url.is_some()),
    );
    log::info!(
        "  {:<16}{} {}",
        "viewport_width",
        settings.viewport_width(None),
        source_label(false, settings.viewport_width.is_some()),
    );
    log::info!(
        "  {:<16}{} {}",
        "dev_origin",
        settings.dev_origin(),
        source_label(false, settings.dev_origin.is_some()),
    );

    if let Some(raw) = settings::load_settings_string() {
        log::debug!("Raw settings file:\n{raw}");
    }
    log::debug!(
        "Defaults: base_url={DEFAULT_BASE_URL} viewport_width={DEFAULT_VIEWPORT_WIDTH} \
         dev_origin={DEFAULT_DEV_ORIGIN}"
    );
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Merge the given values into the settings file.
pub(crate) fn run_config_set(
    site: Option<String>,
    width: Option<u32>,
    dev_origin: Option<String>,
) -> Result<(), CliError> {
    if site.is_none() && width.is_none() && dev_origin.is_none() {
        return Err(CliError::config(
            "Nothing to set (use --site, --width or --dev-origin)",
        ));
    }

    let path = settings_path();
    let mut settings = load_settings_from(&path)?;

    if let Some(site) = site {
        // Must parse as an absolute URL
        url::Url::parse(&site)
            .map_err(|e| CliError::config(format!("Invalid site URL '{site}': {e}")))?;
        settings.base_url = Some(site);
    }
    if let Some(width) = width {
        if width == 0 {
            return Err(CliError::config("Viewport width must be positive"));
        }
        settings.viewport_width = Some(width);
    }
    if let Some(origin) = dev_origin {
        settings.dev_origin = Some(origin);
    }

    save_settings_to(&path, &settings)?;
    log::info!(
        "{} Saved {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
