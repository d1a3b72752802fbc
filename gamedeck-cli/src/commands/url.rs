use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedeck_lib::{ControlTarget, url_sync};

use super::Session;
use crate::error::CliError;

/// Disable `disable` on top of `filter` and print the resulting parameter
/// and page URL.
pub(crate) fn run_url(
    session: &Session,
    filter: Option<&str>,
    disable: &[String],
) -> Result<(), CliError> {
    let catalog = session.load()?;
    let registry = &catalog.registry;
    let mut state = url_sync::deserialize(filter, registry);

    for name in disable {
        let target = if registry.is_section(name) {
            ControlTarget::Section(name.clone())
        } else if registry.contains(name) {
            ControlTarget::Badge(name.clone())
        } else {
            return Err(CliError::not_found(format!("No badge or section named '{name}'")));
        };
        for id in registry.target_ids(&target) {
            state.disable(id);
        }
    }

    let value = url_sync::serialize(&state, registry);
    let url = url_sync::apply_to_url(&session.page_url(filter), &state, registry);
    match &value {
        Some(value) => log::info!("filter={}", value.if_supports_color(Stdout, |t| t.cyan())),
        None => log::info!(
            "{}",
            "(no filter parameter: every badge is off)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    log::info!("{url}");
    Ok(())
}
