use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedeck_lib::registry::BadgeControl;
use gamedeck_lib::{BadgeRegistry, ControlTarget, FilterControl, FilterState, url_sync};

use super::Session;
use crate::error::CliError;

fn mark(disabled: bool) -> String {
    if disabled {
        format!("{}", "[ ]".if_supports_color(Stdout, |t| t.dimmed()))
    } else {
        format!("{}", "[x]".if_supports_color(Stdout, |t| t.green()))
    }
}

pub(crate) fn run_filters(session: &Session, filter: Option<&str>) -> Result<(), CliError> {
    let catalog = session.load()?;
    let registry = &catalog.registry;
    let state = url_sync::deserialize(filter, registry);

    log::info!("{}", "Filters".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    let all_disabled = state.enabled_ids(registry).is_empty();
    log::info!("{} ALL", mark(all_disabled));

    for control in registry.controls() {
        let disabled = state.is_control_disabled(registry, &control);
        match &control {
            FilterControl::Badge(badge) => {
                log::info!(
                    "{} {}",
                    mark(disabled),
                    describe(badge, registry.color(&badge.id)),
                );
            }
            FilterControl::Stack { label, items, .. } => {
                log::info!(
                    "{} {}",
                    mark(disabled),
                    label.if_supports_color(Stdout, |t| t.bold()),
                );
                for item in items {
                    log::info!(
                        "    {} {}",
                        item_mark(&state, registry, item),
                        describe(item, registry.color(&item.id)),
                    );
                }
            }
        }
    }

    log::info!("");
    match url_sync::serialize(&state, registry) {
        Some(value) => log::info!("filter={}", value.if_supports_color(Stdout, |t| t.cyan())),
        None => log::info!("{}", "(no filter parameter)".if_supports_color(Stdout, |t| t.dimmed())),
    }
    Ok(())
}

fn item_mark(
    state: &FilterState,
    registry: &BadgeRegistry,
    item: &BadgeControl,
) -> String {
    mark(state.is_target_disabled(registry, &ControlTarget::Badge(item.id.clone())))
}

fn describe(badge: &BadgeControl, color: Option<&str>) -> String {
    match color {
        Some(color) => format!(
            "{} {}",
            badge.label,
            format!("({} {})", badge.id, color).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => badge.label.clone(),
    }
}
