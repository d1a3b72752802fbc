use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedeck_lib::url_sync;
use gamedeck_lib::visible_games;

use super::Session;
use crate::cli_types::SelectionArgs;
use crate::error::CliError;

pub(crate) fn run_list(
    session: &Session,
    selection: &SelectionArgs,
    json: bool,
) -> Result<(), CliError> {
    let catalog = session.load()?;
    let filter = url_sync::deserialize(selection.filter.as_deref(), &catalog.registry);
    let search = selection.search.as_deref().unwrap_or("");
    let visible = visible_games(&catalog.games, search, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for game in &visible {
        let origin = format!("{} #{}", game.section, game.index);
        log::info!(
            "  {} [{}] {}",
            game.title.if_supports_color(Stdout, |t| t.bold()),
            game.badge_type.if_supports_color(Stdout, |t| t.cyan()),
            origin.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");
    log::info!(
        "{} of {} games shown",
        visible.len().if_supports_color(Stdout, |t| t.bold()),
        catalog.games.len(),
    );
    Ok(())
}
