use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedeck_lib::render::columns_for_width;
use gamedeck_lib::{AppState, Event, update, view};

use super::Session;
use crate::cli_types::SelectionArgs;
use crate::error::CliError;

pub(crate) fn run_rows(
    session: &Session,
    width: Option<u32>,
    selection: &SelectionArgs,
) -> Result<(), CliError> {
    let catalog = session.load()?;
    let width = session.settings.viewport_width(width);
    let url = session.page_url(selection.filter.as_deref());

    let mut state = AppState::from_catalog(catalog, url, width);
    if let Some(search) = &selection.search {
        state = update(state, Event::SearchChanged(search.clone()));
    }
    let page = view(&state);

    log::info!(
        "{} games in {} rows of {} at {}px",
        page.visible_count.if_supports_color(Stdout, |t| t.bold()),
        page.rows.len(),
        columns_for_width(width),
        width,
    );
    for row in &page.rows {
        println!("{row}");
    }
    Ok(())
}
