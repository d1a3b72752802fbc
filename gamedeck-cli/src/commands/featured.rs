use gamedeck_lib::featured::{CardInfo, featured_card};

use super::Session;
use crate::error::CliError;

/// Print the featured snippet for a card given directly or found by title.
pub(crate) fn run_featured(
    session: &Session,
    title: Option<String>,
    href: Option<String>,
    img: Option<String>,
) -> Result<(), CliError> {
    let dev_origin = session.settings.dev_origin();

    let lookup = match (&href, &img) {
        (Some(_), Some(_)) => None,
        _ => title.as_deref().map(str::to_lowercase),
    };

    let card = match lookup {
        Some(key) => {
            let catalog = session.load()?;
            let game = catalog
                .games
                .iter()
                .find(|g| g.title_key() == key)
                .ok_or_else(|| CliError::not_found(format!("No game titled '{key}'")))?;
            log::debug!("Found '{}' in source '{}'", game.title, game.section);
            CardInfo::from_game(game, dev_origin)
        }
        None => CardInfo {
            href,
            img_src: img,
            title,
        },
    };

    println!("{}", featured_card(&card, dev_origin)?);
    Ok(())
}
