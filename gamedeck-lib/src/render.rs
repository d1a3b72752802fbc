//! Row markup for the virtualized card grid.
//!
//! The visible games are laid out in rows whose column count follows the
//! viewport width. Each row is one HTML string handed to the list renderer.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use gamedeck_core::{Game, badge_label};

/// Card width plus the gap between cards, in CSS pixels.
pub const CARD_WIDTH_WITH_GAP: u32 = 184 + 24;

/// Version tag of the card token format.
const TOKEN_VERSION: &str = "1";

/// Number of cards per row for a viewport width (at least one).
pub fn columns_for_width(viewport_width: u32) -> usize {
    (viewport_width / CARD_WIDTH_WITH_GAP).max(1) as usize
}

/// Split games into rows of `columns` cards, preserving order.
pub fn partition_rows<'a, G>(games: &'a [G], columns: usize) -> impl Iterator<Item = &'a [G]> {
    games.chunks(columns.max(1))
}

/// Markup for all rows at the given viewport width.
pub fn render_rows(games: &[&Game], viewport_width: u32) -> Vec<String> {
    partition_rows(games, columns_for_width(viewport_width))
        .map(render_row)
        .collect()
}

/// Markup for one row of cards.
pub fn render_row(games: &[&Game]) -> String {
    let mut html = String::from(r#"<div class="game-row">"#);
    for game in games {
        html.push_str(&render_card(game));
    }
    html.push_str("</div>");
    html
}

/// Markup for a single card.
pub fn render_card(game: &Game) -> String {
    let title = escape_html(&game.title);
    format!(
        concat!(
            r#"<a href="{url}" class="game-card" target="_blank" data-token="{token}">"#,
            r#"<span class="badge badge-{badge}">{label}</span>"#,
            r#"<img src="{img}" alt="{title}">"#,
            r#"<div class="title">{title}</div>"#,
            "</a>",
        ),
        url = escape_html(&game.url),
        token = card_token(game),
        badge = escape_html(&game.badge_type),
        label = escape_html(&badge_label(&game.badge_type)),
        img = escape_html(&game.image_url),
        title = title,
    )
}

/// Reversible token identifying a card by source section and index:
/// base64 of `1:<section>:<index>`.
pub fn card_token(game: &Game) -> String {
    STANDARD.encode(format!("{TOKEN_VERSION}:{}:{}", game.section, game.index))
}

/// Card reference recovered from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    pub section: String,
    pub index: usize,
}

/// Decode a token produced by [`card_token`]. Returns `None` for malformed
/// tokens or unknown versions.
pub fn decode_card_token(token: &str) -> Option<CardRef> {
    let bytes = STANDARD.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let (version, rest) = text.split_once(':')?;
    if version != TOKEN_VERSION {
        return None;
    }
    // Section names may contain ':'; the index is always last.
    let (section, index) = rest.rsplit_once(':')?;
    Some(CardRef {
        section: section.to_string(),
        index: index.parse().ok()?,
    })
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
