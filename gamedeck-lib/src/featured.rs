//! "Featured" card snippets for hand-curated pages.
//!
//! Takes the link, image and title of a rendered card and produces the
//! badge-less markup used on the featured page, with links rewritten to be
//! site-relative.

use thiserror::Error;

use gamedeck_core::Game;
use url::Url;

use crate::render::escape_html;

/// Origin of the local development server.
pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5500";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeaturedError {
    #[error("Card has no link")]
    MissingHref,

    #[error("Card has no image")]
    MissingImage,

    #[error("Card has no title")]
    MissingTitle,
}

/// The parts of a card the snippet is built from, as a browser reports
/// them (image sources are usually absolute).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardInfo {
    pub href: Option<String>,
    pub img_src: Option<String>,
    pub title: Option<String>,
}

impl CardInfo {
    /// Card info for a loaded game, with the image resolved against `origin`
    /// the way a browser would report `img.src`.
    pub fn from_game(game: &Game, origin: &str) -> Self {
        let img_src = if game.image_url.is_empty() {
            String::new()
        } else {
            Url::parse(origin)
                .and_then(|base| base.join(&game.image_url))
                .map(String::from)
                .unwrap_or_else(|_| game.image_url.clone())
        };
        Self {
            href: Some(game.url.clone()).filter(|s| !s.is_empty()),
            img_src: Some(img_src).filter(|s| !s.is_empty()),
            title: Some(game.title.clone()).filter(|s| !s.is_empty()),
        }
    }
}

/// Build the featured snippet for a card.
pub fn featured_card(card: &CardInfo, dev_origin: &str) -> Result<String, FeaturedError> {
    let href = card.href.as_deref().ok_or(FeaturedError::MissingHref)?;
    let src = card.img_src.as_deref().ok_or(FeaturedError::MissingImage)?;
    let title = card.title.as_deref().ok_or(FeaturedError::MissingTitle)?;

    let href = relative_href(href, dev_origin);
    let src = rooted_src(src, dev_origin);
    let title = escape_html(title);

    Ok(format!(
        "<a href=\"{href}\" class=\"game-card\" target=\"_blank\">\n    \
         <img src=\"{src}\" alt=\"{title}\">\n    \
         <div class=\"title\">{title}</div>\n\
         </a>",
        href = escape_html(&href),
        src = escape_html(&src),
    ))
}

/// Rewrite a link so it resolves relative to the featured page.
pub fn relative_href(href: &str, dev_origin: &str) -> String {
    let dev_prefix = format!("{}/", dev_origin.trim_end_matches('/'));
    if href.starts_with('/') {
        format!(".{href}")
    } else if let Some(rest) = href.strip_prefix(&dev_prefix) {
        format!("./{rest}")
    } else if href.starts_with("http://") {
        format!("./{}", path_after_host(href))
    } else {
        href.to_string()
    }
}

/// Rewrite an image source to a root-relative path.
pub fn rooted_src(src: &str, dev_origin: &str) -> String {
    let dev_prefix = format!("{}/", dev_origin.trim_end_matches('/'));
    if let Some(rest) = src.strip_prefix(&dev_prefix) {
        format!("/{rest}")
    } else if src.starts_with("http://") {
        format!("/{}", path_after_host(src))
    } else {
        src.to_string()
    }
}

fn path_after_host(url: &str) -> String {
    url.split('/').skip(3).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedeck_core::GameDraft;

    #[test]
    fn hrefs_become_relative() {
        assert_eq!(relative_href("/games/doom.html", DEFAULT_DEV_ORIGIN), "./games/doom.html");
        assert_eq!(
            relative_href("http://localhost:5500/games/doom.html", DEFAULT_DEV_ORIGIN),
            "./games/doom.html"
        );
        assert_eq!(relative_href("http://example.com/a/b", DEFAULT_DEV_ORIGIN), "./a/b");
        assert_eq!(relative_href("https://example.com/a", DEFAULT_DEV_ORIGIN), "https://example.com/a");
    }

    #[test]
    fn image_sources_become_rooted() {
        assert_eq!(rooted_src("http://localhost:5500/img/doom.png", DEFAULT_DEV_ORIGIN), "/img/doom.png");
        assert_eq!(rooted_src("http://cdn.example.com/x/y.png", DEFAULT_DEV_ORIGIN), "/x/y.png");
        assert_eq!(rooted_src("img/doom.png", DEFAULT_DEV_ORIGIN), "img/doom.png");
    }

    #[test]
    fn snippet_has_no_badge() {
        let card = CardInfo {
            href: Some("/games/doom.html".into()),
            img_src: Some("http://localhost:5500/img/doom.png".into()),
            title: Some("Doom".into()),
        };
        let html = featured_card(&card, DEFAULT_DEV_ORIGIN).unwrap();
        assert!(html.starts_with(r#"<a href="./games/doom.html" class="game-card" target="_blank">"#));
        assert!(html.contains(r#"<img src="/img/doom.png" alt="Doom">"#));
        assert!(html.contains(r#"<div class="title">Doom</div>"#));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn incomplete_cards_are_rejected() {
        let card = CardInfo {
            href: Some("/x".into()),
            img_src: None,
            title: Some("X".into()),
        };
        assert_eq!(featured_card(&card, DEFAULT_DEV_ORIGIN), Err(FeaturedError::MissingImage));
        assert_eq!(
            featured_card(&CardInfo::default(), DEFAULT_DEV_ORIGIN),
            Err(FeaturedError::MissingHref)
        );
    }

    #[test]
    fn card_info_from_game_resolves_image() {
        let game = GameDraft::new("Doom", "/games/doom.html", "fps")
            .with_image("/img/doom.png")
            .into_game("shooters", 0);
        let card = CardInfo::from_game(&game, DEFAULT_DEV_ORIGIN);
        assert_eq!(card.img_src.as_deref(), Some("http://localhost:5500/img/doom.png"));

        let html = featured_card(&card, DEFAULT_DEV_ORIGIN).unwrap();
        assert!(html.contains(r#"src="/img/doom.png""#));
    }

    #[test]
    fn relative_image_resolves_like_a_browser() {
        let game = GameDraft::new("Bloom", "/games/bloom.html", "jam")
            .with_image("img/bloom.png")
            .into_game("jams", 3);
        let card = CardInfo::from_game(&game, DEFAULT_DEV_ORIGIN);
        assert_eq!(card.img_src.as_deref(), Some("http://localhost:5500/img/bloom.png"));
        assert_eq!(
            rooted_src(card.img_src.as_deref().unwrap(), DEFAULT_DEV_ORIGIN),
            "/img/bloom.png"
        );

        let remote = GameDraft::new("Far", "/far", "jam")
            .with_image("https://cdn.example.com/far.png")
            .into_game("jams", 4);
        assert_eq!(
            CardInfo::from_game(&remote, DEFAULT_DEV_ORIGIN).img_src.as_deref(),
            Some("https://cdn.example.com/far.png")
        );
    }
}
