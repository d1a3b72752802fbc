use super::*;
use gamedeck_core::GameDraft;

fn games(n: usize) -> Vec<Game> {
    (0..n)
        .map(|i| GameDraft::new(format!("Game {i}"), format!("/g/{i}"), "rpg").into_game("main", i))
        .collect()
}

#[test]
fn columns_follow_viewport_width() {
    assert_eq!(columns_for_width(0), 1);
    assert_eq!(columns_for_width(207), 1);
    assert_eq!(columns_for_width(208), 1);
    assert_eq!(columns_for_width(416), 2);
    assert_eq!(columns_for_width(1280), 6);
}

#[test]
fn resize_changes_rows_but_not_order() {
    let all = games(11);
    let visible: Vec<&Game> = all.iter().collect();

    let five = columns_for_width(5 * CARD_WIDTH_WITH_GAP + 10);
    let three = columns_for_width(3 * CARD_WIDTH_WITH_GAP);
    assert_eq!((five, three), (5, 3));

    let wide: Vec<&[&Game]> = partition_rows(&visible, five).collect();
    let narrow: Vec<&[&Game]> = partition_rows(&visible, three).collect();
    assert_eq!(wide.len(), 3);
    assert_eq!(narrow.len(), 4);
    assert_eq!(narrow.last().map(|r| r.len()), Some(2));

    let flatten = |rows: &[&[&Game]]| -> Vec<usize> {
        rows.iter().flat_map(|r| r.iter().map(|g| g.index)).collect()
    };
    assert_eq!(flatten(&wide[..]), flatten(&narrow[..]));
}

#[test]
fn render_rows_emits_one_string_per_row() {
    let all = games(4);
    let visible: Vec<&Game> = all.iter().collect();
    let rows = render_rows(&visible, 2 * CARD_WIDTH_WITH_GAP);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with(r#"<div class="game-row">"#));
    assert!(rows[0].ends_with("</div>"));
    assert_eq!(rows[0].matches("class=\"game-card\"").count(), 2);
}

#[test]
fn card_markup_contains_badge_and_escaped_title() {
    let game = GameDraft::new("Tom & Jerry <3", "/g/tj?a=1&b=2", "early_access")
        .with_image("/i/tj.png")
        .into_game("cartoons", 7);
    let html = render_card(&game);
    assert!(html.contains(r#"href="/g/tj?a=1&amp;b=2""#));
    assert!(html.contains(r#"<span class="badge badge-early_access">EARLY ACCESS</span>"#));
    assert!(html.contains(r#"<img src="/i/tj.png" alt="Tom &amp; Jerry &lt;3">"#));
    assert!(html.contains(r#"<div class="title">Tom &amp; Jerry &lt;3</div>"#));
    assert!(html.contains(&format!(r#"data-token="{}""#, card_token(&game))));
}

#[test]
fn card_token_matches_btoa_format() {
    let game = GameDraft::new("X", "/", "rpg").into_game("main", 12);
    // btoa("1:main:12")
    assert_eq!(card_token(&game), "MTptYWluOjEy");
}

#[test]
fn card_token_decodes() {
    let game = GameDraft::new("X", "/", "rpg").into_game("jam:2024", 3);
    assert_eq!(
        decode_card_token(&card_token(&game)),
        Some(CardRef {
            section: "jam:2024".into(),
            index: 3
        })
    );
    assert_eq!(decode_card_token("not base64!"), None);
    // btoa("2:main:1") has an unknown version
    assert_eq!(decode_card_token("MjptYWluOjE="), None);
}

#[test]
fn escape_html_handles_quotes() {
    assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    assert_eq!(escape_html("plain"), "plain");
}
