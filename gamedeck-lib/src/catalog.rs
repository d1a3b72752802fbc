//! De-duplication and ordering of the aggregate game collection.

use std::cmp::Ordering;
use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use gamedeck_core::Game;

/// Keep the first record for each lower-cased title, preserving input order.
pub fn dedup_by_title(games: Vec<Game>) -> Vec<Game> {
    let mut seen = HashSet::new();
    games
        .into_iter()
        .filter(|game| seen.insert(game.title_key()))
        .collect()
}

/// Stable ascending sort by title under [`locale_cmp`].
pub fn sort_by_title(games: &mut [Game]) {
    games.sort_by(|a, b| locale_cmp(&a.title, &b.title));
}

/// De-duplicate, then sort. This is the order the gallery displays.
pub fn dedup_and_sort(games: Vec<Game>) -> Vec<Game> {
    let mut unique = dedup_by_title(games);
    sort_by_title(&mut unique);
    unique
}

/// Locale-style string comparison.
///
/// Letters compare without regard to accents or case first; accents break
/// ties next, then lowercase sorts before uppercase, and finally raw code
/// points keep the ordering total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        };
    }
    Ordering::Equal
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
