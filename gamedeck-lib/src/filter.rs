//! Badge filter state and the visible-game query.

use std::collections::BTreeSet;

use gamedeck_core::Game;

use crate::registry::{BadgeRegistry, ControlTarget, FilterControl};

/// The set of currently disabled badge ids. Everything else is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    disabled: BTreeSet<String>,
}

impl FilterState {
    /// Nothing disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn disabled(&self) -> &BTreeSet<String> {
        &self.disabled
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    pub fn disable(&mut self, id: impl Into<String>) {
        self.disabled.insert(id.into());
    }

    pub fn enable(&mut self, id: &str) {
        self.disabled.remove(id);
    }

    /// Known ids that are not disabled, in registry order.
    pub fn enabled_ids<'r>(&self, registry: &'r BadgeRegistry) -> Vec<&'r str> {
        registry
            .all_ids()
            .into_iter()
            .filter(|id| !self.is_disabled(id))
            .collect()
    }

    /// Flip a single badge.
    pub fn toggle_badge(&mut self, id: &str) {
        if !self.disabled.remove(id) {
            self.disabled.insert(id.to_string());
        }
    }

    /// Click on a section's main control: disable every member when the
    /// control is currently enabled, enable every member otherwise.
    pub fn toggle_section(&mut self, registry: &BadgeRegistry, section: &str) {
        let members = registry.section_members(section);
        if members.is_empty() {
            return;
        }
        let section_disabled = members.iter().all(|id| self.is_disabled(id));
        for id in members {
            if section_disabled {
                self.enable(id);
            } else {
                self.disable(id);
            }
        }
    }

    /// Click on a control of either kind.
    pub fn toggle(&mut self, registry: &BadgeRegistry, target: &ControlTarget) {
        match target {
            ControlTarget::Badge(id) => self.toggle_badge(id),
            ControlTarget::Section(name) => self.toggle_section(registry, name),
        }
    }

    /// The global "all" control: when any control is enabled, disable every
    /// known badge; otherwise enable them all.
    pub fn toggle_all(&mut self, registry: &BadgeRegistry) {
        let any_enabled = registry.all_ids().iter().any(|id| !self.is_disabled(id));
        if any_enabled {
            self.disabled = registry.all_ids().into_iter().map(str::to_string).collect();
        } else {
            self.disabled.clear();
        }
    }

    /// Whether a control renders as disabled. A section stack's main control
    /// is disabled only when every member is.
    pub fn is_control_disabled(&self, registry: &BadgeRegistry, control: &FilterControl) -> bool {
        self.is_target_disabled(registry, &control.target())
    }

    pub fn is_target_disabled(&self, registry: &BadgeRegistry, target: &ControlTarget) -> bool {
        match target {
            ControlTarget::Badge(id) => self.is_disabled(id),
            ControlTarget::Section(name) => {
                let members = registry.section_members(name);
                !members.is_empty() && members.iter().all(|id| self.is_disabled(id))
            }
        }
    }

    /// Whether a game passes the badge filter.
    pub fn admits(&self, game: &Game) -> bool {
        !self.is_disabled(&game.badge_type)
    }
}

/// Games matching the search text (case-insensitive title substring, after
/// trimming) whose badge is not disabled. Input order is preserved.
pub fn visible_games<'a>(games: &'a [Game], search: &str, filter: &FilterState) -> Vec<&'a Game> {
    let query = search.trim().to_lowercase();
    games
        .iter()
        .filter(|game| query.is_empty() || game.title.to_lowercase().contains(&query))
        .filter(|game| filter.admits(game))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
