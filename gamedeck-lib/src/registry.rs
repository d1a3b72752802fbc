//! Badge registry and the filter controls derived from it.
//!
//! The registry is the append-only list of badge definitions gathered from
//! the manifest. Sections group badges so they can be toggled as a unit;
//! badges without a section stand alone.

use std::collections::HashSet;

use gamedeck_core::{BadgeDef, badge_label};

/// What a filter control acts on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlTarget {
    /// A single badge id
    Badge(String),
    /// Every badge of a section
    Section(String),
}

/// One clickable badge in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeControl {
    pub id: String,
    pub label: String,
    /// Stacking order within a section stack; `None` outside stacks
    pub z_index: Option<usize>,
}

impl BadgeControl {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: badge_label(id),
            z_index: None,
        }
    }

    pub fn target(&self) -> ControlTarget {
        ControlTarget::Badge(self.id.clone())
    }
}

/// Layout of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterControl {
    /// A standalone badge, or the only badge of its section
    Badge(BadgeControl),
    /// A section with two or more badges: a main control that toggles the
    /// whole section plus one control per member
    Stack {
        section: String,
        label: String,
        /// Badge id whose color the main control borrows
        color_badge: String,
        items: Vec<BadgeControl>,
    },
}

impl FilterControl {
    /// Target of the top-level control (the stack's main control for stacks).
    pub fn target(&self) -> ControlTarget {
        match self {
            Self::Badge(badge) => badge.target(),
            Self::Stack { section, .. } => ControlTarget::Section(section.clone()),
        }
    }
}

/// Append-only collection of badge definitions.
#[derive(Debug, Clone, Default)]
pub struct BadgeRegistry {
    badges: Vec<BadgeDef>,
}

impl BadgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, badge: BadgeDef) {
        self.badges.push(badge);
    }

    pub fn extend(&mut self, badges: impl IntoIterator<Item = BadgeDef>) {
        self.badges.extend(badges);
    }

    /// Every definition in insertion order, duplicates included.
    pub fn definitions(&self) -> &[BadgeDef] {
        &self.badges
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Distinct badge ids in first-seen order.
    pub fn all_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.badges
            .iter()
            .map(|b| b.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    /// Effective color of a badge; the last definition wins.
    pub fn color(&self, id: &str) -> Option<&str> {
        self.badges
            .iter()
            .rev()
            .find(|b| b.id == id)
            .map(|b| b.color.as_str())
    }

    /// Sections in first-seen order, each with its member ids in
    /// definition order. A duplicated definition appears twice.
    pub fn sections(&self) -> Vec<(&str, Vec<&str>)> {
        let mut sections: Vec<(&str, Vec<&str>)> = Vec::new();
        for badge in &self.badges {
            let Some(section) = badge.section.as_deref() else {
                continue;
            };
            match sections.iter_mut().find(|(name, _)| *name == section) {
                Some((_, members)) => members.push(&badge.id),
                None => sections.push((section, vec![&badge.id])),
            }
        }
        sections
    }

    /// Badges without a section, in definition order.
    pub fn standalone(&self) -> Vec<&str> {
        self.badges
            .iter()
            .filter(|b| b.section.is_none())
            .map(|b| b.id.as_str())
            .collect()
    }

    /// Member ids of a section, matched case-insensitively.
    pub fn section_members(&self, name: &str) -> Vec<&str> {
        let wanted = name.to_lowercase();
        self.badges
            .iter()
            .filter(|b| b.section.as_deref().is_some_and(|s| s.to_lowercase() == wanted))
            .map(|b| b.id.as_str())
            .collect()
    }

    /// Whether `name` is a known section (case-insensitive).
    pub fn is_section(&self, name: &str) -> bool {
        !self.section_members(name).is_empty()
    }

    /// Ids a control acts on.
    pub fn target_ids(&self, target: &ControlTarget) -> Vec<String> {
        match target {
            ControlTarget::Badge(id) => vec![id.clone()],
            ControlTarget::Section(name) => self
                .section_members(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build the filter bar: standalone badges first, then one control per
    /// section (a plain badge for single-member sections, a stack otherwise).
    pub fn controls(&self) -> Vec<FilterControl> {
        let mut controls: Vec<FilterControl> = self
            .standalone()
            .into_iter()
            .map(|id| FilterControl::Badge(BadgeControl::new(id)))
            .collect();

        for (section, members) in self.sections() {
            if let [only] = members.as_slice() {
                controls.push(FilterControl::Badge(BadgeControl::new(only)));
                continue;
            }
            let count = members.len();
            let items = members
                .iter()
                .enumerate()
                .map(|(i, id)| BadgeControl {
                    z_index: Some(count - i),
                    ..BadgeControl::new(id)
                })
                .collect();
            controls.push(FilterControl::Stack {
                section: section.to_string(),
                label: section.to_uppercase(),
                color_badge: members[0].to_string(),
                items,
            });
        }
        controls
    }

    /// CSS rules coloring each badge and the bottom border of cards that
    /// carry it.
    pub fn stylesheet(&self) -> String {
        self.badges
            .iter()
            .map(|b| {
                format!(
                    ".badge-{id} {{ background-color: {color}; }} \
                     .game-card:has(.badge-{id}) {{ border-bottom: 3px solid {color}; }}",
                    id = b.id,
                    color = b.color,
                )
            })
            .collect()
    }
}

impl FromIterator<BadgeDef> for BadgeRegistry {
    fn from_iter<I: IntoIterator<Item = BadgeDef>>(iter: I) -> Self {
        Self {
            badges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
