use serde::{Deserialize, Serialize};

/// A badge (category) definition contributed by a data source.
///
/// In the manifest a badge may be written either as a positional array,
/// `["rpg", "#aa3377"]` or `["rpg", "#aa3377", "genres"]`, or as an object
/// with `id`, `color` and an optional `section`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBadge")]
pub struct BadgeDef {
    pub id: String,
    /// CSS color used for the badge background and card border
    pub color: String,
    /// Section this badge is grouped under; `None` for standalone badges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl BadgeDef {
    pub fn new(id: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            section: None,
        }
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBadge {
    Positional(Vec<Option<String>>),
    Object {
        id: String,
        color: String,
        #[serde(default)]
        section: Option<String>,
    },
}

impl TryFrom<RawBadge> for BadgeDef {
    type Error = String;

    fn try_from(raw: RawBadge) -> Result<Self, Self::Error> {
        match raw {
            RawBadge::Object { id, color, section } => Ok(Self {
                id,
                color,
                section: section.filter(|s| !s.is_empty()),
            }),
            RawBadge::Positional(parts) => {
                if !(2..=3).contains(&parts.len()) {
                    return Err(format!(
                        "badge array must have 2 or 3 entries, got {}",
                        parts.len()
                    ));
                }
                let mut parts = parts.into_iter();
                let id = parts
                    .next()
                    .flatten()
                    .ok_or_else(|| "badge id must be a string".to_string())?;
                let color = parts
                    .next()
                    .flatten()
                    .ok_or_else(|| format!("badge '{id}' is missing a color"))?;
                // Empty section strings behave like a missing section
                let section = parts.next().flatten().filter(|s| !s.is_empty());
                Ok(Self { id, color, section })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_without_section() {
        let badge: BadgeDef = serde_json::from_str(r##"["rpg", "#aa3377"]"##).unwrap();
        assert_eq!(badge, BadgeDef::new("rpg", "#aa3377"));
    }

    #[test]
    fn positional_with_null_section() {
        let badge: BadgeDef = serde_json::from_str(r##"["rpg", "#aa3377", null]"##).unwrap();
        assert_eq!(badge.section, None);
    }

    #[test]
    fn positional_with_section() {
        let badge: BadgeDef = serde_json::from_str(r#"["nes", "red", "consoles"]"#).unwrap();
        assert_eq!(badge, BadgeDef::new("nes", "red").in_section("consoles"));
    }

    #[test]
    fn object_form() {
        let badge: BadgeDef =
            serde_json::from_str(r#"{"id": "snes", "color": "purple", "section": "consoles"}"#)
                .unwrap();
        assert_eq!(badge.id, "snes");
        assert_eq!(badge.section.as_deref(), Some("consoles"));
    }

    #[test]
    fn empty_section_is_standalone_in_both_forms() {
        let positional: BadgeDef = serde_json::from_str(r#"["jam", "teal", ""]"#).unwrap();
        let object: BadgeDef =
            serde_json::from_str(r#"{"id": "jam", "color": "teal", "section": ""}"#).unwrap();
        assert_eq!(positional.section, None);
        assert_eq!(object, positional);
    }

    #[test]
    fn rejects_short_array() {
        assert!(serde_json::from_str::<BadgeDef>(r#"["lonely"]"#).is_err());
    }

    #[test]
    fn rejects_null_color() {
        assert!(serde_json::from_str::<BadgeDef>(r#"["rpg", null]"#).is_err());
    }
}
