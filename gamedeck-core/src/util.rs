/// Display label for a badge id: upper-cased, with the first underscore
/// turned into a space (e.g., "early_access" → "EARLY ACCESS").
pub fn badge_label(id: &str) -> String {
    id.to_uppercase().replacen('_', " ", 1)
}

/// Read the first string-valued field among `keys` from a JSON object.
///
/// Returns `None` when `value` is not an object or none of the keys holds a
/// string.
pub fn first_str<'a>(value: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    let object = value.as_object()?;
    keys.iter()
        .find_map(|key| object.get(*key).and_then(|v| v.as_str()))
}
