//! The persisted record.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Expanded sections, section key to the id of the expanded entry.
pub type OpenedSections = BTreeMap<String, String>;

/// Scroll offset and section expansion, stored as
/// `{"scrollTop": n, "openedDict": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedViewState {
    #[serde(default, deserialize_with = "scroll_top_lenient")]
    pub scroll_top: u16,
    #[serde(default)]
    pub opened_dict: OpenedSections,
}

/// Accept any JSON number for `scrollTop`: fractions are truncated and
/// values outside `0..=u16::MAX` are clamped.
fn scroll_top_lenient<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Ok(0);
    }
    Ok(value.clamp(0.0, u16::MAX as f64) as u16)
}

impl PersistedViewState {
    pub fn new(scroll_top: u16, opened_dict: OpenedSections) -> Self {
        Self {
            scroll_top,
            opened_dict,
        }
    }

    /// Flip a section: expand `key` at `id`, or collapse it if that exact
    /// entry is already expanded.
    ///
    /// Returns true if the section is expanded afterwards.
    pub fn toggle_section(&mut self, key: &str, id: &str) -> bool {
        if self.opened_dict.get(key).map(String::as_str) == Some(id) {
            self.opened_dict.remove(key);
            false
        } else {
            self.opened_dict.insert(key.to_string(), id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, key: &str, id: &str) -> bool {
        self.opened_dict.get(key).map(String::as_str) == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let mut state = PersistedViewState::default();
        state.scroll_top = 42;
        state.opened_dict.insert("features".into(), "level-1".into());
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"scrollTop": 42, "openedDict": {"features": "level-1"}})
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let state: PersistedViewState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedViewState::default());
    }

    #[test]
    fn test_scroll_top_accepts_any_number() {
        let parse = |v| serde_json::from_value::<PersistedViewState>(v).unwrap().scroll_top;
        assert_eq!(parse(json!({"scrollTop": 12.7})), 12);
        assert_eq!(parse(json!({"scrollTop": -4})), 0);
        assert_eq!(parse(json!({"scrollTop": 70000})), u16::MAX);
        assert!(serde_json::from_value::<PersistedViewState>(json!({"scrollTop": "x"})).is_err());
    }

    #[test]
    fn test_toggle_section() {
        let mut state = PersistedViewState::default();
        assert!(state.toggle_section("features", "a"));
        assert!(state.is_expanded("features", "a"));
        // Another id under the same key replaces the expanded entry.
        assert!(state.toggle_section("features", "b"));
        assert!(!state.is_expanded("features", "a"));
        assert!(!state.toggle_section("features", "b"));
        assert!(state.opened_dict.is_empty());
    }
}
