//! Session state for the clock surface.
//!
//! The page-level mutable state (selected comparison zones, active language)
//! is modeled as an explicit value with pure transitions: every user action
//! maps `(state, action)` to a new state, so the whole surface can be unit
//! tested without a rendering environment. Nothing here is persisted; state
//! is rebuilt from defaults on every launch.

use crate::{
    catalog::{self, TimezoneInfo, DEFAULT_ZONES},
    locale::Language,
};

/// A user action against the clock surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a catalog zone to the comparison list
    AddZone(String),
    /// Remove a zone from the comparison list
    RemoveZone(String),
    /// Switch the active language bundle
    SetLanguage(Language),
}

/// The complete mutable state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Ordered comparison zones; never contains duplicate identifiers
    pub zones: Vec<TimezoneInfo>,
    /// Active language bundle
    pub language: Language,
}

impl Default for AppState {
    /// Initial state: the three default comparison zones, English labels.
    fn default() -> Self {
        let zones = DEFAULT_ZONES
            .iter()
            .filter_map(|value| catalog::find(value).copied())
            .collect();
        Self {
            zones,
            language: Language::default(),
        }
    }
}

impl AppState {
    /// An empty selection with the given language.
    pub fn empty(language: Language) -> Self {
        Self {
            zones: Vec::new(),
            language,
        }
    }

    /// Apply a single action, producing the next state.
    ///
    /// Adding an already-selected or unknown zone and removing an absent
    /// zone are both no-ops, so any action sequence preserves the
    /// no-duplicates invariant.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::AddZone(value) => {
                if !self.contains(&value) {
                    if let Some(tz) = catalog::find(&value) {
                        self.zones.push(*tz);
                    }
                }
            }
            Action::RemoveZone(value) => {
                self.zones.retain(|tz| tz.value != value);
            }
            Action::SetLanguage(language) => {
                self.language = language;
            }
        }
        self
    }

    /// Whether a zone identifier is currently selected.
    pub fn contains(&self, value: &str) -> bool {
        self.zones.iter().any(|tz| tz.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_three_zones() {
        let state = AppState::default();
        assert_eq!(state.zones.len(), 3);
        assert!(state.contains("America/New_York"));
        assert!(state.contains("Europe/London"));
        assert!(state.contains("Asia/Tokyo"));
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let state = AppState::default()
            .apply(Action::AddZone("Europe/London".to_string()))
            .apply(Action::AddZone("Europe/London".to_string()));
        let londons = state
            .zones
            .iter()
            .filter(|tz| tz.value == "Europe/London")
            .count();
        assert_eq!(londons, 1);
    }

    #[test]
    fn adding_unknown_zone_is_a_no_op() {
        let state = AppState::default().apply(Action::AddZone("Atlantis/Nowhere".to_string()));
        assert_eq!(state.zones.len(), 3);
    }

    #[test]
    fn removing_absent_zone_is_a_no_op() {
        let before = AppState::default();
        let after = before
            .clone()
            .apply(Action::RemoveZone("Asia/Dubai".to_string()));
        assert_eq!(before, after);
    }

    #[test]
    fn add_preserves_order() {
        let state = AppState::empty(Language::En)
            .apply(Action::AddZone("Asia/Seoul".to_string()))
            .apply(Action::AddZone("Europe/Paris".to_string()));
        let values: Vec<&str> = state.zones.iter().map(|tz| tz.value).collect();
        assert_eq!(values, vec!["Asia/Seoul", "Europe/Paris"]);
    }

    #[test]
    fn language_switch_leaves_zones_untouched() {
        let state = AppState::default().apply(Action::SetLanguage(Language::Zh));
        assert_eq!(state.language, Language::Zh);
        assert_eq!(state.zones.len(), 3);
    }

    #[test]
    fn no_duplicates_after_any_action_sequence() {
        let actions = vec![
            Action::AddZone("Asia/Tokyo".to_string()),
            Action::RemoveZone("Europe/London".to_string()),
            Action::AddZone("Europe/London".to_string()),
            Action::AddZone("Europe/London".to_string()),
            Action::SetLanguage(Language::Zh),
            Action::AddZone("Asia/Tokyo".to_string()),
        ];
        let state = actions
            .into_iter()
            .fold(AppState::default(), AppState::apply);
        for (i, a) in state.zones.iter().enumerate() {
            for b in &state.zones[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }
}
