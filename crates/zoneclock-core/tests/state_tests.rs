//! Integration tests for the session-state reducer and card rendering.

use jiff::Timestamp;
use zoneclock_core::{Action, AppState, Language, ZoneCard, ZoneGrid};

fn add(value: &str) -> Action {
    Action::AddZone(value.to_string())
}

fn remove(value: &str) -> Action {
    Action::RemoveZone(value.to_string())
}

#[test]
fn full_session_preserves_invariants() {
    // Simulate a session: add a few zones, remove one, toggle language
    let state = AppState::default()
        .apply(add("Asia/Dubai"))
        .apply(add("Asia/Dubai"))
        .apply(remove("America/New_York"))
        .apply(add("Pacific/Auckland"))
        .apply(Action::SetLanguage(Language::Zh))
        .apply(remove("Europe/Madrid")); // never selected

    let values: Vec<&str> = state.zones.iter().map(|tz| tz.value).collect();
    assert_eq!(
        values,
        vec!["Europe/London", "Asia/Tokyo", "Asia/Dubai", "Pacific/Auckland"]
    );
    assert_eq!(state.language, Language::Zh);
}

#[test]
fn state_renders_as_cards() {
    let state = AppState::default();
    let instant = Timestamp::from_second(1_704_067_200).unwrap();
    let cards: Vec<ZoneCard> = state
        .zones
        .iter()
        .map(|tz| ZoneCard::new(tz.value, instant, state.language))
        .collect();

    let output = ZoneGrid::new(&cards, state.language).to_string();
    assert!(output.contains("# World Clocks"));
    assert!(output.contains("New York"));
    assert!(output.contains("London"));
    assert!(output.contains("Tokyo"));
    // All three cards show the same instant in their own zone
    assert!(output.contains("19:00:00")); // New York, UTC-5
    assert!(output.contains("00:00:00")); // London, UTC+0
    assert!(output.contains("09:00:00")); // Tokyo, UTC+9
}

#[test]
fn chinese_session_renders_chinese_labels() {
    let state = AppState::empty(Language::Zh).apply(add("Asia/Shanghai"));
    let instant = Timestamp::from_second(1_704_067_200).unwrap();
    let cards: Vec<ZoneCard> = state
        .zones
        .iter()
        .map(|tz| ZoneCard::new(tz.value, instant, state.language))
        .collect();

    let output = ZoneGrid::new(&cards, state.language).to_string();
    assert!(output.contains("世界时钟"));
    assert!(output.contains("2024年1月1日"));
}

#[test]
fn emptied_selection_still_renders() {
    let state = AppState::default()
        .apply(remove("America/New_York"))
        .apply(remove("Europe/London"))
        .apply(remove("Asia/Tokyo"));
    assert!(state.zones.is_empty());

    let output = ZoneGrid::new(&[], state.language).to_string();
    assert!(output.contains("No timezones selected."));
}
