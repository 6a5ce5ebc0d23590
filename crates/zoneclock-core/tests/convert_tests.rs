//! Integration tests for the conversion utility's public contract.

use zoneclock_core::{convert, ClockError, Language, MILLISECOND_THRESHOLD};

#[test]
fn seconds_and_milliseconds_inputs_agree() {
    // 1704067200 s and 1704067200000 ms name the same instant
    let from_seconds =
        convert::timestamp_to_formatted_time("1704067200", "UTC", Language::En).unwrap();
    let from_millis =
        convert::timestamp_to_formatted_time("1704067200000", "UTC", Language::En).unwrap();
    assert_eq!(from_seconds, from_millis);
    assert_eq!(from_seconds, "01/01/2024, 00:00:00");
}

#[test]
fn unit_detection_is_strictly_greater_than_threshold() {
    let at_boundary = convert::parse_timestamp(&MILLISECOND_THRESHOLD.to_string()).unwrap();
    let past_boundary =
        convert::parse_timestamp(&(MILLISECOND_THRESHOLD + 1).to_string()).unwrap();
    assert_eq!(at_boundary.as_second(), MILLISECOND_THRESHOLD);
    assert_eq!(past_boundary.as_millisecond(), MILLISECOND_THRESHOLD + 1);
}

#[test]
fn every_catalog_zone_resolves_in_the_rule_database() {
    for tz in zoneclock_core::catalog::all() {
        let formatted =
            convert::timestamp_to_formatted_time("1704067200", tz.value, Language::En).unwrap();
        assert!(!formatted.is_empty(), "no rendering for {}", tz.value);
        assert_ne!(convert::current_utc_offset(tz.value), "", "{}", tz.value);
    }
}

#[test]
fn timestamp_rendering_respects_the_target_zone() {
    let tokyo = convert::timestamp_to_formatted_time("1704067200", "Asia/Tokyo", Language::En)
        .unwrap();
    assert_eq!(tokyo, "01/01/2024, 09:00:00");
    let new_york =
        convert::timestamp_to_formatted_time("1704067200", "America/New_York", Language::En)
            .unwrap();
    assert_eq!(new_york, "12/31/2023, 19:00:00");
}

#[test]
fn invalid_timestamp_reports_the_field() {
    let err = convert::timestamp_to_formatted_time("tomorrow", "UTC", Language::En).unwrap_err();
    match err {
        ClockError::InvalidInput { field, .. } => assert_eq!(field, "timestamp"),
        other => panic!("expected InvalidInput, got {other}"),
    }
}

#[test]
fn empty_datetime_is_rejected_not_converted() {
    let err = convert::formatted_time_to_timestamp("").unwrap_err();
    assert!(matches!(err, ClockError::InvalidInput { .. }));
}

#[test]
fn prefill_string_round_trips_through_the_parser() {
    let prefill = convert::now_as_local_input_string();
    // The prefill shape must be accepted by the reverse direction
    convert::formatted_time_to_timestamp(&prefill).unwrap();
}

#[test]
fn detected_zone_formats_without_error() {
    let zone = convert::detect_local_timezone();
    assert!(!zone.is_empty());
    let formatted = convert::timestamp_to_formatted_time("1704067200", &zone, Language::En);
    assert!(formatted.is_ok());
}
