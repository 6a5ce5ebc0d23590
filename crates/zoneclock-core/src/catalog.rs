//! Static catalog of well-known timezones.
//!
//! The catalog is a compile-time, read-only table of popular IANA timezone
//! identifiers used to populate selection menus and default clock cards. The
//! `offset` field on each entry is a display label cache only: it does not
//! track daylight-saving transitions, so any computation must derive the
//! authoritative offset from the identifier at render time (see
//! [`crate::convert::current_utc_offset`]).

use serde::Serialize;

/// A single entry in the timezone catalog.
///
/// Identity is `value` (the canonical IANA identifier); `label`, `offset`
/// and `region` exist purely for menu display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneInfo {
    /// Canonical IANA timezone identifier, e.g. `"Asia/Tokyo"`
    pub value: &'static str,
    /// Human-readable city name
    pub label: &'static str,
    /// Static UTC-offset label (display only, ignores DST)
    pub offset: &'static str,
    /// Geographic grouping for menu sections
    pub region: &'static str,
}

/// Identifiers of the comparison zones shown by default.
pub const DEFAULT_ZONES: [&str; 3] = ["America/New_York", "Europe/London", "Asia/Tokyo"];

const POPULAR_TIMEZONES: &[TimezoneInfo] = &[
    TimezoneInfo { value: "America/New_York", label: "New York", offset: "UTC-5", region: "Americas" },
    TimezoneInfo { value: "America/Los_Angeles", label: "Los Angeles", offset: "UTC-8", region: "Americas" },
    TimezoneInfo { value: "America/Chicago", label: "Chicago", offset: "UTC-6", region: "Americas" },
    TimezoneInfo { value: "America/Denver", label: "Denver", offset: "UTC-7", region: "Americas" },
    TimezoneInfo { value: "America/Toronto", label: "Toronto", offset: "UTC-5", region: "Americas" },
    TimezoneInfo { value: "America/Vancouver", label: "Vancouver", offset: "UTC-8", region: "Americas" },
    TimezoneInfo { value: "America/Sao_Paulo", label: "São Paulo", offset: "UTC-3", region: "Americas" },
    TimezoneInfo { value: "America/Mexico_City", label: "Mexico City", offset: "UTC-6", region: "Americas" },
    TimezoneInfo { value: "Europe/London", label: "London", offset: "UTC+0", region: "Europe" },
    TimezoneInfo { value: "Europe/Paris", label: "Paris", offset: "UTC+1", region: "Europe" },
    TimezoneInfo { value: "Europe/Berlin", label: "Berlin", offset: "UTC+1", region: "Europe" },
    TimezoneInfo { value: "Europe/Amsterdam", label: "Amsterdam", offset: "UTC+1", region: "Europe" },
    TimezoneInfo { value: "Europe/Madrid", label: "Madrid", offset: "UTC+1", region: "Europe" },
    TimezoneInfo { value: "Europe/Rome", label: "Rome", offset: "UTC+1", region: "Europe" },
    TimezoneInfo { value: "Europe/Moscow", label: "Moscow", offset: "UTC+3", region: "Europe" },
    TimezoneInfo { value: "Asia/Dubai", label: "Dubai", offset: "UTC+4", region: "Asia" },
    TimezoneInfo { value: "Asia/Shanghai", label: "Shanghai", offset: "UTC+8", region: "Asia" },
    TimezoneInfo { value: "Asia/Hong_Kong", label: "Hong Kong", offset: "UTC+8", region: "Asia" },
    TimezoneInfo { value: "Asia/Tokyo", label: "Tokyo", offset: "UTC+9", region: "Asia" },
    TimezoneInfo { value: "Asia/Singapore", label: "Singapore", offset: "UTC+8", region: "Asia" },
    TimezoneInfo { value: "Asia/Seoul", label: "Seoul", offset: "UTC+9", region: "Asia" },
    TimezoneInfo { value: "Asia/Kolkata", label: "Mumbai", offset: "UTC+5:30", region: "Asia" },
    TimezoneInfo { value: "Asia/Bangkok", label: "Bangkok", offset: "UTC+7", region: "Asia" },
    TimezoneInfo { value: "Australia/Sydney", label: "Sydney", offset: "UTC+11", region: "Australia" },
    TimezoneInfo { value: "Australia/Melbourne", label: "Melbourne", offset: "UTC+11", region: "Australia" },
    TimezoneInfo { value: "Pacific/Auckland", label: "Auckland", offset: "UTC+13", region: "Pacific" },
];

/// All catalog entries, in menu order.
pub fn all() -> &'static [TimezoneInfo] {
    POPULAR_TIMEZONES
}

/// Look up a catalog entry by its IANA identifier.
pub fn find(value: &str) -> Option<&'static TimezoneInfo> {
    POPULAR_TIMEZONES.iter().find(|tz| tz.value == value)
}

/// Distinct region names, in first-appearance order.
pub fn regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = Vec::new();
    for tz in POPULAR_TIMEZONES {
        if !regions.contains(&tz.region) {
            regions.push(tz.region);
        }
    }
    regions
}

/// Catalog entries belonging to a region.
pub fn by_region(region: &str) -> impl Iterator<Item = &'static TimezoneInfo> + '_ {
    POPULAR_TIMEZONES.iter().filter(move |tz| tz.region == region)
}

/// Derive a display label for an identifier outside the catalog.
///
/// Detected host timezones are not always among the popular entries; in that
/// case the city segment of the identifier is used with underscores replaced
/// by spaces (`"America/Argentina/Buenos_Aires"` becomes `"Buenos Aires"`).
pub fn derived_label(value: &str) -> String {
    value
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(value)
        .replace('_', " ")
}

/// Display label for an identifier, preferring the catalog entry.
pub fn label_for(value: &str) -> String {
    match find(value) {
        Some(tz) => tz.label.to_string(),
        None => derived_label(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_popular_entries() {
        assert_eq!(all().len(), 26);
        assert!(find("Asia/Tokyo").is_some());
        assert!(find("Atlantis/Nowhere").is_none());
    }

    #[test]
    fn catalog_values_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }

    #[test]
    fn default_zones_exist_in_catalog() {
        for value in DEFAULT_ZONES {
            assert!(find(value).is_some(), "missing default zone {value}");
        }
    }

    #[test]
    fn regions_are_deduplicated_in_order() {
        let regions = regions();
        assert_eq!(
            regions,
            vec!["Americas", "Europe", "Asia", "Australia", "Pacific"]
        );
        assert_eq!(by_region("Pacific").count(), 1);
    }

    #[test]
    fn derived_label_uses_city_segment() {
        assert_eq!(derived_label("America/New_York"), "New York");
        assert_eq!(derived_label("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(derived_label("UTC"), "UTC");
    }

    #[test]
    fn label_for_prefers_catalog_label() {
        // Asia/Kolkata is displayed as Mumbai, not Kolkata
        assert_eq!(label_for("Asia/Kolkata"), "Mumbai");
        assert_eq!(label_for("Europe/Lisbon"), "Lisbon");
    }
}
