//! Display wrapper types for formatting clock and converter output.
//!
//! Presentation stays out of the domain types: wrappers here implement
//! [`std::fmt::Display`] for markdown-flavored terminal output, and carry
//! `serde` derives where the same data is also emitted as JSON. The CLI's
//! terminal renderer consumes the markdown; `--format json` serializes the
//! record forms instead.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    catalog::{self, TimezoneInfo},
    convert::{self, FormatFields},
    locale::Language,
};

/// One clock card: a timezone rendered at a fixed instant.
///
/// Offsets shown on cards are always derived live from the rule database,
/// never taken from the catalog's static labels, so DST transitions are
/// reflected correctly.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneCard {
    /// IANA identifier
    pub value: String,
    /// Display label (catalog label, or derived from the identifier)
    pub label: String,
    /// Live UTC-offset label at `instant`
    pub offset: String,
    /// Rendered `HH:MM:SS`
    pub time: String,
    /// Rendered date line
    pub date: String,
    /// Marks the viewer's own detected zone
    pub is_user_zone: bool,
    #[serde(skip)]
    language: Language,
}

impl ZoneCard {
    /// Build a card for a zone identifier at an instant.
    pub fn new(value: &str, instant: Timestamp, language: Language) -> Self {
        Self {
            value: value.to_string(),
            label: catalog::label_for(value),
            offset: convert::utc_offset_at(value, instant),
            time: convert::format_instant(instant, value, language, FormatFields::Time),
            date: convert::format_instant(instant, value, language, FormatFields::Date),
            is_user_zone: false,
            language,
        }
    }

    /// Mark this card as the viewer's detected timezone.
    pub fn as_user_zone(mut self) -> Self {
        self.is_user_zone = true;
        self
    }
}

impl fmt::Display for ZoneCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.language.labels();
        if self.is_user_zone {
            writeln!(f, "## {} ({}) — {}", self.label, self.offset, labels.your_timezone)?;
        } else {
            writeln!(f, "## {} ({})", self.label, self.offset)?;
        }
        writeln!(f)?;
        writeln!(f, "- {}: **{}**", labels.time, self.time)?;
        writeln!(f, "- {}: {}", labels.date, self.date)?;
        Ok(())
    }
}

/// A titled grid of clock cards.
pub struct ZoneGrid<'a> {
    cards: &'a [ZoneCard],
    language: Language,
}

impl<'a> ZoneGrid<'a> {
    pub fn new(cards: &'a [ZoneCard], language: Language) -> Self {
        Self { cards, language }
    }
}

impl fmt::Display for ZoneGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.language.labels();
        writeln!(f, "# {}", labels.world_clocks)?;
        writeln!(f)?;
        if self.cards.is_empty() {
            writeln!(f, "{}", labels.no_zones)?;
            return Ok(());
        }
        for card in self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

/// The timezone catalog grouped by region, for selection menus.
///
/// Listing uses the catalog's static offset labels; they identify entries in
/// a menu and are not used for any computation.
pub struct CatalogList<'a> {
    entries: Vec<&'a TimezoneInfo>,
    language: Language,
}

impl<'a> CatalogList<'a> {
    pub fn new(entries: Vec<&'a TimezoneInfo>, language: Language) -> Self {
        Self { entries, language }
    }
}

impl fmt::Display for CatalogList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.language.labels().timezone)?;
        let mut current_region: Option<&str> = None;
        for tz in &self.entries {
            if current_region != Some(tz.region) {
                writeln!(f)?;
                writeln!(f, "## {}", tz.region)?;
                writeln!(f)?;
                current_region = Some(tz.region);
            }
            writeln!(f, "- `{}` — {} ({})", tz.value, tz.label, tz.offset)?;
        }
        Ok(())
    }
}

/// Outcome of one converter invocation, in either direction.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// The raw input as typed
    pub input: String,
    /// Converted value (formatted date-time, or epoch seconds as a string)
    pub result: String,
    /// Target zone for the timestamp → date/time direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Detected unit for numeric inputs (`"seconds"` or `"milliseconds"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip)]
    language: Language,
}

impl ConversionReport {
    /// Report for the timestamp → date/time direction.
    pub fn timestamp_to_time(
        input: impl Into<String>,
        result: impl Into<String>,
        zone: impl Into<String>,
        unit: &'static str,
        language: Language,
    ) -> Self {
        Self {
            input: input.into(),
            result: result.into(),
            zone: Some(zone.into()),
            unit: Some(unit),
            language,
        }
    }

    /// Report for the date/time → timestamp direction.
    pub fn time_to_timestamp(
        input: impl Into<String>,
        seconds: i64,
        language: Language,
    ) -> Self {
        Self {
            input: input.into(),
            result: seconds.to_string(),
            zone: None,
            unit: None,
            language,
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.language.labels();
        match self.unit {
            Some(unit) => writeln!(f, "- {}: {} ({})", labels.timestamp, self.input, unit)?,
            None => writeln!(f, "- {}: {}", labels.datetime, self.input)?,
        }
        if let Some(zone) = &self.zone {
            writeln!(f, "- {}: {}", labels.timezone, zone)?;
        }
        writeln!(f)?;
        // Result goes last on its own line so it is what a pipe picks up
        writeln!(f, "{}: **{}**", labels.result, self.result)?;
        Ok(())
    }
}

/// The detected host timezone with its live offset.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedZone {
    pub value: String,
    pub label: String,
    pub offset: String,
    #[serde(skip)]
    language: Language,
}

impl DetectedZone {
    /// Detect the host timezone and derive its current offset.
    pub fn current(language: Language) -> Self {
        let value = convert::detect_local_timezone();
        Self {
            label: catalog::label_for(&value),
            offset: convert::current_utc_offset(&value),
            value,
            language,
        }
    }
}

impl fmt::Display for DetectedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: `{}` — {} ({})",
            self.language.labels().your_timezone,
            self.value,
            self.label,
            self.offset
        )
    }
}
