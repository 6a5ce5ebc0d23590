//! Core library for the zoneclock world-clock and timestamp-converter tool.
//!
//! This crate provides the domain logic behind the `zc` CLI: a static
//! catalog of well-known timezones, a pure conversion utility between Unix
//! timestamps and calendar strings, bundled English/Chinese label sets, and
//! an explicit session-state reducer for the clock surface.
//!
//! All timezone-rule data and offset math is delegated to [`jiff`]; this
//! crate ships no rules of its own. The catalog's static offset strings are
//! display labels only — authoritative offsets are always derived at render
//! time from the identifier (see [`convert::current_utc_offset`]).
//!
//! # Quick Start
//!
//! ```rust
//! use zoneclock_core::{convert, locale::Language};
//!
//! // Timestamp → formatted time; unit (seconds/milliseconds) auto-detected
//! let formatted =
//!     convert::timestamp_to_formatted_time("1704067200", "UTC", Language::En)?;
//! assert_eq!(formatted, "01/01/2024, 00:00:00");
//!
//! // Calendar string → epoch seconds, interpreted in the local timezone
//! // The exact value depends on the host timezone
//! let seconds = convert::formatted_time_to_timestamp("2024-01-01T00:00")?;
//! println!("epoch seconds: {seconds}");
//! # Ok::<(), zoneclock_core::ClockError>(())
//! ```

pub mod catalog;
pub mod convert;
pub mod display;
pub mod error;
pub mod locale;
pub mod params;
pub mod state;

// Re-export commonly used types
pub use catalog::{TimezoneInfo, DEFAULT_ZONES};
pub use convert::{FormatFields, MILLISECOND_THRESHOLD};
pub use display::{CatalogList, ConversionReport, DetectedZone, ZoneCard, ZoneGrid};
pub use error::{ClockError, Result};
pub use locale::{Labels, Language};
pub use params::{ConvertDateTime, ConvertTimestamp, ListZones, ShowClock};
pub use state::{Action, AppState};
