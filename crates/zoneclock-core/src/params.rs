//! Parameter structures for zoneclock operations.
//!
//! Shared parameter types that can be used across interfaces (CLI today,
//! other front ends later) without framework-specific derives. Interface
//! layers wrap these with their own argument structs (clap derives in the
//! CLI) and convert via `From`, keeping the core free of CLI concerns.

/// Parameters for rendering clock cards.
#[derive(Debug, Clone, Default)]
pub struct ShowClock {
    /// Comparison zones to display; empty means the default selection
    pub zones: Vec<String>,
}

/// Parameters for the timestamp → date/time direction of the converter.
#[derive(Debug, Clone)]
pub struct ConvertTimestamp {
    /// Raw numeric timestamp string; unit is auto-detected
    pub value: String,
    /// Explicit target timezone; `None` means the detected local zone
    pub zone: Option<String>,
}

/// Parameters for the date/time → timestamp direction of the converter.
///
/// No timezone is accepted here: the input is always interpreted in the
/// viewer's own local timezone.
#[derive(Debug, Clone)]
pub struct ConvertDateTime {
    /// Calendar string, `YYYY-MM-DDTHH:mm[:ss]`
    pub value: Option<String>,
    /// Pre-fill the input with the current local wall-clock time
    pub use_now: bool,
}

/// Parameters for listing the timezone catalog.
#[derive(Debug, Clone, Default)]
pub struct ListZones {
    /// Restrict the listing to one geographic region
    pub region: Option<String>,
}
