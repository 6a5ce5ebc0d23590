//! Command handlers bridging parsed arguments to core operations.
//!
//! Each handler takes a core parameter struct, runs the corresponding
//! conversion or lookup, and emits the result through the terminal renderer
//! (markdown) or as single-line JSON, depending on `--format`.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use jiff::{tz::TimeZone, Timestamp};
use log::{debug, info};
use serde::Serialize;
use zoneclock_core::{
    catalog, convert,
    params::{ConvertDateTime, ConvertTimestamp, ListZones, ShowClock},
    Action, AppState, CatalogList, ClockError, ConversionReport, DetectedZone, Language, ZoneCard,
    ZoneGrid,
};

use crate::args::OutputFormat;
use crate::renderer::TerminalRenderer;

/// CLI command handler holding the rendering configuration.
pub struct Cli {
    renderer: TerminalRenderer,
    language: Language,
    format: OutputFormat,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(renderer: TerminalRenderer, language: Language, format: OutputFormat) -> Self {
        Self {
            renderer,
            language,
            format,
        }
    }

    /// Render clock cards for the detected zone and the selection, once.
    pub fn show_clock(&self, params: &ShowClock) -> Result<()> {
        let state = self.selection(params)?;
        self.render_clock(&state, Timestamp::now())
    }

    /// Live clock: re-render the cards every second until Ctrl-C.
    ///
    /// The ticker lives exactly as long as this loop; leaving the loop
    /// (Ctrl-C) drops it, so no timer survives the watch.
    pub async fn watch(&self, params: &ShowClock) -> Result<()> {
        let state = self.selection(params)?;
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.renderer.clear();
                    self.render_clock(&state, Timestamp::now())?;
                }
                result = &mut ctrl_c => {
                    result.context("failed to listen for Ctrl-C")?;
                    info!("watch stopped");
                    return Ok(());
                }
            }
        }
    }

    /// Convert a raw timestamp to a formatted date/time string.
    pub fn convert_timestamp(&self, params: &ConvertTimestamp) -> Result<()> {
        let zone = match &params.zone {
            Some(zone) => {
                // An explicitly requested zone must resolve; only the
                // detected-zone default may silently fall back
                if TimeZone::get(zone).is_err() {
                    return Err(ClockError::unknown_zone(zone).into());
                }
                zone.clone()
            }
            None => convert::detect_local_timezone(),
        };

        let value = convert::parse_raw(&params.value)?;
        let formatted = convert::timestamp_to_formatted_time(&params.value, &zone, self.language)?;
        debug!("converted {} ({}) in {zone}", params.value, convert::unit_of(value));

        let report = ConversionReport::timestamp_to_time(
            params.value.trim(),
            formatted,
            zone,
            convert::unit_of(value),
            self.language,
        );
        self.emit(&report)
    }

    /// Convert a local date/time string to epoch seconds.
    pub fn convert_datetime(&self, params: &ConvertDateTime) -> Result<()> {
        let input = if params.use_now {
            convert::now_as_local_input_string()
        } else {
            params.value.clone().ok_or_else(|| {
                ClockError::invalid_input("datetime")
                    .with_reason("provide a date/time or pass --now")
            })?
        };

        let seconds = convert::formatted_time_to_timestamp(&input)?;
        let report = ConversionReport::time_to_timestamp(input, seconds, self.language);
        self.emit(&report)
    }

    /// List the timezone catalog, optionally restricted to one region.
    pub fn list_zones(&self, params: &ListZones) -> Result<()> {
        let entries: Vec<_> = match &params.region {
            Some(region) => {
                let entries: Vec<_> = catalog::by_region(region).collect();
                if entries.is_empty() {
                    return Err(ClockError::invalid_input("region")
                        .with_reason(format!(
                            "unknown region '{region}'; known regions: {}",
                            catalog::regions().join(", ")
                        ))
                        .into());
                }
                entries
            }
            None => catalog::all().iter().collect(),
        };

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&entries).map_err(ClockError::from)?);
                Ok(())
            }
            OutputFormat::Text => self
                .renderer
                .render(&CatalogList::new(entries, self.language).to_string()),
        }
    }

    /// Show the auto-detected local timezone and its live offset.
    pub fn detect(&self) -> Result<()> {
        self.emit(&DetectedZone::current(self.language))
    }

    /// Build the comparison selection, validating requested zones against
    /// the catalog. The reducer keeps the selection duplicate-free.
    fn selection(&self, params: &ShowClock) -> Result<AppState> {
        if params.zones.is_empty() {
            let mut state = AppState::default();
            state.language = self.language;
            return Ok(state);
        }

        let mut state = AppState::empty(self.language);
        for zone in &params.zones {
            if catalog::find(zone).is_none() {
                return Err(ClockError::unknown_zone(zone).into());
            }
            state = state.apply(Action::AddZone(zone.clone()));
        }
        Ok(state)
    }

    /// Render the detected-zone card plus the comparison grid at an instant.
    fn render_clock(&self, state: &AppState, instant: Timestamp) -> Result<()> {
        let user_card = ZoneCard::new(&convert::detect_local_timezone(), instant, state.language)
            .as_user_zone();
        let cards: Vec<ZoneCard> = state
            .zones
            .iter()
            .map(|tz| ZoneCard::new(tz.value, instant, state.language))
            .collect();

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "user": user_card,
                    "zones": cards,
                });
                println!("{output}");
                Ok(())
            }
            OutputFormat::Text => {
                self.renderer.render(&user_card.to_string())?;
                self.renderer
                    .render(&ZoneGrid::new(&cards, state.language).to_string())
            }
        }
    }

    /// Emit a result as rendered markdown or single-line JSON.
    fn emit<T: Serialize + fmt::Display>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).map_err(ClockError::from)?);
                Ok(())
            }
            OutputFormat::Text => self.renderer.render(&value.to_string()),
        }
    }
}
