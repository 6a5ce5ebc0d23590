//! Command-line argument definitions using clap.
//!
//! Implements the parameter wrapper pattern: each subcommand has a clap
//! `Args` struct that converts into the framework-free parameter types in
//! [`zoneclock_core::params`] via `From`. CLI concerns (flags, aliases,
//! help text) stay here; the core stays interface-agnostic.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use zoneclock_core::{
    locale::Language,
    params::{ConvertDateTime, ConvertTimestamp, ListZones, ShowClock},
};

/// Main command-line interface for the zoneclock world clock
///
/// zc shows the current time in your detected timezone alongside a set of
/// comparison timezones, and converts between Unix timestamps and calendar
/// date/time strings. Timestamp units (seconds vs. milliseconds) are
/// auto-detected; all timezone math comes from the IANA rule database.
#[derive(Parser)]
#[command(version, about, name = "zc")]
pub struct Args {
    /// Interface language for labels and date formatting
    #[arg(long, global = true, value_enum, default_value_t = LanguageArg::En)]
    pub lang: LanguageArg,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the zc CLI
///
/// Running without a subcommand is equivalent to `zc now` with the default
/// comparison zones.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current time across your selected timezones
    #[command(alias = "n")]
    Now(NowArgs),
    /// Live clock: re-render every second until Ctrl-C
    #[command(alias = "w")]
    Watch(NowArgs),
    /// Convert between Unix timestamps and date/time strings
    #[command(alias = "c")]
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },
    /// List the timezone catalog
    #[command(aliases = ["z", "ls"])]
    Zones(ZonesArgs),
    /// Show the auto-detected local timezone
    #[command(alias = "d")]
    Detect,
}

/// Converter directions
///
/// The two directions are deliberately asymmetric: `timestamp` accepts an
/// explicit target timezone, while `datetime` always interprets its input
/// in your own local timezone to keep the reverse direction unambiguous.
#[derive(Subcommand)]
pub enum ConvertCommands {
    /// Timestamp → formatted date/time (unit auto-detected)
    #[command(alias = "ts")]
    Timestamp(TimestampArgs),
    /// Local date/time string → epoch seconds
    #[command(alias = "dt")]
    Datetime(DatetimeArgs),
}

/// Show clock cards for selected timezones
#[derive(ClapArgs)]
pub struct NowArgs {
    /// Comparison timezones to show (repeatable); defaults to
    /// New York, London and Tokyo
    #[arg(short = 'z', long = "zone", value_name = "TZ")]
    pub zones: Vec<String>,
}

impl From<NowArgs> for ShowClock {
    fn from(val: NowArgs) -> Self {
        ShowClock { zones: val.zones }
    }
}

/// Convert a raw timestamp to a formatted date/time
#[derive(ClapArgs)]
pub struct TimestampArgs {
    /// Numeric timestamp; values above 10000000000 are read as milliseconds
    pub value: String,
    /// Target timezone for the rendering; defaults to your detected zone
    #[arg(short, long, value_name = "TZ")]
    pub zone: Option<String>,
}

impl From<TimestampArgs> for ConvertTimestamp {
    fn from(val: TimestampArgs) -> Self {
        ConvertTimestamp {
            value: val.value,
            zone: val.zone,
        }
    }
}

/// Convert a local date/time string to epoch seconds
#[derive(ClapArgs)]
pub struct DatetimeArgs {
    /// Date/time as YYYY-MM-DDTHH:mm[:ss], interpreted in your local zone
    pub value: Option<String>,
    /// Use the current local wall-clock time as the input
    #[arg(long)]
    pub now: bool,
}

impl From<DatetimeArgs> for ConvertDateTime {
    fn from(val: DatetimeArgs) -> Self {
        ConvertDateTime {
            value: val.value,
            use_now: val.now,
        }
    }
}

/// List the timezone catalog
#[derive(ClapArgs)]
pub struct ZonesArgs {
    /// Only show timezones in one region (e.g. Americas, Europe, Asia)
    #[arg(short, long)]
    pub region: Option<String>,
}

impl From<ZonesArgs> for ListZones {
    fn from(val: ZonesArgs) -> Self {
        ListZones {
            region: val.region,
        }
    }
}

/// Command-line argument representation of the interface language
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// English labels
    En,
    /// Chinese labels
    Zh,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::En => Language::En,
            LanguageArg::Zh => Language::Zh,
        }
    }
}

impl std::fmt::Display for LanguageArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageArg::En => write!(f, "en"),
            LanguageArg::Zh => write!(f, "zh"),
        }
    }
}

/// Output format for command results
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown-flavored terminal output
    Text,
    /// Machine-readable JSON on a single line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
