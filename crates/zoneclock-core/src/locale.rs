//! Bundled languages and their label sets.
//!
//! Two text bundles ship with the application, English and Chinese. The
//! active [`Language`] selects both the visible labels and the calendar
//! rendering conventions (date order, separators, weekday names) used by
//! [`crate::convert::format_instant`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English labels, `MM/DD/YYYY` date order
    #[default]
    En,
    /// Chinese labels, `YYYY/MM/DD` date order
    Zh,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Language {
    /// Language tag as used in locale-qualified URLs and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// The label bundle for this language.
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// Abbreviated weekday name, Monday-based index 0..=6.
    pub(crate) fn weekday_abbrev(&self, monday_based: usize) -> &'static str {
        const EN_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        const ZH_DAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
        match self {
            Language::En => EN_DAYS[monday_based % 7],
            Language::Zh => ZH_DAYS[monday_based % 7],
        }
    }

    /// Abbreviated month name, index 1..=12.
    pub(crate) fn month_abbrev(&self, month: usize) -> &'static str {
        const EN_MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        match self {
            // Chinese dates are rendered numerically; month names are not used
            Language::En | Language::Zh => EN_MONTHS[(month - 1) % 12],
        }
    }
}

/// All user-visible text for one language.
pub struct Labels {
    pub title: &'static str,
    pub your_timezone: &'static str,
    pub world_clocks: &'static str,
    pub time: &'static str,
    pub date: &'static str,
    pub timestamp: &'static str,
    pub datetime: &'static str,
    pub timezone: &'static str,
    pub result: &'static str,
    pub copied: &'static str,
    pub use_now: &'static str,
    pub no_zones: &'static str,
}

static EN: Labels = Labels {
    title: "World Clock & Timestamp Converter",
    your_timezone: "Your Timezone",
    world_clocks: "World Clocks",
    time: "Time",
    date: "Date",
    timestamp: "Timestamp",
    datetime: "Date & Time",
    timezone: "Timezone",
    result: "Result",
    copied: "Copied!",
    use_now: "Use Now",
    no_zones: "No timezones selected.",
};

static ZH: Labels = Labels {
    title: "世界时钟与时间戳转换器",
    your_timezone: "您的时区",
    world_clocks: "世界时钟",
    time: "时间",
    date: "日期",
    timestamp: "时间戳",
    datetime: "日期时间",
    timezone: "时区",
    result: "结果",
    copied: "已复制！",
    use_now: "使用当前时间",
    no_zones: "未选择时区。",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn bundles_differ() {
        assert_ne!(Language::En.labels().time, Language::Zh.labels().time);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn weekday_names_are_monday_based() {
        assert_eq!(Language::En.weekday_abbrev(0), "Mon");
        assert_eq!(Language::Zh.weekday_abbrev(6), "周日");
    }
}
