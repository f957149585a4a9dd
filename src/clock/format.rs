use std::fmt::{Display, Write};

use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::config::FormatPattern;

use super::{
    ClockSnapshot,
    pattern::{resolve_locale, to_strftime},
};

/// Rendered in place of the date when its format is unusable.
pub const WRONG_DATE_FORMAT: &str = "Wrong date format";
/// Rendered in place of the time when its format is unusable.
pub const WRONG_TIME_FORMAT: &str = "Wrong time format";

/// Effective formatting inputs, with host defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSettings {
    /// Date pattern
    pub date_format: FormatPattern,
    /// Time pattern
    pub time_format: FormatPattern,
    /// IANA zone name; local time when `None`
    pub time_zone: Option<String>,
    /// Locale tag; `en_US` when `None`
    pub locale: Option<String>,
}

/// Formats `now` into the date and time strings.
pub fn format_clock(now: DateTime<Utc>, settings: &ClockSettings) -> ClockSnapshot {
    let locale = resolve_locale(settings.locale.as_deref());

    match settings.time_zone.as_deref().map(str::parse::<Tz>) {
        Some(Ok(zone)) => snapshot_at(&now.with_timezone(&zone), settings, locale),
        Some(Err(e)) => {
            warn!(error = %e, "Unknown time zone, using local time");
            snapshot_at(&now.with_timezone(&Local), settings, locale)
        }
        None => snapshot_at(&now.with_timezone(&Local), settings, locale),
    }
}

fn snapshot_at<Z>(at: &DateTime<Z>, settings: &ClockSettings, locale: Locale) -> ClockSnapshot
where
    Z: TimeZone,
    Z::Offset: Display,
{
    ClockSnapshot {
        date: render(at, &settings.date_format, locale, WRONG_DATE_FORMAT),
        time: render(at, &settings.time_format, locale, WRONG_TIME_FORMAT),
    }
}

fn render<Z>(at: &DateTime<Z>, pattern: &FormatPattern, locale: Locale, sentinel: &str) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let pattern = match pattern {
        FormatPattern::Suppressed => return String::new(),
        FormatPattern::Invalid => return sentinel.to_string(),
        FormatPattern::Pattern(pattern) => pattern,
    };

    let spec = to_strftime(pattern);
    let mut out = String::new();
    match write!(out, "{}", at.format_localized(&spec, locale)) {
        Ok(()) => out,
        Err(_) => {
            debug!(pattern = pattern.as_str(), "Pattern could not be rendered");
            sentinel.to_string()
        }
    }
}
