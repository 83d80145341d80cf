//! Event date parsing and locale-aware long dates.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, TimeZone};
use log::warn;

/// Parsed point in time of an event date. `None` marks an unparseable date.
pub type Instant = Option<DateTime<FixedOffset>>;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an event date string.
///
/// Date-times with an explicit offset keep it, date-times without one are read in
/// `offset` (the viewer's), and bare dates are midnight UTC.
pub fn parse_instant(raw: &str, offset: &FixedOffset) -> Instant {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return offset.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let utc = FixedOffset::east_opt(0)?;
    Some(utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Locale used for long dates like "January 5, 2025".
#[derive(Debug, Clone, Copy)]
pub struct DateLocale {
    locale: Locale,
    month_first: bool,
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            month_first: true,
        }
    }
}

fn known_locale(name: &str) -> Option<Locale> {
    let locale = match name {
        "en_US" => Locale::en_US,
        "en_CA" => Locale::en_CA,
        "en_PH" => Locale::en_PH,
        "en_GB" => Locale::en_GB,
        "en_ZA" => Locale::en_ZA,
        "af_ZA" => Locale::af_ZA,
        "zu_ZA" => Locale::zu_ZA,
        "xh_ZA" => Locale::xh_ZA,
        "st_ZA" => Locale::st_ZA,
        "tn_ZA" => Locale::tn_ZA,
        "nl_NL" => Locale::nl_NL,
        "de_DE" => Locale::de_DE,
        "fr_FR" => Locale::fr_FR,
        "es_ES" => Locale::es_ES,
        "pt_PT" => Locale::pt_PT,
        _ => return None,
    };
    Some(locale)
}

/// Host locale name from `LC_ALL`, `LC_TIME` or `LANG`, first set one wins.
/// `C` and `POSIX` carry no date conventions and are skipped.
pub fn host_locale_name<F>(var: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(var)
        .map(|value| value.trim().to_string())
        .find(|value| {
            !value.is_empty() && value != "C" && value != "POSIX" && !value.starts_with("C.")
        })
}

impl DateLocale {
    /// Accepts `en_US`, `en-US` and `en_US.UTF-8` spellings. Unknown names fall back to `en_US`.
    pub fn new(name: &str) -> Self {
        let normalized = name
            .split('.')
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        match known_locale(&normalized) {
            Some(locale) => Self {
                locale,
                month_first: matches!(normalized.as_str(), "en_US" | "en_CA" | "en_PH"),
            },
            None => {
                warn!("Unknown locale `{name}`, falling back to en_US");
                Self::default()
            }
        }
    }

    pub fn long_date(&self, instant: &Instant) -> String {
        let Some(instant) = instant else {
            return "Invalid Date".into();
        };

        let pattern = if self.month_first {
            "%B %-d, %Y"
        } else {
            "%-d %B %Y"
        };

        instant.format_localized(pattern, self.locale).to_string()
    }
}
