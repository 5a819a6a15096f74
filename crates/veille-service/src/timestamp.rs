//! Display timestamps for findings.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};
use veille_config::DateLocale;

/// Format `at` as a long human date with hours and minutes.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, locale: DateLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (pattern, locale) = match locale {
        DateLocale::Fr => ("%-d %B %Y à %H:%M", Locale::fr_FR),
        DateLocale::En => ("%B %-d, %Y at %H:%M", Locale::en_US),
    };
    at.format_localized(pattern, locale).to_string()
}

/// Current local time, formatted.
pub fn now(locale: DateLocale) -> String {
    format_timestamp(&Local::now(), locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[case(DateLocale::Fr, "5 mars 2024 à 14:07")]
    #[case(DateLocale::En, "March 5, 2024 at 14:07")]
    fn formats_per_locale(#[case] locale: DateLocale, #[case] expected: &str) {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_timestamp(&at, locale), expected);
    }

    #[test]
    fn now_is_not_empty() {
        assert!(!now(DateLocale::Fr).is_empty());
    }
}
