use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Display locales supported by the dashboard clock.
#[derive(Clone, Default, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// Indian English, 12-hour clock with lowercase meridiem.
    #[default]
    #[serde(rename = "en-IN")]
    EnIn,
    /// US English, 12-hour clock with uppercase meridiem.
    #[serde(rename = "en-US")]
    EnUs,
    /// British English, 24-hour clock.
    #[serde(rename = "en-GB")]
    EnGb,
}

impl Locale {
    /// Returns the `chrono` format pattern for an hour:minute label.
    pub fn clock_pattern(&self) -> &'static str {
        match self {
            Locale::EnIn => "%I:%M %P",
            Locale::EnUs => "%I:%M %p",
            Locale::EnGb => "%H:%M",
        }
    }

    /// Formats a wall-clock time the way this locale displays it.
    pub fn format_time(&self, time: NaiveTime) -> String {
        time.format(self.clock_pattern()).to_string()
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en-in" => Ok(Locale::EnIn),
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            _ => Err(()),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::EnIn => write!(f, "en-IN"),
            Locale::EnUs => write!(f, "en-US"),
            Locale::EnGb => write!(f, "en-GB"),
        }
    }
}

impl Debug for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Locale::{}, pattern: {}", self, self.clock_pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("en-IN".parse::<Locale>(), Ok(Locale::EnIn));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!(" EN-GB ".parse::<Locale>(), Ok(Locale::EnGb));
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for locale in [Locale::EnIn, Locale::EnUs, Locale::EnGb] {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_indian_english_uses_lowercase_twelve_hour_clock() {
        assert_eq!(Locale::EnIn.format_time(at(9, 5)), "09:05 am");
        assert_eq!(Locale::EnIn.format_time(at(21, 30)), "09:30 pm");
    }

    #[test]
    fn test_us_english_uses_uppercase_meridiem() {
        assert_eq!(Locale::EnUs.format_time(at(0, 0)), "12:00 AM");
        assert_eq!(Locale::EnUs.format_time(at(12, 45)), "12:45 PM");
    }

    #[test]
    fn test_british_english_uses_twenty_four_hour_clock() {
        assert_eq!(Locale::EnGb.format_time(at(21, 5)), "21:05");
        assert_eq!(Locale::EnGb.format_time(at(7, 0)), "07:00");
    }

    #[test]
    fn test_serde_uses_language_tags() {
        let json = serde_json::to_string(&Locale::EnUs).unwrap();
        assert_eq!(json, "\"en-US\"");
        let parsed: Locale = serde_json::from_str("\"en-GB\"").unwrap();
        assert_eq!(parsed, Locale::EnGb);
    }
}
