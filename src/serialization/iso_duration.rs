//! ISO-8601 durations (`P1DT2H`, `PT0.5S`, `-P3W`).
//!
//! Graph uses these for intervals such as a script's execution frequency.
//! Calendar units (years, months) have no fixed length, so the value keeps
//! every component as written instead of collapsing to a number of seconds.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::{Error, Result};

/// An ISO-8601 duration with its components kept separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanoseconds: u32,
}

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

impl IsoDuration {
    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Convert to a fixed-length [`TimeDelta`].
    ///
    /// Returns `None` when the duration has year or month components, or
    /// when it does not fit.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let days = i64::from(self.weeks) * 7 + i64::from(self.days);
        let secs = days * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds);
        let delta = TimeDelta::new(secs, self.nanoseconds)?;
        Some(if self.negative { -delta } else { delta })
    }

    /// Build a duration using day, hour, minute and second components.
    ///
    /// Returns `None` when the number of days does not fit in a `u32`.
    pub fn from_time_delta(delta: TimeDelta) -> Option<Self> {
        let negative = delta < TimeDelta::zero();
        let delta = if negative { -delta } else { delta };
        let total = delta.num_seconds();
        Some(Self {
            negative,
            days: u32::try_from(total / SECONDS_PER_DAY).ok()?,
            hours: u32::try_from(total % SECONDS_PER_DAY / SECONDS_PER_HOUR).ok()?,
            minutes: u32::try_from(total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE).ok()?,
            seconds: u32::try_from(total % SECONDS_PER_MINUTE).ok()?,
            nanoseconds: delta.subsec_nanos().unsigned_abs(),
            ..Self::default()
        })
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanoseconds == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || self.nanoseconds != 0 {
            write!(f, "{}", self.seconds)?;
            if self.nanoseconds != 0 {
                let fraction = format!("{:09}", self.nanoseconds);
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidValue {
            kind: "duration",
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest
            .strip_prefix('P')
            .ok_or_else(|| invalid("missing 'P' designator"))?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut duration = Self {
            negative,
            ..Self::default()
        };
        let mut seen_component = false;

        for (number, designator) in components(date_part).map_err(invalid)? {
            seen_component = true;
            let value = whole_number(number).ok_or_else(|| invalid("bad date component"))?;
            match designator {
                'Y' => duration.years = value,
                'M' => duration.months = value,
                'W' => duration.weeks = value,
                'D' => duration.days = value,
                _ => return Err(invalid("unexpected designator in date part")),
            }
        }

        if let Some(time_part) = time_part {
            if time_part.is_empty() {
                return Err(invalid("'T' without time components"));
            }
            for (number, designator) in components(time_part).map_err(invalid)? {
                seen_component = true;
                match designator {
                    'H' => {
                        duration.hours =
                            whole_number(number).ok_or_else(|| invalid("bad hour component"))?;
                    }
                    'M' => {
                        duration.minutes =
                            whole_number(number).ok_or_else(|| invalid("bad minute component"))?;
                    }
                    'S' => {
                        let (secs, nanos) =
                            seconds(number).ok_or_else(|| invalid("bad second component"))?;
                        duration.seconds = secs;
                        duration.nanoseconds = nanos;
                    }
                    _ => return Err(invalid("unexpected designator in time part")),
                }
            }
        }

        if !seen_component {
            return Err(invalid("no duration components"));
        }
        Ok(duration)
    }
}

/// Split `"1Y2M"` into `[("1", 'Y'), ("2", 'M')]`.
fn components(part: &str) -> std::result::Result<Vec<(&str, char)>, &'static str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        if start == i {
            return Err("designator without a number");
        }
        out.push((&part[start..i], c));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err("number without a designator");
    }
    Ok(out)
}

fn whole_number(s: &str) -> Option<u32> {
    s.parse().ok()
}

/// Parse `"12"` or `"12.5"` (comma accepted as decimal mark) into
/// whole seconds and nanoseconds.
fn seconds(s: &str) -> Option<(u32, u32)> {
    let (whole, fraction) = match s.split_once(['.', ',']) {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };
    let secs = whole.parse().ok()?;
    if fraction.is_empty() {
        return Some((secs, 0));
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: String = fraction.chars().take(9).collect();
    let nanos: u32 = format!("{digits:0<9}").parse().ok()?;
    Some((secs, nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> IsoDuration {
        s.parse().unwrap()
    }

    #[test]
    fn parse_components() {
        let d = parse("P1Y2M3W4DT5H6M7S");
        assert_eq!(
            d,
            IsoDuration {
                negative: false,
                years: 1,
                months: 2,
                weeks: 3,
                days: 4,
                hours: 5,
                minutes: 6,
                seconds: 7,
                nanoseconds: 0,
            }
        );
    }

    #[test]
    fn month_and_minute_share_a_designator() {
        assert_eq!(parse("P1M").months, 1);
        assert_eq!(parse("PT1M").minutes, 1);
    }

    #[test]
    fn fractional_seconds() {
        let d = parse("PT0.5S");
        assert_eq!(d.seconds, 0);
        assert_eq!(d.nanoseconds, 500_000_000);
        assert_eq!(d.to_string(), "PT0.5S");

        assert_eq!(parse("PT1,25S").nanoseconds, 250_000_000);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(parse("PT1H").to_string(), "PT1H");
        assert_eq!(parse("P1DT0H").to_string(), "P1D");
        assert_eq!(parse("-P3W").to_string(), "-P3W");
        assert_eq!(parse("PT0S").to_string(), "PT0S");
        assert_eq!(parse("P0D").to_string(), "PT0S");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "P", "1D", "PT", "P1H", "PT1D", "PDT", "P1", "P1.5D", "PT1.xS"] {
            assert!(bad.parse::<IsoDuration>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn time_delta_conversion() {
        let d = parse("P1DT2H30M");
        let delta = d.to_time_delta().unwrap();
        assert_eq!(delta.num_minutes(), 24 * 60 + 150);
        assert_eq!(IsoDuration::from_time_delta(delta), Some(d));

        assert!(parse("P1M").to_time_delta().is_none());

        let negative = parse("-PT90S").to_time_delta().unwrap();
        assert_eq!(negative.num_seconds(), -90);
        assert_eq!(
            IsoDuration::from_time_delta(negative).unwrap().to_string(),
            "-PT1M30S"
        );
    }

    #[test]
    fn oversized_time_delta_does_not_truncate() {
        assert_eq!(IsoDuration::from_time_delta(TimeDelta::MAX), None);
        assert_eq!(IsoDuration::from_time_delta(TimeDelta::MIN), None);

        let days = TimeDelta::days(i64::from(u32::MAX));
        assert_eq!(IsoDuration::from_time_delta(days).unwrap().days, u32::MAX);
    }
}
