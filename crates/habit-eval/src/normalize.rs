//! Lenient parsing of the loosely formatted values found in habit logs.
//!
//! Nothing here returns an error for malformed business input: callers get
//! `None` (or zero for amounts) and decide whether the entry is skipped.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes since midnight for `HH:MM`.
pub const fn minutes(hours: u32, mins: u32) -> u32 {
    hours * 60 + mins
}

/// Parses ISO-like dates, retrying with `/` separators rewritten to `-`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_iso_date(trimmed).or_else(|| parse_iso_date(&trimmed.replace('/', "-")))
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local().date());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.date())
}

/// Parses `HH:MM` or `HH.MM` into minutes since midnight.
///
/// Only the first two components are read, so `05:30:00` is accepted.
pub fn parse_time_to_minutes(raw: &str) -> Option<u32> {
    let normalized = raw.trim().replace('.', ":");
    let mut parts = normalized.split(':');
    let hours = parts.next()?.trim().parse::<u32>().ok()?;
    let mins = parts.next()?.trim().parse::<u32>().ok()?;
    hours.checked_mul(60)?.checked_add(mins)
}

/// Currency-like text ("Rp 5.000", "5,000") reduced to its digits.
/// Saturates at `u64::MAX`.
pub fn parse_amount(raw: &str) -> u64 {
    raw.chars()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0_u64, |total, digit| {
            total.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Durations such as `45`, `30.5` or `"45 menit"`; `None` when no number leads the text.
pub fn parse_minutes_lenient(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.replace(',', ".").parse::<f64>() {
        return value.is_finite().then_some(value);
    }

    let prefix: String = trimmed
        .chars()
        .take_while(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    prefix.trim_end_matches('.').parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("period '{0}' must be formatted as YYYY-MM")]
    Malformed(String),
}

/// Calendar month identifier rendered as `YYYY-MM`.
///
/// Ordering is chronological, which matches the lexicographic order of the
/// rendered keys for four-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((1..=12).contains(&month) && (0..=9999).contains(&year)).then_some(Self { year, month })
    }

    /// Strict `^\d{4}-(0[1-9]|1[0-2])$` parsing used at request boundaries.
    pub fn parse(raw: &str) -> Result<Self, PeriodError> {
        let malformed = || PeriodError::Malformed(raw.to_string());
        let bytes = raw.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(malformed());
        }
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(malformed());
        }

        let year = raw[..4].parse::<i32>().map_err(|_| malformed())?;
        let month = raw[5..].parse::<u32>().map_err(|_| malformed())?;
        Self::new(year, month).ok_or_else(malformed)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub fn period_start(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw.trim()).map_err(serde::de::Error::custom)
    }
}

/// A month key together with the first calendar day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthPeriod {
    pub key: MonthKey,
    pub period_start: NaiveDate,
}

impl From<MonthKey> for MonthPeriod {
    fn from(key: MonthKey) -> Self {
        Self {
            key,
            period_start: key.period_start(),
        }
    }
}

pub fn month_key(date: NaiveDate) -> MonthPeriod {
    MonthKey::from_date(date).into()
}
