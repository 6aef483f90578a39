use crate::{api::ValidationErrors, validation::is_blank};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Round name is required";
pub const START_REQUIRED: &str = "Start time is required";
pub const END_REQUIRED: &str = "End time is required";
pub const START_INVALID: &str = "Start time is invalid";
pub const END_INVALID: &str = "End time is invalid";
pub const END_BEFORE_START: &str = "End time must be after start time";

// Minute-precision ISO forms with a zone, which RFC 3339 parsing rejects.
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

// Offset-less forms as sent by `datetime-local` inputs and plain text fields. A trailing `Z` is
// read as UTC, which is the naive timeline offset values are normalized to.
const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A round boundary as submitted by a form: either date-time text or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Empty text and a zero timestamp carry no value.
    pub fn is_missing(&self) -> bool {
        match self {
            Timestamp::Millis(millis) => *millis == 0,
            Timestamp::Text(text) => text.is_empty(),
        }
    }

    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Millis(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(|datetime| datetime.naive_utc()),
            Timestamp::Text(text) => parse_datetime(text),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(String::from(text))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp::Millis(millis)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundInput {
    pub name: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl RoundInput {
    pub fn new(name: &str, start: impl Into<Timestamp>, end: impl Into<Timestamp>) -> Self {
        Self {
            name: Some(String::from(name)),
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Parse a round boundary.
///
/// Values with an offset are normalized to UTC. Values without one, including bare dates (taken
/// as midnight), are compared as given.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }
    if let Some(datetime) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(datetime.naive_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn check_boundary(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Timestamp>,
    required: &str,
    invalid: &str,
) -> Option<NaiveDateTime> {
    match value.filter(|value| !value.is_missing()) {
        None => {
            errors.insert(field, required);
            None
        }
        Some(value) => {
            let parsed = value.to_datetime();
            if parsed.is_none() {
                errors.insert(field, invalid);
            }
            parsed
        }
    }
}

/// Check a round form: name filled in, both boundaries present and parseable, and the start not
/// later than the end.
pub fn validate_round(input: &RoundInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(input.name.as_deref()) {
        errors.insert("name", NAME_REQUIRED);
    }

    let start = check_boundary(
        &mut errors,
        "start",
        input.start.as_ref(),
        START_REQUIRED,
        START_INVALID,
    );
    let end = check_boundary(
        &mut errors,
        "end",
        input.end.as_ref(),
        END_REQUIRED,
        END_INVALID,
    );

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            errors.insert("end", END_BEFORE_START);
        }
    }

    errors
}
