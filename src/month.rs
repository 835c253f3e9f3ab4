//! Calendar months and normalization of the month field found on records.
//!
//! Data sources disagree on how they store the month of a transaction: some
//! use the month number, others the full English name. [normalize_month]
//! turns the numeric codes into names so that every record can be matched
//! against [CanonicalMonth::ALL].

use std::fmt::Display;

use serde::Serialize;

/// One of the twelve calendar months, ordered January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl CanonicalMonth {
    /// All months in calendar order.
    pub const ALL: [CanonicalMonth; 12] = [
        CanonicalMonth::January,
        CanonicalMonth::February,
        CanonicalMonth::March,
        CanonicalMonth::April,
        CanonicalMonth::May,
        CanonicalMonth::June,
        CanonicalMonth::July,
        CanonicalMonth::August,
        CanonicalMonth::September,
        CanonicalMonth::October,
        CanonicalMonth::November,
        CanonicalMonth::December,
    ];

    /// The full English name of the month, e.g. "January".
    pub fn name(self) -> &'static str {
        match self {
            CanonicalMonth::January => "January",
            CanonicalMonth::February => "February",
            CanonicalMonth::March => "March",
            CanonicalMonth::April => "April",
            CanonicalMonth::May => "May",
            CanonicalMonth::June => "June",
            CanonicalMonth::July => "July",
            CanonicalMonth::August => "August",
            CanonicalMonth::September => "September",
            CanonicalMonth::October => "October",
            CanonicalMonth::November => "November",
            CanonicalMonth::December => "December",
        }
    }

    /// Matches a normalized month string against the twelve month names.
    ///
    /// Returns `None` for anything that is not exactly a full English month
    /// name, such strings are excluded from the summary grid.
    pub fn from_normalized(month: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.name() == month)
    }
}

impl Display for CanonicalMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<time::Month> for CanonicalMonth {
    fn from(month: time::Month) -> Self {
        // `time::Month` is numbered 1 to 12, so the lookup cannot miss.
        Self::ALL[usize::from(u8::from(month)) - 1]
    }
}

/// The month of a record as stored by the data source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMonth {
    /// A month stored as a number, e.g. `3`.
    Number(i64),
    /// A month stored as text, e.g. `"3"` or `"March"`.
    Text(String),
}

impl Display for RawMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawMonth::Number(number) => write!(f, "{number}"),
            RawMonth::Text(text) => f.write_str(text),
        }
    }
}

const MONTH_CODES: [(&str, &str); 12] = [
    ("1", "January"),
    ("2", "February"),
    ("3", "March"),
    ("4", "April"),
    ("5", "May"),
    ("6", "June"),
    ("7", "July"),
    ("8", "August"),
    ("9", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Converts a raw month into a month name.
///
/// The string form of `month` is looked up in a fixed table of the codes
/// `"1"` to `"12"`. Anything else, including month names and unrecognised
/// values such as `"01"` or `"Jan"`, is returned unchanged.
pub fn normalize_month(month: &RawMonth) -> String {
    let month = month.to_string();

    MONTH_CODES
        .iter()
        .find(|(code, _)| *code == month)
        .map(|(_, name)| (*name).to_owned())
        .unwrap_or(month)
}
