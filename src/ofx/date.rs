use crate::errors::StatementExtractError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Posting date of a transaction, kept as the raw component substrings of
/// the 8-digit `DTPOSTED` run (YYYYMMDD).
///
/// Components are empty strings when no date pattern matched, so the
/// composed form degrades to `"--"`. Extraction does not check that the
/// components form a real calendar date; convert to [`NaiveDate`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl PostingDate {
    pub(crate) fn from_parts(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }
    }

    /// True when no date pattern matched during extraction
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.month.is_empty() && self.day.is_empty()
    }
}

impl fmt::Display for PostingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl TryFrom<&PostingDate> for NaiveDate {
    type Error = StatementExtractError;

    fn try_from(date: &PostingDate) -> Result<Self, Self::Error> {
        let year = date.year.parse().map_err(|_| StatementExtractError::InvalidPostingDate)?;
        let month = date.month.parse().map_err(|_| StatementExtractError::InvalidPostingDate)?;
        let day = date.day.parse().map_err(|_| StatementExtractError::InvalidPostingDate)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(StatementExtractError::InvalidPostingDate)
    }
}
