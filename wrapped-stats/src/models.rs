use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of activity as reported by the contributions provider.
///
/// `level` is the provider's own intensity bucket (0-4). It is passed through
/// untouched and never recomputed from `count`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ContributionDay {
    /// ISO 8601 date (`YYYY-MM-DD`), empty for the "no activity" placeholder
    pub date: String,
    pub count: u32,
    #[serde(default)]
    pub level: u8,
}

impl ContributionDay {
    pub fn new(date: impl Into<String>, count: u32, level: u8) -> Self {
        Self {
            date: date.into(),
            count,
            level,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Normalized payload served by `GET /api/get-data`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GitHubData {
    pub username: String,
    /// Chronological, one entry per day of the queried year
    pub contributions: Vec<ContributionDay>,
    /// Provider's yearly total, not necessarily the sum of `count`
    pub total: u64,
}

/// Summary numbers shown next to the heat grid and on the share card.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub most_active_day: ContributionDay,
    pub longest_streak: usize,
}

/// JSON body for every non-2xx API response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
