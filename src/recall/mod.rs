pub mod client;

pub use client::OpenFdaClient;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// One device recall event as returned by the openFDA recall endpoint.
///
/// Every field is optional: the upstream schema drifts, and absent fields are
/// tolerated rather than errored. Unknown fields in the response are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecallRecord {
    #[serde(default)]
    pub recall_number: Option<String>,
    #[serde(default)]
    pub event_date_initiated: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub root_cause_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Jan 1 through Dec 31 of one calendar year.
    pub fn for_year(year: i32) -> AppResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::Config(format!("RECALL_YEAR {year} is out of range")))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::Config(format!("RECALL_YEAR {year} is out of range")))?;
        Ok(Self { start, end })
    }

    /// The openFDA search filter over the recall initiation date.
    pub fn search_expression(&self) -> String {
        format!("event_date_initiated:[{} TO {}]", self.start, self.end)
    }
}

#[async_trait::async_trait]
pub trait RecallSource: Send + Sync {
    async fn fetch(&self, range: &DateRange, limit: u32) -> AppResult<Vec<RecallRecord>>;
}
