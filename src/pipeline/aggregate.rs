use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, AppResult};
use crate::recall::{DateRange, RecallRecord};

const TOP_CAUSES: usize = 10;
const SAMPLE_SIZE: usize = 5;

/// Read-only summary derived from one fetched record set.
#[derive(Debug, Clone)]
pub struct AggregateBundle {
    pub total: usize,
    pub top_root_causes: Vec<RootCauseCount>,
    pub monthly_counts: Vec<MonthCount>,
    pub sample: Vec<RecallRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootCauseCount {
    pub cause: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthCount {
    pub month: u32,
    pub name: &'static str,
    pub count: usize,
}

/// Pure aggregation over the fetched records: total count, top-10 root causes
/// (descending count, ties in first-seen order), per-month counts, and the
/// first five records as a sample.
///
/// A record with a missing or unparseable initiation date is a data-quality
/// error and fails the run; silently dropping rows would corrupt the monthly
/// table. Records without a root cause still count toward the total and the
/// monthly table but are excluded from the frequency table.
pub fn aggregate(records: &[RecallRecord]) -> AppResult<AggregateBundle> {
    let mut cause_counts: HashMap<&str, usize> = HashMap::new();
    let mut cause_order: Vec<&str> = Vec::new();
    let mut by_month: BTreeMap<u32, usize> = BTreeMap::new();

    for record in records {
        let date = parse_initiation_date(record)?;
        *by_month.entry(date.month()).or_insert(0) += 1;

        if let Some(cause) = record.root_cause_description.as_deref() {
            let entry = cause_counts.entry(cause).or_insert_with(|| {
                cause_order.push(cause);
                0
            });
            *entry += 1;
        }
    }

    // Stable sort on the first-seen ordering keeps ties deterministic.
    let mut top_root_causes: Vec<RootCauseCount> = cause_order
        .iter()
        .map(|&cause| RootCauseCount {
            cause: cause.to_string(),
            count: cause_counts[cause],
        })
        .collect();
    top_root_causes.sort_by(|a, b| b.count.cmp(&a.count));
    top_root_causes.truncate(TOP_CAUSES);

    let monthly_counts = by_month
        .into_iter()
        .map(|(month, count)| MonthCount {
            month,
            name: month_name(month),
            count,
        })
        .collect();

    Ok(AggregateBundle {
        total: records.len(),
        top_root_causes,
        monthly_counts,
        sample: records.iter().take(SAMPLE_SIZE).cloned().collect(),
    })
}

fn parse_initiation_date(record: &RecallRecord) -> AppResult<NaiveDate> {
    let context = record.recall_number.as_deref().unwrap_or("<no recall number>");

    let raw = record.event_date_initiated.as_deref().ok_or_else(|| {
        AppError::data(
            "event_date_initiated",
            format!("missing on record {context}"),
        )
    })?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::data(
            "event_date_initiated",
            format!("cannot parse `{raw}` on record {context}: {e}"),
        )
    })
}

fn month_name(month: u32) -> &'static str {
    chrono::Month::try_from(month as u8)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Deterministic plain-text rendering of the bundle, embedded verbatim in the
/// generation prompt.
pub fn render_data_summary(bundle: &AggregateBundle, range: &DateRange) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "FDA Medical Device Recall Data ({} to {}):\n",
        range.start, range.end
    ));
    out.push_str(&format!("- Total recalls retrieved: {}\n", bundle.total));

    out.push_str("\nTop 10 Root Causes of Recall:\n");
    for entry in &bundle.top_root_causes {
        out.push_str(&format!("- {}: {}\n", entry.cause, entry.count));
    }

    out.push_str("\nMonthly Recall Counts:\n");
    for month in &bundle.monthly_counts {
        out.push_str(&format!("- {}: {}\n", month.name, month.count));
    }

    out.push_str("\nSample Records (first 5):\n");
    for record in &bundle.sample {
        out.push_str(&format!(
            "- recall_number={} date={} product_code={} root_cause={}\n",
            record.recall_number.as_deref().unwrap_or("-"),
            record.event_date_initiated.as_deref().unwrap_or("-"),
            record.product_code.as_deref().unwrap_or("-"),
            record.root_cause_description.as_deref().unwrap_or("-"),
        ));
    }

    out
}
