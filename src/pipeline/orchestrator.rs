use crate::error::AppResult;
use crate::llm::LlmClient;
use crate::recall::{DateRange, RecallSource};

use super::{aggregate, generate};

/// Outcome of one pipeline run, handed to the output writers.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub report_text: String,
    pub total_recalls: usize,
    pub model: String,
    pub duration_ms: u64,
}

#[tracing::instrument(
    name = "pipeline report",
    skip(source, llm_client),
    fields(
        report.total_recalls,
        report.duration_ms,
    )
)]
pub async fn run(
    source: &dyn RecallSource,
    llm_client: &LlmClient,
    model: &str,
    range: &DateRange,
    limit: u32,
) -> AppResult<RunReport> {
    let start = std::time::Instant::now();

    // Stage 1: Fetch recall records from the openFDA endpoint
    let records = source.fetch(range, limit).await?;

    // Stage 2: Aggregate summary statistics
    let bundle = aggregate::aggregate(&records)?;

    // Stage 3: Generate the narrative report via the LLM
    let report_text = generate::generate(llm_client, model, &bundle, range).await?;

    let duration = start.elapsed();
    let report = RunReport {
        report_text,
        total_recalls: bundle.total,
        model: model.to_string(),
        duration_ms: duration.as_millis() as u64,
    };

    let span = tracing::Span::current();
    span.record("report.total_recalls", report.total_recalls);
    span.record("report.duration_ms", report.duration_ms);

    Ok(report)
}
