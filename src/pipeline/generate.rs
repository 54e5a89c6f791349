use crate::error::AppResult;
use crate::llm::{GenerateRequest, LlmClient};
use crate::recall::DateRange;

use super::aggregate::{AggregateBundle, render_data_summary};

/// Builds the analyst prompt around the rendered data summary. The section
/// structure, sentence counts, and bullet counts are fixed so the completion
/// comes back in a predictable shape.
pub fn build_prompt(bundle: &AggregateBundle, range: &DateRange) -> String {
    let data_summary = render_data_summary(bundle, range);
    let year = range.start.format("%Y");

    format!(
        "You are a data analyst preparing a report on FDA medical device recalls in {year}.\n\n\
        Analyze this data and write a structured report:\n\n\
        {data_summary}\n\
        Report requirements:\n\
        1. **Executive Summary**: 2-3 sentence overview of the recall landscape\n\
        2. **Key Findings**: Exactly 4 bullet points highlighting the most important patterns\n\
        3. **Root Cause Analysis**: 2-3 sentences on the dominant causes and what they suggest\n\
        4. **Monthly Trends**: 2-3 sentences on how recall volume changed throughout the year\n\
        5. **Recommendations**: 3 actionable bullet points for device manufacturers or regulators\n\n\
        Format as Markdown with ## headers for each section. Be specific and reference actual \
        numbers from the data. Keep the tone professional and concise."
    )
}

/// Sends exactly one generation request and returns the completion text
/// unmodified as the report body.
#[tracing::instrument(
    name = "pipeline_stage generate",
    skip(llm_client, bundle),
    fields(
        pipeline.stage = "generate",
        report.chars,
    )
)]
pub async fn generate(
    llm_client: &LlmClient,
    model: &str,
    bundle: &AggregateBundle,
    range: &DateRange,
) -> AppResult<String> {
    let prompt = build_prompt(bundle, range);

    let resp = llm_client
        .generate(&GenerateRequest {
            model: model.to_string(),
            prompt,
        })
        .await?;

    let span = tracing::Span::current();
    span.record("report.chars", resp.content.len());

    Ok(resp.content)
}
