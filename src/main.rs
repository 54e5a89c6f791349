use std::sync::Arc;

mod config;
mod error;
mod llm;
mod output;
mod pipeline;
mod recall;
mod telemetry;

use config::Config;
use llm::{LlmClient, OpenAiProvider, Provider};
use recall::{DateRange, OpenFdaClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Both secrets are validated before any client exists or call is made.
    let config = Config::from_env()?;

    telemetry::init_tracing(&config);

    tracing::info!(
        year = config.recall_year,
        limit = config.recall_limit,
        model = %config.llm_model,
        "Starting recall-reporter"
    );

    let range = DateRange::for_year(config.recall_year)?;
    let source = OpenFdaClient::new(&config.fda_base_url, &config.fda_api_key);

    let provider: Arc<dyn Provider> =
        Arc::new(OpenAiProvider::new(&config.openai_base_url, &config.openai_api_key));
    let llm_client = LlmClient::new(provider);

    let report = pipeline::run(
        &source,
        &llm_client,
        &config.llm_model,
        &range,
        config.recall_limit,
    )
    .await?;

    tracing::info!(
        total_recalls = report.total_recalls,
        duration_ms = report.duration_ms,
        "Report generated"
    );

    println!("{}", report.report_text);

    let written = output::write_report(&report.report_text, config.recall_year, &config.output_dir)?;

    tracing::info!(files = written.len(), "All report formats saved");

    Ok(())
}
