pub mod openai;

pub use openai::OpenAiProvider;

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub finish_reason: String,
}

#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, req: &GenerateRequest) -> AppResult<GenerateResponse>;
    fn name(&self) -> &str;
}

/// Wraps a provider call in a `gen_ai.chat` span with request/usage fields.
pub struct LlmClient {
    pub provider: Arc<dyn Provider>,
}

impl LlmClient {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, req: &GenerateRequest) -> AppResult<GenerateResponse> {
        let provider_name = self.provider.name().to_string();
        let start = Instant::now();

        let span = tracing::info_span!(
            "gen_ai.chat",
            otel.name = %format!("gen_ai.chat {}", req.model),
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = %provider_name,
            gen_ai.request.model = %req.model,
            gen_ai.response.model = tracing::field::Empty,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
        );

        tracing::debug!(
            parent: &span,
            prompt = %truncate(&req.prompt, 1000),
            "LLM request"
        );

        let result = self.provider.generate(req).instrument(span.clone()).await;
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(resp) => {
                span.record("gen_ai.response.model", resp.model.as_str());
                span.record("gen_ai.usage.input_tokens", resp.input_tokens as i64);
                span.record("gen_ai.usage.output_tokens", resp.output_tokens as i64);
                if !resp.finish_reason.is_empty() {
                    span.record(
                        "gen_ai.response.finish_reasons",
                        resp.finish_reason.as_str(),
                    );
                }

                tracing::info!(
                    provider = %provider_name,
                    model = %resp.model,
                    input_tokens = resp.input_tokens,
                    output_tokens = resp.output_tokens,
                    duration_ms = duration_ms,
                    "LLM call completed"
                );

                Ok(resp)
            }
            Err(err) => {
                tracing::error!(
                    provider = %provider_name,
                    model = %req.model,
                    duration_ms = duration_ms,
                    error = %err,
                    "LLM call failed"
                );
                Err(err)
            }
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        s.char_indices()
            .take_while(|&(i, _)| i < max)
            .map(|(_, c)| c)
            .collect()
    }
}
