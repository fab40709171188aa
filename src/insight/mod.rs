//! Natural-language analysis of the session history.
//!
//! Logs are summarised into a prompt and handed to a [`TextGenerator`]; every
//! failure collapses into a short user-facing message.

pub mod error;
pub mod gemini;

use crate::domain::SessionLog;
use crate::persistence::AppConfig;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

pub use error::{InsightError, InsightResult};
pub use gemini::GeminiClient;

pub const NO_DATA_MESSAGE: &str = "No sessions to analyze yet. Complete a few sessions first.";
pub const MISSING_KEY_MESSAGE: &str =
    "Error: missing API key. Set GEMINI_API_KEY or add api_key to config.json.";
pub const FAILURE_MESSAGE: &str = "Failed to analyze your sessions, please try again later.";
pub const EMPTY_RESULT_MESSAGE: &str = "Could not generate an analysis.";
pub const PLACEHOLDER_MESSAGE: &str = "Press [a] to generate an AI analysis of your time log.";

/// External text-generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> InsightResult<String>;
}

/// One session as presented to the model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogSummary {
    #[serde(rename = "type")]
    kind: &'static str,
    duration_minutes: u32,
    tags: String,
    end_time_local: String,
}

impl From<&SessionLog> for LogSummary {
    fn from(log: &SessionLog) -> Self {
        Self {
            kind: if log.is_work() { "work" } else { "break" },
            duration_minutes: log.minutes(),
            tags: log.tags.join(", "),
            end_time_local: log
                .end_local()
                .map(|dt| dt.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Embed the session summaries in the analysis instructions
pub fn build_prompt(logs: &[SessionLog]) -> String {
    let summaries: Vec<LogSummary> = logs.iter().map(LogSummary::from).collect();
    let data = serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are an expert in the Lyubishchev time-tracking method.\n\
         Here is my recent time log:\n\
         {data}\n\n\
         Using Lyubishchev's method, analyze this data:\n\
         1. Compare \"basic time\" (creative/deep work) against \"standard time\" (routine/rest) and give the ratio.\n\
         2. Identify patterns in how I spend my time, and any distractions, from the tags.\n\
         3. Give 3 short, strict and actionable recommendations to use my time better.\n\n\
         Keep the answer concise and use Markdown."
    )
}

/// Analyze `logs` with the configured service.
///
/// Empty history and a missing API key are reported without any network call.
pub async fn analyze_logs(logs: &[SessionLog], config: &AppConfig) -> String {
    analyze_with_key(logs, config.resolve_api_key(), &config.model).await
}

async fn analyze_with_key(logs: &[SessionLog], api_key: Option<String>, model: &str) -> String {
    if logs.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    match GeminiClient::from_parts(api_key, model) {
        Ok(client) => {
            info!(model = client.model(), sessions = logs.len(), "Requesting insight");
            analyze_with(&client, logs).await
        }
        Err(e) => {
            warn!(error = %e, "Insight request skipped");
            MISSING_KEY_MESSAGE.to_string()
        }
    }
}

/// Analyze `logs` with an arbitrary generator
pub async fn analyze_with(generator: &dyn TextGenerator, logs: &[SessionLog]) -> String {
    if logs.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let prompt = build_prompt(logs);
    match generator.generate(&prompt).await {
        Ok(text) => {
            info!(sessions = logs.len(), "Insight generated");
            text
        }
        Err(InsightError::EmptyResponse) => EMPTY_RESULT_MESSAGE.to_string(),
        Err(e) => {
            error!(error = %e, "Insight request failed");
            FAILURE_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionMode;
    use chrono::Local;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records prompts and replies with a canned result
    struct FakeGenerator {
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        reply: fn() -> InsightResult<String>,
    }

    impl FakeGenerator {
        fn new(reply: fn() -> InsightResult<String>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                reply,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> InsightResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            (self.reply)()
        }
    }

    fn logs() -> Vec<SessionLog> {
        vec![
            SessionLog::completed(SessionMode::Work, vec!["Writing".into(), "Coding".into()], Local::now()),
            SessionLog::completed(SessionMode::Break, Vec::new(), Local::now()),
        ]
    }

    #[tokio::test]
    async fn test_empty_logs_skip_generator() {
        let generator = FakeGenerator::new(|| Ok("unused".to_string()));
        let result = analyze_with(&generator, &[]).await;

        assert_eq!(result, NO_DATA_MESSAGE);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_logs_checked_before_key() {
        assert_eq!(analyze_with_key(&[], None, "m").await, NO_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_key_message() {
        assert_eq!(analyze_with_key(&logs(), None, "m").await, MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_successful_analysis() {
        let generator = FakeGenerator::new(|| Ok("## Ratio\n76% deep work".to_string()));
        let result = analyze_with(&generator, &logs()).await;

        assert_eq!(result, "## Ratio\n76% deep work");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("\"type\": \"work\""));
        assert!(prompt.contains("\"durationMinutes\": 53"));
        assert!(prompt.contains("\"tags\": \"Writing, Coding\""));
        assert!(prompt.contains("3 short, strict and actionable recommendations"));
    }

    #[tokio::test]
    async fn test_failure_message() {
        let generator = FakeGenerator::new(|| {
            Err(InsightError::Api {
                status: StatusCode::UNAUTHORIZED,
                message: "bad key".to_string(),
            })
        });
        assert_eq!(analyze_with(&generator, &logs()).await, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_response_message() {
        let generator = FakeGenerator::new(|| Err(InsightError::EmptyResponse));
        assert_eq!(analyze_with(&generator, &logs()).await, EMPTY_RESULT_MESSAGE);
    }

    #[test]
    fn test_prompt_has_end_time() {
        let prompt = build_prompt(&logs());
        assert!(prompt.contains("\"endTimeLocal\": \""));
        assert!(prompt.contains("\"type\": \"break\""));
    }
}
