//! Message generator — turns a preference record into a message bundle.
//!
//! The one call that leaves the process. `generate` never fails: every
//! transport error, timeout, or malformed response is absorbed into the
//! fallback bundle, so the caller always gets five ornament messages and a
//! star message.

pub mod model;
pub mod prompts;

pub use model::{
    MessageBundle, FALLBACK_ORNAMENT_MESSAGES, FALLBACK_STAR_MESSAGE, ORNAMENT_COUNT,
};

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::quiz::PreferenceRecord;

use model::RawGeneration;
use prompts::{extract_json_object, generation_prompt, generation_system_prompt};

/// Configuration for message generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// LLM temperature for message generation.
    pub temperature: f32,
    /// Max tokens for the LLM response.
    pub max_tokens: u32,
    /// Hard deadline on the request; expiry falls back like any other failure.
    pub request_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 1024,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Generates personalized tree messages using an LLM.
pub struct MessageGenerator {
    llm: Arc<dyn LlmProvider>,
    config: GeneratorConfig,
}

impl MessageGenerator {
    /// Create a new message generator.
    pub fn new(llm: Arc<dyn LlmProvider>, config: GeneratorConfig) -> Self {
        Self { llm, config }
    }

    /// Generate a message bundle for a completed quiz.
    ///
    /// Always resolves to a complete bundle. No retries: the first failure of
    /// any kind yields the fallback.
    pub async fn generate(&self, prefs: &PreferenceRecord) -> MessageBundle {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(generation_system_prompt()),
            ChatMessage::user(generation_prompt(prefs)),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        let response =
            match tokio::time::timeout(self.config.request_timeout, self.llm.complete(request))
                .await
            {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => {
                    warn!(error = %e, "Generation request failed, using fallback bundle");
                    return MessageBundle::fallback();
                }
                Err(_) => {
                    warn!(
                        timeout = ?self.config.request_timeout,
                        "Generation request timed out, using fallback bundle"
                    );
                    return MessageBundle::fallback();
                }
            };

        let json_str = extract_json_object(&response.content);
        let raw: RawGeneration = match serde_json::from_str(&json_str) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    error = %e,
                    response = response.content,
                    "Failed to parse generation response, using fallback bundle"
                );
                return MessageBundle::fallback();
            }
        };

        info!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Generated message bundle"
        );

        MessageBundle::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::error::LlmError;
    use crate::llm::CompletionResponse;
    use crate::quiz::{OrnamentColor, OrnamentShape};

    /// Scripted provider: returns a canned response or a canned failure.
    struct MockProvider {
        reply: Option<String>,
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        fn model_name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            match &self.reply {
                Some(content) => Ok(CompletionResponse {
                    content: content.clone(),
                    input_tokens: 10,
                    output_tokens: 20,
                }),
                None => Err(LlmError::RequestFailed {
                    provider: "mock".to_string(),
                    reason: "forced transport failure".to_string(),
                }),
            }
        }
    }

    fn generator(reply: Option<&str>) -> MessageGenerator {
        MessageGenerator::new(
            Arc::new(MockProvider {
                reply: reply.map(String::from),
            }),
            GeneratorConfig::default(),
        )
    }

    fn sample_prefs() -> PreferenceRecord {
        PreferenceRecord {
            favorite_activity: "ice skating".to_string(),
            favorite_flavor: "cocoa".to_string(),
            holiday_vibe: "quiet".to_string(),
            wish: "snow".to_string(),
            ornament_shape: OrnamentShape::Circle,
            ornament_color: OrnamentColor::Red,
        }
    }

    #[tokio::test]
    async fn transport_failure_yields_verbatim_fallback() {
        let bundle = generator(None).generate(&sample_prefs()).await;
        assert_eq!(bundle, MessageBundle::fallback());
        for (got, want) in bundle
            .ornament_messages
            .iter()
            .zip(FALLBACK_ORNAMENT_MESSAGES)
        {
            assert_eq!(got, want);
        }
    }

    #[tokio::test]
    async fn well_formed_response_is_used() {
        let reply = r#"{"starMessage": "You sparkle.",
            "ornamentMessages": ["one :)", "two", "three", "four", "five"]}"#;
        let bundle = generator(Some(reply)).generate(&sample_prefs()).await;
        assert_eq!(bundle.star_message, "You sparkle.");
        assert_eq!(bundle.ornament_messages[0], "one :)");
        assert_eq!(bundle.ornament_messages[4], "five");
    }

    #[tokio::test]
    async fn markdown_wrapped_response_is_repaired() {
        let reply = "```json\n{\"starMessage\": \"glow\", \"ornamentMessages\": [\"1\",\"2\",\"3\",\"4\",\"5\"]}\n```";
        let bundle = generator(Some(reply)).generate(&sample_prefs()).await;
        assert_eq!(bundle.star_message, "glow");
        assert_eq!(bundle.ornament_messages[4], "5");
    }

    #[tokio::test]
    async fn short_ornament_array_uses_full_fallback() {
        let reply = r#"{"starMessage": "kept", "ornamentMessages": ["a", "b", "c"]}"#;
        let bundle = generator(Some(reply)).generate(&sample_prefs()).await;
        assert_eq!(bundle.star_message, "kept");
        assert_eq!(
            bundle.ornament_messages,
            FALLBACK_ORNAMENT_MESSAGES.map(String::from)
        );
    }

    #[tokio::test]
    async fn garbage_response_yields_fallback() {
        let bundle = generator(Some("ho ho ho, no json today"))
            .generate(&sample_prefs())
            .await;
        assert_eq!(bundle, MessageBundle::fallback());
    }

    #[tokio::test]
    async fn bundle_is_always_complete() {
        for reply in [None, Some("{}"), Some("[1,2,3]"), Some("")] {
            let bundle = generator(reply).generate(&sample_prefs()).await;
            assert_eq!(bundle.ornament_messages.len(), ORNAMENT_COUNT);
            assert!(!bundle.star_message.is_empty());
        }
    }
}
