use crate::config::Config;
use crate::error::GenerationError;
use crate::generator::TextGenerator;
use crate::prompt::{SYSTEM_INSTRUCTION, user_instruction};
use crate::types::{Mode, SamplingConfig};
use std::sync::Arc;

pub const EMPTY_RESULT_FALLBACK: &str = "生成失败，请稍后重试。";

#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingConfig,
}

impl GenerationClient {
    pub fn new(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self {
            generator,
            sampling: SamplingConfig {
                temperature: config.temperature,
                top_p: config.top_p,
            },
        }
    }

    pub async fn generate_content(&self, mode: Mode, input: &str) -> Result<String, GenerationError> {
        let user_content = user_instruction(mode, input);

        match self
            .generator
            .generate(SYSTEM_INSTRUCTION, &user_content, &self.sampling)
            .await
        {
            Ok(Some(text)) => Ok(text),
            Ok(None) => {
                log::warn!(
                    "{} returned no text, using fallback",
                    self.generator.name()
                );
                Ok(EMPTY_RESULT_FALLBACK.to_string())
            }
            Err(err) => {
                log::error!("Generation API error ({}): {err}", self.generator.name());
                Err(GenerationError::Connection)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use crate::generator::{BoxError, TextGenerator};
    use crate::types::SamplingConfig;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub system_instruction: String,
        pub user_content: String,
        pub sampling: SamplingConfig,
    }

    pub enum Reply {
        Text(String),
        Empty,
        Fail(String),
    }

    /// Answers every call with the same canned reply and records what it was asked.
    pub struct StubGenerator {
        reply: Reply,
        pub calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubGenerator {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<RecordedCall> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(
            &self,
            system_instruction: &str,
            user_content: &str,
            sampling: &SamplingConfig,
        ) -> Result<Option<String>, BoxError> {
            self.calls.lock().unwrap().push(RecordedCall {
                system_instruction: system_instruction.to_string(),
                user_content: user_content.to_string(),
                sampling: *sampling,
            });
            match &self.reply {
                Reply::Text(text) => Ok(Some(text.clone())),
                Reply::Empty => Ok(None),
                Reply::Fail(msg) => Err(msg.clone().into()),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::{Reply, StubGenerator};
    use super::*;
    use crate::prompt::{ORIGINAL_PREFIX, REWRITE_PREFIX};

    fn test_config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            api_base_url: "http://localhost:1234".to_string(),
            model: "test-model".to_string(),
            temperature: 0.8,
            top_p: 0.95,
            request_timeout_secs: None,
            debug: true,
        }
    }

    #[tokio::test]
    async fn original_mode_returns_text_verbatim() {
        let stub = Arc::new(StubGenerator::new(Reply::Text("月薪3k也能存下钱!💰".into())));
        let client = GenerationClient::new(stub.clone(), &test_config());

        let out = client.generate_content(Mode::Original, "月薪3k理财").await;
        assert_eq!(out.unwrap(), "月薪3k也能存下钱!💰");

        let call = stub.last_call().unwrap();
        assert_eq!(call.system_instruction, SYSTEM_INSTRUCTION);
        assert!(call.user_content.contains("月薪3k理财"));
        assert!(call.user_content.contains(ORIGINAL_PREFIX));
        assert_eq!(
            call.sampling,
            SamplingConfig {
                temperature: 0.8,
                top_p: 0.95
            }
        );
    }

    #[tokio::test]
    async fn rewrite_mode_uses_rewrite_wrapper() {
        let stub = Arc::new(StubGenerator::new(Reply::Text("改写版".into())));
        let client = GenerationClient::new(stub.clone(), &test_config());

        client
            .generate_content(Mode::Rewrite, "别再乱花钱了!")
            .await
            .unwrap();

        let call = stub.last_call().unwrap();
        assert!(call.user_content.starts_with(REWRITE_PREFIX));
        assert!(!call.user_content.contains(ORIGINAL_PREFIX));
    }

    #[tokio::test]
    async fn empty_response_uses_fallback() {
        let stub = Arc::new(StubGenerator::new(Reply::Empty));
        let client = GenerationClient::new(stub, &test_config());

        let out = client.generate_content(Mode::Original, "攒钱").await;
        assert_eq!(out, Ok(EMPTY_RESULT_FALLBACK.to_string()));
    }

    #[tokio::test]
    async fn failure_collapses_to_generic_error() {
        let stub = Arc::new(StubGenerator::new(Reply::Fail("HTTP 403 API key invalid".into())));
        let client = GenerationClient::new(stub.clone(), &test_config());

        let out = client.generate_content(Mode::Original, "攒钱").await;
        assert_eq!(out, Err(GenerationError::Connection));
        assert_eq!(stub.call_count(), 1);
    }
}
