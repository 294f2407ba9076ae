use super::{GenerateError, GeneratedVideo, SignVideoBackend};
use crate::config::BackendConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Mock backend standing in for the real sign-language video API. Sleeps for
/// the configured delay, then answers with fixed metadata; the translated
/// term count is the word count of the prompt.
pub struct MockBackend {
    delay: Duration,
    video_url: String,
}

impl MockBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.mock_delay_ms),
            video_url: config.video_url.clone(),
        }
    }
}

#[async_trait]
impl SignVideoBackend for MockBackend {
    async fn generate(&self, text: &str) -> Result<GeneratedVideo, GenerateError> {
        tokio::time::sleep(self.delay).await;
        Ok(GeneratedVideo {
            url: self.video_url.clone(),
            duration_secs: 30.0,
            terms_translated: text.split_whitespace().count() as u32,
            confidence: 0.95,
        })
    }
}
