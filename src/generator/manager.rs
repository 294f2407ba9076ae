use super::SignVideoBackend;
use crate::app::event::{AppEvent, RequestId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Runs generation requests in the background and reports completions back
/// to the main loop over the event channel. The session state enforces the
/// single-pending-request policy; the manager just executes what it is given.
pub struct GeneratorManager {
    backend: Arc<dyn SignVideoBackend>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl GeneratorManager {
    pub fn new(backend: Arc<dyn SignVideoBackend>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { backend, event_tx }
    }

    /// Spawn one generation request. Always resolves to exactly one
    /// `GenerationComplete` or `GenerationFailed` event.
    pub fn spawn_request(&self, request_id: RequestId, text: String) {
        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match backend.generate(&text).await {
                Ok(video) => {
                    let _ = tx.send(AppEvent::GenerationComplete { request_id, video });
                }
                Err(e) => {
                    warn!("generation request {} failed: {}", request_id, e);
                    let _ = tx.send(AppEvent::GenerationFailed {
                        request_id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerateError, GeneratedVideo};
    use async_trait::async_trait;

    struct StaticBackend {
        result: Result<GeneratedVideo, String>,
    }

    #[async_trait]
    impl SignVideoBackend for StaticBackend {
        async fn generate(&self, _text: &str) -> Result<GeneratedVideo, GenerateError> {
            self.result
                .clone()
                .map_err(GenerateError::Backend)
        }
    }

    #[tokio::test]
    async fn success_is_reported_with_request_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let backend = Arc::new(StaticBackend {
            result: Ok(GeneratedVideo {
                url: "https://example.com/v.mp4".into(),
                duration_secs: 30.0,
                terms_translated: 4,
                confidence: 0.95,
            }),
        });
        let manager = GeneratorManager::new(backend, tx);
        manager.spawn_request(7, "Cara buka rekening".into());

        match rx.recv().await.unwrap() {
            AppEvent::GenerationComplete { request_id, video } => {
                assert_eq!(request_id, 7);
                assert_eq!(video.terms_translated, 4);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn failure_is_reported_with_request_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let backend = Arc::new(StaticBackend {
            result: Err("model unavailable".into()),
        });
        let manager = GeneratorManager::new(backend, tx);
        manager.spawn_request(3, "Transfer uang".into());

        match rx.recv().await.unwrap() {
            AppEvent::GenerationFailed { request_id, error } => {
                assert_eq!(request_id, 3);
                assert!(error.contains("model unavailable"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
