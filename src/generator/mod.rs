//! Sign-language video generation backend.
//!
//! The backend is an external collaborator behind the [`SignVideoBackend`]
//! trait: it takes a text prompt and eventually yields the generated video's
//! metadata or an error. The shipped implementation is a mock with an
//! artificial delay; tests inject deterministic backends.

mod manager;
mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use manager::GeneratorManager;
pub use mock::MockBackend;

/// Successful response from the generation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVideo {
    pub url: String,
    pub duration_secs: f64,
    pub terms_translated: u32,
    pub confidence: f64,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SignVideoBackend: Send + Sync {
    async fn generate(&self, text: &str) -> Result<GeneratedVideo, GenerateError>;
}
