use crate::generator::GeneratedVideo;
use crossterm::event::Event as CrosstermEvent;

pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The generation backend finished a request
    GenerationComplete {
        request_id: RequestId,
        video: GeneratedVideo,
    },
    GenerationFailed {
        request_id: RequestId,
        error: String,
    },

    /// Tick for UI refresh
    Tick,
}
