use crate::app::event::RequestId;
use crate::config::AppConfig;
use crate::generator::GeneratedVideo;
use crate::store::{self, KvStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Result of one generation request. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub id: String,
    pub source_text: String,
    pub url: String,
    pub duration_secs: f64,
    pub terms_translated: u32,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Generate,
    Topics,
    Glossary,
    Community,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Generate => View::Topics,
            View::Topics => View::Glossary,
            View::Glossary => View::Community,
            View::Community => View::Generate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Generate => View::Community,
            View::Topics => View::Generate,
            View::Glossary => View::Topics,
            View::Community => View::Glossary,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Generate => "Generate Video",
            View::Topics => "Financial Topics",
            View::Glossary => "BISINDO Glossary",
            View::Community => "Community",
        }
    }
}

/// Lifecycle of the one allowed in-flight generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPhase {
    Idle,
    Pending { request_id: RequestId, text: String },
}

/// Single-line text input for the generation prompt.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Owns all mutable session state and the history/favorites persistence.
///
/// Submission policy: at most one generation request may be in flight; a
/// submit while one is pending is dropped. Completions carrying a request id
/// other than the pending one are ignored as stale.
pub struct AppState {
    pub config: AppConfig,
    pub view: View,
    pub input: InputState,
    pub current_video: Option<VideoResult>,
    pub phase: RequestPhase,
    pub history: Vec<VideoResult>,
    pub favorites: Vec<VideoResult>,
    pub audio_enabled: bool,
    pub notification: Option<String>,
    pub topic_cursor: usize,
    pub glossary_cursor: usize,
    pub community_cursor: usize,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    next_request_id: RequestId,
    store: Box<dyn KvStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Box<dyn KvStore>) -> Self {
        let mut history = store::load_videos(store.as_ref(), store::HISTORY_KEY);
        history.truncate(config.behavior.history_cap);
        let favorites = store::load_videos(store.as_ref(), store::FAVORITES_KEY);
        let audio_enabled = config.behavior.audio_enabled;
        Self {
            config,
            view: View::Generate,
            input: InputState::new(),
            current_video: None,
            phase: RequestPhase::Idle,
            history,
            favorites,
            audio_enabled,
            notification: None,
            topic_cursor: 0,
            glossary_cursor: 0,
            community_cursor: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            next_request_id: 0,
            store,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, RequestPhase::Pending { .. })
    }

    /// Begin a generation request for the given prompt. Returns the request
    /// id to submit, or `None` when the prompt is blank or a request is
    /// already pending (both are silent no-ops).
    pub fn begin_request(&mut self, text: &str) -> Option<RequestId> {
        let text = text.trim();
        if text.is_empty() || self.is_pending() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = RequestPhase::Pending {
            request_id,
            text: text.to_string(),
        };
        self.notification = None;
        self.dirty = true;
        Some(request_id)
    }

    /// Apply a successful generation: set the current video, prepend it to
    /// history (enforcing the cap), and persist. The current-video and
    /// history updates happen together or not at all.
    pub fn complete_request(&mut self, request_id: RequestId, video: GeneratedVideo) {
        let text = match &self.phase {
            RequestPhase::Pending { request_id: id, text } if *id == request_id => text.clone(),
            _ => {
                warn!("ignoring stale generation result for request {}", request_id);
                return;
            }
        };
        let result = VideoResult {
            id: self.allocate_video_id(),
            source_text: text,
            url: video.url,
            duration_secs: video.duration_secs,
            terms_translated: video.terms_translated,
            confidence: video.confidence.clamp(0.0, 1.0),
            created_at: Utc::now(),
        };
        self.current_video = Some(result.clone());
        self.history.insert(0, result);
        self.history.truncate(self.config.behavior.history_cap);
        self.persist_history();
        self.phase = RequestPhase::Idle;
        self.notification = Some("Video siap ditampilkan.".to_string());
        self.dirty = true;
    }

    /// Report a failed generation and return to idle. History is untouched.
    pub fn fail_request(&mut self, request_id: RequestId, error: &str) {
        match &self.phase {
            RequestPhase::Pending { request_id: id, .. } if *id == request_id => {}
            _ => {
                warn!("ignoring stale generation failure for request {}", request_id);
                return;
            }
        }
        warn!("generation failed: {}", error);
        self.phase = RequestPhase::Idle;
        self.notification =
            Some("Terjadi kesalahan saat membuat video. Silakan coba lagi.".to_string());
        self.dirty = true;
    }

    /// Put a topic into the input without submitting.
    pub fn select_topic(&mut self, topic: &str) {
        self.input.set_text(topic);
        self.dirty = true;
    }

    /// Add the video to favorites if absent, remove it if present. Persists.
    pub fn toggle_favorite(&mut self, video: &VideoResult) {
        if let Some(pos) = self.favorites.iter().position(|f| f.id == video.id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(video.clone());
        }
        self.persist_favorites();
        self.dirty = true;
    }

    pub fn is_favorite(&self, video: Option<&VideoResult>) -> bool {
        video.is_some_and(|v| self.favorites.iter().any(|f| f.id == v.id))
    }

    /// Show a previously generated video again on the generation view.
    pub fn restore(&mut self, video: VideoResult) {
        self.current_video = Some(video);
        self.set_active_view(View::Generate);
    }

    pub fn set_active_view(&mut self, view: View) {
        self.view = view;
        self.dirty = true;
    }

    pub fn toggle_audio(&mut self) {
        self.audio_enabled = !self.audio_enabled;
        self.dirty = true;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.dirty = true;
    }

    /// Restorable videos shown on the community view: the five most recent
    /// history entries followed by all favorites.
    pub fn community_items(&self) -> Vec<&VideoResult> {
        self.history
            .iter()
            .take(5)
            .chain(self.favorites.iter())
            .collect()
    }

    fn allocate_video_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        let taken = |id: &str| {
            self.history
                .iter()
                .chain(self.favorites.iter())
                .any(|v| v.id == id)
        };
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn persist_history(&mut self) {
        if let Err(e) = store::save_videos(self.store.as_mut(), store::HISTORY_KEY, &self.history)
        {
            warn!("failed to persist history: {:#}", e);
        }
    }

    fn persist_favorites(&mut self) {
        if let Err(e) =
            store::save_videos(self.store.as_mut(), store::FAVORITES_KEY, &self.favorites)
        {
            warn!("failed to persist favorites: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    fn make_state() -> AppState {
        AppState::new(AppConfig::default(), Box::new(MemoryStore::new()))
    }

    fn sample_response() -> GeneratedVideo {
        GeneratedVideo {
            url: "https://example.com/v.mp4".to_string(),
            duration_secs: 30.0,
            terms_translated: 4,
            confidence: 0.95,
        }
    }

    #[test]
    fn blank_input_never_starts_a_request() {
        let mut state = make_state();
        assert_eq!(state.begin_request(""), None);
        assert_eq!(state.begin_request("   "), None);
        assert_eq!(state.phase, RequestPhase::Idle);
        assert!(state.history.is_empty());
    }

    #[test]
    fn second_submit_while_pending_is_dropped() {
        let mut state = make_state();
        let first = state.begin_request("Cara buka rekening");
        assert!(first.is_some());
        assert_eq!(state.begin_request("Transfer uang"), None);
        // The pending request still carries the first prompt.
        match &state.phase {
            RequestPhase::Pending { text, .. } => assert_eq!(text, "Cara buka rekening"),
            other => panic!("unexpected phase: {:?}", other),
        }
    }

    #[test]
    fn success_sets_current_video_and_history_together() {
        let mut state = make_state();
        let id = state.begin_request("Cara buka rekening").unwrap();
        state.complete_request(id, sample_response());

        let current = state.current_video.as_ref().unwrap();
        assert_eq!(current.source_text, "Cara buka rekening");
        assert_eq!(current.terms_translated, 4);
        assert_eq!(current.confidence, 0.95);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].id, current.id);
        assert_eq!(state.history[0].source_text, "Cara buka rekening");
        assert_eq!(state.phase, RequestPhase::Idle);
    }

    #[test]
    fn submitted_prompt_is_trimmed() {
        let mut state = make_state();
        let id = state.begin_request("  Menabung rutin  ").unwrap();
        state.complete_request(id, sample_response());
        assert_eq!(state.history[0].source_text, "Menabung rutin");
    }

    #[test]
    fn history_is_capped_most_recent_first() {
        let mut state = make_state();
        for i in 0..12 {
            let id = state.begin_request(&format!("topik {}", i)).unwrap();
            state.complete_request(id, sample_response());
        }
        assert_eq!(state.history.len(), 10);
        assert_eq!(state.history[0].source_text, "topik 11");
        assert!(!state.history.iter().any(|v| v.source_text == "topik 0"));
        assert!(!state.history.iter().any(|v| v.source_text == "topik 1"));
    }

    #[test]
    fn history_ids_are_unique() {
        let mut state = make_state();
        for i in 0..5 {
            let id = state.begin_request(&format!("topik {}", i)).unwrap();
            state.complete_request(id, sample_response());
        }
        for v in &state.history {
            assert_eq!(state.history.iter().filter(|o| o.id == v.id).count(), 1);
        }
    }

    #[test]
    fn failure_returns_to_idle_without_touching_history() {
        let mut state = make_state();
        let first = state.begin_request("Cara buka rekening").unwrap();
        state.complete_request(first, sample_response());

        let second = state.begin_request("Transfer uang").unwrap();
        state.fail_request(second, "backend down");

        assert_eq!(state.phase, RequestPhase::Idle);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].source_text, "Cara buka rekening");
        assert!(state.notification.is_some());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = make_state();
        let id = state.begin_request("Cara buka rekening").unwrap();
        state.complete_request(id + 1, sample_response());
        assert!(state.current_video.is_none());
        assert!(state.history.is_empty());
        assert!(state.is_pending());
    }

    #[test]
    fn favorite_toggle_pair_restores_original_set() {
        let mut state = make_state();
        let id = state.begin_request("Investasi aman").unwrap();
        state.complete_request(id, sample_response());
        let video = state.current_video.clone().unwrap();

        assert!(!state.is_favorite(Some(&video)));
        state.toggle_favorite(&video);
        assert!(state.is_favorite(Some(&video)));
        state.toggle_favorite(&video);
        assert!(!state.is_favorite(Some(&video)));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn is_favorite_of_absent_video_is_false() {
        let state = make_state();
        assert!(!state.is_favorite(None));
    }

    #[test]
    fn restore_shows_video_on_generation_view() {
        let mut state = make_state();
        let id = state.begin_request("Menabung rutin").unwrap();
        state.complete_request(id, sample_response());
        let video = state.history[0].clone();

        state.set_active_view(View::Community);
        state.current_video = None;
        state.restore(video.clone());

        assert_eq!(state.view, View::Generate);
        assert_eq!(state.current_video.as_ref().map(|v| v.id.as_str()), Some(video.id.as_str()));
    }

    #[test]
    fn select_topic_fills_input_without_submitting() {
        let mut state = make_state();
        state.select_topic("Transfer uang");
        assert_eq!(state.input.text, "Transfer uang");
        assert_eq!(state.phase, RequestPhase::Idle);
    }

    #[test]
    fn community_items_are_recent_then_favorites() {
        let mut state = make_state();
        for i in 0..7 {
            let id = state.begin_request(&format!("topik {}", i)).unwrap();
            state.complete_request(id, sample_response());
        }
        let oldest = state.history.last().unwrap().clone();
        state.toggle_favorite(&oldest);

        let items = state.community_items();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].source_text, "topik 6");
        assert_eq!(items[5].id, oldest.id);
    }

    #[test]
    fn history_and_favorites_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path().to_path_buf());
            let mut state = AppState::new(AppConfig::default(), Box::new(store));
            let id = state.begin_request("Cara buka rekening").unwrap();
            state.complete_request(id, sample_response());
            let video = state.current_video.clone().unwrap();
            state.toggle_favorite(&video);
        }

        let store = FileStore::new(dir.path().to_path_buf());
        let state = AppState::new(AppConfig::default(), Box::new(store));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].source_text, "Cara buka rekening");
        assert!(state.is_favorite(state.history.first()));
    }
}
