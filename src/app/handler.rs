use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, View};
use crate::data;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::GenerationComplete { request_id, video } => {
            state.complete_request(request_id, video);
            vec![]
        }
        AppEvent::GenerationFailed { request_id, error } => {
            state.fail_request(request_id, &error);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the loading spinner moving while a request is out.
            if state.is_pending() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Tab => {
            state.set_active_view(state.view.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.set_active_view(state.view.prev());
            return vec![];
        }
        KeyCode::F(5) => {
            state.toggle_audio();
            return vec![];
        }
        _ => {}
    }

    match state.view {
        View::Generate => handle_generate_key(state, key),
        View::Topics => handle_topics_key(state, key),
        View::Glossary => handle_glossary_key(state, key),
        View::Community => handle_community_key(state, key),
    }
}

fn handle_generate_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            let text = state.input.text.clone();
            match state.begin_request(&text) {
                Some(request_id) => vec![Action::Generate {
                    request_id,
                    text: text.trim().to_string(),
                }],
                None => vec![],
            }
        }
        KeyCode::Char('f') if ctrl => {
            if let Some(video) = state.current_video.clone() {
                state.toggle_favorite(&video);
                if state.is_favorite(Some(&video)) {
                    state.notify("Ditambahkan ke favorit.");
                } else {
                    state.notify("Dihapus dari favorit.");
                }
            }
            vec![]
        }
        KeyCode::Char('s') if ctrl => match state.current_video.clone() {
            Some(video) => vec![Action::Share { video }],
            None => vec![],
        },
        KeyCode::Char('u') if ctrl => {
            state.input.clear();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_topics_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = data::all_topics().len();
    match key.code {
        KeyCode::Up => {
            state.topic_cursor = state.topic_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if len > 0 && state.topic_cursor + 1 < len {
                state.topic_cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            if let Some((_, topic)) = data::all_topics().get(state.topic_cursor) {
                state.select_topic(topic);
                state.set_active_view(View::Generate);
            }
            vec![]
        }
        _ => handle_browse_common(state, key),
    }
}

fn handle_glossary_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = data::BISINDO_GLOSSARY.len();
    match key.code {
        KeyCode::Up => {
            state.glossary_cursor = state.glossary_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if len > 0 && state.glossary_cursor + 1 < len {
                state.glossary_cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            if let Some(entry) = data::BISINDO_GLOSSARY.get(state.glossary_cursor) {
                let prompt = format!("Jelaskan tentang {}", entry.term);
                state.select_topic(&prompt);
                state.set_active_view(View::Generate);
            }
            vec![]
        }
        _ => handle_browse_common(state, key),
    }
}

fn handle_community_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.community_items().len();
    let cursor = state.community_cursor.min(len.saturating_sub(1));
    match key.code {
        KeyCode::Up => {
            state.community_cursor = cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if len > 0 && cursor + 1 < len {
                state.community_cursor = cursor + 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            let selected = state.community_items().get(cursor).map(|v| (*v).clone());
            if let Some(video) = selected {
                state.restore(video);
            }
            vec![]
        }
        KeyCode::Char('f') => {
            let selected = state.community_items().get(cursor).map(|v| (*v).clone());
            if let Some(video) = selected {
                state.toggle_favorite(&video);
            }
            vec![]
        }
        KeyCode::Char('s') => {
            let selected = state.community_items().get(cursor).map(|v| (*v).clone());
            match selected {
                Some(video) => vec![Action::Share { video }],
                None => vec![],
            }
        }
        _ => handle_browse_common(state, key),
    }
}

/// Shortcuts shared by the non-input views.
fn handle_browse_common(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('m') => {
            state.toggle_audio();
            vec![]
        }
        KeyCode::Char('1') => {
            state.set_active_view(View::Generate);
            vec![]
        }
        KeyCode::Char('2') => {
            state.set_active_view(View::Topics);
            vec![]
        }
        KeyCode::Char('3') => {
            state.set_active_view(View::Glossary);
            vec![]
        }
        KeyCode::Char('4') => {
            state.set_active_view(View::Community);
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::generator::GeneratedVideo;
    use crate::store::MemoryStore;

    fn make_state() -> AppState {
        AppState::new(AppConfig::default(), Box::new(MemoryStore::new()))
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn enter_with_text_emits_generate_action() {
        let mut state = make_state();
        type_text(&mut state, "Cara buka rekening");
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        match actions.as_slice() {
            [Action::Generate { text, .. }] => assert_eq!(text, "Cara buka rekening"),
            other => panic!("unexpected actions: {:?}", other),
        }
        assert!(state.is_pending());
    }

    #[test]
    fn enter_with_blank_input_is_a_no_op() {
        let mut state = make_state();
        assert!(handle_event(&mut state, press(KeyCode::Enter)).is_empty());
        type_text(&mut state, "   ");
        assert!(handle_event(&mut state, press(KeyCode::Enter)).is_empty());
        assert!(!state.is_pending());
    }

    #[test]
    fn rapid_double_submit_spawns_one_request() {
        let mut state = make_state();
        type_text(&mut state, "Transfer uang");
        let first = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(first.len(), 1);
        let second = handle_event(&mut state, press(KeyCode::Enter));
        assert!(second.is_empty());
    }

    #[test]
    fn generation_scenario_updates_current_and_history() {
        let mut state = make_state();
        type_text(&mut state, "Cara buka rekening");
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        let request_id = match actions.as_slice() {
            [Action::Generate { request_id, .. }] => *request_id,
            other => panic!("unexpected actions: {:?}", other),
        };

        handle_event(
            &mut state,
            AppEvent::GenerationComplete {
                request_id,
                video: GeneratedVideo {
                    url: "https://example.com/v.mp4".into(),
                    duration_secs: 30.0,
                    terms_translated: 4,
                    confidence: 0.95,
                },
            },
        );

        let current = state.current_video.as_ref().unwrap();
        assert_eq!(current.terms_translated, 4);
        assert_eq!(current.confidence, 0.95);
        assert_eq!(state.history[0].source_text, "Cara buka rekening");
        assert!(!state.is_pending());
    }

    #[test]
    fn generation_failure_notifies_and_returns_to_idle() {
        let mut state = make_state();
        type_text(&mut state, "Investasi aman");
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        let request_id = match actions.as_slice() {
            [Action::Generate { request_id, .. }] => *request_id,
            other => panic!("unexpected actions: {:?}", other),
        };

        handle_event(
            &mut state,
            AppEvent::GenerationFailed {
                request_id,
                error: "backend down".into(),
            },
        );

        assert!(!state.is_pending());
        assert!(state.current_video.is_none());
        assert!(state.history.is_empty());
        assert!(state.notification.is_some());
    }

    #[test]
    fn tab_cycles_views() {
        let mut state = make_state();
        assert_eq!(state.view, View::Generate);
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.view, View::Topics);
        handle_event(&mut state, press(KeyCode::BackTab));
        assert_eq!(state.view, View::Generate);
    }

    #[test]
    fn topic_selection_fills_input_and_switches_to_generate() {
        let mut state = make_state();
        state.set_active_view(View::Topics);
        handle_event(&mut state, press(KeyCode::Down));
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.view, View::Generate);
        assert_eq!(state.input.text, "Menggunakan ATM dengan aman");
        assert!(!state.is_pending());
    }

    #[test]
    fn glossary_selection_seeds_a_prompt() {
        let mut state = make_state();
        state.set_active_view(View::Glossary);
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.view, View::Generate);
        assert_eq!(state.input.text, "Jelaskan tentang bank");
    }

    #[test]
    fn community_enter_restores_selected_video() {
        let mut state = make_state();
        let id = state.begin_request("Menabung rutin").unwrap();
        state.complete_request(
            id,
            GeneratedVideo {
                url: "https://example.com/v.mp4".into(),
                duration_secs: 30.0,
                terms_translated: 2,
                confidence: 0.9,
            },
        );
        let expected = state.history[0].id.clone();
        state.current_video = None;
        state.set_active_view(View::Community);

        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.view, View::Generate);
        assert_eq!(
            state.current_video.as_ref().map(|v| v.id.as_str()),
            Some(expected.as_str())
        );
    }
}
