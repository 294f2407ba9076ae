use crate::app::state::AppState;
use crate::data;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_input_pane(frame, columns[0], state);
    render_result_pane(frame, columns[1], state);
}

fn render_input_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Prompt Keuangan ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Ketik pertanyaan atau topik keuangan:",
            Theme::label(),
        )),
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT)),
            Span::styled(state.input.text.as_str(), Theme::input_text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Quick Topics:", Theme::label())),
    ];
    for topic in data::QUICK_TOPICS {
        lines.push(Line::from(Span::styled(format!("  • {}", topic), Theme::text())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: buat video   Ctrl+U: hapus teks   Tab: ganti panel",
        Theme::muted(),
    )));
    if let Some(ref note) = state.notification {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(note.as_str(), Theme::notification())));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);

    // Cursor sits on the input line, after the chevron.
    let prefix_width = UnicodeWidthStr::width(&state.input.text[..state.input.cursor]) as u16;
    let cursor_x = inner.x + 2 + prefix_width;
    let cursor_y = inner.y + 1;
    if inner.width > 0 {
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    }
}

fn render_result_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Video Bahasa Isyarat ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if state.is_pending() {
        let spinner = SPINNER[(state.tick_count / 2) as usize % SPINNER.len()];
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Generating sign language video...", spinner),
                Theme::loading(),
            )),
            Line::from(Span::styled(
                "This may take a few moments",
                Theme::muted(),
            )),
        ]
    } else if let Some(ref video) = state.current_video {
        let heart = if state.is_favorite(Some(video)) {
            Span::styled("♥ favorit", Theme::favorite())
        } else {
            Span::styled("♡", Theme::muted())
        };
        vec![
            Line::from(vec![
                Span::styled("[video] ", Style::default().fg(Theme::ACCENT)),
                Span::styled(video.url.as_str(), Theme::text()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Original Text:   ", Theme::label()),
                Span::styled(video.source_text.as_str(), Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("Duration:        ", Theme::label()),
                Span::styled(format!("{}s", video.duration_secs), Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("Terms Translated: ", Theme::label()),
                Span::styled(video.terms_translated.to_string(), Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("Accuracy:        ", Theme::label()),
                Span::styled(format!("{:.1}%", video.confidence * 100.0), Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("Created:         ", Theme::label()),
                Span::styled(
                    video
                        .created_at
                        .format(&state.config.ui.timestamp_format)
                        .to_string(),
                    Theme::text(),
                ),
            ]),
            Line::from(""),
            Line::from(heart),
            Line::from(Span::styled(
                "Ctrl+F: favorit   Ctrl+S: bagikan",
                Theme::muted(),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled("Video akan muncul di sini", Theme::muted())),
        ]
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
