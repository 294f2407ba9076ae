use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let audio = if state.audio_enabled { "♪ on" } else { "♪ off" };
    parts.push(Span::styled(
        format!(" [{}] ", audio),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    parts.push(Span::styled(
        format!(
            " History: {}/{} | Favorites: {} ",
            state.history.len(),
            state.config.behavior.history_cap,
            state.favorites.len()
        ),
        Theme::status_bar(),
    ));

    if state.is_pending() {
        parts.push(Span::styled(
            " | Generating... ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    let view_name = state.view.title();
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + view_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", view_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
