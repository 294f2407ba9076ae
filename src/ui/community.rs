use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_stats(frame, chunks[0], state);
    render_videos(frame, chunks[1], state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Community ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let line = Line::from(vec![
        Span::styled(" 1,247 ", Theme::selected()),
        Span::styled("Videos Generated   ", Theme::muted()),
        Span::styled("856 ", Theme::selected()),
        Span::styled("Active Users   ", Theme::muted()),
        Span::styled("423 ", Theme::selected()),
        Span::styled("Terms Learned   ", Theme::muted()),
        Span::styled(format!("{} ", state.history.len()), Theme::selected()),
        Span::styled("videomu tersimpan", Theme::muted()),
    ]);
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_videos(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Enter: tampilkan   f: favorit   s: bagikan ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let items_data = state.community_items();
    let cursor = state.community_cursor.min(items_data.len().saturating_sub(1));
    let recent_count = state.history.len().min(5);

    let mut items: Vec<ListItem> = Vec::new();
    if items_data.is_empty() {
        items.push(ListItem::new(Span::styled(
            " Belum ada video. Buat satu di tab Generate Video.",
            Theme::muted(),
        )));
    }

    for (i, video) in items_data.iter().enumerate() {
        if i == 0 && recent_count > 0 {
            items.push(ListItem::new(Span::styled(
                "Your Recent Videos",
                Theme::category(),
            )));
        }
        if i == recent_count && items_data.len() > recent_count {
            items.push(ListItem::new(Span::styled(
                "Your Favorites",
                Theme::category(),
            )));
        }
        let selected = i == cursor;
        let marker = if selected { "❯" } else { " " };
        let style = if selected { Theme::selected() } else { Theme::text() };
        let heart = if state.is_favorite(Some(video)) { "♥ " } else { "" };
        let when = video
            .created_at
            .format(&state.config.ui.timestamp_format)
            .to_string();
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  {} ", marker), style),
            Span::styled(heart, Theme::favorite()),
            Span::styled(video.source_text.clone(), style),
            Span::styled(
                format!("  {} • {}s", when, video.duration_secs),
                Theme::muted(),
            ),
        ])));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
