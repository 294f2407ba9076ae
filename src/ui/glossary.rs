use crate::app::state::AppState;
use crate::data;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" BISINDO Financial Terms — Enter: buat video penjelasan ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let items: Vec<ListItem> = data::BISINDO_GLOSSARY
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == state.glossary_cursor;
            let marker = if selected { "❯" } else { " " };
            let term_style = if selected { Theme::selected() } else { Theme::category() };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {} ", marker, entry.gesture), Theme::text()),
                Span::styled(format!("{:<12}", entry.term), term_style),
                Span::styled(entry.description, Theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
