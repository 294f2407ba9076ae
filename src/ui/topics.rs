use crate::app::state::AppState;
use crate::data;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Financial Topics — Enter: pakai topik ini ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut items: Vec<ListItem> = Vec::new();
    let mut flat_index = 0usize;
    for category in data::FINANCIAL_TOPICS {
        items.push(ListItem::new(Span::styled(
            format!("{} {}", category.icon, category.title),
            Theme::category(),
        )));
        for topic in category.topics {
            let style = if flat_index == state.topic_cursor {
                Theme::selected()
            } else {
                Theme::text()
            };
            let marker = if flat_index == state.topic_cursor { "❯" } else { " " };
            items.push(ListItem::new(Span::styled(
                format!("  {} {}", marker, topic),
                style,
            )));
            flat_index += 1;
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
