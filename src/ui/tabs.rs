use crate::app::state::{AppState, View};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

const VIEWS: [View; 4] = [View::Generate, View::Topics, View::Glossary, View::Community];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = VIEWS
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.title())))
        .collect();
    let selected = VIEWS.iter().position(|v| *v == state.view).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Teman Tuli — Financial Literacy with Sign Language ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(selected)
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider("|");

    frame.render_widget(tabs, area);
}
