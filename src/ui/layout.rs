use ratatui::prelude::*;

pub struct AppLayout {
    pub tabs: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}
