mod community;
mod generate;
mod glossary;
mod layout;
mod status_bar;
mod tabs;
mod theme;
mod topics;

use crate::app::state::{AppState, View};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    tabs::render(frame, app_layout.tabs, state);
    match state.view {
        View::Generate => generate::render(frame, app_layout.body, state),
        View::Topics => topics::render(frame, app_layout.body, state),
        View::Glossary => glossary::render(frame, app_layout.body, state),
        View::Community => community::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
