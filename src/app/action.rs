use crate::app::event::RequestId;
use crate::app::state::VideoResult;

#[derive(Debug)]
pub enum Action {
    Generate { request_id: RequestId, text: String },
    Share { video: VideoResult },
    Quit,
}
