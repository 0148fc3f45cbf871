pub mod board;
pub mod command;
pub mod status;

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn draw(app: &App, f: &mut Frame, area: Rect);
}
