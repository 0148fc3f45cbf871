use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::view::{board::BoardView, command::CommandView, status::StatusView, View};

pub fn render(app: &mut App, frame: &mut Frame) {
    let rows = Layout::default()
        .margin(0)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(frame.area());

    StatusView::draw(app, frame, rows[0]);
    BoardView::draw(app, frame, rows[1]);
    CommandView::draw(app, frame, rows[2]);
}
